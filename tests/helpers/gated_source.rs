//! Dictionary source whose loads for one language block until released
//!
//! Used to force overlapping language switches into a known order.

use std::collections::HashMap;
use std::sync::Arc;
use fitadmin::i18n::{Dictionary, DictionarySource, LanguageCode};
use fitadmin::{FitAdminError, Result};
use serde_json::Value;
use tokio::sync::Notify;

pub struct GatedSource {
    dictionaries: HashMap<LanguageCode, Dictionary>,
    gated: LanguageCode,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedSource {
    pub fn new(gated: LanguageCode) -> Self {
        Self {
            dictionaries: HashMap::new(),
            gated,
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn with(mut self, language: LanguageCode, value: Value) -> Self {
        let dictionary = Dictionary::from_value(language, value).expect("fixture must be an object");
        self.dictionaries.insert(language, dictionary);
        self
    }
}

impl DictionarySource for GatedSource {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch(&self, language: LanguageCode) -> Result<Dictionary> {
        if language == self.gated {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.dictionaries
            .get(&language)
            .cloned()
            .ok_or_else(|| FitAdminError::DictionaryUnavailable {
                language: language.to_string(),
                reason: "not registered".to_string(),
            })
    }
}
