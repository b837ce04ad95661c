//! Per-session translation context
//!
//! The context owns the current language and its dictionary. It is created
//! once per admin session, handed to whatever renders text, and shut down
//! on logout or navigation away. Consumers re-render by subscribing to
//! snapshot changes instead of reloading.
//!
//! Overlapping language switches resolve as latest-request-wins: each switch
//! takes a generation number, and a load that completes after a newer
//! switch was issued is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::{error, info};
use uuid::Uuid;
use crate::config::I18nConfig;
use crate::utils::errors::{FitAdminError, Result};
use crate::utils::logging;
use super::{Dictionary, DictionarySource, LanguageCode};

/// Language and dictionary currently in use
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub language: LanguageCode,
    pub dictionary: Arc<Dictionary>,
    /// Bumped on every applied load; 0 until the first load lands
    pub revision: u64,
}

impl Snapshot {
    fn empty(language: LanguageCode) -> Self {
        Self {
            language,
            dictionary: Arc::new(Dictionary::default()),
            revision: 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.revision > 0
    }
}

/// Result of a language switch that loaded successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Applied { revision: u64 },
    /// A newer switch was requested while this one was loading
    Superseded,
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub language: LanguageCode,
    pub key_count: usize,
    pub revision: u64,
}

/// Session-scoped translation state shared with renderers
pub struct TranslationContext<S: DictionarySource> {
    session_id: Uuid,
    source: S,
    default_language: LanguageCode,
    supported_languages: Vec<LanguageCode>,
    latest_request: AtomicU64,
    state: watch::Sender<Arc<Snapshot>>,
}

impl<S: DictionarySource> TranslationContext<S> {
    /// Create a context with nothing loaded yet
    pub fn new(source: S, config: &I18nConfig) -> Result<Self> {
        let default_language: LanguageCode = config.default_language.parse()?;
        let supported_languages = config
            .supported_languages
            .iter()
            .map(|code| code.parse())
            .collect::<Result<Vec<LanguageCode>>>()?;

        if !supported_languages.contains(&default_language) {
            return Err(FitAdminError::Config(
                "Default language must be in supported languages list".to_string()
            ));
        }

        let (state, _) = watch::channel(Arc::new(Snapshot::empty(default_language)));

        Ok(Self {
            session_id: Uuid::new_v4(),
            source,
            default_language,
            supported_languages,
            latest_request: AtomicU64::new(0),
            state,
        })
    }

    /// Create a context and load the default language
    ///
    /// Unlike later switches, failing to load the default language is an error.
    pub async fn open(source: S, config: &I18nConfig) -> Result<Self> {
        let context = Self::new(source, config)?;
        let language = context.default_language;
        context.switch_language(language).await?;
        info!(session_id = %context.session_id, language = %language, "Translation session opened");
        Ok(context)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn default_language(&self) -> LanguageCode {
        self.default_language
    }

    pub fn supported_languages(&self) -> &[LanguageCode] {
        &self.supported_languages
    }

    pub fn is_language_supported(&self, language: LanguageCode) -> bool {
        self.supported_languages.contains(&language)
    }

    /// Pick a supported language for a locale tag, falling back to the default
    pub fn detect_language(&self, locale: Option<&str>) -> LanguageCode {
        locale
            .and_then(LanguageCode::detect)
            .filter(|language| self.is_language_supported(*language))
            .unwrap_or(self.default_language)
    }

    pub fn current_language(&self) -> LanguageCode {
        self.state.borrow().language
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.state.borrow().clone()
    }

    /// Receive a notification every time a new dictionary is applied
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.state.subscribe()
    }

    /// Load `language` and make it current
    ///
    /// On failure the previous dictionary stays in use and the error is
    /// returned after being logged; resolution keeps working either way.
    pub async fn switch_language(&self, language: LanguageCode) -> Result<SwitchOutcome> {
        if !self.is_language_supported(language) {
            return Err(FitAdminError::UnsupportedLanguage(language.to_string()));
        }

        let generation = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let session_id = self.session_id.to_string();
        let started = Instant::now();

        let dictionary = match self.source.fetch(language).await {
            Ok(dictionary) => dictionary,
            Err(e) => {
                logging::log_dictionary_load(
                    language.as_str(),
                    self.source.name(),
                    None,
                    started.elapsed().as_millis() as u64,
                );
                error!(session_id = %session_id, language = %language, error = %e, "Keeping previous dictionary");
                return Err(e);
            }
        };

        logging::log_dictionary_load(
            language.as_str(),
            self.source.name(),
            Some(dictionary.leaf_count()),
            started.elapsed().as_millis() as u64,
        );

        let mut applied = None;
        self.state.send_if_modified(|current| {
            let latest = self.latest_request.load(Ordering::SeqCst);
            if generation != latest {
                logging::log_stale_load(&session_id, language.as_str(), generation, latest);
                return false;
            }

            let previous = current.language;
            let revision = current.revision + 1;
            *current = Arc::new(Snapshot {
                language,
                dictionary: Arc::new(dictionary),
                revision,
            });
            applied = Some((previous, revision));
            true
        });

        Ok(match applied {
            Some((previous, revision)) => {
                logging::log_language_switch(&session_id, previous.as_str(), language.as_str(), revision);
                SwitchOutcome::Applied { revision }
            }
            None => SwitchOutcome::Superseded,
        })
    }

    /// Resolve a dotted key, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        self.t_or(key, None)
    }

    /// Resolve a dotted key, falling back to `default` or the key itself
    pub fn t_or(&self, key: &str, default: Option<&str>) -> String {
        let snapshot = self.snapshot();
        if !snapshot.dictionary.contains_key(key) {
            logging::log_missing_key(snapshot.language.as_str(), key);
        }
        snapshot.dictionary.resolve(key, default)
    }

    /// Get translation statistics for the current dictionary
    pub fn stats(&self) -> TranslationStats {
        let snapshot = self.snapshot();
        TranslationStats {
            language: snapshot.language,
            key_count: snapshot.dictionary.leaf_count(),
            revision: snapshot.revision,
        }
    }

    /// Tear the session down; subscribers see the channel close
    pub fn shutdown(self) {
        info!(
            session_id = %self.session_id,
            subscribers = self.state.receiver_count(),
            "Translation session closed"
        );
    }
}

impl<S: DictionarySource> std::fmt::Debug for TranslationContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationContext")
            .field("session_id", &self.session_id)
            .field("source", &self.source.name())
            .field("default_language", &self.default_language)
            .field("current_language", &self.current_language())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use serde_json::json;
    use crate::config::Settings;

    /// In-memory source; languages without an entry fail to load
    #[derive(Default)]
    struct StaticSource {
        dictionaries: Mutex<HashMap<LanguageCode, Dictionary>>,
    }

    impl StaticSource {
        fn with(self, language: LanguageCode, value: serde_json::Value) -> Self {
            let dictionary = Dictionary::from_value(language, value).unwrap();
            self.dictionaries.lock().unwrap().insert(language, dictionary);
            self
        }
    }

    impl DictionarySource for StaticSource {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(&self, language: LanguageCode) -> Result<Dictionary> {
            self.dictionaries
                .lock()
                .unwrap()
                .get(&language)
                .cloned()
                .ok_or_else(|| FitAdminError::DictionaryUnavailable {
                    language: language.to_string(),
                    reason: "not registered".to_string(),
                })
        }
    }

    fn source() -> StaticSource {
        StaticSource::default()
            .with(LanguageCode::En, json!({ "common": { "save": "Save" } }))
            .with(LanguageCode::Fr, json!({ "common": { "save": "Enregistrer" } }))
    }

    #[tokio::test]
    async fn test_open_loads_default_language() {
        let context = TranslationContext::open(source(), &Settings::default().i18n).await.unwrap();
        assert_eq!(context.current_language(), LanguageCode::En);
        assert_eq!(context.t("common.save"), "Save");
        assert_eq!(context.t("common.missing"), "common.missing");
        assert_eq!(context.t_or("common.missing", Some("Default")), "Default");
        assert_eq!(context.stats().revision, 1);
    }

    #[tokio::test]
    async fn test_switch_language_applies() {
        let context = TranslationContext::open(source(), &Settings::default().i18n).await.unwrap();
        let outcome = context.switch_language(LanguageCode::Fr).await.unwrap();
        assert_eq!(outcome, SwitchOutcome::Applied { revision: 2 });
        assert_eq!(context.t("common.save"), "Enregistrer");
    }

    #[tokio::test]
    async fn test_failed_switch_keeps_previous_dictionary() {
        let context = TranslationContext::open(source(), &Settings::default().i18n).await.unwrap();
        assert!(context.switch_language(LanguageCode::Ar).await.is_err());
        assert_eq!(context.current_language(), LanguageCode::En);
        assert_eq!(context.t("common.save"), "Save");
    }

    #[tokio::test]
    async fn test_unsupported_language_rejected() {
        let mut config = Settings::default().i18n;
        config.supported_languages = vec!["en".to_string()];
        let context = TranslationContext::open(source(), &config).await.unwrap();
        let result = context.switch_language(LanguageCode::Fr).await;
        assert!(matches!(result, Err(FitAdminError::UnsupportedLanguage(_))));
    }

    #[tokio::test]
    async fn test_open_fails_without_default_dictionary() {
        let result = TranslationContext::open(StaticSource::default(), &Settings::default().i18n).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_detect_language() {
        let context = TranslationContext::new(source(), &Settings::default().i18n).unwrap();
        assert_eq!(context.detect_language(Some("fr-CA")), LanguageCode::Fr);
        assert_eq!(context.detect_language(Some("de-DE")), LanguageCode::En);
        assert_eq!(context.detect_language(None), LanguageCode::En);
        assert!(!context.snapshot().is_loaded());
    }
}
