//! Test context setup
//!
//! Provides temporary dictionary directories and settings pointing at them.

use std::path::{Path, PathBuf};
use std::sync::Once;
use fitadmin::config::{I18nConfig, Settings, SourceKind};
use serde_json::Value;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("fitadmin=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Directory of the dictionaries shipped with the crate
pub fn shipped_translations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("translations")
}

/// Temporary directory holding `{code}.json` dictionary files
pub struct TranslationsDir {
    pub temp_dir: TempDir,
}

impl TranslationsDir {
    pub fn new() -> Self {
        init_test_env();
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_json(&self, code: &str, value: &Value) {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.write_raw(code, &content);
    }

    pub fn write_raw(&self, code: &str, content: &str) {
        std::fs::write(self.path().join(format!("{}.json", code)), content)
            .expect("Failed to write dictionary fixture");
    }

    /// i18n settings reading from this directory
    pub fn i18n_config(&self) -> I18nConfig {
        let mut config = Settings::default().i18n;
        config.source.kind = SourceKind::File;
        config.source.directory = self.path().display().to_string();
        config
    }
}

/// i18n settings reading from an HTTP base URL
pub fn http_i18n_config(base_url: &str) -> I18nConfig {
    init_test_env();
    let mut config = Settings::default().i18n;
    config.source.kind = SourceKind::Http;
    config.source.base_url = base_url.to_string();
    config.source.request_timeout_seconds = Some(5);
    config
}
