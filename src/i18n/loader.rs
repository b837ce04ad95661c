//! Dictionary loading
//!
//! Dictionaries are fetched wholesale on every language switch and never
//! cached: HTTP requests carry a cache-busting query parameter and no-cache
//! headers, file reads go straight to disk.

use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use reqwest::Client;
use tokio::fs;
use tracing::debug;
use url::Url;
use crate::config::{SourceConfig, SourceKind};
use crate::utils::errors::{FitAdminError, Result};
use super::{Dictionary, LanguageCode};

/// Query parameter defeating intermediate caches
pub const CACHE_BUST_PARAM: &str = "_ts";

/// Anything able to produce the dictionary for a language
pub trait DictionarySource: Send + Sync + 'static {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    fn fetch(&self, language: LanguageCode) -> impl Future<Output = Result<Dictionary>> + Send;
}

/// Fetches `{base_url}/{code}.json` over HTTP
#[derive(Debug, Clone)]
pub struct HttpDictionarySource {
    client: Client,
    base_url: Url,
}

impl HttpDictionarySource {
    /// Create a new HttpDictionarySource instance
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder()
            .user_agent("FitAdmin-Console/1.0")
            .default_headers(no_cache_headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FitAdminError::Http)?;

        Ok(Self { client, base_url })
    }

    /// Resource URL for a language, stamped with the current time
    pub fn resource_url(&self, language: LanguageCode) -> Result<Url> {
        let mut url = self.base_url.join(&format!("{}.json", language))?;
        url.query_pairs_mut()
            .append_pair(CACHE_BUST_PARAM, &chrono::Utc::now().timestamp_millis().to_string());
        Ok(url)
    }
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store, must-revalidate"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    headers
}

impl DictionarySource for HttpDictionarySource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, language: LanguageCode) -> Result<Dictionary> {
        let url = self.resource_url(language)?;
        debug!(language = %language, url = %url, "Fetching dictionary");

        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    FitAdminError::DictionaryUnavailable {
                        language: language.to_string(),
                        reason: e.to_string(),
                    }
                } else {
                    FitAdminError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FitAdminError::DictionaryUnavailable {
                language: language.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        let body = response.text().await?;
        Dictionary::from_json_str(language, &body)
    }
}

/// Reads `{directory}/{code}.json` from disk on every call
#[derive(Debug, Clone)]
pub struct FileDictionarySource {
    directory: PathBuf,
}

impl FileDictionarySource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn file_path(&self, language: LanguageCode) -> PathBuf {
        self.directory.join(format!("{}.json", language))
    }
}

impl DictionarySource for FileDictionarySource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, language: LanguageCode) -> Result<Dictionary> {
        let path = self.file_path(language);
        debug!(language = %language, path = %path.display(), "Reading dictionary file");

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FitAdminError::DictionaryUnavailable {
                    language: language.to_string(),
                    reason: format!("file not found: {}", path.display()),
                });
            }
            Err(e) => return Err(FitAdminError::Io(e)),
        };

        Dictionary::from_json_str(language, &content)
    }
}

/// Source selected by configuration
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpDictionarySource),
    File(FileDictionarySource),
}

impl ConfiguredSource {
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        match config.kind {
            SourceKind::Http => {
                let timeout = config.request_timeout_seconds.map(Duration::from_secs);
                Ok(Self::Http(HttpDictionarySource::new(&config.base_url, timeout)?))
            }
            SourceKind::File => Ok(Self::File(FileDictionarySource::new(&config.directory))),
        }
    }
}

impl DictionarySource for ConfiguredSource {
    fn name(&self) -> &'static str {
        match self {
            Self::Http(source) => source.name(),
            Self::File(source) => source.name(),
        }
    }

    async fn fetch(&self, language: LanguageCode) -> Result<Dictionary> {
        match self {
            Self::Http(source) => source.fetch(language).await,
            Self::File(source) => source.fetch(language).await,
        }
    }
}
