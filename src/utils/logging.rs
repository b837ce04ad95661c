//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the translation subsystem.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{FitAdminError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so the caller
/// must hold it for as long as logging is needed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| FitAdminError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "fitadmin.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| FitAdminError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a dictionary load outcome
pub fn log_dictionary_load(language: &str, source: &str, key_count: Option<usize>, elapsed_ms: u64) {
    match key_count {
        Some(key_count) => info!(
            language = language,
            source = source,
            key_count = key_count,
            elapsed_ms = elapsed_ms,
            "Dictionary loaded"
        ),
        None => error!(
            language = language,
            source = source,
            elapsed_ms = elapsed_ms,
            "Dictionary load failed"
        ),
    }
}

/// Log a language switch applied to a session
pub fn log_language_switch(session_id: &str, from: &str, to: &str, revision: u64) {
    info!(
        session_id = session_id,
        from = from,
        to = to,
        revision = revision,
        "Language switched"
    );
}

/// Log a load that finished after a newer switch was requested
pub fn log_stale_load(session_id: &str, language: &str, generation: u64, latest: u64) {
    warn!(
        session_id = session_id,
        language = language,
        generation = generation,
        latest = latest,
        "Discarding stale dictionary load"
    );
}

/// Log an unresolved translation key
pub fn log_missing_key(language: &str, key: &str) {
    debug!(language = language, key = key, "Translation key not found");
}
