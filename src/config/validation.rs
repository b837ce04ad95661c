//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::LanguageCode;
use crate::utils::errors::{FitAdminError, Result};
use super::{Settings, SourceKind};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_source_config(&settings.i18n.source)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(FitAdminError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(FitAdminError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    let default_language = config.default_language.parse::<LanguageCode>()
        .map_err(|_| FitAdminError::Config(
            format!("Unknown default language: {}", config.default_language)
        ))?;

    let supported = config.supported_languages
        .iter()
        .map(|code| code.parse::<LanguageCode>().map_err(|_| FitAdminError::Config(
            format!("Unknown language code in supported languages: {}", code)
        )))
        .collect::<Result<Vec<_>>>()?;

    if !supported.contains(&default_language) {
        return Err(FitAdminError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate dictionary source configuration
fn validate_source_config(config: &super::SourceConfig) -> Result<()> {
    match config.kind {
        SourceKind::Http => {
            if config.base_url.is_empty() {
                return Err(FitAdminError::Config(
                    "Dictionary base URL is required for http sources".to_string()
                ));
            }
            url::Url::parse(&config.base_url)
                .map_err(|e| FitAdminError::Config(format!("Invalid dictionary base URL: {}", e)))?;
        }
        SourceKind::File => {
            if config.directory.is_empty() {
                return Err(FitAdminError::Config(
                    "Dictionary directory is required for file sources".to_string()
                ));
            }
        }
    }

    if config.request_timeout_seconds == Some(0) {
        return Err(FitAdminError::Config(
            "Request timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FitAdminError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FitAdminError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
