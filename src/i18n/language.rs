//! Supported language codes

use std::fmt;
use std::str::FromStr;
use crate::utils::errors::FitAdminError;

/// Closed set of languages the console ships dictionaries for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    Fr,
    Ar,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Fr, LanguageCode::Ar];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Fr => "fr",
            LanguageCode::Ar => "ar",
        }
    }

    /// Right-to-left script
    pub fn is_rtl(&self) -> bool {
        matches!(self, LanguageCode::Ar)
    }

    /// Detect a supported language from a locale tag such as `fr-CA` or `ar_EG`
    pub fn detect(locale: &str) -> Option<Self> {
        let primary = locale
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        primary.parse().ok()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = FitAdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(LanguageCode::En),
            "fr" => Ok(LanguageCode::Fr),
            "ar" => Ok(LanguageCode::Ar),
            _ => Err(FitAdminError::UnsupportedLanguage(s.to_string())),
        }
    }
}
