//! FitAdmin translation engine
//!
//! Internationalization core of the FitAdmin health and fitness console:
//! per-language dictionary loading, dotted-key resolution with fallback,
//! flat editing of dictionaries, and a canned translation stub.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FitAdminError, Result};

// Re-export main components for easy access
pub use i18n::{Dictionary, LanguageCode, TranslationContext, TranslationEditor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
