//! Internationalization module
//!
//! This module handles multi-language support for the FitAdmin console.
//! It provides dictionary loading, dotted-key resolution, flat editing of
//! dictionaries, and a session-scoped translation context.

pub mod context;
pub mod dictionary;
pub mod editor;
pub mod language;
pub mod loader;
pub mod mock_translate;
pub mod transform;

// Re-export commonly used i18n components
pub use context::{Snapshot, SwitchOutcome, TranslationContext, TranslationStats};
pub use dictionary::Dictionary;
pub use editor::TranslationEditor;
pub use language::LanguageCode;
pub use loader::{ConfiguredSource, DictionarySource, FileDictionarySource, HttpDictionarySource};
pub use mock_translate::{MockTranslator, Translator};
pub use transform::{flatten, unflatten};
