//! Canned stand-in for a machine translation backend
//!
//! The admin console offers an "AI translate" action when editing
//! dictionaries. There is no real backend behind it: a small phrase table
//! covers the common UI words and everything else comes back annotated.

use regex::{NoExpand, Regex};
use tracing::debug;
use super::LanguageCode;

/// Something that can translate a piece of UI text between languages
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source: LanguageCode, target: LanguageCode) -> String;
}

/// One phrase in every supported language
#[derive(Debug, Clone, Copy)]
struct PhraseRow {
    en: &'static str,
    fr: &'static str,
    ar: &'static str,
}

impl PhraseRow {
    fn get(&self, language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::En => self.en,
            LanguageCode::Fr => self.fr,
            LanguageCode::Ar => self.ar,
        }
    }
}

const PHRASES: &[PhraseRow] = &[
    PhraseRow { en: "Save", fr: "Enregistrer", ar: "حفظ" },
    PhraseRow { en: "Cancel", fr: "Annuler", ar: "إلغاء" },
    PhraseRow { en: "Delete", fr: "Supprimer", ar: "حذف" },
    PhraseRow { en: "Edit", fr: "Modifier", ar: "تعديل" },
    PhraseRow { en: "Settings", fr: "Paramètres", ar: "الإعدادات" },
    PhraseRow { en: "Welcome", fr: "Bienvenue", ar: "مرحبا" },
    PhraseRow { en: "Dashboard", fr: "Tableau de bord", ar: "لوحة التحكم" },
    PhraseRow { en: "Notifications", fr: "Notifications", ar: "الإشعارات" },
];

/// Phrase-table translator with no linguistic guarantees
#[derive(Debug, Clone)]
pub struct MockTranslator {
    patterns: Vec<(Regex, PhraseRow, LanguageCode)>,
}

impl MockTranslator {
    pub fn new() -> Self {
        let mut patterns = Vec::new();
        for row in PHRASES {
            for language in LanguageCode::ALL {
                let phrase = row.get(language);
                // Phrases are static and escaped, so the pattern always compiles
                if let Ok(re) = Regex::new(&format!(r"\b{}\b", regex::escape(phrase))) {
                    patterns.push((re, *row, language));
                }
            }
        }
        // Longest phrases first
        patterns.sort_by(|a, b| b.1.get(b.2).len().cmp(&a.1.get(a.2).len()));
        Self { patterns }
    }

    /// Placeholder returned for text the table does not recognize
    pub fn placeholder(text: &str, target: LanguageCode) -> String {
        format!("[{} translation] {}", target.as_str().to_uppercase(), text)
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for MockTranslator {
    fn translate(&self, text: &str, source: LanguageCode, target: LanguageCode) -> String {
        if source == target {
            return text.to_string();
        }

        let mut result = text.to_string();
        let mut recognized = false;
        for (re, row, language) in &self.patterns {
            if *language != source || !re.is_match(&result) {
                continue;
            }
            result = re.replace_all(&result, NoExpand(row.get(target))).into_owned();
            recognized = true;
        }

        if recognized {
            debug!(source = %source, target = %target, "Mock translation matched phrase table");
            result
        } else {
            Self::placeholder(text, target)
        }
    }
}
