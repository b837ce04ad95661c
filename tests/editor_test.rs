//! Editing shipped dictionaries through the flat editor

mod helpers;

use fitadmin::i18n::{
    Dictionary, DictionarySource, FileDictionarySource, LanguageCode, MockTranslator, TranslationEditor,
};
use helpers::*;
use serde_json::json;

async fn load(language: LanguageCode) -> Dictionary {
    FileDictionarySource::new(shipped_translations_dir())
        .fetch(language)
        .await
        .expect("shipped dictionary should load")
}

#[tokio::test]
async fn test_audit_finds_missing_arabic_keys() {
    init_test_env();
    let reference = load(LanguageCode::En).await;
    let arabic = load(LanguageCode::Ar).await;

    let editor = TranslationEditor::from_dictionary(LanguageCode::Ar, &arabic);
    assert_eq!(
        editor.missing_keys(&reference),
        vec!["admin.templates.new", "admin.smtp.title", "admin.smtp.test"]
    );
    assert!(editor.extra_keys(&reference).is_empty());
}

#[tokio::test]
async fn test_french_dictionary_is_complete() {
    let reference = load(LanguageCode::En).await;
    let french = load(LanguageCode::Fr).await;

    let editor = TranslationEditor::from_dictionary(LanguageCode::Fr, &french);
    assert!(editor.missing_keys(&reference).is_empty());
    assert_eq!(editor.len(), reference.leaf_count());
}

#[tokio::test]
async fn test_fill_missing_with_mock_translator() {
    let reference = load(LanguageCode::En).await;
    let arabic = load(LanguageCode::Ar).await;

    let mut editor = TranslationEditor::from_dictionary(LanguageCode::Ar, &arabic);
    let filled = editor.fill_missing(&reference, LanguageCode::En, &MockTranslator::new());
    assert_eq!(filled, 3);
    assert!(editor.missing_keys(&reference).is_empty());

    let dictionary = editor.to_dictionary();
    assert_eq!(dictionary.resolve("admin.smtp.title", None), "[AR translation] SMTP settings");
    // Existing rows are untouched
    assert_eq!(dictionary.resolve("common.save", None), "حفظ");
}

#[test]
fn test_edit_round_trip_preserves_structure() {
    let original = Dictionary::from_value(
        LanguageCode::En,
        json!({ "bmi": { "title": "BMI", "ranges": ["low", "high"] }, "common": { "save": "Save" } }),
    )
    .unwrap();

    let mut editor = TranslationEditor::from_dictionary(LanguageCode::En, &original);
    assert_eq!(editor.to_dictionary(), original);

    editor.set("bmi.title", "BMI Calculator").unwrap();
    editor.set("bmi.result.label", "Your BMI").unwrap();
    editor.remove("common.save");

    let edited = serde_json::to_value(editor.to_dictionary()).unwrap();
    assert_eq!(
        edited,
        json!({
            "bmi": { "title": "BMI Calculator", "ranges": ["low", "high"], "result": { "label": "Your BMI" } }
        })
    );
}
