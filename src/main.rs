//! FitAdmin translation session runner
//!
//! Loads configuration, opens a translation session on the default
//! language, reports dictionary coverage for every supported language,
//! then closes the session.

use anyhow::Context;
use tracing::{info, warn};

use fitadmin::{
    config::Settings,
    i18n::{ConfiguredSource, SwitchOutcome, TranslationContext, TranslationEditor},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", fitadmin::info());

    let source = ConfiguredSource::from_config(&settings.i18n.source)?;
    let context = TranslationContext::open(source, &settings.i18n)
        .await
        .context("failed to load default dictionary")?;

    let reference = context.snapshot();
    let default_language = context.default_language();
    info!(
        session_id = %context.session_id(),
        language = %default_language,
        keys = reference.dictionary.leaf_count(),
        "Reference dictionary ready"
    );

    for language in context.supported_languages().to_vec() {
        if language == default_language {
            continue;
        }
        match context.switch_language(language).await {
            Ok(SwitchOutcome::Applied { revision }) => {
                let current = context.snapshot();
                let editor = TranslationEditor::from_dictionary(language, &current.dictionary);
                let missing = editor.missing_keys(&reference.dictionary);
                info!(
                    language = %language,
                    revision = revision,
                    keys = editor.len(),
                    missing = missing.len(),
                    "Dictionary coverage"
                );
            }
            Ok(SwitchOutcome::Superseded) => {}
            Err(e) => warn!(language = %language, error = %e, "Skipping language"),
        }
    }

    let stats = context.stats();
    info!(language = %stats.language, keys = stats.key_count, "Closing translation session");
    context.shutdown();

    Ok(())
}
