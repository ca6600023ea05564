//! UI text lookup with English fallback, per-surface language selection and
//! locale-based default languages.
//!
//! ```no_run
//! use ui_translate::i18n::{SystemLocale, Translator};
//!
//! let mut tr = Translator::embedded(&SystemLocale)?;
//! tr.set_current_language("de")?;
//! let text = ui_translate::t!(tr, "welcome_msg", "{name}" => "Sam")?;
//! # Ok::<(), ui_translate::AppError>(())
//! ```

// Module definitions
pub mod commands;
pub mod core;
pub mod i18n;

// Essential re-exports
pub use crate::commands::LanguageCommand;
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::i18n::{Identifier, MissingPolicy, TranslationError, TranslationTable, Translator};

/// Loads the config and builds a translator over the bundled tables.
pub async fn load_translator() -> Result<Translator> {
    let config = Config::load().await?;
    let table = std::sync::Arc::new(TranslationTable::embedded()?);
    config.build_translator(table)
}
