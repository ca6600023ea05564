// src/i18n/mod.rs
pub mod error;
pub mod identifier;
pub mod langs;
pub mod languages;
pub mod locale;
pub mod translator;
pub mod types;

pub use error::TranslationError;
pub use identifier::Identifier;
pub use languages::{LanguageDescriptor, LanguageList, CURATED_LANGUAGES};
pub use locale::{derive_default_language, EnvLocale, FixedLocale, LocaleSource, SystemLocale};
pub use translator::{LanguageListener, MissingPolicy, Translator};
pub use types::{LanguageRecord, TranslationTable};

pub use crate::core::constants::FALLBACK_LANGUAGE as DEFAULT_LANGUAGE;

#[macro_export]
macro_rules! t {
    ($tr:expr, $id:expr) => { $tr.resolve($id, &[]) };
    ($tr:expr, $id:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $tr.resolve($id, &[$(($key, ::core::convert::AsRef::<str>::as_ref(&$value))),+])
    };
}
