// src/i18n/error.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    InvalidLanguage(String),
    MissingTranslation(String),
    LoadError(String),
    Config(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLanguage(lang) => write!(f, "invalid language: {}", lang),
            Self::MissingTranslation(id) => write!(f, "no translation found for id {}", id),
            Self::LoadError(msg) => write!(f, "load error: {}", msg),
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TranslationError {}
