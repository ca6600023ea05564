// src/i18n/locale.rs
//! Locale hints and default-language derivation.
//!
//! A hint is whatever the environment reports (`en-US`, `de_DE.UTF-8`, ...).
//! [`derive_default_language`] turns it into one of the enabled language ids.

use crate::core::constants::FALLBACK_LANGUAGE;
use crate::i18n::languages::LanguageList;

/// Supplies the raw locale string of the runtime environment.
pub trait LocaleSource {
    fn locale_hint(&self) -> Option<String>;
}

/// OS / browser locale as reported by `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn locale_hint(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// POSIX locale variables, first non-empty one wins.
#[derive(Debug, Clone)]
pub struct EnvLocale {
    vars: Vec<String>,
}

impl EnvLocale {
    pub fn new<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for EnvLocale {
    fn default() -> Self {
        Self::new(["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"])
    }
}

impl LocaleSource for EnvLocale {
    fn locale_hint(&self) -> Option<String> {
        self.vars
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| clean_posix_locale(&value))
    }
}

/// A hint fixed up front, e.g. from a CLI flag or a test.
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(hint: &str) -> Self {
        Self(Some(hint.to_string()))
    }
}

impl LocaleSource for FixedLocale {
    fn locale_hint(&self) -> Option<String> {
        self.0.clone()
    }
}

/// `de:en` -> `de`, `de_DE.UTF-8@euro` -> `de_DE`. `C` and `POSIX` carry no language.
fn clean_posix_locale(value: &str) -> Option<String> {
    let first = value.split(':').next().unwrap_or_default();
    let cleaned = first
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    match cleaned {
        "" | "C" | "POSIX" => None,
        other => Some(other.to_string()),
    }
}

/// Lowercases and turns the first `-` into `_` (`en-US` -> `en_us`).
pub fn normalize_hint(hint: &str) -> String {
    hint.to_lowercase().replacen('-', "_", 1)
}

/// Exact match first, then the first enabled id sharing the hint's two-letter
/// prefix, in list order. Anything else yields `en`.
pub fn derive_default_language(hint: Option<&str>, languages: &LanguageList) -> String {
    let Some(hint) = hint.filter(|h| !h.is_empty()) else {
        return FALLBACK_LANGUAGE.to_string();
    };

    let normalized = normalize_hint(hint);

    if let Some(exact) = languages.enabled().find(|entry| entry.id == normalized) {
        return exact.id.to_string();
    }

    let prefix: String = normalized.chars().take(2).collect();
    match languages
        .enabled()
        .find(|entry| entry.id.starts_with(prefix.as_str()))
    {
        Some(entry) => entry.id.to_string(),
        None => {
            log::debug!("No language matches locale '{}', using fallback", hint);
            FALLBACK_LANGUAGE.to_string()
        }
    }
}
