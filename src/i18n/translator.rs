// src/i18n/translator.rs
use crate::core::constants::{EMPTY_STRING_TEXT, FALLBACK_LANGUAGE};
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use crate::i18n::identifier::Identifier;
use crate::i18n::languages::{LanguageDescriptor, LanguageList};
use crate::i18n::locale::{self, LocaleSource};
use crate::i18n::types::TranslationTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// What `resolve` does with an identifier no table knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Fail with `TranslationError::MissingTranslation`.
    #[default]
    Strict,
    /// Log a warning and resolve to an empty string.
    Lenient,
}

/// Called with `(previous, current)` after every language switch.
pub type LanguageListener = Box<dyn FnMut(&str, &str)>;

/// Text lookup context: a shared table plus this surface's own language selection.
pub struct Translator {
    table: Arc<TranslationTable>,
    languages: LanguageList,
    current: String,
    policy: MissingPolicy,
    listeners: Vec<LanguageListener>,
}

impl Translator {
    /// Validates `languages` against `table` and starts in the language
    /// derived from `locale_hint`.
    pub fn new(
        table: Arc<TranslationTable>,
        languages: LanguageList,
        locale_hint: Option<&str>,
    ) -> Result<Self> {
        languages.validate(&table)?;

        let mut current = locale::derive_default_language(locale_hint, &languages);
        if !table.contains(&current) {
            current = FALLBACK_LANGUAGE.to_string();
        }
        log::debug!("Translator starts in '{}'", current);

        Ok(Self {
            table,
            languages,
            current,
            policy: MissingPolicy::default(),
            listeners: Vec::new(),
        })
    }

    /// Bundled tables, curated language list, default taken from `source`.
    pub fn embedded(source: &dyn LocaleSource) -> Result<Self> {
        let table = Arc::new(TranslationTable::embedded()?);
        Self::new(table, LanguageList::curated(), source.locale_hint().as_deref())
    }

    pub fn with_policy(mut self, policy: MissingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    pub fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    /// Switches the active language. Unknown codes leave the selection untouched.
    pub fn set_current_language(&mut self, lang: &str) -> Result<()> {
        if !self.table.contains(lang) {
            return Err(AppError::Translation(TranslationError::InvalidLanguage(
                lang.to_string(),
            )));
        }
        if self.current == lang {
            return Ok(());
        }

        let previous = std::mem::replace(&mut self.current, lang.to_string());
        log::debug!("Language switched: {} -> {}", previous, self.current);

        for listener in self.listeners.iter_mut() {
            listener(&previous, &self.current);
        }
        Ok(())
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&str, &str) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Resolves `id` in the active language, falling back to English.
    ///
    /// Each `(needle, replacement)` pair replaces the first occurrence of
    /// `needle`, pairs applied in slice order. Literal (`@`) and sentinel
    /// identifiers skip substitution.
    pub fn resolve<'a, I>(&self, id: I, params: &[(&str, &str)]) -> Result<String>
    where
        I: Into<Identifier<'a>>,
    {
        let key = match id.into() {
            Identifier::Empty => return Ok(String::new()),
            Identifier::EmptySentinel => return Ok(EMPTY_STRING_TEXT.to_string()),
            Identifier::Literal(text) => return Ok(text.to_string()),
            Identifier::Lookup(key) => key,
        };

        let Some(template) = self.table.text_with_fallback(&self.current, key) else {
            return match self.policy {
                MissingPolicy::Strict => Err(AppError::Translation(
                    TranslationError::MissingTranslation(key.to_string()),
                )),
                MissingPolicy::Lenient => {
                    log::warn!("no translation found for id {}", key);
                    Ok(String::new())
                }
            };
        };

        Ok(substitute(template, params))
    }

    /// Shorthand for `resolve(id, &[])`.
    pub fn get(&self, id: &str) -> Result<String> {
        self.resolve(id, &[])
    }

    /// Enabled languages in curated order.
    pub fn languages(&self) -> Vec<LanguageDescriptor> {
        self.languages.enabled().copied().collect()
    }

    pub fn language_list(&self) -> &LanguageList {
        &self.languages
    }

    /// English and German tables as 2-space indented JSON, for translation tooling.
    pub fn all_translations_as_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Export<'a> {
            de: &'a BTreeMap<String, String>,
            en: &'a BTreeMap<String, String>,
        }

        let empty = BTreeMap::new();
        let keys_of = |lang: &str| {
            self.table
                .record(lang)
                .map(|record| &record.keys)
                .unwrap_or(&empty)
        };

        let export = Export {
            de: keys_of("de"),
            en: keys_of("en"),
        };
        serde_json::to_string_pretty(&export)
            .map_err(|e| AppError::Validation(format!("JSON: {}", e)))
    }

    pub fn derive_default_language(&self, hint: Option<&str>) -> String {
        locale::derive_default_language(hint, &self.languages)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("current", &self.current)
            .field("languages", &self.languages.enabled().count())
            .field("policy", &self.policy)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (needle, replacement)| {
            text.replacen(needle, replacement, 1)
        })
}
