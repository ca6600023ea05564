// src/i18n/types.rs
use crate::core::constants::FALLBACK_LANGUAGE;
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One language's texts: identifier -> template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageRecord {
    pub id: String,
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
}

impl LanguageRecord {
    pub fn new<I, K, V>(id: &str, keys: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: id.to_string(),
            keys: keys
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::Translation(TranslationError::LoadError(format!(
                "invalid language record: {}",
                e
            )))
        })
    }

    /// Empty templates count as untranslated.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.keys
            .get(id)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// All language records, keyed by language code. Always holds `en`.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    records: HashMap<String, LanguageRecord>,
}

impl TranslationTable {
    pub fn new<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = LanguageRecord>,
    {
        let mut map = HashMap::new();
        for record in records {
            if map.contains_key(&record.id) {
                return Err(AppError::Translation(TranslationError::LoadError(format!(
                    "duplicate language record: {}",
                    record.id
                ))));
            }
            map.insert(record.id.clone(), record);
        }

        if !map.contains_key(FALLBACK_LANGUAGE) {
            return Err(AppError::Translation(TranslationError::LoadError(format!(
                "fallback language '{}' missing",
                FALLBACK_LANGUAGE
            ))));
        }

        log::debug!("Translation table built with {} languages", map.len());
        Ok(Self { records: map })
    }

    /// Table from the JSON resources compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::new(crate::i18n::langs::load_all()?)
    }

    pub fn from_json_records<'a, I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = documents
            .into_iter()
            .map(LanguageRecord::from_json)
            .collect::<Result<Vec<_>>>()?;
        Self::new(records)
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.records.contains_key(lang)
    }

    pub fn record(&self, lang: &str) -> Option<&LanguageRecord> {
        self.records.get(lang)
    }

    pub fn text(&self, lang: &str, id: &str) -> Option<&str> {
        self.records.get(lang).and_then(|record| record.text(id))
    }

    /// Looks `id` up in `lang`, then in the fallback language.
    pub fn text_with_fallback(&self, lang: &str, id: &str) -> Option<&str> {
        self.text(lang, id)
            .or_else(|| self.text(FALLBACK_LANGUAGE, id))
    }

    pub fn language_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.records.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
