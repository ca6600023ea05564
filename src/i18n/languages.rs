// src/i18n/languages.rs
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use crate::i18n::types::TranslationTable;
use serde::Serialize;
use std::collections::HashSet;

/// A language the picker can offer, with the identifier of its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    pub id: &'static str,
    pub text_id: &'static str,
    pub enabled: bool,
}

impl LanguageDescriptor {
    pub const fn enabled(id: &'static str, text_id: &'static str) -> Self {
        Self {
            id,
            text_id,
            enabled: true,
        }
    }

    pub const fn disabled(id: &'static str, text_id: &'static str) -> Self {
        Self {
            id,
            text_id,
            enabled: false,
        }
    }
}

pub const CURATED_LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor::enabled("sq", "languageAlbanian_label"),
    LanguageDescriptor::enabled("hr", "languageCroatian_label"),
    LanguageDescriptor::enabled("zh_hant", "languageChineseTraditional_label"),
    LanguageDescriptor::disabled("zh", "languageChineseSimplified_label"),
    LanguageDescriptor::enabled("en", "languageEnglish_label"),
    LanguageDescriptor::enabled("nl", "languageDutch_label"),
    LanguageDescriptor::enabled("de", "languageGerman_label"),
    LanguageDescriptor::disabled("ar", "languageArabic_label"),
    LanguageDescriptor::enabled("el", "languageGreek_label"),
    LanguageDescriptor::enabled("fr", "languageFrench_label"),
    LanguageDescriptor::enabled("it", "languageItalian_label"),
    LanguageDescriptor::enabled("pl", "languagePolish_label"),
    LanguageDescriptor::enabled("pt_pt", "languagePortugesePortugal_label"),
    LanguageDescriptor::enabled("pt_br", "languagePortugeseBrazil_label"),
    LanguageDescriptor::enabled("ro", "languageRomanian_label"),
    LanguageDescriptor::enabled("ru", "languageRussian_label"),
    LanguageDescriptor::enabled("es", "languageSpanish_label"),
    LanguageDescriptor::enabled("tr", "languageTurkish_label"),
    LanguageDescriptor::disabled("bg_bg", "languageBulgarian_label"),
    LanguageDescriptor::enabled("fi", "languageFinnish_label"),
    LanguageDescriptor::enabled("lt_lt", "languageLithuanian_label"),
    LanguageDescriptor::enabled("mk", "languageMacedonian_label"),
    LanguageDescriptor::enabled("sr", "languageSerbian_label"),
];

/// Ordered inclusion list. Order is curated and decides prefix matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageList {
    entries: Vec<LanguageDescriptor>,
}

impl LanguageList {
    pub fn new(entries: Vec<LanguageDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(AppError::Translation(TranslationError::Config(format!(
                    "language '{}' listed twice",
                    entry.id
                ))));
            }
        }
        Ok(Self { entries })
    }

    pub fn curated() -> Self {
        Self {
            entries: CURATED_LANGUAGES.to_vec(),
        }
    }

    /// Returns false if `id` is not part of the list.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[LanguageDescriptor] {
        &self.entries
    }

    pub fn enabled(&self) -> impl Iterator<Item = &LanguageDescriptor> + '_ {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled().any(|entry| entry.id == id)
    }

    /// Every enabled language must have a table.
    pub fn validate(&self, table: &TranslationTable) -> Result<()> {
        match self.enabled().find(|entry| !table.contains(entry.id)) {
            Some(entry) => Err(AppError::Translation(TranslationError::Config(format!(
                "language '{}' is enabled but has no translation table",
                entry.id
            )))),
            None => Ok(()),
        }
    }
}

impl Default for LanguageList {
    fn default() -> Self {
        Self::curated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::types::LanguageRecord;

    #[test]
    fn test_curated_list_has_no_duplicates() {
        assert!(LanguageList::new(CURATED_LANGUAGES.to_vec()).is_ok());
    }

    #[test]
    fn test_disabled_entries_are_hidden() {
        let list = LanguageList::curated();
        assert!(!list.is_enabled("zh"));
        assert!(!list.is_enabled("ar"));
        assert!(!list.is_enabled("bg_bg"));
        assert!(list.is_enabled("zh_hant"));
        assert_eq!(list.enabled().count(), 20);
        assert_eq!(list.all().len(), 23);
    }

    #[test]
    fn test_toggle() {
        let mut list = LanguageList::curated();
        assert!(list.set_enabled("zh", true));
        assert!(list.is_enabled("zh"));
        assert!(!list.set_enabled("xx", true));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = LanguageList::new(vec![
            LanguageDescriptor::enabled("en", "languageEnglish_label"),
            LanguageDescriptor::disabled("en", "languageEnglish_label"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_against_table() {
        let table = TranslationTable::new(vec![LanguageRecord::new(
            "en",
            [("ok_action", "Ok")],
        )])
        .unwrap();
        let mut list = LanguageList::new(vec![
            LanguageDescriptor::enabled("en", "languageEnglish_label"),
            LanguageDescriptor::disabled("de", "languageGerman_label"),
        ])
        .unwrap();
        assert!(list.validate(&table).is_ok());

        list.set_enabled("de", true);
        assert!(matches!(
            list.validate(&table),
            Err(AppError::Translation(TranslationError::Config(_)))
        ));
    }
}
