// src/i18n/langs/mod.rs
use super::types::LanguageRecord;
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

/// Language codes of all bundled tables, sorted.
pub fn bundled_languages() -> Vec<String> {
    let mut langs: Vec<String> = Langs::iter()
        .filter_map(|f| f.as_ref().strip_suffix(".json").map(str::to_string))
        .collect();
    langs.sort();
    langs
}

pub fn load_record(lang: &str) -> Result<LanguageRecord> {
    let filename = format!("{}.json", lang);
    let content = Langs::get(&filename).ok_or_else(|| {
        AppError::Translation(TranslationError::LoadError(format!(
            "File not found: {}",
            filename
        )))
    })?;

    let content_str = std::str::from_utf8(content.data.as_ref())
        .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))?;

    let record = LanguageRecord::from_json(content_str)?;
    if record.id != lang {
        return Err(AppError::Translation(TranslationError::LoadError(format!(
            "{} declares id '{}'",
            filename, record.id
        ))));
    }
    Ok(record)
}

pub fn load_all() -> Result<Vec<LanguageRecord>> {
    bundled_languages()
        .iter()
        .map(|lang| load_record(lang))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_tables_parse() {
        let records = load_all().unwrap();
        assert_eq!(records.len(), bundled_languages().len());
        assert!(records.iter().any(|r| r.id == "en"));
        assert!(records.iter().any(|r| r.id == "de"));
    }

    #[test]
    fn test_english_and_german_share_keys() {
        let en = load_record("en").unwrap();
        let de = load_record("de").unwrap();
        let en_keys: Vec<_> = en.keys.keys().collect();
        let de_keys: Vec<_> = de.keys.keys().collect();
        assert_eq!(en_keys, de_keys);
    }

    #[test]
    fn test_unknown_file() {
        assert!(load_record("xx").is_err());
    }
}
