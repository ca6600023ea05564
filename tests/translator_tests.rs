// =====================================================
// FILE: tests/translator_tests.rs - LOOKUP, FALLBACK, LANGUAGE SELECTION
// =====================================================

use std::collections::HashSet;
use std::sync::Arc;
use ui_translate::i18n::{
    FixedLocale, LanguageDescriptor, LanguageList, LanguageRecord, TranslationTable,
};
use ui_translate::{t, AppError, Identifier, TranslationError, Translator};

fn bundled(hint: &str) -> Translator {
    Translator::embedded(&FixedLocale::new(hint)).expect("bundled tables load")
}

fn greeting_translator() -> Translator {
    let table = TranslationTable::new(vec![
        LanguageRecord::new("en", [("greet_label", "Hi NAME")]),
        LanguageRecord::new("de", Vec::<(String, String)>::new()),
    ])
    .unwrap();
    let languages = LanguageList::new(vec![
        LanguageDescriptor::enabled("en", "languageEnglish_label"),
        LanguageDescriptor::enabled("de", "languageGerman_label"),
    ])
    .unwrap();
    Translator::new(Arc::new(table), languages, Some("de")).unwrap()
}

#[test]
fn test_set_then_get_for_every_language() {
    let mut tr = bundled("en-US");
    for entry in tr.languages() {
        tr.set_current_language(entry.id).unwrap();
        assert_eq!(tr.current_language(), entry.id);
    }
}

#[test]
fn test_unknown_language_is_rejected() {
    let mut tr = bundled("fr-FR");
    let before = tr.current_language().to_string();

    let err = tr.set_current_language("xx").unwrap_err();
    assert!(matches!(
        err,
        AppError::Translation(TranslationError::InvalidLanguage(ref lang)) if lang == "xx"
    ));
    assert_eq!(tr.current_language(), before);
}

#[test]
fn test_special_identifiers() {
    let tr = bundled("de-DE");
    assert_eq!(tr.resolve(Identifier::Empty, &[]).unwrap(), "");
    assert_eq!(tr.resolve(Option::<&str>::None, &[]).unwrap(), "");
    assert_eq!(tr.get("emptyString_msg").unwrap(), "\u{2008}");
    assert_eq!(tr.get("@Hello").unwrap(), "Hello");
    assert_eq!(tr.get("@not_a_key_label").unwrap(), "not_a_key_label");
}

#[test]
fn test_fallback_with_substitution() {
    let tr = greeting_translator();
    assert_eq!(tr.current_language(), "de");
    assert_eq!(
        tr.resolve("greet_label", &[("NAME", "Sam")]).unwrap(),
        "Hi Sam"
    );
}

#[test]
fn test_missing_everywhere_fails() {
    let tr = greeting_translator();
    let err = tr.get("nowhere_msg").unwrap_err();
    assert!(matches!(
        err,
        AppError::Translation(TranslationError::MissingTranslation(_))
    ));
}

#[test]
fn test_bundled_texts() {
    let mut tr = bundled("de-CH");
    assert_eq!(tr.current_language(), "de");
    assert_eq!(tr.get("settings_title").unwrap(), "Einstellungen");

    tr.set_current_language("fr").unwrap();
    assert_eq!(tr.get("cancel_action").unwrap(), "Annuler");
    // French table has no settings title.
    assert_eq!(tr.get("settings_title").unwrap(), "Settings");
}

#[test]
fn test_macro_substitutes_in_order() {
    let tr = bundled("en");
    let folder = String::from("Inbox");
    let text = t!(tr, "unreadMessages_msg", "{count}" => "3", "{folder}" => folder).unwrap();
    assert_eq!(text, "You have 3 unread messages in Inbox.");
    assert_eq!(t!(tr, "ok_action").unwrap(), "Ok");
}

#[test]
fn test_default_language_derivation() {
    let tr = bundled("en");
    assert_eq!(tr.derive_default_language(None), "en");
    assert_eq!(tr.derive_default_language(Some("de-DE")), "de");
    assert_eq!(tr.derive_default_language(Some("xx-YY")), "en");
    assert_eq!(tr.derive_default_language(Some("pt-BR")), "pt_br");
    assert_eq!(bundled("xx-YY").current_language(), "en");
    assert_eq!(bundled("ru-RU").current_language(), "ru");
}

#[test]
fn test_languages_stable_and_unique() {
    let tr = bundled("en");
    let first = tr.languages();
    let second = tr.languages();
    assert_eq!(first, second);

    let ids: HashSet<_> = first.iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), first.len());
    assert_eq!(first.first().map(|e| e.id), Some("sq"));
    assert_eq!(first.last().map(|e| e.id), Some("sr"));
}

#[test]
fn test_every_language_has_a_display_name() {
    let tr = bundled("en");
    for entry in tr.language_list().all() {
        assert!(!tr.get(entry.text_id).unwrap().is_empty(), "{}", entry.id);
    }
}

#[test]
fn test_export_is_pretty_and_deterministic() {
    let tr = bundled("en");
    let json = tr.all_translations_as_json().unwrap();
    assert_eq!(json, tr.all_translations_as_json().unwrap());

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["de".to_string(), "en".to_string()]);
    assert_eq!(value["de"]["language_label"], "Sprache");
    assert!(json.contains("\n  \"en\": {\n    \""));
}

#[test]
fn test_translators_do_not_share_selection() {
    let table = Arc::new(TranslationTable::embedded().unwrap());
    let mut a = Translator::new(Arc::clone(&table), LanguageList::curated(), Some("en")).unwrap();
    let b = Translator::new(table, LanguageList::curated(), Some("en")).unwrap();

    a.set_current_language("it").unwrap();
    assert_eq!(a.current_language(), "it");
    assert_eq!(b.current_language(), "en");
}
