pub const APP_TITLE: &str = "UI TRANSLATE";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG_FILE_NAME: &str = "ui-translate.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Universal fallback language; every table must carry it.
pub const FALLBACK_LANGUAGE: &str = "en";
pub const EMPTY_STRING_ID: &str = "emptyString_msg";
/// U+2008 PUNCTUATION SPACE, visually empty but not collapsed by layout.
pub const EMPTY_STRING_TEXT: &str = "\u{2008}";
pub const LITERAL_PREFIX: char = '@';
