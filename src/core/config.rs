// src/core/config.rs
use crate::core::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL};
use crate::core::prelude::*;
use crate::i18n::{
    EnvLocale, LanguageList, LocaleSource, MissingPolicy, SystemLocale, TranslationTable,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// TOML Configuration Structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    language: LanguageConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguageConfig {
    #[serde(default)]
    current: String,
    #[serde(default = "default_strict")]
    strict: bool,
    #[serde(default)]
    locale_source: LocaleSourceKind,
    #[serde(default)]
    disabled: Option<Vec<String>>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}
fn default_strict() -> bool {
    true
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            current: String::new(),
            strict: default_strict(),
            locale_source: LocaleSourceKind::default(),
            disabled: None,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where the locale hint for the default language comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSourceKind {
    #[default]
    System,
    Env,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub config_path: Option<String>,
    pub log_level: String,
    /// Forced language; `None` derives it from the locale.
    pub language: Option<String>,
    pub missing_policy: MissingPolicy,
    pub locale_source: LocaleSourceKind,
    /// `None` keeps the curated enabled/disabled flags.
    pub disabled_languages: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_contents(ConfigFile::default(), None)
    }
}

impl std::str::FromStr for Config {
    type Err = AppError;

    fn from_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;
        Ok(Self::from_file_contents(file, None))
    }
}

impl Config {
    /// First existing file from [`Config::config_paths`], else defaults.
    pub async fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                let config = Self::from_file(&path).await?;
                log::debug!("Config loaded from {}", path.display());
                return Ok(config);
            }
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        Ok(Self::from_file_contents(
            file,
            Some(path.as_ref().to_string_lossy().into_owned()),
        ))
    }

    fn from_file_contents(file: ConfigFile, config_path: Option<String>) -> Self {
        let current = file.language.current.trim().to_lowercase();
        Self {
            config_path,
            log_level: file.general.log_level,
            language: (!current.is_empty()).then_some(current),
            missing_policy: if file.language.strict {
                MissingPolicy::Strict
            } else {
                MissingPolicy::Lenient
            },
            locale_source: file.language.locale_source,
            disabled_languages: file.language.disabled,
        }
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("config").join(CONFIG_FILE_NAME),
        ];
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(base_dir) = exe_path.parent() {
                paths.push(base_dir.join(CONFIG_FILE_NAME));
            }
        }
        paths
    }

    pub fn language_list(&self) -> LanguageList {
        let mut list = LanguageList::curated();
        let Some(disabled) = &self.disabled_languages else {
            return list;
        };

        let ids: Vec<&'static str> = list.all().iter().map(|entry| entry.id).collect();
        for id in ids {
            list.set_enabled(id, !disabled.iter().any(|d| d == id));
        }
        for unknown in disabled.iter().filter(|d| !list.all().iter().any(|e| e.id == d.as_str())) {
            log::warn!("Config disables unknown language '{}'", unknown);
        }
        list
    }

    pub fn locale_source(&self) -> Box<dyn LocaleSource> {
        match self.locale_source {
            LocaleSourceKind::System => Box::new(SystemLocale),
            LocaleSourceKind::Env => Box::new(EnvLocale::default()),
        }
    }

    /// Builds a translator over `table` honoring every language setting.
    /// A forced language that is not available is logged and ignored.
    pub fn build_translator(&self, table: Arc<TranslationTable>) -> Result<Translator> {
        let hint = self.locale_source().locale_hint();
        let mut translator = Translator::new(table, self.language_list(), hint.as_deref())?
            .with_policy(self.missing_policy);

        if let Some(lang) = &self.language {
            if let Err(e) = translator.set_current_language(lang) {
                log::warn!("Configured language rejected: {}", e);
            }
        }
        Ok(translator)
    }
}
