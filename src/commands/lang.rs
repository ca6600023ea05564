// src/commands/lang.rs
use crate::core::prelude::*;

/// Language picker: shows the selection or switches it.
#[derive(Debug, Default)]
pub struct LanguageCommand;

impl LanguageCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn matches(&self, command: &str) -> bool {
        command.trim().to_lowercase().starts_with("lang")
    }

    /// No argument shows the status, one argument switches to that language.
    /// A rejected code is reported as text, not as an error.
    pub fn execute(&self, translator: &mut Translator, args: &[&str]) -> Result<String> {
        match args.first() {
            None => Self::show_status(translator),
            Some(&lang) => match translator.set_current_language(lang) {
                Ok(()) => {
                    let name = Self::display_name(translator, lang)?;
                    crate::t!(translator, "languageChanged_msg", "{language}" => name)
                }
                Err(AppError::Translation(e @ TranslationError::InvalidLanguage(_))) => {
                    Ok(e.to_string())
                }
                Err(e) => Err(e),
            },
        }
    }

    pub fn show_status(translator: &Translator) -> Result<String> {
        let current = Self::display_name(translator, translator.current_language())?;
        let available = translator
            .languages()
            .iter()
            .map(|entry| {
                translator
                    .get(entry.text_id)
                    .map(|name| format!("{} ({})", name, entry.id))
            })
            .collect::<Result<Vec<_>>>()?
            .join(", ");

        let current_line = crate::t!(translator, "currentLanguage_msg", "{language}" => current)?;
        let available_line =
            crate::t!(translator, "availableLanguages_label", "{languages}" => available)?;
        Ok(format!("{}\n{}", current_line, available_line))
    }

    fn display_name(translator: &Translator, lang: &str) -> Result<String> {
        match translator
            .language_list()
            .all()
            .iter()
            .find(|entry| entry.id == lang)
        {
            Some(entry) => translator.get(entry.text_id),
            None => Ok(lang.to_string()),
        }
    }
}
