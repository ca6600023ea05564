// src/main.rs
use std::sync::Arc;
use ui_translate::core::constants::{APP_TITLE, VERSION};
use ui_translate::{AppError, Config, LanguageCommand, Result, TranslationTable, Translator};

const USAGE: &str = "usage: ui-translate [--lang <code>] <command>

commands:
  languages              list enabled languages
  get <id> [KEY=VALUE]   resolve a text identifier
  export                 print English and German tables as JSON
  detect [hint]          derive the default language from a locale
  lang [code]            show or switch the current language";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    log::debug!("{} v{}", APP_TITLE, VERSION);

    let (lang, args) = split_lang_flag(std::env::args().skip(1).collect())?;

    let table = Arc::new(TranslationTable::embedded()?);
    let mut translator = config.build_translator(table)?;
    if let Some(lang) = lang {
        translator.set_current_language(&lang)?;
    }

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_command(&mut translator, &config, &args)?;
    println!("{}", output);
    Ok(())
}

fn run_command(translator: &mut Translator, config: &Config, args: &[&str]) -> Result<String> {
    match args.split_first() {
        Some((&"languages", _)) => {
            let mut lines = Vec::new();
            for entry in translator.languages() {
                lines.push(format!("{:<8} {}", entry.id, translator.get(entry.text_id)?));
            }
            Ok(lines.join("\n"))
        }
        Some((&"get", [id, params @ ..])) => {
            let pairs = params
                .iter()
                .map(|param| {
                    param.split_once('=').ok_or_else(|| {
                        AppError::Validation(format!("expected KEY=VALUE, got '{}'", param))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            translator.resolve(*id, &pairs)
        }
        Some((&"export", _)) => translator.all_translations_as_json(),
        Some((&"detect", rest)) => {
            let hint = match rest.first() {
                Some(hint) => Some(hint.to_string()),
                None => config.locale_source().locale_hint(),
            };
            Ok(translator.derive_default_language(hint.as_deref()))
        }
        Some((cmd, rest)) if LanguageCommand::new().matches(cmd) => {
            LanguageCommand::new().execute(translator, rest)
        }
        _ => Ok(USAGE.to_string()),
    }
}

fn split_lang_flag(args: Vec<String>) -> Result<(Option<String>, Vec<String>)> {
    let mut lang = None;
    let mut rest = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--lang" {
            let value = iter
                .next()
                .ok_or_else(|| AppError::Validation("--lang needs a language code".into()))?;
            lang = Some(value);
        } else {
            rest.push(arg);
        }
    }
    Ok((lang, rest))
}
