// src/commands/mod.rs
pub mod lang;

pub use lang::LanguageCommand;
