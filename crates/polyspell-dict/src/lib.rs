//! Per-language dictionaries and the spell-check pipeline.
//!
//! - [`dictionary`] -- a language's word trie, built from a word list
//! - [`registry`] -- lazily built dictionaries keyed by language code
//! - [`source`] -- where word lists come from (files, memory)
//! - [`detect`] -- language detection by Unicode script
//! - [`config`] -- JSON configuration with environment overrides
//! - [`checker`] -- detect, fall back, load, validate and suggest

pub mod checker;
pub mod config;
pub mod detect;
pub mod dictionary;
pub mod registry;
pub mod source;

pub use checker::{CheckError, CheckOptions, SpellChecker};
pub use config::{Config, ConfigError, ScriptLanguages};
pub use detect::{DetectError, LanguageDetector, ScriptDetector};
pub use dictionary::Dictionary;
pub use registry::{DictionaryError, Registry};
pub use source::{FileSource, MemorySource, SourceError, WordListSource};
