// Language detection by dominant Unicode script

use std::collections::BTreeMap;

use polyspell_core::script::{Script, dominant_script};

/// Error type for language detection failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// Nothing but whitespace.
    #[error("cannot detect the language of empty input")]
    Empty,

    /// Input without any letter (digits, punctuation).
    #[error("no letters to detect a language from in '{0}'")]
    NoLetters(String),

    /// Letters only from scripts the detector does not classify.
    #[error("letters of '{0}' belong to no supported script")]
    UnknownScript(String),

    /// The dominant script has no language assigned.
    #[error("no language is assigned to the {0} script")]
    UnmappedScript(Script),
}

/// Best-effort guess of the language a token is written in.
pub trait LanguageDetector {
    /// Returns a language code for `text`. The code may name a language
    /// without a dictionary; callers fall back to their default.
    fn detect(&self, text: &str) -> Result<String, DetectError>;

    /// Every language `text` may be written in, most likely first. Never
    /// empty on success.
    fn candidates(&self, text: &str) -> Result<Vec<String>, DetectError> {
        Ok(vec![self.detect(text)?])
    }
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Result<String, DetectError>,
{
    fn detect(&self, text: &str) -> Result<String, DetectError> {
        self(text)
    }
}

/// Detects the language from the script most letters are written in.
///
/// A script stands for one or more languages. Hindi, Marathi, Nepali and
/// Sanskrit all use Devanagari, so a Devanagari token has four candidates;
/// the spell checker picks among them by dictionary content.
#[derive(Debug, Clone)]
pub struct ScriptDetector {
    languages: BTreeMap<Script, Vec<String>>,
}

impl ScriptDetector {
    /// Detector using [`Script::languages`] for every script.
    pub fn new() -> Self {
        let languages = Script::LETTER_SCRIPTS
            .into_iter()
            .map(|script| {
                let codes = script.languages().iter().map(|&code| code.to_owned());
                (script, codes.collect())
            })
            .collect();
        Self { languages }
    }

    /// Detector without any mapping; every input fails with `UnmappedScript`
    /// until scripts are assigned.
    pub fn empty() -> Self {
        Self {
            languages: BTreeMap::new(),
        }
    }

    /// Assign `language` alone to `script`, replacing the previous assignment.
    pub fn with_language(self, script: Script, language: impl Into<String>) -> Self {
        self.with_languages(script, [language])
    }

    /// Assign `languages` to `script` in order of preference, replacing the
    /// previous assignment. An empty list unmaps the script.
    pub fn with_languages<I>(mut self, script: Script, languages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let languages: Vec<String> = languages.into_iter().map(Into::into).collect();
        if languages.is_empty() {
            self.languages.remove(&script);
        } else {
            self.languages.insert(script, languages);
        }
        self
    }

    /// The preferred language `script` stands for.
    pub fn language_of(&self, script: Script) -> Option<&str> {
        self.languages_of(script).first().map(String::as_str)
    }

    /// Every language assigned to `script`, preferred first.
    pub fn languages_of(&self, script: Script) -> &[String] {
        self.languages.get(&script).map(Vec::as_slice).unwrap_or_default()
    }

    fn script(&self, text: &str) -> Result<Script, DetectError> {
        if text.trim().is_empty() {
            return Err(DetectError::Empty);
        }
        dominant_script(text).ok_or_else(|| {
            if text.chars().any(char::is_alphabetic) {
                DetectError::UnknownScript(text.to_owned())
            } else {
                DetectError::NoLetters(text.to_owned())
            }
        })
    }
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Result<String, DetectError> {
        let script = self.script(text)?;
        self.language_of(script)
            .map(str::to_owned)
            .ok_or(DetectError::UnmappedScript(script))
    }

    fn candidates(&self, text: &str) -> Result<Vec<String>, DetectError> {
        let script = self.script(text)?;
        match self.languages_of(script) {
            [] => Err(DetectError::UnmappedScript(script)),
            languages => Ok(languages.to_vec()),
        }
    }
}
