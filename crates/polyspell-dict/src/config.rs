// Configuration: dictionary paths, default language, suggestion limit

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use polyspell_core::script::Script;
use serde::{Deserialize, Serialize};

use crate::checker::CheckOptions;
use crate::detect::ScriptDetector;
use crate::source::FileSource;

/// Default number of suggestions shown for a misspelled word.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Language used when no configuration names one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Word list shipped by most Unix systems.
pub const SYSTEM_WORDS: &str = "/usr/share/dict/words";

/// Environment variable overriding `default_language`.
pub const ENV_DEFAULT_LANGUAGE: &str = "POLYSPELL_DEFAULT_LANGUAGE";

/// Environment variable overriding `suggestion_limit`.
pub const ENV_SUGGESTION_LIMIT: &str = "POLYSPELL_SUGGESTION_LIMIT";

/// Error type for loading and validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Languages assigned to a script in the configuration: a single code or a
/// list in order of preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptLanguages {
    One(String),
    Many(Vec<String>),
}

impl ScriptLanguages {
    pub fn as_slice(&self) -> &[String] {
        match self {
            ScriptLanguages::One(language) => std::slice::from_ref(language),
            ScriptLanguages::Many(languages) => languages,
        }
    }
}

impl From<&str> for ScriptLanguages {
    fn from(language: &str) -> Self {
        ScriptLanguages::One(language.to_owned())
    }
}

/// Spell checker configuration, usually read from a JSON file:
///
/// ```json
/// {
///   "default_language": "hi",
///   "suggestion_limit": 5,
///   "dictionaries": { "en": "/usr/share/dict/words", "hi": "/data/hi_IN.txt" },
///   "scripts": { "devanagari": ["mr", "hi"], "latin": "en" }
/// }
/// ```
///
/// Missing fields take their defaults. `scripts` only lists overrides of the
/// built-in script to language table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language used when the detected one has no dictionary.
    pub default_language: String,
    /// Maximum number of suggestions per misspelled word.
    pub suggestion_limit: usize,
    /// Word-list file per language code.
    pub dictionaries: BTreeMap<String, PathBuf>,
    /// Script to language overrides for detection.
    pub scripts: BTreeMap<Script, ScriptLanguages>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            dictionaries: BTreeMap::from([(
                DEFAULT_LANGUAGE.to_string(),
                PathBuf::from(SYSTEM_WORDS),
            )]),
            scripts: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Apply `POLYSPELL_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its
    /// value. Values that do not parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(language) = lookup(ENV_DEFAULT_LANGUAGE).filter(|v| !v.trim().is_empty()) {
            self.default_language = language.trim().to_string();
        }
        if let Some(limit) = lookup(ENV_SUGGESTION_LIMIT).and_then(|v| v.trim().parse().ok()) {
            self.suggestion_limit = limit;
        }
    }

    /// Check the configuration before use.
    ///
    /// The default language must have a dictionary and the limit must be
    /// positive. Word-list files that do not exist are only logged: a
    /// missing file makes that one language unavailable at lookup time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dictionaries.is_empty() {
            return Err(ConfigError::Invalid("no dictionaries configured".to_string()));
        }
        if !self.dictionaries.contains_key(&self.default_language) {
            return Err(ConfigError::Invalid(format!(
                "default language '{}' has no dictionary",
                self.default_language
            )));
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::Invalid(
                "suggestion_limit must be at least 1".to_string(),
            ));
        }
        if let Some(language) = self.dictionaries.keys().find(|l| l.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "invalid language code '{language}'"
            )));
        }
        if let Some(script) = self
            .scripts
            .iter()
            .find_map(|(script, languages)| languages.as_slice().is_empty().then_some(script))
        {
            return Err(ConfigError::Invalid(format!(
                "no language assigned to script '{script}'"
            )));
        }
        for (language, path) in &self.dictionaries {
            if !path.is_file() {
                tracing::warn!(
                    language = language.as_str(),
                    path = %path.display(),
                    "word list file not found"
                );
            }
        }
        Ok(())
    }

    /// Word-list source reading the configured files.
    pub fn file_source(&self) -> FileSource {
        FileSource::new(self.dictionaries.clone())
    }

    /// Script detector with the configured overrides applied.
    pub fn detector(&self) -> ScriptDetector {
        self.scripts
            .iter()
            .fold(ScriptDetector::new(), |detector, (&script, languages)| {
                detector.with_languages(script, languages.as_slice().iter().cloned())
            })
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            default_language: self.default_language.clone(),
            suggestion_limit: self.suggestion_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::LanguageDetector;
    use crate::source::WordListSource;

    #[test]
    fn defaults_use_system_words() {
        let config = Config::default();
        assert_eq!(config.default_language, "en");
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.dictionaries["en"], PathBuf::from(SYSTEM_WORDS));
    }

    #[test]
    fn parses_full_config() {
        let config = Config::from_json(
            r#"{
                "default_language": "hi",
                "suggestion_limit": 3,
                "dictionaries": { "hi": "/data/hi_IN.txt", "gu": "/data/gu.txt" },
                "scripts": { "devanagari": "mr" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_language, "hi");
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.dictionaries.len(), 2);
        assert_eq!(config.scripts[&Script::Devanagari].as_slice(), ["mr"]);
        assert_eq!(config.detector().detect("नमक").unwrap(), "mr");
        assert!(config.file_source().supports("gu"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = Config::from_json(r#"{ "suggestion_limit": 2 }"#).unwrap();
        assert_eq!(config.suggestion_limit, 2);
        assert_eq!(config.default_language, "en");
        assert!(config.dictionaries.contains_key("en"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Config::from_json(r#"{ "limit": 2 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn script_accepts_language_list() {
        let config =
            Config::from_json(r#"{ "scripts": { "devanagari": ["mr", "hi"], "latin": "en" } }"#)
                .unwrap();
        assert_eq!(config.scripts[&Script::Devanagari].as_slice(), ["mr", "hi"]);
        let detector = config.detector();
        assert_eq!(detector.detect("आहे").unwrap(), "mr");
        assert_eq!(detector.candidates("आहे").unwrap(), ["mr", "hi"]);
        assert_eq!(detector.candidates("cat").unwrap(), ["en"]);
    }

    #[test]
    fn validate_rejects_empty_script_list() {
        let config = Config::from_json(r#"{ "scripts": { "devanagari": [] } }"#).unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: no language assigned to script 'devanagari'"
        );
    }

    #[test]
    fn unknown_script_is_rejected() {
        assert!(Config::from_json(r#"{ "scripts": { "klingon": "tlh" } }"#).is_err());
    }

    #[test]
    fn overrides_replace_values() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            ENV_DEFAULT_LANGUAGE => Some(" hi ".to_string()),
            ENV_SUGGESTION_LIMIT => Some("9".to_string()),
            _ => None,
        });
        assert_eq!(config.default_language, "hi");
        assert_eq!(config.suggestion_limit, 9);
    }

    #[test]
    fn unparsable_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            ENV_DEFAULT_LANGUAGE => Some("   ".to_string()),
            ENV_SUGGESTION_LIMIT => Some("many".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
    }

    #[test]
    fn validate_requires_default_dictionary() {
        let mut config = Config::default();
        config.default_language = "hi".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: default language 'hi' has no dictionary"
        );
    }

    #[test]
    fn validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.suggestion_limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_empty_dictionary_table() {
        let mut config = Config::default();
        config.dictionaries.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_accepts_missing_files() {
        let mut config = Config::default();
        config.dictionaries.insert(
            "en".to_string(),
            PathBuf::from("/nonexistent/polyspell/words.txt"),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn check_options_follow_config() {
        let config = Config::from_json(r#"{ "suggestion_limit": 7 }"#).unwrap();
        let options = config.check_options();
        assert_eq!(options.default_language, "en");
        assert_eq!(options.suggestion_limit, 7);
    }
}
