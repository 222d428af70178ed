// Registry: one lazily built dictionary per language code
//
// A dictionary is built the first time its language is requested and kept
// for the lifetime of the registry. It is never rebuilt or evicted.

use std::time::Instant;

use hashbrown::HashMap;

use crate::dictionary::Dictionary;
use crate::source::{SourceError, WordListSource};

/// Error type for registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be read; the language stays unloaded.
    #[error("dictionary for '{language}' is unavailable: {source}")]
    Unavailable {
        language: String,
        #[source]
        source: SourceError,
    },

    /// The language was queried before `ensure_loaded` succeeded for it.
    #[error("dictionary for '{0}' is not loaded")]
    NotLoaded(String),
}

/// Maps language codes to their dictionaries.
#[derive(Debug, Default)]
pub struct Registry {
    dictionaries: HashMap<String, Dictionary>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the dictionary for `language` exists, building it from
    /// `source` on first use.
    ///
    /// A loaded language returns immediately without touching `source`.
    /// When the word list cannot be read the failure is logged and returned;
    /// nothing is stored, so a later call tries the source again.
    pub fn ensure_loaded<S>(
        &mut self,
        language: &str,
        source: &S,
    ) -> Result<&Dictionary, DictionaryError>
    where
        S: WordListSource + ?Sized,
    {
        if !self.dictionaries.contains_key(language) {
            let dictionary = build(language, source)?;
            self.dictionaries.insert(language.to_owned(), dictionary);
        }
        Ok(&self.dictionaries[language])
    }

    /// Store a dictionary built elsewhere (for example on another thread).
    ///
    /// Returns `false` and drops `dictionary` when its language is already
    /// loaded; an existing dictionary is never replaced.
    pub fn insert(&mut self, dictionary: Dictionary) -> bool {
        if self.dictionaries.contains_key(dictionary.language()) {
            return false;
        }
        self.dictionaries
            .insert(dictionary.language().to_owned(), dictionary);
        true
    }

    /// Whether `token` is a word of the loaded dictionary for `language`.
    pub fn is_valid_word(&self, language: &str, token: &str) -> Result<bool, DictionaryError> {
        self.loaded(language).map(|d| d.contains(token))
    }

    /// Up to `limit` words of `language` that extend `token`.
    pub fn suggest(
        &self,
        language: &str,
        token: &str,
        limit: usize,
    ) -> Result<Vec<String>, DictionaryError> {
        self.loaded(language).map(|d| d.suggest(token, limit))
    }

    pub fn get(&self, language: &str) -> Option<&Dictionary> {
        self.dictionaries.get(language)
    }

    pub fn is_loaded(&self, language: &str) -> bool {
        self.dictionaries.contains_key(language)
    }

    /// Codes of the loaded languages, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    /// Number of loaded dictionaries.
    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    fn loaded(&self, language: &str) -> Result<&Dictionary, DictionaryError> {
        self.get(language)
            .ok_or_else(|| DictionaryError::NotLoaded(language.to_owned()))
    }
}

fn build<S>(language: &str, source: &S) -> Result<Dictionary, DictionaryError>
where
    S: WordListSource + ?Sized,
{
    let started = Instant::now();
    let text = source.read(language).map_err(|source| {
        tracing::warn!(language, error = %source, "word list unavailable");
        DictionaryError::Unavailable {
            language: language.to_owned(),
            source,
        }
    })?;

    let dictionary = Dictionary::from_word_list(language, &text);
    tracing::debug!(
        language,
        words = dictionary.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dictionary built"
    );
    Ok(dictionary)
}
