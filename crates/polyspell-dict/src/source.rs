// Word-list sources: where the raw text of a language's dictionary comes from

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;

/// Error returned when a word list cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source has no word list for this language.
    #[error("no word list configured for language '{0}'")]
    UnknownLanguage(String),

    /// The word-list file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Supplies the raw word list of a language.
///
/// The returned text holds one word per line; blank lines and surrounding
/// whitespace are ignored by the dictionary builder.
pub trait WordListSource {
    /// Whether this source knows a word list for `language`.
    fn supports(&self, language: &str) -> bool;

    /// Read the complete word list for `language`.
    fn read(&self, language: &str) -> Result<String, SourceError>;
}

impl<T: WordListSource + ?Sized> WordListSource for &T {
    fn supports(&self, language: &str) -> bool {
        (**self).supports(language)
    }

    fn read(&self, language: &str) -> Result<String, SourceError> {
        (**self).read(language)
    }
}

impl<T: WordListSource + ?Sized> WordListSource for Box<T> {
    fn supports(&self, language: &str) -> bool {
        (**self).supports(language)
    }

    fn read(&self, language: &str) -> Result<String, SourceError> {
        (**self).read(language)
    }
}

// ---------------------------------------------------------------------------
// Files on disk
// ---------------------------------------------------------------------------

/// Reads word lists from files, one path per language code.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    paths: BTreeMap<String, PathBuf>,
}

impl FileSource {
    pub fn new(paths: BTreeMap<String, PathBuf>) -> Self {
        Self { paths }
    }

    /// Add or replace the path for `language`.
    pub fn with_path(mut self, language: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(language.into(), path.into());
        self
    }

    pub fn path(&self, language: &str) -> Option<&Path> {
        self.paths.get(language).map(PathBuf::as_path)
    }

    /// Configured languages in code order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }
}

impl WordListSource for FileSource {
    fn supports(&self, language: &str) -> bool {
        self.paths.contains_key(language)
    }

    fn read(&self, language: &str) -> Result<String, SourceError> {
        let path = self
            .path(language)
            .ok_or_else(|| SourceError::UnknownLanguage(language.to_owned()))?;
        std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory lists
// ---------------------------------------------------------------------------

/// Word lists held in memory, e.g. embedded with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the word list for `language`.
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) {
        self.lists.insert(language.into(), text.into());
    }
}

impl WordListSource for MemorySource {
    fn supports(&self, language: &str) -> bool {
        self.lists.contains_key(language)
    }

    fn read(&self, language: &str) -> Result<String, SourceError> {
        self.lists
            .get(language)
            .cloned()
            .ok_or_else(|| SourceError::UnknownLanguage(language.to_owned()))
    }
}
