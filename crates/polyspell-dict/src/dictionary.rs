// A language's dictionary: a trie built once from a newline-delimited word list

use polyspell_trie::{Completions, Trie};

/// Lines of a word list that hold words: trimmed, blank lines skipped.
pub fn word_entries(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// The words of one language.
///
/// Built in a single pass and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    trie: Trie,
}

impl Dictionary {
    /// Build a dictionary from raw word-list text, one word per line.
    ///
    /// Lines are trimmed; empty and whitespace-only lines are skipped.
    /// Words are inserted in file order; duplicates are harmless.
    pub fn from_word_list(language: impl Into<String>, text: &str) -> Self {
        Self::from_words(language, word_entries(text))
    }

    /// Build a dictionary from already separated words.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.into(),
            trie: words.into_iter().collect(),
        }
    }

    /// The language code this dictionary was built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Up to `limit` dictionary words that start with `prefix`.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.trie.suggest(prefix, limit)
    }

    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        self.trie.completions(prefix)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
