// Prefix trie: insertion, exact membership, bounded completion

use crate::completions::Completions;
use crate::node::TrieNode;

/// A set of words stored as a character trie.
///
/// Keys are Unicode scalar values, so multi-byte characters occupy one edge
/// each. The empty word is not storable: `insert("")` does nothing and
/// `contains("")` is always `false`.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating nodes along its path as needed.
    ///
    /// Returns `true` if the word was not already stored. Inserting a word
    /// twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }
        let added = node.mark_terminal();
        if added {
            self.len += 1;
        }
        added
    }

    /// Whether `word` was inserted. A path that only leads to longer words
    /// does not count.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.root.descend(word).is_some_and(TrieNode::is_terminal)
    }

    /// Whether any stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.len > 0 && self.root.descend(prefix).is_some()
    }

    /// Lazily enumerate every stored word that starts with `prefix`,
    /// including `prefix` itself when it is a word.
    ///
    /// The order among siblings follows the children map and is unspecified
    /// unless the `ordered` feature is enabled, in which case words come out
    /// in lexicographic code point order.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        match self.root.descend(prefix) {
            Some(node) => Completions::new(Some(node), prefix),
            None => Completions::empty(),
        }
    }

    /// Up to `limit` words starting with `prefix`, in traversal order.
    ///
    /// The search stops as soon as `limit` words are found, so which words
    /// are returned depends on traversal order when more than `limit` match.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.completions(prefix).take(limit).collect()
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, for read-only inspection.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
