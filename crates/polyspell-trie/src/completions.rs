// Lazy prefix completion: pre-order DFS over a subtree with an explicit stack
//
// The traversal state (stack of child iterators plus the spelled-out path)
// lives in the iterator itself, so a consumer that stops pulling items also
// stops the search. Nothing below the last yielded word is visited.

use crate::node::{ChildIter, TrieNode};

/// Iterator over the stored words that start with a given prefix.
///
/// Created by [`Trie::completions`](crate::Trie::completions). A node's word
/// is yielded before any word in its subtree; siblings are visited in the
/// children map's enumeration order.
pub struct Completions<'a> {
    /// Start node, taken on the first call to `next`.
    start: Option<&'a TrieNode>,
    /// One child iterator per depth below (and including) the start node.
    stack: Vec<ChildIter<'a>>,
    /// Prefix followed by the characters of the current path.
    buffer: String,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(start: Option<&'a TrieNode>, prefix: &str) -> Self {
        Self {
            start,
            stack: Vec::new(),
            buffer: prefix.to_owned(),
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self::new(None, "")
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(node) = self.start.take() {
            self.stack.push(node.child_iter());
            if node.is_terminal() {
                return Some(self.buffer.clone());
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some((&c, child)) => {
                    self.buffer.push(c);
                    self.stack.push(child.child_iter());
                    if child.is_terminal() {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start node's frame was pushed without a character.
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Completions<'_> {}

#[cfg(test)]
mod tests {
    use crate::Trie;

    #[test]
    fn empty_iterator_yields_nothing() {
        assert_eq!(super::Completions::empty().next(), None);
    }

    #[test]
    fn start_node_word_comes_first() {
        let mut trie = Trie::new();
        trie.insert("car");
        trie.insert("cart");
        trie.insert("carton");
        let words: Vec<String> = trie.completions("car").collect();
        assert_eq!(words, ["car", "cart", "carton"]);
    }

    #[test]
    fn parent_precedes_descendants() {
        let mut trie = Trie::new();
        for word in ["a", "ab", "abc", "ac", "b", "bd"] {
            trie.insert(word);
        }
        let words: Vec<String> = trie.completions("").collect();
        assert_eq!(words.len(), 6);
        let position = |w: &str| words.iter().position(|x| x == w).unwrap();
        assert!(position("a") < position("ab"));
        assert!(position("ab") < position("abc"));
        assert!(position("a") < position("ac"));
        assert!(position("b") < position("bd"));
    }

    #[test]
    fn subtrees_are_not_interleaved() {
        let mut trie = Trie::new();
        for word in ["ab", "abc", "abd", "ax", "axy"] {
            trie.insert(word);
        }
        let words: Vec<String> = trie.completions("a").collect();
        let ab_block: Vec<bool> = words.iter().map(|w| w.starts_with("ab")).collect();
        // All "ab" words are contiguous in a depth-first order.
        let first = ab_block.iter().position(|&b| b).unwrap();
        let last = ab_block.iter().rposition(|&b| b).unwrap();
        assert!(ab_block[first..=last].iter().all(|&b| b));
    }

    #[test]
    fn multibyte_characters_are_popped_whole() {
        let mut trie = Trie::new();
        for word in ["नम", "नमक", "नमस्ते", "नल"] {
            trie.insert(word);
        }
        let mut words: Vec<String> = trie.completions("न").collect();
        words.sort();
        let mut expected = vec!["नम", "नमक", "नमस्ते", "नल"];
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut trie = Trie::new();
        trie.insert("dog");
        let mut it = trie.completions("do");
        assert_eq!(it.next().as_deref(), Some("dog"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
