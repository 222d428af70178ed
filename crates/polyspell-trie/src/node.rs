// Trie node: one character position in the dictionary automaton

#[cfg(not(feature = "ordered"))]
pub(crate) type Children = hashbrown::HashMap<char, TrieNode>;
#[cfg(not(feature = "ordered"))]
pub(crate) type ChildIter<'a> = hashbrown::hash_map::Iter<'a, char, TrieNode>;

#[cfg(feature = "ordered")]
pub(crate) type Children = std::collections::BTreeMap<char, TrieNode>;
#[cfg(feature = "ordered")]
pub(crate) type ChildIter<'a> = std::collections::btree_map::Iter<'a, char, TrieNode>;

/// A node of the trie.
///
/// Each node owns its children directly; the root owns the whole tree.
/// `terminal` is independent of `children`: a word may be a strict prefix of
/// longer words.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: Children,
    terminal: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the path from the root to this node spells a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Number of distinct characters that follow this prefix.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child edges in the map's enumeration order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    pub(crate) fn child_iter(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Marks the node terminal. Returns `true` if it was not terminal before.
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Follows `path` character by character, stopping at the first
    /// missing edge.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert_eq!(node.child_count(), 0);
        assert!(node.child('a').is_none());
    }

    #[test]
    fn child_or_insert_reuses_existing_child() {
        let mut node = TrieNode::new();
        node.child_or_insert('a').mark_terminal();
        node.child_or_insert('a');
        assert_eq!(node.child_count(), 1);
        assert!(node.child('a').is_some_and(TrieNode::is_terminal));
    }

    #[test]
    fn children_lists_every_edge() {
        let mut node = TrieNode::new();
        node.child_or_insert('b');
        node.child_or_insert('a').mark_terminal();
        let mut edges: Vec<(char, bool)> = node
            .children()
            .map(|(c, child)| (c, child.is_terminal()))
            .collect();
        edges.sort();
        assert_eq!(edges, [('a', true), ('b', false)]);
    }

    #[test]
    fn mark_terminal_reports_first_marking_only() {
        let mut node = TrieNode::new();
        assert!(node.mark_terminal());
        assert!(!node.mark_terminal());
        assert!(node.is_terminal());
    }

    #[test]
    fn descend_stops_at_missing_edge() {
        let mut root = TrieNode::new();
        root.child_or_insert('a').child_or_insert('b');
        assert!(root.descend("ab").is_some());
        assert!(root.descend("").is_some());
        assert!(root.descend("ac").is_none());
        assert!(root.descend("abc").is_none());
    }
}
