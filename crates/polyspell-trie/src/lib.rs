//! Character prefix trie for dictionary lookup.
//!
//! - [`node`] -- trie node with owned children keyed by `char`
//! - [`trie`] -- insertion, membership and bounded suggestion
//! - [`completions`] -- lazy depth-first enumeration of completions
//!
//! Child enumeration order is unspecified with the default hash map. Enable
//! the `ordered` feature to store children in a `BTreeMap` and get
//! suggestions in code point order.

pub mod completions;
pub mod node;
pub mod trie;

pub use completions::Completions;
pub use node::TrieNode;
pub use trie::Trie;
