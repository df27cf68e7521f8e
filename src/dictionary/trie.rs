//! Mutable, pointer-linked trie.
//!
//! The trie owns a single root [`TrieNode`]; every node owns its children.
//! Words are added one at a time with [`Trie::insert`]. Once the word list
//! is complete, [`Trie::flattened`] produces a read-only
//! [`FlatTrie`](super::flat_trie::FlatTrie) answering the same queries.
//!
//! ## Performance Characteristics
//!
//! - **Insert**: O(m log k), m = word length, k = children per node
//! - **Find**: O(m log k)
//! - **Complete**: proportional to the size of the prefix's subtree
//! - **Memory**: one heap-backed child vector per node

use super::char_unit::CharUnit;
use super::flat_trie::FlatTrie;
use super::flatten::Flattener;
use super::node::TrieNode;
use super::DictionarySearch;

/// A mutable trie dictionary.
///
/// `U` is the letter type; the default stores UTF-16 code units.
///
/// # Example
///
/// ```
/// use lexitrie::prelude::*;
///
/// let mut trie: Trie = Trie::new();
/// trie.insert("THE");
/// trie.insert("THEM");
///
/// assert_eq!(trie.find("TH"), MatchKind::Partial);
/// assert_eq!(trie.find("THE"), MatchKind::Exact);
/// assert_eq!(trie.find("X"), MatchKind::None);
/// ```
#[derive(Clone, Debug)]
pub struct Trie<U: CharUnit = u16> {
    root: TrieNode<U>,
    /// Nodes including the root.
    node_count: usize,
    /// Number of distinct words inserted.
    term_count: usize,
}

impl<U: CharUnit> Trie<U> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            node_count: 1,
            term_count: 0,
        }
    }

    /// Create a trie from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(terms);
        trie
    }

    /// Reset to a lone root, releasing every other node.
    pub fn clear(&mut self) {
        self.root.reset();
        self.node_count = 1;
        self.term_count = 0;
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0 && !self.root.is_word()
    }

    /// Insert a word.
    ///
    /// Returns `true` if the word was not already present. The empty word
    /// is ignored and returns `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for unit in U::iter_str(word) {
            if node.child_for(unit).is_none() {
                self.node_count += 1;
            }
            node = node.ensure_child(unit);
        }

        if node.mark_word() {
            self.term_count += 1;
            true
        } else {
            false
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Bytes used by the node graph. Diagnostic only.
    pub fn size(&self) -> usize {
        self.root.subtree_bytes()
    }

    /// Borrow the root node.
    pub fn root_node(&self) -> &TrieNode<U> {
        &self.root
    }

    /// Produce the equivalent flat trie.
    ///
    /// The trie is left untouched and may be dropped afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the trie holds more nodes than the flat link encoding can
    /// address (2^31 - 1).
    pub fn flattened(&self) -> FlatTrie<U> {
        Flattener::new(self).flatten()
    }
}

impl<U: CharUnit> Default for Trie<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: CharUnit, S: AsRef<str>> Extend<S> for Trie<U> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, terms: I) {
        for term in terms {
            self.insert(term.as_ref());
        }
    }
}

impl<U: CharUnit, S: AsRef<str>> FromIterator<S> for Trie<U> {
    fn from_iter<I: IntoIterator<Item = S>>(terms: I) -> Self {
        Self::from_terms(terms)
    }
}

impl<U: CharUnit> DictionarySearch for Trie<U> {
    type Unit = U;
    type Node<'a> = &'a TrieNode<U>;

    fn root(&self) -> Option<Self::Node<'_>> {
        if self.is_empty() {
            None
        } else {
            Some(&self.root)
        }
    }

    fn is_empty(&self) -> bool {
        Trie::is_empty(self)
    }

    fn node_count(&self) -> usize {
        Trie::node_count(self)
    }

    fn size(&self) -> usize {
        Trie::size(self)
    }
}

impl<U: CharUnit> From<&Trie<U>> for FlatTrie<U> {
    fn from(trie: &Trie<U>) -> Self {
        trie.flattened()
    }
}
