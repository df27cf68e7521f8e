//! Dictionary engines and the search capability they share.
//!
//! Two engines implement [`DictionarySearch`]:
//!
//! - [`Trie`](trie::Trie): mutable, pointer-linked nodes. Used to build the
//!   dictionary one word at a time.
//! - [`FlatTrie`](flat_trie::FlatTrie): immutable pair of parallel arrays
//!   produced by flattening a `Trie`. Used for repeated lookups.
//!
//! Callers that only read should depend on [`DictionarySearch`], not on a
//! concrete engine.

pub mod char_unit;
pub mod factory;
pub mod flat_trie;
pub mod flatten;
pub mod iterator;
pub mod node;
pub mod trie;

use self::char_unit::CharUnit;
use self::iterator::Completions;

/// Outcome of matching a query string against a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The query leaves the dictionary: some letter has no matching edge.
    None,
    /// The query is a path in the dictionary but not a stored word.
    Partial,
    /// The query is a stored word.
    Exact,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::None => write!(f, "none"),
            MatchKind::Partial => write!(f, "partial"),
            MatchKind::Exact => write!(f, "exact"),
        }
    }
}

/// Synchronization strategy for dictionary operations.
///
/// Different engines have different thread-safety guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Engine requires external synchronization (e.g., RwLock) when it is
    /// mutated while other threads read it.
    ExternalSync,

    /// Engine is immutable after construction.
    ///
    /// Reads require no synchronization.
    Persistent,
}

/// Traversable dictionary node.
///
/// Nodes form a tree whose edges are labeled with letters; final nodes
/// mark stored words.
pub trait DictionaryNode: Sized {
    /// Letter type labelling the edges.
    type Unit: CharUnit;

    /// Check if this node marks the end of a stored word
    fn is_final(&self) -> bool;

    /// Transition to a child node via the given letter
    ///
    /// Returns `None` if no such transition exists
    fn transition(&self, label: Self::Unit) -> Option<Self>;

    /// Iterate over all outgoing edges as (letter, child_node) pairs, in
    /// ascending letter order
    fn edges(&self) -> Box<dyn Iterator<Item = (Self::Unit, Self)> + '_>;

    /// Check if a specific edge exists
    fn has_edge(&self, label: Self::Unit) -> bool {
        self.transition(label).is_some()
    }

    /// Get the number of outgoing edges
    fn edge_count(&self) -> usize;
}

/// Search capability shared by [`Trie`](trie::Trie) and
/// [`FlatTrie`](flat_trie::FlatTrie).
///
/// Both engines answer every query identically; they differ only in memory
/// layout and in whether they can be mutated.
///
/// # Example
///
/// ```
/// use lexitrie::prelude::*;
///
/// let trie: Trie = Trie::from_terms(["THE", "THEM", "THEN", "A"]);
/// let flat = trie.flattened();
///
/// for word in ["THE", "TH", "X", ""] {
///     assert_eq!(trie.find(word), flat.find(word));
/// }
/// assert_eq!(flat.complete("THE"), vec!["THE", "THEM", "THEN"]);
/// ```
pub trait DictionarySearch {
    /// Letter type stored by the engine.
    type Unit: CharUnit;

    /// Cursor type used for traversal.
    type Node<'a>: DictionaryNode<Unit = Self::Unit>
    where
        Self: 'a;

    /// Get the root node, or `None` if the dictionary holds no words.
    fn root(&self) -> Option<Self::Node<'_>>;

    /// True if the dictionary holds no words.
    fn is_empty(&self) -> bool;

    /// Number of nodes, including the root.
    fn node_count(&self) -> usize;

    /// Approximate memory footprint in bytes. Diagnostic only.
    fn size(&self) -> usize;

    /// Follow `word` from the root and return the node it ends at.
    fn walk(&self, word: &str) -> Option<Self::Node<'_>> {
        let mut node = self.root()?;
        for unit in <Self::Unit as CharUnit>::iter_str(word) {
            node = node.transition(unit)?;
        }
        Some(node)
    }

    /// Match `word` against the dictionary.
    ///
    /// An existing path that is not itself a word is `Partial`, whether or
    /// not any word lies beyond it.
    fn find(&self, word: &str) -> MatchKind {
        match self.walk(word) {
            None => MatchKind::None,
            Some(node) if node.is_final() => MatchKind::Exact,
            Some(_) => MatchKind::Partial,
        }
    }

    /// Check if `word` is a stored word.
    fn contains(&self, word: &str) -> bool {
        self.find(word) == MatchKind::Exact
    }

    /// Lazily enumerate the stored words starting with `prefix`.
    ///
    /// Words come out depth-first in ascending letter order, which is
    /// lexicographic by code unit.
    fn completions(&self, prefix: &str) -> Completions<Self::Node<'_>> {
        match self.walk(prefix) {
            Some(node) => Completions::new(node, <Self::Unit as CharUnit>::from_str(prefix)),
            None => Completions::empty(),
        }
    }

    /// Collect every stored word starting with `prefix`.
    ///
    /// The empty prefix yields all words; an absent prefix yields none.
    fn complete(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// Get the synchronization strategy for this engine.
    ///
    /// Default: `ExternalSync` (conservative, always safe)
    fn sync_strategy(&self) -> SyncStrategy {
        SyncStrategy::ExternalSync
    }
}
