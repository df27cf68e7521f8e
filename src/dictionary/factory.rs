//! Dictionary factory for choosing an engine at runtime.
//!
//! This module provides a unified interface for building either engine from
//! a word list, for callers (such as the CLI) that pick the engine from
//! configuration.
//!
//! # Example
//!
//! ```
//! use lexitrie::dictionary::factory::{DictionaryBackend, DictionaryFactory};
//! use lexitrie::dictionary::MatchKind;
//!
//! let dict = DictionaryFactory::create(DictionaryBackend::Flat, ["test", "testing"]);
//!
//! assert_eq!(dict.find("test"), MatchKind::Exact);
//! assert_eq!(dict.len(), 2);
//! ```

use super::flat_trie::FlatTrie;
use super::trie::Trie;
use super::{DictionarySearch, MatchKind, SyncStrategy};

/// Dictionary engine types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DictionaryBackend {
    /// Mutable pointer-linked trie
    Trie,
    /// Flattened, read-only array trie
    #[default]
    Flat,
}

impl std::fmt::Display for DictionaryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryBackend::Trie => write!(f, "Trie"),
            DictionaryBackend::Flat => write!(f, "FlatTrie"),
        }
    }
}

/// Unified dictionary container that can hold either engine
#[derive(Debug, Clone)]
pub enum DictionaryContainer {
    /// Mutable trie
    Trie(Trie),
    /// Flat trie
    Flat(FlatTrie),
}

impl DictionaryContainer {
    /// Get the backend type of this container
    pub fn backend(&self) -> DictionaryBackend {
        match self {
            DictionaryContainer::Trie(_) => DictionaryBackend::Trie,
            DictionaryContainer::Flat(_) => DictionaryBackend::Flat,
        }
    }

    /// Get the number of stored words
    pub fn len(&self) -> usize {
        match self {
            DictionaryContainer::Trie(d) => d.len(),
            DictionaryContainer::Flat(d) => d.word_count(),
        }
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        match self {
            DictionaryContainer::Trie(d) => d.is_empty(),
            DictionaryContainer::Flat(d) => d.is_empty(),
        }
    }

    /// Number of nodes in the engine
    pub fn node_count(&self) -> usize {
        match self {
            DictionaryContainer::Trie(d) => d.node_count(),
            DictionaryContainer::Flat(d) => d.node_count(),
        }
    }

    /// Memory footprint of the engine in bytes
    pub fn size(&self) -> usize {
        match self {
            DictionaryContainer::Trie(d) => d.size(),
            DictionaryContainer::Flat(d) => d.size(),
        }
    }

    /// Match a word against the dictionary
    pub fn find(&self, word: &str) -> MatchKind {
        match self {
            DictionaryContainer::Trie(d) => d.find(word),
            DictionaryContainer::Flat(d) => d.find(word),
        }
    }

    /// Collect the stored words starting with `prefix`
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        match self {
            DictionaryContainer::Trie(d) => d.complete(prefix),
            DictionaryContainer::Flat(d) => d.complete(prefix),
        }
    }

    /// Collect at most `limit` words starting with `prefix`
    pub fn complete_limited(&self, prefix: &str, limit: usize) -> Vec<String> {
        match self {
            DictionaryContainer::Trie(d) => d.completions(prefix).take(limit).collect(),
            DictionaryContainer::Flat(d) => d.completions(prefix).take(limit).collect(),
        }
    }

    /// Synchronization strategy of the held engine
    pub fn sync_strategy(&self) -> SyncStrategy {
        match self {
            DictionaryContainer::Trie(d) => d.sync_strategy(),
            DictionaryContainer::Flat(d) => d.sync_strategy(),
        }
    }
}

impl From<Trie> for DictionaryContainer {
    fn from(trie: Trie) -> Self {
        DictionaryContainer::Trie(trie)
    }
}

impl From<FlatTrie> for DictionaryContainer {
    fn from(flat: FlatTrie) -> Self {
        DictionaryContainer::Flat(flat)
    }
}

/// Factory for creating dictionaries with different engines
pub struct DictionaryFactory;

impl DictionaryFactory {
    /// Create a dictionary with the specified engine
    ///
    /// # Arguments
    ///
    /// * `backend` - The engine to build
    /// * `terms` - Iterator of terms to insert into the dictionary
    pub fn create<I, S>(backend: DictionaryBackend, terms: I) -> DictionaryContainer
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_trie(backend, Trie::from_terms(terms))
    }

    /// Convert an already built trie into the specified engine
    ///
    /// The flat engine drops the trie once flattening completes.
    pub fn from_trie(backend: DictionaryBackend, trie: Trie) -> DictionaryContainer {
        match backend {
            DictionaryBackend::Trie => DictionaryContainer::Trie(trie),
            DictionaryBackend::Flat => DictionaryContainer::Flat(trie.flattened()),
        }
    }

    /// Create an empty dictionary with the specified engine
    pub fn empty(backend: DictionaryBackend) -> DictionaryContainer {
        Self::from_trie(backend, Trie::new())
    }
}
