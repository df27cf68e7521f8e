//! # lexitrie
//!
//! Word dictionaries for exact and prefix lookup, in two engines:
//!
//! - [`Trie`](dictionary::trie::Trie): a mutable trie of owned nodes, built
//!   one word at a time.
//! - [`FlatTrie`](dictionary::flat_trie::FlatTrie): the same dictionary
//!   flattened into two parallel arrays. Immutable, compact, and safe to
//!   share between threads without locking.
//!
//! Both answer `find` (exact / partial / no match) and `complete` (all
//! words with a prefix) identically through the
//! [`DictionarySearch`](dictionary::DictionarySearch) trait.
//!
//! ## Example
//!
//! ```rust
//! use lexitrie::prelude::*;
//!
//! let mut trie: Trie = Trie::new();
//! for word in ["THE", "THEM", "THEN", "A"] {
//!     trie.insert(word);
//! }
//!
//! let flat = trie.flattened();
//! assert_eq!(flat.node_count(), trie.node_count());
//! assert_eq!(flat.find("THE"), MatchKind::Exact);
//! assert_eq!(flat.find("TH"), MatchKind::Partial);
//! assert_eq!(flat.find("X"), MatchKind::None);
//! assert_eq!(flat.complete("THE"), vec!["THE", "THEM", "THEN"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod wordlist;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::char_unit::CharUnit;
    pub use crate::dictionary::factory::{
        DictionaryBackend, DictionaryContainer, DictionaryFactory,
    };
    pub use crate::dictionary::flat_trie::{FlatTrie, FlatTrieNode};
    pub use crate::dictionary::iterator::Completions;
    pub use crate::dictionary::node::TrieNode;
    pub use crate::dictionary::trie::Trie;
    pub use crate::dictionary::{DictionaryNode, DictionarySearch, MatchKind, SyncStrategy};
    pub use crate::wordlist::{CaseFold, WordListError, WordListOptions};
}
