//! Flattening a [`Trie`] into a [`FlatTrie`].
//!
//! ## Layout
//!
//! Nodes are numbered in level order (breadth-first), root first. Because
//! a breadth-first queue releases a node's children back to back, every
//! node's children end up in one contiguous run of indices, in ascending
//! letter order.
//!
//! Two parallel arrays are emitted, one entry per node:
//!
//! - **letters[i]**: the node's letter (the root holds `U::default()`)
//! - **links[i]**: the index where node `i`'s child run starts, with the
//!   top bit set when the node ends a word
//!
//! ```text
//! words: A, THE, THEM, THEN
//!
//! index    0    1    2    3    4    5    6
//! letter   -    A    T    H    E    M    N
//! first    1    3    3    4    5    7    7
//! word     .    *    .    .    *    *    *
//! ```
//!
//! The run of node `i` is `first(i)..first(i + 1)`, and the last node's run
//! ends at `links.len()`. A childless node stores the start of the next
//! run, so its run is empty and no sentinel value is needed.

use std::collections::VecDeque;

use super::char_unit::CharUnit;
use super::flat_trie::FlatTrie;
use super::node::TrieNode;
use super::trie::Trie;

/// Bit marking a link whose node ends a word.
pub const WORD_FLAG: u32 = 1 << 31;

/// Bits of a link holding the first-child index.
pub const CHILD_MASK: u32 = !WORD_FLAG;

/// Largest node count the link encoding can address.
pub const MAX_NODES: usize = CHILD_MASK as usize;

/// Pack a first-child index and a word flag into a link.
///
/// `first_child` must not exceed [`CHILD_MASK`].
#[inline]
pub fn pack_link(first_child: u32, is_word: bool) -> u32 {
    debug_assert!(first_child <= CHILD_MASK);
    if is_word {
        first_child | WORD_FLAG
    } else {
        first_child
    }
}

/// Split a link into its first-child index and word flag.
#[inline]
pub fn unpack_link(link: u32) -> (usize, bool) {
    ((link & CHILD_MASK) as usize, link & WORD_FLAG != 0)
}

/// Converts a [`Trie`] into a [`FlatTrie`] with identical query results.
///
/// The trie is only borrowed; the result shares nothing with it.
pub struct Flattener<'a, U: CharUnit> {
    root: &'a TrieNode<U>,
    node_count: usize,
    empty: bool,
}

impl<'a, U: CharUnit> Flattener<'a, U> {
    /// Prepare to flatten `trie`.
    pub fn new(trie: &'a Trie<U>) -> Self {
        Flattener {
            root: trie.root_node(),
            node_count: trie.node_count(),
            empty: trie.is_empty(),
        }
    }

    /// Run the breadth-first numbering and emit both arrays.
    ///
    /// An empty trie flattens to an empty `FlatTrie`: a lone root carries
    /// nothing searchable.
    ///
    /// # Panics
    ///
    /// Panics if the trie has more than [`MAX_NODES`] nodes.
    pub fn flatten(self) -> FlatTrie<U> {
        if self.empty {
            return FlatTrie::new();
        }

        assert!(
            self.node_count <= MAX_NODES,
            "trie has {} nodes, flat links address at most {}",
            self.node_count,
            MAX_NODES
        );

        let mut letters = Vec::with_capacity(self.node_count);
        let mut links = Vec::with_capacity(self.node_count);

        let mut queue = VecDeque::with_capacity(self.root.child_count() + 1);
        queue.push_back(self.root);

        // Index the next dequeued node's children will start at
        let mut next_run: usize = 1;

        while let Some(node) = queue.pop_front() {
            letters.push(node.letter());
            links.push(pack_link(next_run as u32, node.is_word()));

            next_run += node.child_count();
            queue.extend(node.children().iter());
        }

        debug_assert_eq!(letters.len(), self.node_count);
        debug_assert_eq!(next_run, letters.len());

        FlatTrie::from_parts(links, letters)
    }
}
