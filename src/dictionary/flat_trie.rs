//! Immutable, array-based trie.
//!
//! A `FlatTrie` stores the node graph of a [`Trie`](super::trie::Trie) as
//! two parallel arrays, letters and links, laid out by the
//! [flattener](super::flatten). Queries run on index arithmetic alone: the
//! children of node `i` are the contiguous run
//! `first_child(i)..first_child(i + 1)`.
//!
//! ## Performance Characteristics
//!
//! - **Memory**: `size_of::<U>() + 4` bytes per node, no per-node allocation
//! - **Find**: O(m × k), a linear scan of each k-letter child run
//! - **Cache locality**: siblings are adjacent in both arrays
//! - **Thread-safety**: never mutated after construction, so shared reads
//!   need no synchronization
//!
//! ## Malformed input
//!
//! [`FlatTrie::from_parts`] accepts any pair of arrays but only searches a
//! pair that describes a tree: equal non-zero lengths, `first_child(0) == 1`,
//! `i < first_child(i) <= len` for every node, and first-child values that
//! never decrease. Those rules make the child runs disjoint, so every node
//! has exactly one parent. Any other pair is treated as empty.

use std::ops::Range;

use super::char_unit::CharUnit;
use super::flatten::unpack_link;
use super::{DictionaryNode, DictionarySearch, SyncStrategy};

/// A read-only trie stored as two parallel arrays.
///
/// # Example
///
/// ```
/// use lexitrie::prelude::*;
///
/// let trie: Trie = Trie::from_terms(["apple", "apply", "ape"]);
/// let flat = trie.flattened();
/// drop(trie);
///
/// assert_eq!(flat.find("ap"), MatchKind::Partial);
/// assert_eq!(flat.complete("app"), vec!["apple", "apply"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatTrie<U: CharUnit = u16> {
    /// One letter per node, root first.
    letters: Vec<U>,
    /// One packed (first child, word flag) link per node.
    links: Vec<u32>,
    /// The arrays passed the layout check in `from_parts`.
    well_formed: bool,
}

impl<U: CharUnit> FlatTrie<U> {
    /// Create an empty flat trie.
    pub fn new() -> Self {
        FlatTrie {
            letters: Vec::new(),
            links: Vec::new(),
            well_formed: false,
        }
    }

    /// Wrap a links/letters pair.
    ///
    /// The pair is kept as is. If it does not describe a tree (see the
    /// module docs) the trie reports [`is_empty`](Self::is_empty).
    pub fn from_parts(links: Vec<u32>, letters: Vec<U>) -> Self {
        let well_formed = letters.len() == links.len() && is_tree_layout(&links);
        FlatTrie {
            letters,
            links,
            well_formed,
        }
    }

    /// Give back the links/letters pair.
    pub fn into_parts(self) -> (Vec<u32>, Vec<U>) {
        (self.links, self.letters)
    }

    /// The packed link array.
    #[inline]
    pub fn links(&self) -> &[u32] {
        &self.links
    }

    /// The letter array.
    #[inline]
    pub fn letters(&self) -> &[U] {
        &self.letters
    }

    /// True if the arrays are empty, differ in length, or do not describe
    /// a tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.well_formed
    }

    /// Number of nodes, or 0 if the trie is empty.
    pub fn node_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.links.len()
        }
    }

    /// Bytes held by both arrays, or 0 if the trie is empty.
    pub fn size(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            std::mem::size_of::<U>() * self.letters.len()
                + std::mem::size_of::<u32>() * self.links.len()
        }
    }

    /// Number of stored words.
    ///
    /// Counts word flags, so this is O(n) in the node count.
    pub fn word_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.links.iter().filter(|&&link| unpack_link(link).1).count()
    }

    /// Release both arrays.
    pub fn clear(&mut self) {
        *self = FlatTrie::new();
    }

    /// Cursor at the root node, or `None` if the trie is empty.
    pub fn root_node(&self) -> Option<FlatTrieNode<'_, U>> {
        if self.is_empty() {
            None
        } else {
            Some(FlatTrieNode {
                trie: self,
                index: 0,
            })
        }
    }

    /// Child run of node `index`.
    ///
    /// Only called on a well-formed trie, where runs are in bounds.
    fn child_run(&self, index: usize) -> Range<usize> {
        let (start, _) = unpack_link(self.links[index]);
        let end = match self.links.get(index + 1) {
            Some(&next) => unpack_link(next).0,
            None => self.links.len(),
        };
        start..end
    }

    #[inline]
    fn is_word_at(&self, index: usize) -> bool {
        unpack_link(self.links[index]).1
    }
}

/// Check that `links` lays out a tree in level order.
fn is_tree_layout(links: &[u32]) -> bool {
    let len = links.len();
    if len == 0 || unpack_link(links[0]).0 != 1 {
        return false;
    }

    let mut previous = 0;
    for (index, &link) in links.iter().enumerate() {
        let (first, _) = unpack_link(link);
        if first <= index || first > len || first < previous {
            return false;
        }
        previous = first;
    }
    true
}

impl<U: CharUnit> DictionarySearch for FlatTrie<U> {
    type Unit = U;
    type Node<'a> = FlatTrieNode<'a, U>;

    fn root(&self) -> Option<Self::Node<'_>> {
        self.root_node()
    }

    fn is_empty(&self) -> bool {
        FlatTrie::is_empty(self)
    }

    fn node_count(&self) -> usize {
        FlatTrie::node_count(self)
    }

    fn size(&self) -> usize {
        FlatTrie::size(self)
    }

    fn sync_strategy(&self) -> SyncStrategy {
        SyncStrategy::Persistent
    }
}

/// Cursor into a [`FlatTrie`]: a node index plus the arrays it indexes.
#[derive(Clone, Copy, Debug)]
pub struct FlatTrieNode<'a, U: CharUnit> {
    trie: &'a FlatTrie<U>,
    index: usize,
}

impl<'a, U: CharUnit> FlatTrieNode<'a, U> {
    /// Position of this node in the arrays.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The letter on the edge into this node.
    #[inline]
    pub fn letter(&self) -> U {
        self.trie.letters[self.index]
    }

    /// Indices of this node's children.
    #[inline]
    pub fn children_range(&self) -> Range<usize> {
        self.trie.child_run(self.index)
    }

    fn at(&self, index: usize) -> Self {
        FlatTrieNode {
            trie: self.trie,
            index,
        }
    }
}

impl<'a, U: CharUnit> DictionaryNode for FlatTrieNode<'a, U> {
    type Unit = U;

    #[inline]
    fn is_final(&self) -> bool {
        self.trie.is_word_at(self.index)
    }

    fn transition(&self, label: U) -> Option<Self> {
        let run = self.children_range();
        let offset = self.trie.letters[run.clone()]
            .iter()
            .position(|&letter| letter == label)?;
        Some(self.at(run.start + offset))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (U, Self)> + '_> {
        let node = *self;
        Box::new(
            self.children_range()
                .map(move |index| (node.trie.letters[index], node.at(index))),
        )
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.children_range().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::flatten::pack_link;
    use crate::dictionary::trie::Trie;
    use crate::dictionary::MatchKind;

    fn scenario() -> (Trie, FlatTrie) {
        let trie: Trie = Trie::from_terms(["THE", "THEM", "THEN", "A"]);
        let flat = trie.flattened();
        (trie, flat)
    }

    #[test]
    fn test_empty_flat_trie() {
        let flat: FlatTrie = FlatTrie::new();
        assert!(flat.is_empty());
        assert_eq!(flat.node_count(), 0);
        assert_eq!(flat.size(), 0);
        assert_eq!(flat.word_count(), 0);
        assert_eq!(flat.find("a"), MatchKind::None);
        assert!(flat.complete("").is_empty());
    }

    #[test]
    fn test_mismatched_arrays_are_empty() {
        let flat: FlatTrie<u8> = FlatTrie::from_parts(vec![pack_link(1, false)], vec![0, b'a']);
        assert!(flat.is_empty());
        assert_eq!(flat.node_count(), 0);
        assert_eq!(flat.size(), 0);
        assert_eq!(flat.find("a"), MatchKind::None);
    }

    #[test]
    fn test_find_scenario() {
        let (_, flat) = scenario();
        assert_eq!(flat.find("THE"), MatchKind::Exact);
        assert_eq!(flat.find("THEM"), MatchKind::Exact);
        assert_eq!(flat.find("TH"), MatchKind::Partial);
        assert_eq!(flat.find("X"), MatchKind::None);
        assert_eq!(flat.find("AT"), MatchKind::None);
    }

    #[test]
    fn test_complete_matches_trie() {
        let (trie, flat) = scenario();
        assert_eq!(flat.complete("THE"), trie.complete("THE"));
        assert_eq!(flat.complete(""), vec!["A", "THE", "THEM", "THEN"]);
        assert!(flat.complete("Z").is_empty());
    }

    #[test]
    fn test_size_and_counts() {
        let (trie, flat) = scenario();
        assert_eq!(flat.node_count(), trie.node_count());
        assert_eq!(flat.size(), 7 * 2 + 7 * 4);
        assert_eq!(flat.word_count(), 4);
    }

    #[test]
    fn test_clear() {
        let (_, mut flat) = scenario();
        flat.clear();
        assert!(flat.is_empty());
        assert_eq!(flat.find("THE"), MatchKind::None);
    }

    #[test]
    fn test_parts_roundtrip() {
        let (_, flat) = scenario();
        let (links, letters) = flat.clone().into_parts();
        let rebuilt = FlatTrie::from_parts(links, letters);
        assert_eq!(rebuilt, flat);
        assert_eq!(rebuilt.find("THEN"), MatchKind::Exact);
    }

    #[test]
    fn test_hand_built_arrays() {
        // root -> 'o' -> 'n'(word), 'x'(word)
        let letters = vec![0u8, b'o', b'n', b'x'];
        let links = vec![
            pack_link(1, false),
            pack_link(2, false),
            pack_link(4, true),
            pack_link(4, true),
        ];
        let flat = FlatTrie::from_parts(links, letters);
        assert_eq!(flat.find("on"), MatchKind::Exact);
        assert_eq!(flat.find("ox"), MatchKind::Exact);
        assert_eq!(flat.find("o"), MatchKind::Partial);
        assert_eq!(flat.complete("o"), vec!["on", "ox"]);
    }

    #[test]
    fn test_out_of_range_links_are_empty() {
        // Root claims children far past the end of the arrays
        let letters = vec![0u8, b'a'];
        let links = vec![pack_link(900, false), pack_link(5, true)];
        let flat = FlatTrie::from_parts(links, letters);
        assert!(flat.is_empty());
        assert_eq!(flat.node_count(), 0);
        assert_eq!(flat.find("a"), MatchKind::None);
        assert!(flat.complete("").is_empty());
    }

    #[test]
    fn test_backward_links_are_empty() {
        // Node 1 points back at the root
        let letters = vec![0u8, b'a', b'b'];
        let links = vec![pack_link(1, false), pack_link(0, true), pack_link(3, true)];
        let flat = FlatTrie::from_parts(links, letters);
        assert!(flat.is_empty());
        assert!(flat.complete("").is_empty());
    }

    #[test]
    fn test_overlapping_runs_are_empty() {
        // Shared child runs would reach nodes by several paths and yield
        // more words than nodes
        let letters = vec![0u8, b'a', b'b', b'c', b'd', b'e'];
        let links: Vec<u32> = [0, 6, 0, 4, 5, 6]
            .iter()
            .map(|&first| pack_link(first, true))
            .collect();
        let flat = FlatTrie::from_parts(links, letters);
        assert!(flat.is_empty());
        assert_eq!(flat.word_count(), 0);
        assert!(flat.complete("").is_empty());
    }

    #[test]
    fn test_decreasing_links_are_empty() {
        // root -> a, b; a's run would start after b's
        let letters = vec![0u8, b'a', b'b', b'x', b'y'];
        let links = vec![
            pack_link(1, false),
            pack_link(4, false),
            pack_link(3, false),
            pack_link(5, true),
            pack_link(5, true),
        ];
        let flat = FlatTrie::from_parts(links, letters);
        assert!(flat.is_empty());
    }

    #[test]
    fn test_lone_root_layout() {
        let flat: FlatTrie<u8> = FlatTrie::from_parts(vec![pack_link(1, false)], vec![0]);
        assert!(!flat.is_empty());
        assert_eq!(flat.node_count(), 1);
        assert_eq!(flat.find(""), MatchKind::Partial);
        assert!(flat.complete("").is_empty());
    }

    #[test]
    fn test_flattened_output_is_well_formed() {
        let (_, flat) = scenario();
        let (links, letters) = flat.into_parts();
        assert!(is_tree_layout(&links));
        assert!(!FlatTrie::from_parts(links, letters).is_empty());
    }

    #[test]
    fn test_node_cursor() {
        let (_, flat) = scenario();
        let root = flat.root_node().expect("non-empty trie has a root");
        assert_eq!(root.index(), 0);
        assert_eq!(root.edge_count(), 2);

        let t = root.transition(b'T' as u16).expect("'T' should exist");
        assert_eq!(t.letter(), b'T' as u16);
        assert!(!t.is_final());

        let labels: Vec<u16> = root.edges().map(|(label, _)| label).collect();
        assert_eq!(labels, vec![b'A' as u16, b'T' as u16]);
    }
}
