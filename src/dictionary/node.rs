//! Mutable trie node.
//!
//! Every node owns its children outright. Siblings are kept sorted by
//! letter, so lookup is a binary search and traversal order is fixed.
//!
//! A single long word builds a chain as deep as the word is long, so
//! dropping, cloning and comparing nodes walk the tree with an explicit
//! stack instead of recursing.

use super::char_unit::CharUnit;
use super::DictionaryNode;

/// One letter position in a [`Trie`](super::trie::Trie).
///
/// The root node carries `U::default()` as its letter and is never a word.
pub struct TrieNode<U: CharUnit> {
    letter: U,
    /// Owned children, sorted by letter, at most one per letter.
    children: Vec<TrieNode<U>>,
    is_word: bool,
}

impl<U: CharUnit> TrieNode<U> {
    /// Create a node for `letter` with no children.
    pub fn new(letter: U) -> Self {
        TrieNode {
            letter,
            children: Vec::new(),
            is_word: false,
        }
    }

    /// Create a root node.
    pub fn root() -> Self {
        Self::new(U::default())
    }

    /// The letter this node represents.
    #[inline]
    pub fn letter(&self) -> U {
        self.letter
    }

    /// True if the path from the root to this node spells an inserted word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Children in ascending letter order.
    #[inline]
    pub fn children(&self) -> &[TrieNode<U>] {
        &self.children
    }

    /// Number of direct children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Look up the child for `letter`.
    pub fn child_for(&self, letter: U) -> Option<&TrieNode<U>> {
        self.children
            .binary_search_by_key(&letter, |child| child.letter)
            .ok()
            .map(|pos| &self.children[pos])
    }

    /// Return the child for `letter`, creating it if it does not exist.
    ///
    /// A newly created child is not a word.
    pub fn ensure_child(&mut self, letter: U) -> &mut TrieNode<U> {
        let pos = match self
            .children
            .binary_search_by_key(&letter, |child| child.letter)
        {
            Ok(pos) => pos,
            Err(pos) => {
                self.children.insert(pos, TrieNode::new(letter));
                pos
            }
        };
        &mut self.children[pos]
    }

    /// Mark this node as the end of a word.
    ///
    /// Returns `true` if the node was not already marked.
    pub fn mark_word(&mut self) -> bool {
        let newly_marked = !self.is_word;
        self.is_word = true;
        newly_marked
    }

    /// Count this node and all of its descendants.
    pub fn subtree_node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Bytes held by this node and the child buffers beneath it.
    pub fn subtree_bytes(&self) -> usize {
        let node_size = std::mem::size_of::<TrieNode<U>>();
        let mut bytes = node_size;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            bytes += node.children.capacity() * node_size;
            stack.extend(node.children.iter());
        }
        bytes
    }

    /// Drop all children and the word mark.
    pub(crate) fn reset(&mut self) {
        release(std::mem::take(&mut self.children));
        self.is_word = false;
    }

    /// Copy of this node with room for, but none of, its children.
    fn detached(&self) -> Self {
        TrieNode {
            letter: self.letter,
            children: Vec::with_capacity(self.children.len()),
            is_word: self.is_word,
        }
    }
}

/// Free a list of subtrees one node at a time.
fn release<U: CharUnit>(mut pending: Vec<TrieNode<U>>) {
    while let Some(mut node) = pending.pop() {
        pending.append(&mut node.children);
    }
}

impl<U: CharUnit> Drop for TrieNode<U> {
    fn drop(&mut self) {
        release(std::mem::take(&mut self.children));
    }
}

struct CloneFrame<'a, U: CharUnit> {
    source: &'a TrieNode<U>,
    next: usize,
    copy: TrieNode<U>,
}

impl<U: CharUnit> Clone for TrieNode<U> {
    fn clone(&self) -> Self {
        let mut result = TrieNode::new(self.letter);
        let mut stack = vec![CloneFrame {
            source: self,
            next: 0,
            copy: self.detached(),
        }];

        // Post-order: a copy joins its parent once all its children are in
        while let Some(mut frame) = stack.pop() {
            let source = frame.source;
            if let Some(child) = source.children.get(frame.next) {
                frame.next += 1;
                stack.push(frame);
                stack.push(CloneFrame {
                    source: child,
                    next: 0,
                    copy: child.detached(),
                });
            } else {
                match stack.last_mut() {
                    Some(parent) => parent.copy.children.push(frame.copy),
                    None => result = frame.copy,
                }
            }
        }

        result
    }
}

impl<U: CharUnit> PartialEq for TrieNode<U> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.letter != b.letter
                || a.is_word != b.is_word
                || a.children.len() != b.children.len()
            {
                return false;
            }
            pairs.extend(a.children.iter().zip(b.children.iter()));
        }
        true
    }
}

impl<U: CharUnit> Eq for TrieNode<U> {}

impl<U: CharUnit> std::fmt::Debug for TrieNode<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_word", &self.is_word)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<'a, U: CharUnit> DictionaryNode for &'a TrieNode<U> {
    type Unit = U;

    #[inline]
    fn is_final(&self) -> bool {
        self.is_word
    }

    #[inline]
    fn transition(&self, label: U) -> Option<Self> {
        let node: &'a TrieNode<U> = *self;
        node.child_for(label)
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (U, Self)> + '_> {
        let node: &'a TrieNode<U> = *self;
        Box::new(node.children.iter().map(|child| (child.letter, child)))
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_not_word() {
        let node: TrieNode<u16> = TrieNode::new(b'a' as u16);
        assert_eq!(node.letter(), b'a' as u16);
        assert!(!node.is_word());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_ensure_child_returns_same_node() {
        let mut root: TrieNode<char> = TrieNode::root();
        root.ensure_child('x').mark_word();

        let again = root.ensure_child('x');
        assert!(again.is_word());
        assert_eq!(root.child_count(), 1);
        assert!(root.child_for('x').is_some_and(|c| c.is_word()));
    }

    #[test]
    fn test_children_stay_sorted() {
        let mut root: TrieNode<char> = TrieNode::root();
        for letter in ['m', 'c', 'x', 'a', 'c'] {
            root.ensure_child(letter);
        }

        let letters: Vec<char> = root.children().iter().map(|c| c.letter()).collect();
        assert_eq!(letters, vec!['a', 'c', 'm', 'x']);
    }

    #[test]
    fn test_child_for_missing() {
        let mut root: TrieNode<u8> = TrieNode::root();
        root.ensure_child(b'a');
        assert!(root.child_for(b'b').is_none());
    }

    #[test]
    fn test_mark_word_idempotent() {
        let mut node: TrieNode<u8> = TrieNode::new(b'a');
        assert!(node.mark_word());
        assert!(!node.mark_word());
        assert!(node.is_word());
    }

    #[test]
    fn test_subtree_counts() {
        let mut root: TrieNode<u8> = TrieNode::root();
        root.ensure_child(b'a').ensure_child(b'b');
        root.ensure_child(b'c');

        assert_eq!(root.subtree_node_count(), 4);
        assert!(root.subtree_bytes() >= 4 * std::mem::size_of::<TrieNode<u8>>());
    }

    #[test]
    fn test_reset() {
        let mut root: TrieNode<u8> = TrieNode::root();
        root.ensure_child(b'a').mark_word();
        root.reset();
        assert_eq!(root.child_count(), 0);
        assert_eq!(root.subtree_node_count(), 1);
    }

    fn chain(len: usize) -> TrieNode<u8> {
        let mut root = TrieNode::root();
        let mut node = &mut root;
        for i in 0..len {
            node = node.ensure_child(b'a' + (i % 3) as u8);
        }
        node.mark_word();
        root
    }

    #[test]
    fn test_clone_and_eq() {
        let mut root: TrieNode<u8> = TrieNode::root();
        root.ensure_child(b'a').ensure_child(b'b').mark_word();
        root.ensure_child(b'c').mark_word();

        let copy = root.clone();
        assert_eq!(copy, root);
        assert_eq!(copy.subtree_node_count(), 4);
        assert!(copy.child_for(b'c').is_some_and(|c| c.is_word()));

        let mut changed = root.clone();
        changed.ensure_child(b'c').ensure_child(b'd');
        assert_ne!(changed, root);
    }

    #[test]
    fn test_deep_chain_clone_compare_drop() {
        let root = chain(100_000);
        let copy = root.clone();
        assert_eq!(copy, root);
        assert_eq!(copy.subtree_node_count(), 100_001);
        assert!(format!("{:?}", copy).contains("children: 1"));
        drop(copy);
        drop(root);
    }

    #[test]
    fn test_deep_chain_reset() {
        let mut root = chain(100_000);
        root.reset();
        assert_eq!(root.subtree_node_count(), 1);
    }

    #[test]
    fn test_dictionary_node_impl() {
        let mut root: TrieNode<u8> = TrieNode::root();
        root.ensure_child(b'a').ensure_child(b'b').mark_word();
        root.ensure_child(b'c');

        let cursor = &root;
        assert_eq!(cursor.edge_count(), 2);
        let labels: Vec<u8> = cursor.edges().map(|(label, _)| label).collect();
        assert_eq!(labels, vec![b'a', b'c']);

        let b = cursor
            .transition(b'a')
            .and_then(|a| a.transition(b'b'))
            .expect("path a-b should exist");
        assert!(b.is_final());
    }
}
