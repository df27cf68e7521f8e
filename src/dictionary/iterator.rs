//! Prefix completion iteration shared by every engine.
//!
//! [`Completions`] walks the subtree below a node depth-first and yields
//! each stored word it passes. It only needs [`DictionaryNode`], so the same
//! traversal drives both the pointer-linked trie and the flat arrays.
//!
//! The path buffer is shared between frames and rebuilt lazily: each frame
//! records the depth its letter sits at, and popping a frame truncates the
//! buffer back to that depth before pushing the frame's letter. No string is
//! built for nodes that are not words.

use super::char_unit::CharUnit;
use super::DictionaryNode;

struct Frame<N: DictionaryNode> {
    node: N,
    /// Path length before this node's letter is appended.
    depth: usize,
    /// Letter on the edge into this node; `None` for the starting node.
    label: Option<N::Unit>,
}

/// Iterator over the stored words below a node.
///
/// Words are produced in pre-order with children visited in ascending
/// letter order, so the output is sorted by code unit.
///
/// # Examples
///
/// ```
/// use lexitrie::prelude::*;
///
/// let trie: Trie = Trie::from_terms(["tea", "ten", "to"]);
/// let words: Vec<String> = trie.completions("te").collect();
/// assert_eq!(words, vec!["tea", "ten"]);
/// ```
pub struct Completions<N: DictionaryNode> {
    /// DFS traversal stack.
    stack: Vec<Frame<N>>,
    /// Letters from the root to the frame being visited.
    path: Vec<N::Unit>,
}

impl<N: DictionaryNode> Completions<N> {
    /// Create an iterator over the words at or below `start`.
    ///
    /// `prefix` holds the letters that lead from the root to `start`; every
    /// yielded word begins with it.
    pub fn new(start: N, prefix: Vec<N::Unit>) -> Self {
        let depth = prefix.len();
        // Capacity 16 covers typical word depths
        let mut stack = Vec::with_capacity(16);
        stack.push(Frame {
            node: start,
            depth,
            label: None,
        });
        Self {
            stack,
            path: prefix,
        }
    }

    /// Create an iterator that yields nothing.
    pub fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: Vec::new(),
        }
    }
}

impl<N: DictionaryNode> Iterator for Completions<N> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { node, depth, label }) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(label) = label {
                self.path.push(label);
            }

            // Children go on the stack reversed so the smallest letter is
            // visited first.
            let child_depth = self.path.len();
            let mark = self.stack.len();
            self.stack
                .extend(node.edges().map(|(unit, child)| Frame {
                    node: child,
                    depth: child_depth,
                    label: Some(unit),
                }));
            self.stack[mark..].reverse();

            if node.is_final() {
                return Some(<N::Unit as CharUnit>::to_string(&self.path));
            }
        }

        None
    }
}

impl<N: DictionaryNode> std::iter::FusedIterator for Completions<N> {}
