//! Letter code abstraction for trie edges.
//!
//! This module provides the [`CharUnit`] trait, which abstracts over the
//! fixed-width code a trie node stores as its letter. The choice of unit
//! decides how a `&str` is split into trie edges:
//!
//! - [`u16`] (default): UTF-16 code units, 2 bytes per letter.
//! - [`u8`]: UTF-8 bytes, the most compact letter array.
//! - [`char`]: Unicode scalar values, 4 bytes per letter.
//!
//! Children and completions are ordered by raw unit value. No collation or
//! locale rules are applied.
//!
//! # Example
//!
//! ```
//! use lexitrie::dictionary::char_unit::CharUnit;
//!
//! let units = <u16 as CharUnit>::from_str("THE");
//! assert_eq!(units, vec![b'T' as u16, b'H' as u16, b'E' as u16]);
//! assert_eq!(<u16 as CharUnit>::to_string(&units), "THE");
//! ```

/// Trait abstracting the letter type stored in trie nodes.
///
/// `Default` supplies the sentinel letter held by the root node, and `Ord`
/// keeps sibling runs sorted so traversal order is deterministic.
pub trait CharUnit:
    Copy
    + Clone
    + Eq
    + PartialEq
    + Ord
    + Default
    + std::hash::Hash
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Split a word into the letters a trie stores for it, first to last.
    fn from_str(s: &str) -> Vec<Self>;

    /// Rebuild a word from the letters on a root-to-node path.
    ///
    /// Completion only decodes paths that end at a stored word, so byte
    /// sequences and surrogate pairs arrive whole. A cut-off path decodes
    /// its broken tail as U+FFFD.
    fn to_string(units: &[Self]) -> String;

    /// Letters of a word, one per edge, for walking a trie without
    /// collecting them first.
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_>;
}

/// UTF-8 bytes as letters.
///
/// The smallest flat letter array; a non-ASCII character spans several
/// nodes.
impl CharUnit for u8 {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    #[inline]
    fn to_string(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }

    #[inline]
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.bytes())
    }
}

/// UTF-16 letters, the default width.
///
/// Characters outside the Basic Multilingual Plane occupy two nodes (a
/// surrogate pair). Whole words still decode losslessly because completion
/// rebuilds complete paths before decoding.
impl CharUnit for u16 {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.encode_utf16().collect()
    }

    #[inline]
    fn to_string(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }

    #[inline]
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.encode_utf16())
    }
}

/// Unicode scalar values as letters: one node per character, 4 bytes each
/// in the flat letter array.
impl CharUnit for char {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    #[inline]
    fn to_string(units: &[Self]) -> String {
        units.iter().collect()
    }

    #[inline]
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.chars())
    }
}
