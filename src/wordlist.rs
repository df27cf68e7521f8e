//! Word-list loading.
//!
//! Reads newline-delimited UTF-8 word lists (one word per line) and cleans
//! each line before it reaches a dictionary. This layer sits outside the
//! dictionary engines, which never touch files or log anything themselves.
//!
//! # Format
//!
//! ```text
//! # fruit
//! apple
//!   banana
//!
//! cherry
//! ```
//!
//! With the default options, surrounding whitespace is trimmed and blank
//! lines are skipped. Case folding and comment lines are opt-in.
//!
//! # Example
//!
//! ```
//! use lexitrie::wordlist::{read_words, CaseFold, WordListOptions};
//!
//! let options = WordListOptions::new()
//!     .with_case(CaseFold::Upper)
//!     .with_comment_prefix('#');
//! let words = read_words("# header\n the\nthem \n\n".as_bytes(), &options)?;
//! assert_eq!(words, vec!["THE", "THEM"]);
//! # Ok::<(), lexitrie::wordlist::WordListError>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::dictionary::char_unit::CharUnit;
use crate::dictionary::trie::Trie;

/// Errors that can occur while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The word list file could not be opened.
    #[error("cannot open word list {}", .path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// A line could not be read, including lines that are not valid UTF-8.
    #[error("cannot read word list line {line}")]
    Read {
        /// 1-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Case conversion applied to each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CaseFold {
    /// Keep words as written
    #[default]
    Preserve,
    /// Convert to upper case
    Upper,
    /// Convert to lower case
    Lower,
}

impl CaseFold {
    /// Convert `text` to this case.
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseFold::Preserve => text.to_string(),
            CaseFold::Upper => text.to_uppercase(),
            CaseFold::Lower => text.to_lowercase(),
        }
    }
}

/// How raw lines are turned into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListOptions {
    /// Strip leading and trailing whitespace.
    pub trim: bool,
    /// Case conversion.
    pub case: CaseFold,
    /// Lines starting with this character (after trimming) are skipped.
    pub comment_prefix: Option<char>,
}

impl Default for WordListOptions {
    fn default() -> Self {
        WordListOptions {
            trim: true,
            case: CaseFold::Preserve,
            comment_prefix: None,
        }
    }
}

impl WordListOptions {
    /// Default options: trim, keep case, no comments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the case conversion.
    pub fn with_case(mut self, case: CaseFold) -> Self {
        self.case = case;
        self
    }

    /// Skip lines beginning with `prefix`.
    pub fn with_comment_prefix(mut self, prefix: char) -> Self {
        self.comment_prefix = Some(prefix);
        self
    }

    /// Clean one line, or return `None` if it holds no word.
    pub fn sanitize(&self, line: &str) -> Option<String> {
        let line = if self.trim { line.trim() } else { line };
        if line.is_empty() {
            return None;
        }
        if let Some(prefix) = self.comment_prefix {
            if line.starts_with(prefix) {
                return None;
            }
        }

        Some(self.case.apply(line))
    }
}

/// Read every word from `reader`.
///
/// # Errors
///
/// Returns [`WordListError::Read`] if a line cannot be read or is not UTF-8.
pub fn read_words<R: BufRead>(
    reader: R,
    options: &WordListOptions,
) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| WordListError::Read {
            line: index + 1,
            source,
        })?;
        match options.sanitize(&line) {
            Some(word) => words.push(word),
            None => {
                skipped += 1;
                tracing::trace!(line = index + 1, "skipped line without a word");
            }
        }
    }

    tracing::debug!(words = words.len(), skipped, "read word list");
    Ok(words)
}

/// Read every word from the file at `path`.
///
/// # Errors
///
/// Returns [`WordListError::Open`] if the file cannot be opened and
/// [`WordListError::Read`] if a line cannot be read.
pub fn load_words(
    path: impl AsRef<Path>,
    options: &WordListOptions,
) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordListError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let words = read_words(BufReader::new(file), options)?;
    tracing::debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Build a [`Trie`] from the word list at `path`.
///
/// # Errors
///
/// Same as [`load_words`].
pub fn load_trie<U: CharUnit>(
    path: impl AsRef<Path>,
    options: &WordListOptions,
) -> Result<Trie<U>, WordListError> {
    let path = path.as_ref();
    let words = load_words(path, options)?;
    let trie: Trie<U> = Trie::from_terms(&words);
    tracing::debug!(
        path = %path.display(),
        terms = trie.len(),
        duplicates = words.len() - trie.len(),
        nodes = trie.node_count(),
        "built trie from word list"
    );
    Ok(trie)
}
