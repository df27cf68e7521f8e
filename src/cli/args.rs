//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::dictionary::factory::DictionaryBackend;
use crate::wordlist::{CaseFold, WordListOptions};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "lexitrie")]
#[command(about = "Exact and prefix word lookup over tries and flattened tries")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match words against the dictionary (exact, partial or none)
    Find {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        dict: DictArgs,
    },

    /// List dictionary words starting with a prefix
    Complete {
        /// Prefix to complete (empty lists every word)
        #[arg(default_value = "")]
        prefix: String,

        #[command(flatten)]
        dict: DictArgs,

        /// Limit results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare node count, memory and build time of both engines
    Stats {
        #[command(flatten)]
        dict: DictArgs,
    },
}

/// Options shared by every subcommand that loads a word list.
#[derive(Args, Debug, Clone)]
pub struct DictArgs {
    /// Word list file, one word per line
    #[arg(short, long)]
    pub dict: PathBuf,

    /// Dictionary engine used for queries
    #[arg(short, long, value_enum, default_value_t = DictionaryBackend::Flat)]
    pub backend: DictionaryBackend,

    /// Case conversion applied to words and queries
    #[arg(long, value_enum, default_value_t = CaseFold::Preserve)]
    pub case: CaseFold,

    /// Keep surrounding whitespace on each line
    #[arg(long)]
    pub no_trim: bool,

    /// Skip lines starting with this character
    #[arg(long)]
    pub comment: Option<char>,
}

impl DictArgs {
    /// Word-list options described by these flags.
    pub fn word_list_options(&self) -> WordListOptions {
        let options = WordListOptions::new()
            .with_trim(!self.no_trim)
            .with_case(self.case);
        match self.comment {
            Some(prefix) => options.with_comment_prefix(prefix),
            None => options,
        }
    }
}
