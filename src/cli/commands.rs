//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::time::{Duration, Instant};

use crate::dictionary::factory::{DictionaryContainer, DictionaryFactory};
use crate::dictionary::trie::Trie;
use crate::dictionary::{DictionarySearch, MatchKind};
use crate::wordlist::{load_trie, WordListOptions};

use super::args::{Commands, DictArgs};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Find { words, dict } => cmd_find(&words, &dict),
        Commands::Complete {
            prefix,
            dict,
            limit,
        } => cmd_complete(&prefix, &dict, limit),
        Commands::Stats { dict } => cmd_stats(&dict),
    }
}

/// Load the word list named by `args` into a trie.
fn load(args: &DictArgs) -> Result<(Trie, Duration)> {
    let options = args.word_list_options();
    let start = Instant::now();
    let trie: Trie = load_trie(&args.dict, &options)
        .with_context(|| format!("Failed to load dictionary: {}", args.dict.display()))?;
    let elapsed = start.elapsed();
    tracing::info!(
        path = %args.dict.display(),
        terms = trie.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "dictionary loaded"
    );
    Ok((trie, elapsed))
}

/// Build the engine requested by `args`.
fn open(args: &DictArgs) -> Result<DictionaryContainer> {
    let (trie, _) = load(args)?;
    let dict = DictionaryFactory::from_trie(args.backend, trie);
    tracing::debug!(backend = %dict.backend(), nodes = dict.node_count(), "engine ready");
    Ok(dict)
}

/// Apply the same case conversion to a query as to the word list.
fn normalize_query(query: &str, options: &WordListOptions) -> String {
    options.case.apply(query)
}

fn format_match(kind: MatchKind) -> String {
    match kind {
        MatchKind::Exact => kind.to_string().green().bold().to_string(),
        MatchKind::Partial => kind.to_string().yellow().to_string(),
        MatchKind::None => kind.to_string().red().to_string(),
    }
}

fn cmd_find(words: &[String], args: &DictArgs) -> Result<()> {
    let dict = open(args)?;
    let options = args.word_list_options();

    for word in words {
        let query = normalize_query(word, &options);
        println!("{}\t{}", query, format_match(dict.find(&query)));
    }

    Ok(())
}

fn cmd_complete(prefix: &str, args: &DictArgs, limit: Option<usize>) -> Result<()> {
    let dict = open(args)?;
    let prefix = normalize_query(prefix, &args.word_list_options());

    let results = match limit {
        Some(limit) => dict.complete_limited(&prefix, limit),
        None => dict.complete(&prefix),
    };

    if results.is_empty() {
        eprintln!("{} no words start with '{}'", "Note:".yellow(), prefix);
        return Ok(());
    }

    for word in &results {
        println!("{}", word);
    }

    Ok(())
}

fn cmd_stats(args: &DictArgs) -> Result<()> {
    let (trie, load_time) = load(args)?;

    let start = Instant::now();
    let flat = trie.flattened();
    let flatten_time = start.elapsed();
    tracing::info!(
        nodes = flat.node_count(),
        elapsed_us = flatten_time.as_micros() as u64,
        "flattened trie"
    );

    println!("{}", "Dictionary Information".bold());
    println!("  {}: {}", "Path".cyan(), args.dict.display());
    println!("  {}: {}", "Words".cyan(), trie.len());
    println!("  {}: {:?}", "Load + build time".cyan(), load_time);
    println!("  {}: {:?}", "Flatten time".cyan(), flatten_time);
    println!();

    println!(
        "{:<10} {:>12} {:>14} {:>12}  {}",
        "Engine".bold(),
        "Nodes".bold(),
        "Bytes".bold(),
        "Bytes/node".bold(),
        "Sync".bold()
    );
    print_engine_row("Trie", &trie);
    print_engine_row("FlatTrie", &flat);

    if trie.size() > 0 {
        let ratio = flat.size() as f64 / trie.size() as f64;
        println!();
        println!("  {}: {:.1}%", "Flat / trie size".cyan(), ratio * 100.0);
    }

    Ok(())
}

fn print_engine_row<D: DictionarySearch>(name: &str, dict: &D) {
    let per_node = if dict.node_count() > 0 {
        dict.size() as f64 / dict.node_count() as f64
    } else {
        0.0
    };
    println!(
        "{:<10} {:>12} {:>14} {:>12.1}  {:?}",
        name,
        dict.node_count(),
        dict.size(),
        per_node,
        dict.sync_strategy()
    );
}
