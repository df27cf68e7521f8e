//! CLI interface for lexitrie
//!
//! Provides command-line utilities for loading word lists and querying them
//! with either dictionary engine.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, DictArgs};
