//! fishgen CLI
//!
//! This crate provides the command-line interface for fishgen including:
//! - fish: Generate a fish completion script from a definition file
//! - tree: Show the command tree a definition file describes
//! - init: Write a starter definition file
//! - completion: Completions for fishgen itself

pub mod clap_tree;
pub mod commands;

pub use commands::{Cli, Commands};
