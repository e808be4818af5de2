//! Core logic for fishgen
//!
//! This crate turns a [`CommandTree`](fishgen_types::CommandTree) into a fish
//! completion script and defines the error type shared by the workspace.

pub mod error;
pub mod fish;

pub use error::{FishgenError, Result};
pub use fish::{generate_fish_completion, render_fish_completion, FishGenerator};
