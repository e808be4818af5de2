//! Type definitions for fishgen
//!
//! This crate contains the command tree consumed by the completion generators:
//! an arena of commands linked by index, the flags declared on them, and the
//! flag-set views (local, inherited, visible) derived from the tree.

pub mod command;
pub mod flag;
pub mod value_kind;

pub use command::{Command, CommandId, CommandTree};
pub use flag::Flag;
pub use value_kind::ValueKind;
