//! Completion conditions
//!
//! A condition is the `-n` argument of a `complete` line: a list of fish
//! predicates joined with `; and`, evaluated left to right.

use std::fmt;

use fishgen_types::{CommandId, CommandTree};

use super::preamble::{has_flag_fn, no_subcommand_fn};
use super::{quote, MAX_DEPTH};
use crate::{FishgenError, Result};

/// One predicate of a condition.
///
/// Fish parses the `-n` text again when it runs the condition, so names are
/// quoted as words here and the whole predicate is quoted once more on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// No subcommand of the program has been typed yet
    NoSubcommand { program: String },
    /// The given subcommand path has been typed
    SeenSubcommandFrom { path: Vec<String> },
    /// `--<flag>` has not been typed
    NotHasFlag { program: String, flag: String },
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::NoSubcommand { program } => write!(f, "{}", no_subcommand_fn(program)),
            Clause::SeenSubcommandFrom { path } => {
                write!(f, "__fish_seen_subcommand_from")?;
                for name in path {
                    write!(f, " {}", quote::word(name))?;
                }
                Ok(())
            }
            Clause::NotHasFlag { program, flag } => {
                write!(f, "not {} {}", has_flag_fn(program), quote::word(flag))
            }
        }
    }
}

/// Conjunction of clauses, rendered as `-n '<clause>; and <clause>'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    clauses: Vec<Clause>,
}

impl Condition {
    /// Condition under which `node`'s own flags are offered
    pub fn for_flags(tree: &CommandTree, root: CommandId, node: CommandId) -> Result<Self> {
        let program = tree.name(root).to_string();
        let clause = if node == root {
            Clause::NoSubcommand { program }
        } else {
            Clause::SeenSubcommandFrom {
                path: subcommand_path(tree, root, node)?,
            }
        };
        Ok(Self {
            clauses: vec![clause],
        })
    }

    /// Condition under which `node`'s subcommands are offered.
    ///
    /// Same as [`Condition::for_flags`], but typing any of `node`'s local
    /// non-persistent flags stops subcommand suggestions for `node`.
    pub fn for_subcommands(tree: &CommandTree, root: CommandId, node: CommandId) -> Result<Self> {
        let program = tree.name(root).to_string();
        let mut condition = Self::for_flags(tree, root, node)?;
        for flag in tree.local_non_persistent_flags(node) {
            condition = condition.and(Clause::NotHasFlag {
                program: program.clone(),
                flag: flag.name.clone(),
            });
        }
        Ok(condition)
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Fish predicate text without the `-n` wrapper
    pub fn predicate(&self) -> String {
        self.clauses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; and ")
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-n {}", quote::single_quoted(&self.predicate()))
    }
}

/// Names of the commands from just below `root` down to `node`.
///
/// Returns an empty path for `node == root`. `node` must otherwise be a
/// descendant of `root`; a parent chain that ends before reaching `root` is
/// reported as a generation error.
pub fn subcommand_path(tree: &CommandTree, root: CommandId, node: CommandId) -> Result<Vec<String>> {
    if node == root {
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut current = node;
    loop {
        path.push(tree.name(current).to_string());
        match tree.parent(current) {
            Some(parent) if parent == root => break,
            Some(parent) if path.len() < MAX_DEPTH => current = parent,
            Some(_) => {
                return Err(FishgenError::Generation(format!(
                    "command '{}' is nested deeper than {} levels",
                    tree.name(node),
                    MAX_DEPTH
                )))
            }
            None => {
                return Err(FishgenError::Generation(format!(
                    "command '{}' is not a descendant of '{}'",
                    tree.name(node),
                    tree.name(root)
                )))
            }
        }
    }
    path.reverse();
    Ok(path)
}
