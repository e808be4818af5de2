//! Fish completion generator
//!
//! The script has two parts: a preamble defining two helper predicates named
//! after the root command, then one `complete` line per subcommand and flag,
//! emitted while walking the tree depth-first.

pub mod buffer;
pub mod condition;
pub mod flags;
pub mod preamble;
pub mod quote;
pub mod walker;

use std::io::Write;

use fishgen_types::{CommandId, CommandTree};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub use buffer::CompletionBuffer;
pub use condition::{Clause, Condition};

use crate::{FishgenError, Result};

/// Deepest nesting of subcommands the generator accepts
pub const MAX_DEPTH: usize = 256;

/// Root names end up inside fish function names
static PROGRAM_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.+-]*$").unwrap());

/// Whether `name` can be used verbatim in the generated function names
pub fn is_valid_program_name(name: &str) -> bool {
    PROGRAM_NAME_PATTERN.is_match(name)
}

/// Builds the completion script for one root command
#[derive(Debug)]
pub struct FishGenerator<'a> {
    tree: &'a CommandTree,
    root: CommandId,
    buffer: CompletionBuffer,
}

impl<'a> FishGenerator<'a> {
    /// Create a generator for the subtree starting at `root`
    pub fn new(tree: &'a CommandTree, root: CommandId) -> Result<Self> {
        let program = tree.name(root);
        if !is_valid_program_name(program) {
            return Err(FishgenError::Validation(format!(
                "Invalid program name '{}': must be usable in a fish function name",
                program
            )));
        }
        Ok(Self {
            tree,
            root,
            buffer: CompletionBuffer::new(),
        })
    }

    /// Produce the full script
    pub fn generate(mut self) -> Result<CompletionBuffer> {
        debug!(
            program = self.tree.name(self.root),
            commands = self.tree.len(),
            "generating fish completion"
        );
        preamble::write_preamble(self.tree, self.root, &mut self.buffer);
        walker::walk(self.tree, self.root, &mut self.buffer)?;
        debug!(lines = self.buffer.line_count(), "fish completion generated");
        Ok(self.buffer)
    }
}

/// Generate the fish completion script for `root` and write it to `sink`.
///
/// Nothing is written unless the whole script was generated.
pub fn generate_fish_completion<W: Write + ?Sized>(
    tree: &CommandTree,
    root: CommandId,
    sink: &mut W,
) -> Result<()> {
    FishGenerator::new(tree, root)?.generate()?.write_to(sink)
}

/// Generate the fish completion script for `root` as a string
pub fn render_fish_completion(tree: &CommandTree, root: CommandId) -> Result<String> {
    Ok(FishGenerator::new(tree, root)?.generate()?.into_string())
}
