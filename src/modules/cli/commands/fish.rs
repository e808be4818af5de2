//! Fish command implementation

use std::fs;
use std::io;

use clap::Args;
use fishgen_core::{generate_fish_completion, render_fish_completion, FishgenError};
use fishgen_parser::{parse_file_with, TreeValidator};
use fishgen_types::{CommandId, CommandTree};
use tracing::{debug, info};

/// Fish command arguments
#[derive(Args, Debug)]
pub struct FishCommand {
    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Generate for the subcommand at this path (e.g. "remote add")
    #[arg(long)]
    pub root: Option<String>,

    /// Accept command names that are not lower-kebab-case or lower_snake_case
    #[arg(long)]
    pub lenient: bool,
}

impl FishCommand {
    /// Execute the fish command
    pub fn execute(&self, file: &str) -> Result<(), FishgenError> {
        info!("Loading command tree from: {}", file);

        let validator = if self.lenient {
            TreeValidator::lenient()
        } else {
            TreeValidator::new()
        };
        let tree = parse_file_with(file, &validator)?;
        let root = self.resolve_root(&tree)?;
        debug!("Generating completions for '{}'", tree.name(root));

        match &self.out {
            Some(path) => {
                let script = render_fish_completion(&tree, root)?;
                fs::write(path, script)?;
                info!("Wrote fish completion to {}", path);
            }
            None => {
                let mut stdout = io::stdout().lock();
                generate_fish_completion(&tree, root, &mut stdout)?;
            }
        }

        Ok(())
    }

    /// The command named by `--root`, or the tree root
    pub(crate) fn resolve_root(&self, tree: &CommandTree) -> Result<CommandId, FishgenError> {
        match &self.root {
            None => Ok(tree.root()),
            Some(path) => tree.find(path).ok_or_else(|| {
                FishgenError::Config(format!(
                    "No command '{}' below '{}'",
                    path,
                    tree.name(tree.root())
                ))
            }),
        }
    }
}
