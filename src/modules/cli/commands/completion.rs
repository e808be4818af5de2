//! Hidden command to generate shell completions for fishgen itself.

use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use fishgen_core::{generate_fish_completion, FishgenError};

use crate::clap_tree::from_clap;

/// Generate shell completion scripts for fishgen.
///
/// Hidden from normal `--help` output because it exists for installers and
/// packaging scripts.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for (e.g. bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    pub fn execute(&self) -> Result<(), FishgenError> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }

    /// Fish completions come from fishgen's own generator; every other
    /// shell is delegated to clap_complete.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), FishgenError> {
        let mut cmd = crate::Cli::command();
        match self.shell {
            Shell::Fish => {
                let tree = from_clap(&cmd, "fishgen");
                generate_fish_completion(&tree, tree.root(), out)
            }
            shell => {
                generate(shell, &mut cmd, "fishgen", out);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: Shell) -> String {
        let mut out = Vec::new();
        CompletionCommand { shell }.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fish_completion_uses_own_generator() {
        let script = render(Shell::Fish);
        assert!(script.contains("function __fish_fishgen_no_subcommand"));
        assert!(script.contains("-a fish "));
        assert!(script.contains("-a tree "));
        assert!(script.contains("-a init "));
        // hidden command and help pseudo-command are not offered
        assert!(!script.contains("-a completion "));
        assert!(!script.contains("-a help "));
        assert!(script.contains("'__fish_seen_subcommand_from fish' -r -s o -l out"));
    }

    #[test]
    fn test_other_shells_use_clap_complete() {
        let script = render(Shell::Bash);
        assert!(script.contains("fishgen"));
        assert!(!script.contains("__fish_fishgen_no_subcommand"));
    }
}
