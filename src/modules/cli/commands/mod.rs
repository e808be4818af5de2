//! CLI commands

mod completion;
mod fish;
mod init;
mod tree;

pub use completion::CompletionCommand;
pub use fish::FishCommand;
pub use init::InitCommand;
pub use tree::{render_outline, to_json, TreeCommand};

use clap::{Parser, Subcommand};

/// fishgen - fish shell completions from command tree definitions
#[derive(Parser, Debug)]
#[command(name = "fishgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command tree definition file (YAML or JSON)
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `fishgen fish -f commands.yaml`.
    #[arg(short = 'f', long = "file", global = true, default_value = "commands.yaml")]
    pub file: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fish completion script
    Fish(FishCommand),

    /// Show the command tree described by the definition file
    Tree(TreeCommand),

    /// Write a starter definition file
    Init(InitCommand),

    /// Generate completions for fishgen itself
    #[command(hide = true)]
    Completion(CompletionCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["fishgen", "fish"]).unwrap();
        assert_eq!(cli.file, "commands.yaml");
        assert!(matches!(cli.command, Commands::Fish(_)));
    }

    #[test]
    fn test_cli_with_file_after_subcommand() {
        let cli = Cli::try_parse_from(["fishgen", "fish", "-f", "tree.yaml", "-o", "app.fish"])
            .unwrap();
        assert_eq!(cli.file, "tree.yaml");
        match cli.command {
            Commands::Fish(cmd) => assert_eq!(cmd.out.as_deref(), Some("app.fish")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_fish_root_path() {
        let cli = Cli::try_parse_from(["fishgen", "fish", "--root", "remote add"]).unwrap();
        match cli.command {
            Commands::Fish(cmd) => assert_eq!(cmd.root.as_deref(), Some("remote add")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_completion_shell() {
        let cli = Cli::try_parse_from(["fishgen", "completion", "fish"]).unwrap();
        assert!(matches!(cli.command, Commands::Completion(_)));
        assert!(Cli::try_parse_from(["fishgen", "completion", "tcsh"]).is_err());
    }
}
