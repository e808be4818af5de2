//! Init command implementation

use clap::Args;
use fishgen_core::FishgenError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Program name the completions are for
    #[arg(default_value = "my-cli")]
    pub name: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Overwrite an existing definition file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self) -> Result<(), FishgenError> {
        info!("Initializing definition for: {}", self.name);

        if !fishgen_core::fish::is_valid_program_name(&self.name) {
            return Err(FishgenError::Validation(format!(
                "Invalid program name '{}': use letters, digits, '_', '.', '+' or '-'",
                self.name
            )));
        }

        let output_dir = Path::new(&self.output);
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let definition_path = output_dir.join("commands.yaml");
        if definition_path.exists() && !self.force {
            return Err(FishgenError::Config(format!(
                "{} already exists (use --force to overwrite)",
                definition_path.display()
            )));
        }

        fs::write(&definition_path, self.generate_definition())?;
        info!("Created: {}", definition_path.display());

        println!("\nDefinition for '{}' created!", self.name);
        println!("\nNext steps:");
        println!("  1. Describe your commands and flags in commands.yaml");
        println!(
            "  2. Run: fishgen -f commands.yaml fish -o ~/.config/fish/completions/{}.fish",
            self.name
        );

        Ok(())
    }

    /// Starter definition content
    fn generate_definition(&self) -> String {
        format!(
            r#"# Command tree for {name}
name: {name}
short: Describe {name} here
help_command: true
flags:
  - name: verbose
    shorthand: v
    type: bool
    usage: Enable verbose output
    persistent: true
commands:
  - name: run
    short: Run the program
    flags:
      - name: config
        shorthand: c
        type: string
        usage: Path to the configuration file
  - name: version
    short: Print version information
"#,
            name = self.name
        )
    }
}
