//! Definition file parsing for fishgen
//!
//! This crate reads YAML (or JSON) command tree definitions, substitutes
//! environment variables, validates them and builds a
//! [`CommandTree`](fishgen_types::CommandTree).

pub mod env;
pub mod validator;
pub mod yaml;

pub use validator::TreeValidator;
pub use yaml::{CommandDef, FlagDef, YamlParser};

use fishgen_core::{FishgenError, Result};
use fishgen_types::CommandTree;
use tracing::debug;

/// Parse a definition file from a path
pub fn parse_file(path: &str) -> Result<CommandTree> {
    parse_file_with(path, &TreeValidator::new())
}

/// Parse a definition file with a custom validator
pub fn parse_file_with(path: &str, validator: &TreeValidator) -> Result<CommandTree> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FishgenError::Config(format!("Failed to read file '{}': {}", path, e)))?;
    debug!("Read definition file {} ({} bytes)", path, content.len());

    parse_string_with(&content, validator)
}

/// Parse a definition from a string
pub fn parse_string(content: &str) -> Result<CommandTree> {
    parse_string_with(content, &TreeValidator::new())
}

/// Parse a definition from a string with a custom validator
pub fn parse_string_with(content: &str, validator: &TreeValidator) -> Result<CommandTree> {
    let def = YamlParser::parse(content)?;
    validator.validate(&def)?;

    let tree = def.to_tree()?;
    debug!("Loaded command tree '{}' with {} commands", def.name, tree.len());
    Ok(tree)
}
