//! YAML definition files
//!
//! A definition file describes the root command; subcommands nest under
//! `commands`. JSON documents are accepted as well.

use fishgen_core::{FishgenError, Result};
use fishgen_types::{CommandId, CommandTree, Flag, ValueKind};
use serde::Deserialize;

use crate::env::EnvSubstitutor;

/// YAML parser for command tree definitions
pub struct YamlParser;

/// A command as written in a definition file
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDef {
    pub name: String,

    /// Older files use `description`.
    #[serde(default, alias = "description")]
    pub short: String,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub deprecated: Option<String>,

    #[serde(default = "default_runnable")]
    pub runnable: bool,

    /// Add a `help` pseudo-command below this command
    #[serde(default)]
    pub help_command: bool,

    #[serde(default)]
    pub flags: Vec<FlagDef>,

    /// Older files use `subcommands`.
    #[serde(default, alias = "subcommands")]
    pub commands: Vec<CommandDef>,
}

/// A flag as written in a definition file
#[derive(Debug, Clone, Deserialize)]
pub struct FlagDef {
    pub name: String,

    #[serde(default)]
    pub shorthand: Option<String>,

    /// Value kind; parsed leniently so `boolean`, `str` and friends work
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default, alias = "description")]
    pub usage: String,

    #[serde(default)]
    pub persistent: bool,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub deprecated: Option<String>,
}

fn default_runnable() -> bool {
    true
}

impl YamlParser {
    /// Parse a definition, substituting environment variables first
    pub fn parse(content: &str) -> Result<CommandDef> {
        let substituted = EnvSubstitutor::new().substitute(content)?;
        Self::parse_raw(&substituted)
    }

    /// Parse a definition without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<CommandDef> {
        serde_yaml::from_str::<CommandDef>(content)
            .map_err(|e| FishgenError::Config(format!("YAML parse error: {}", e)))
    }
}

impl FlagDef {
    /// Resolved value kind, `bool` when no type is given
    pub fn value_kind(&self) -> Result<ValueKind> {
        match &self.kind {
            None => Ok(ValueKind::Bool),
            Some(kind) => kind.parse().map_err(|e| {
                FishgenError::Validation(format!("Flag '{}': {}", self.name, e))
            }),
        }
    }

    /// Resolved single-character shorthand
    pub fn shorthand_char(&self) -> Result<Option<char>> {
        let Some(shorthand) = &self.shorthand else {
            return Ok(None);
        };
        let mut chars = shorthand.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Some(c)),
            _ => Err(FishgenError::Validation(format!(
                "Flag '{}': shorthand '{}' must be a single character",
                self.name, shorthand
            ))),
        }
    }

    fn to_flag(&self) -> Result<Flag> {
        Ok(Flag {
            name: self.name.clone(),
            shorthand: self.shorthand_char()?,
            value_kind: self.value_kind()?,
            usage: self.usage.clone(),
            persistent: self.persistent,
            hidden: self.hidden,
            deprecated: self.deprecated.clone(),
        })
    }
}

impl CommandDef {
    /// Build the in-memory command tree
    pub fn to_tree(&self) -> Result<CommandTree> {
        let mut tree = CommandTree::new(self.name.clone(), self.short.clone());
        let root = tree.root();
        self.fill(&mut tree, root)?;
        Ok(tree)
    }

    fn fill(&self, tree: &mut CommandTree, id: CommandId) -> Result<()> {
        {
            let command = tree.get_mut(id);
            command.hidden = self.hidden;
            command.deprecated = self.deprecated.clone();
            command.runnable = self.runnable;
        }
        for flag in &self.flags {
            tree.add_flag(id, flag.to_flag()?);
        }
        for child in &self.commands {
            let child_id = tree.add_command(id, child.name.clone(), child.short.clone());
            child.fill(tree, child_id)?;
        }
        if self.help_command {
            tree.add_help_command(id);
        }
        Ok(())
    }

    /// Number of nesting levels below this command
    pub fn depth(&self) -> usize {
        self.commands
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
