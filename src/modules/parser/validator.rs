//! Definition validation

use std::collections::HashSet;

use fishgen_core::fish::{is_valid_program_name, MAX_DEPTH};
use fishgen_core::{FishgenError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::yaml::{CommandDef, FlagDef};

/// Regex pattern for strict command names (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap());

/// Regex pattern for flag names: letters, digits and `-_.:`, no leading dash
static FLAG_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.:-]*$").unwrap());

/// Validator for command tree definitions
pub struct TreeValidator {
    /// Whether command names must be lower-kebab-case or lower_snake_case
    strict_names: bool,
}

impl TreeValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_names: true }
    }

    /// Create a validator with lenient name checking
    pub fn lenient() -> Self {
        Self {
            strict_names: false,
        }
    }

    /// Validate the whole definition
    pub fn validate(&self, def: &CommandDef) -> Result<()> {
        if !is_valid_program_name(&def.name) {
            return Err(FishgenError::Validation(format!(
                "Invalid program name '{}': use letters, digits, '_', '.', '+' or '-'",
                def.name
            )));
        }

        let depth = def.depth();
        if depth > MAX_DEPTH {
            return Err(FishgenError::Validation(format!(
                "Command tree is {} levels deep; at most {} are supported",
                depth, MAX_DEPTH
            )));
        }

        self.validate_command(def, &def.name, &[])
    }

    /// Validate one command and everything below it.
    ///
    /// `inherited_shorthands` holds the shorthands of persistent flags
    /// declared by ancestors.
    fn validate_command(
        &self,
        def: &CommandDef,
        path: &str,
        inherited_shorthands: &[char],
    ) -> Result<()> {
        self.validate_flags(def, path, inherited_shorthands)?;

        let mut shorthands: Vec<char> = inherited_shorthands.to_vec();
        shorthands.extend(
            def.flags
                .iter()
                .filter(|flag| flag.persistent)
                .filter_map(|flag| flag.shorthand_char().ok().flatten()),
        );

        let mut names = HashSet::new();
        for child in &def.commands {
            let child_path = format!("{} {}", path, child.name);
            self.validate_command_name(&child.name, path)?;

            if !names.insert(child.name.as_str()) {
                return Err(FishgenError::Validation(format!(
                    "Duplicate command name '{}' under '{}'",
                    child.name, path
                )));
            }

            self.validate_command(child, &child_path, &shorthands)?;
        }

        Ok(())
    }

    fn validate_command_name(&self, name: &str, parent: &str) -> Result<()> {
        if name.is_empty() {
            return Err(FishgenError::Validation(format!(
                "Command under '{}' has an empty name",
                parent
            )));
        }

        if name.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
            return Err(FishgenError::Validation(format!(
                "Invalid command name '{}' under '{}': must not contain whitespace or quotes",
                name, parent
            )));
        }

        if self.strict_names && !NAME_PATTERN.is_match(name) {
            return Err(FishgenError::Validation(format!(
                "Invalid command name '{}': must be lower-kebab-case or lower_snake_case",
                name
            )));
        }

        Ok(())
    }

    /// Validate the flags declared on one command
    fn validate_flags(
        &self,
        def: &CommandDef,
        path: &str,
        inherited_shorthands: &[char],
    ) -> Result<()> {
        let mut names = HashSet::new();
        let mut shorthands = Vec::new();

        for flag in &def.flags {
            self.validate_flag_name(flag, path)?;

            if !names.insert(flag.name.as_str()) {
                return Err(FishgenError::Validation(format!(
                    "Command '{}' has duplicate flag: '--{}'",
                    path, flag.name
                )));
            }

            flag.value_kind()?;

            if let Some(c) = flag.shorthand_char()? {
                if !c.is_ascii_alphanumeric() {
                    return Err(FishgenError::Validation(format!(
                        "Flag '--{}' on '{}': shorthand '{}' must be a letter or digit",
                        flag.name, path, c
                    )));
                }
                if shorthands.contains(&c) || inherited_shorthands.contains(&c) {
                    return Err(FishgenError::Validation(format!(
                        "Flag '--{}' on '{}': shorthand '-{}' is already in use",
                        flag.name, path, c
                    )));
                }
                shorthands.push(c);
            }
        }

        Ok(())
    }

    fn validate_flag_name(&self, flag: &FlagDef, path: &str) -> Result<()> {
        if flag.name.is_empty() {
            return Err(FishgenError::Validation(format!(
                "Command '{}' has a flag with empty name",
                path
            )));
        }

        if !FLAG_NAME_PATTERN.is_match(&flag.name) {
            return Err(FishgenError::Validation(format!(
                "Invalid flag name '{}' on '{}': use letters, digits, '-', '_', '.' or ':' without leading dashes",
                flag.name, path
            )));
        }

        Ok(())
    }
}

impl Default for TreeValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::YamlParser;

    fn validate(yaml: &str) -> Result<()> {
        TreeValidator::new().validate(&YamlParser::parse_raw(yaml).unwrap())
    }

    #[test]
    fn test_valid_definition() {
        let yaml = r#"
name: app
flags:
  - { name: verbose, shorthand: v, persistent: true }
commands:
  - name: build
    flags:
      - { name: output, shorthand: o, type: string }
  - name: deploy
    commands:
      - name: staging
"#;
        assert!(validate(yaml).is_ok());
    }

    #[test]
    fn test_invalid_program_name() {
        let err = validate("name: my app\n").unwrap_err();
        assert!(err.to_string().contains("Invalid program name"));
    }

    #[test]
    fn test_duplicate_sibling_names() {
        let yaml = "name: app\ncommands:\n  - name: build\n  - name: build\n";
        let err = validate(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate command name"));
    }

    #[test]
    fn test_same_name_under_different_parents_is_fine() {
        let yaml = r#"
name: app
commands:
  - name: remote
    commands: [{ name: list }]
  - name: branch
    commands: [{ name: list }]
"#;
        assert!(validate(yaml).is_ok());
    }

    #[test]
    fn test_strict_and_lenient_command_names() {
        let yaml = "name: app\ncommands:\n  - name: BuildAll\n";
        assert!(validate(yaml).is_err());

        let def = YamlParser::parse_raw(yaml).unwrap();
        assert!(TreeValidator::lenient().validate(&def).is_ok());

        let quoted = YamlParser::parse_raw("name: app\ncommands:\n  - name: \"it's\"\n").unwrap();
        assert!(TreeValidator::lenient().validate(&quoted).is_err());
    }

    #[test]
    fn test_duplicate_flag_names() {
        let yaml = "name: app\nflags:\n  - { name: force }\n  - { name: force }\n";
        let err = validate(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate flag"));
    }

    #[test]
    fn test_flag_name_with_dashes() {
        let yaml = "name: app\nflags:\n  - { name: --force }\n";
        assert!(validate(yaml).is_err());
    }

    #[test]
    fn test_flag_names_with_shell_syntax() {
        for name in ["it's", "x(id)", "$HOME", "a\"b", "semi;colon"] {
            let yaml = format!("name: app\nflags:\n  - name: '{}'\n", name.replace('\'', "''"));
            let def = YamlParser::parse_raw(&yaml).unwrap();
            assert_eq!(def.flags[0].name, name);
            assert!(TreeValidator::lenient().validate(&def).is_err(), "{name}");
        }
        assert!(validate("name: app\nflags:\n  - { name: dry-run }\n").is_ok());
    }

    #[test]
    fn test_inherited_shorthand_clash() {
        let yaml = r#"
name: app
flags:
  - { name: verbose, shorthand: v, persistent: true }
commands:
  - name: build
    flags:
      - { name: version, shorthand: v }
"#;
        let err = validate(yaml).unwrap_err();
        assert!(err.to_string().contains("already in use"));
    }

    #[test]
    fn test_non_persistent_shorthand_does_not_reach_children() {
        let yaml = r#"
name: app
flags:
  - { name: verbose, shorthand: v }
commands:
  - name: build
    flags:
      - { name: version, shorthand: v }
"#;
        assert!(validate(yaml).is_ok());
    }

    #[test]
    fn test_unknown_flag_type() {
        let yaml = "name: app\nflags:\n  - { name: out, type: blob }\n";
        assert!(validate(yaml).is_err());
    }
}
