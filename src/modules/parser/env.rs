//! Environment variable substitution in definition files

use std::borrow::Cow;

use fishgen_core::{FishgenError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Placeholder syntax: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Replaces `{{ env.NAME }}` placeholders with values from the environment
pub struct EnvSubstitutor {
    /// Fail on unset variables instead of leaving the placeholder
    strict: bool,
}

impl EnvSubstitutor {
    /// Strict substitutor: unset variables are an error
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Lenient substitutor: unset variables keep their placeholder
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute every placeholder in `content`.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn substitute<'a>(&self, content: &'a str) -> Result<Cow<'a, str>> {
        if !Self::has_placeholders(content) {
            return Ok(Cow::Borrowed(content));
        }
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let mut missing: Vec<String> = Vec::new();
        let substituted = ENV_PATTERN.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });

        if self.strict && !missing.is_empty() {
            return Err(FishgenError::EnvVarNotFound(missing.join(", ")));
        }
        Ok(Cow::Owned(substituted.into_owned()))
    }

    /// Check if a string contains environment variable placeholders
    pub fn has_placeholders(content: &str) -> bool {
        ENV_PATTERN.is_match(content)
    }

    /// Names of all referenced variables, in order of appearance
    pub fn extract_var_names(content: &str) -> Vec<String> {
        ENV_PATTERN
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_placeholders() {
        assert!(EnvSubstitutor::has_placeholders("name: {{ env.APP_NAME }}"));
        assert!(EnvSubstitutor::has_placeholders("{{env.VAR}}"));
        assert!(!EnvSubstitutor::has_placeholders("no placeholders"));
        assert!(!EnvSubstitutor::has_placeholders("{{ args.id }}"));
    }

    #[test]
    fn test_extract_var_names() {
        let content = "name: {{ env.APP_NAME }}\nshort: {{ env.APP_SHORT }}";
        let vars = EnvSubstitutor::extract_var_names(content);
        assert_eq!(vars, ["APP_NAME", "APP_SHORT"]);
    }

    #[test]
    fn test_content_without_placeholders_is_borrowed() {
        let result = EnvSubstitutor::new().substitute("name: app").unwrap();
        assert!(matches!(result, Cow::Borrowed("name: app")));
    }

    #[test]
    fn test_substitute_with_env_var() {
        std::env::set_var("FISHGEN_TEST_PROGRAM", "kubectl");
        let substitutor = EnvSubstitutor::new();
        let result = substitutor
            .substitute("name: {{ env.FISHGEN_TEST_PROGRAM }}")
            .unwrap();
        assert_eq!(result, "name: kubectl");
        std::env::remove_var("FISHGEN_TEST_PROGRAM");
    }

    #[test]
    fn test_substitute_missing_var_strict() {
        let substitutor = EnvSubstitutor::new();
        let err = substitutor
            .substitute("{{ env.NONEXISTENT_VAR_12345 }} {{ env.NONEXISTENT_VAR_12345 }}")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable not found: NONEXISTENT_VAR_12345"
        );
    }

    #[test]
    fn test_substitute_missing_var_lenient() {
        let substitutor = EnvSubstitutor::lenient();
        let result = substitutor
            .substitute("{{ env.NONEXISTENT_VAR_12345 }}")
            .unwrap();
        assert_eq!(result, "{{ env.NONEXISTENT_VAR_12345 }}");
    }
}
