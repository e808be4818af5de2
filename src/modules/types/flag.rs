//! Flag definitions

use serde::{Deserialize, Serialize};

use crate::ValueKind;

/// A flag declared on a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Long name, without the leading `--`
    pub name: String,

    /// Optional single-character alias (`-o`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorthand: Option<char>,

    /// Kind of value the flag takes
    #[serde(rename = "type", default)]
    pub value_kind: ValueKind,

    /// Help text shown next to the flag
    #[serde(default)]
    pub usage: String,

    /// Persistent flags are inherited by every descendant command
    #[serde(default)]
    pub persistent: bool,

    /// Hidden flags are accepted but never suggested
    #[serde(default)]
    pub hidden: bool,

    /// Deprecation notice; deprecated flags are never suggested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

impl Flag {
    /// Create a flag with the given name and value kind
    pub fn new(name: impl Into<String>, value_kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            value_kind,
            usage: String::new(),
            persistent: false,
            hidden: false,
            deprecated: None,
        }
    }

    /// Create a boolean switch
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Bool)
    }

    /// Create a string-valued flag
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::String)
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Mark the flag as inherited by descendants
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn deprecated(mut self, notice: impl Into<String>) -> Self {
        self.deprecated = Some(notice.into());
        self
    }

    /// Whether the flag consumes the next token as its value
    pub fn takes_argument(&self) -> bool {
        self.value_kind.takes_argument()
    }

    /// Hidden and deprecated flags are excluded from completion
    pub fn is_completable(&self) -> bool {
        !self.hidden && self.deprecated.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_builder() {
        let flag = Flag::string("output")
            .with_shorthand('o')
            .with_usage("output path");
        assert_eq!(flag.name, "output");
        assert_eq!(flag.shorthand, Some('o'));
        assert_eq!(flag.usage, "output path");
        assert!(flag.takes_argument());
        assert!(!flag.persistent);
    }

    #[test]
    fn test_flag_completability() {
        assert!(Flag::bool("verbose").is_completable());
        assert!(!Flag::bool("debug").hidden().is_completable());
        assert!(!Flag::bool("old").deprecated("use --new").is_completable());
    }

    #[test]
    fn test_flag_deserialize_defaults() {
        let flag: Flag = serde_json::from_str(r#"{"name": "force"}"#).unwrap();
        assert_eq!(flag.value_kind, ValueKind::Bool);
        assert_eq!(flag.shorthand, None);
        assert!(flag.usage.is_empty());
        assert!(flag.is_completable());
    }
}
