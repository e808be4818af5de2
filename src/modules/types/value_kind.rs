//! Flag value kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of value a flag carries on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Switch with no value (`--verbose`)
    #[default]
    Bool,
    /// Free-form string
    String,
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Duration such as `30s` or `5m`
    Duration,
    /// Comma separated or repeated string values
    #[serde(rename = "strings")]
    StringSlice,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Duration => write!(f, "duration"),
            ValueKind::StringSlice => write!(f, "strings"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(ValueKind::Bool),
            "string" | "str" => Ok(ValueKind::String),
            "int" | "integer" | "i64" | "uint" => Ok(ValueKind::Int),
            "float" | "f64" | "double" => Ok(ValueKind::Float),
            "duration" => Ok(ValueKind::Duration),
            "strings" | "stringslice" | "string-slice" => Ok(ValueKind::StringSlice),
            _ => Err(format!("Unknown flag value kind: {}", s)),
        }
    }
}

impl ValueKind {
    /// Returns all supported value kinds
    pub fn all() -> &'static [ValueKind] {
        &[
            ValueKind::Bool,
            ValueKind::String,
            ValueKind::Int,
            ValueKind::Float,
            ValueKind::Duration,
            ValueKind::StringSlice,
        ]
    }

    /// Whether the shell must expect a following token after the flag
    pub fn takes_argument(&self) -> bool {
        !matches!(self, ValueKind::Bool)
    }
}
