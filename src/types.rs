use serde::Serialize;
use std::fmt;

pub mod content;
pub mod payload;

// --- ArgumentKind ---
// Discriminant of `ArgumentValue`, handy for log fields and mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    String,
    Data,
    StringArray,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgumentKind::String => "string",
            ArgumentKind::Data => "data",
            ArgumentKind::StringArray => "string_array",
        };
        f.write_str(name)
    }
}

/// A single camera effect argument value.
///
/// Serializes untagged: a string stays a JSON string, binary data becomes an
/// array of byte values and a string array stays an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    String(String),
    Data(Vec<u8>),
    StringArray(Vec<String>),
}

impl ArgumentValue {
    pub fn kind(&self) -> ArgumentKind {
        match self {
            ArgumentValue::String(_) => ArgumentKind::String,
            ArgumentValue::Data(_) => ArgumentKind::Data,
            ArgumentValue::StringArray(_) => ArgumentKind::StringArray,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ArgumentValue::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_string_array(&self) -> Option<&[String]> {
        match self {
            ArgumentValue::StringArray(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::String(value)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::String(value.to_string())
    }
}

impl From<Vec<u8>> for ArgumentValue {
    fn from(value: Vec<u8>) -> Self {
        ArgumentValue::Data(value)
    }
}

impl From<Vec<String>> for ArgumentValue {
    fn from(values: Vec<String>) -> Self {
        ArgumentValue::StringArray(values)
    }
}
