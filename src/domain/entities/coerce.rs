use serde::{Deserialize, Serialize};

/// List field that arrives either as a JSON array or as one delimited
/// string (HTML forms submit `tech` comma-separated and `achievements`
/// newline-separated).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StringList {
    Many(Vec<String>),
    One(String),
}

impl StringList {
    /// Normalize into a list: split single strings on `sep`, trim every
    /// entry, drop blanks, keep order.
    pub fn into_list(self, sep: char) -> Vec<String> {
        let entries = match self {
            StringList::Many(items) => items,
            StringList::One(raw) => raw.split(sep).map(str::to_string).collect(),
        };
        entries
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl From<&str> for StringList {
    fn from(raw: &str) -> Self {
        StringList::One(raw.to_string())
    }
}

/// Boolean field that checkbox-style forms submit as `"true"` / `"false"`.
/// Only the exact string `"true"` counts as true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BoolFlag {
    Bool(bool),
    Text(String),
}

impl BoolFlag {
    pub fn as_bool(&self) -> bool {
        match self {
            BoolFlag::Bool(b) => *b,
            BoolFlag::Text(s) => s == "true",
        }
    }
}
