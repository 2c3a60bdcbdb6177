//! Issue field extraction
//!
//! A fixed set of logical field keys, each bound to the strategy that reads
//! its value out of an issue's fields.

use serde_json::Value;

use crate::models::IssueFields;
use crate::{Error, Result};

/// How a logical field is read from an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStrategy {
    /// Display name of the built-in `priority` attribute
    Priority,
    /// A custom field read verbatim, by its internal id
    CustomString(&'static str),
}

const AVAILABLE_FIELDS: [(&str, FieldStrategy); 3] = [
    ("priority", FieldStrategy::Priority),
    ("target-start", FieldStrategy::CustomString("customfield_10022")),
    ("target-end", FieldStrategy::CustomString("customfield_10023")),
];

impl FieldStrategy {
    /// Resolve a logical field key
    pub fn for_key(key: &str) -> Result<Self> {
        AVAILABLE_FIELDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, strategy)| *strategy)
            .ok_or_else(|| Error::UnknownFieldKey(key.to_string()))
    }

    /// The issue attribute this strategy reads
    pub fn attribute(&self) -> &'static str {
        match self {
            FieldStrategy::Priority => "priority",
            FieldStrategy::CustomString(id) => *id,
        }
    }

    /// Read the value, `None` when the issue has none
    pub fn get_value(&self, fields: &IssueFields) -> Option<String> {
        let value = fields.get(self.attribute())?;
        match self {
            FieldStrategy::Priority => match value {
                Value::Object(priority) => priority
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                Value::String(name) => Some(name.clone()),
                _ => None,
            },
            FieldStrategy::CustomString(_) => match value {
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            },
        }
    }
}

/// Keys accepted by [`get_value`], in a stable order
pub fn get_available_fields() -> Vec<&'static str> {
    AVAILABLE_FIELDS.iter().map(|(name, _)| *name).collect()
}

/// Resolve `field_key` and read its value from `fields`.
///
/// # Errors
/// * [`Error::UnknownFieldKey`] - `field_key` is not one of [`get_available_fields`]
/// * [`Error::FieldValueAbsent`] - the issue has no value for the field
pub fn get_value(field_key: &str, fields: &IssueFields) -> Result<String> {
    let strategy = FieldStrategy::for_key(field_key)?;
    strategy
        .get_value(fields)
        .ok_or_else(|| Error::FieldValueAbsent {
            key: field_key.to_string(),
            attribute: strategy.attribute().to_string(),
        })
}
