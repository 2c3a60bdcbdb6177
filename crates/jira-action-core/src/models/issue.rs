//! Issue data model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An issue as returned by the tracker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

/// The raw `fields` object of an issue, keyed by attribute id
///
/// Attributes explicitly set to `null` are treated the same as missing ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct IssueFields(Map<String, Value>);

impl IssueFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute).filter(|value| !value.is_null())
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: Value) {
        self.0.insert(attribute.into(), value);
    }

    pub fn with(mut self, attribute: impl Into<String>, value: Value) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for IssueFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
