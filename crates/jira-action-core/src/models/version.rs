//! Release version data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which component of the trailing `major.minor.patch` triple to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBumpKind {
    Major,
    Minor,
    Patch,
}

impl VersionBumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBumpKind::Major => "major",
            VersionBumpKind::Minor => "minor",
            VersionBumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionBumpKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(VersionBumpKind::Major),
            "minor" => Ok(VersionBumpKind::Minor),
            "patch" => Ok(VersionBumpKind::Patch),
            other => Err(Error::Validation(format!(
                "Invalid version type '{}'. Must be one of: major, minor, patch",
                other
            ))),
        }
    }
}

/// A release version of a tracker project, as the tracker reports it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JiraVersion {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub released: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl JiraVersion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            released: false,
            archived: false,
            start_date: None,
            release_date: None,
        }
    }

    /// Mark as released on the given date
    pub fn release(&mut self, date: NaiveDate) {
        self.released = true;
        self.release_date = Some(date);
    }
}

/// Payload for creating a version
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVersion {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// Partial update of an existing version; `None` leaves the attribute untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
}

impl VersionUpdate {
    pub fn apply(&self, version: &mut JiraVersion) {
        if let Some(released) = self.released {
            version.released = released;
        }
        if let Some(date) = self.release_date {
            version.release_date = Some(date);
        }
    }
}

/// Filter used when listing a project's versions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VersionSearch {
    #[serde(default)]
    pub is_released: bool,
    #[serde(default)]
    pub is_archived: bool,
    /// Substring the version name must contain
    #[serde(default)]
    pub version_name: String,
}

impl VersionSearch {
    pub fn matches(&self, version: &JiraVersion) -> bool {
        version.released == self.is_released
            && version.archived == self.is_archived
            && version.name.contains(&self.version_name)
    }
}
