//! JIRA API types

pub use jira_action_core::models::{
    IssueFields, JiraIssue, JiraVersion, NewVersion, VersionBumpKind, VersionSearch,
    VersionUpdate,
};

/// Result of asking for a new version
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(JiraVersion),
    /// A version with this name is already in the project; nothing was created
    AlreadyExists(String),
}

impl CreateOutcome {
    pub fn name(&self) -> &str {
        match self {
            CreateOutcome::Created(version) => &version.name,
            CreateOutcome::AlreadyExists(name) => name,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}
