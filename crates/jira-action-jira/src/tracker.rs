//! Issue tracker collaborator
//!
//! The network client for the tracker lives outside this crate. Everything
//! here talks to it through [`IssueTracker`], which [`crate::InMemoryTracker`]
//! also implements for tests.

use crate::types::{IssueFields, JiraVersion, NewVersion, VersionUpdate};
use crate::Result;

/// Operations the release flows need from an issue tracker
///
/// Implementors map transport failures to [`crate::Error::Api`] and must be
/// `Send + Sync` so one tracker can serve concurrent requests.
pub trait IssueTracker: Send + Sync {
    /// Fields of an issue, `None` if the issue does not exist
    fn issue_fields(&self, issue_key: &str) -> Result<Option<IssueFields>>;

    /// Add a comment to an existing issue
    fn add_comment(&self, issue_key: &str, body: &str) -> Result<()>;

    /// All versions of a project, in the tracker's order
    fn project_versions(&self, project: &str) -> Result<Vec<JiraVersion>>;

    /// A project version by exact name
    fn version_by_name(&self, project: &str, name: &str) -> Result<Option<JiraVersion>>;

    /// Create a version and return it as stored
    fn create_version(&self, project: &str, version: &NewVersion) -> Result<JiraVersion>;

    /// Update the named version and return it as stored
    fn update_version(
        &self,
        project: &str,
        name: &str,
        update: &VersionUpdate,
    ) -> Result<JiraVersion>;
}
