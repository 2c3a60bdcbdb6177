pub mod config;
pub mod issue;
pub mod version;

pub use config::{Config, LoggingConfig, ReleaseConfig};
pub use issue::{IssueFields, JiraIssue};
pub use version::{JiraVersion, NewVersion, VersionBumpKind, VersionSearch, VersionUpdate};
