//! Jira Action tracker integration
//!
//! Release and issue flows on top of an [`IssueTracker`] collaborator.

pub mod auth;
pub mod error;
pub mod memory;
pub mod service;
pub mod tracker;
pub mod types;

pub use auth::JiraAuth;
pub use error::{Error, Result};
pub use memory::InMemoryTracker;
pub use service::JiraService;
pub use tracker::IssueTracker;
pub use types::*;
