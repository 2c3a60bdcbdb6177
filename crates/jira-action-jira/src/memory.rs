//! In-process issue tracker

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::tracker::IssueTracker;
use crate::types::{IssueFields, JiraVersion, NewVersion, VersionUpdate};
use crate::{Error, Result};

#[derive(Default)]
struct State {
    issues: HashMap<String, IssueFields>,
    comments: HashMap<String, Vec<String>>,
    versions: HashMap<String, Vec<JiraVersion>>,
    next_version_id: u64,
}

/// Tracker backed by in-memory maps
///
/// Behaves like the hosted tracker for the operations in [`IssueTracker`]:
/// version names are unique per project and ids are assigned on creation.
#[derive(Default)]
pub struct InMemoryTracker {
    state: Mutex<State>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue
    pub fn with_issue(self, issue_key: impl Into<String>, fields: IssueFields) -> Self {
        self.lock().issues.insert(issue_key.into(), fields);
        self
    }

    /// Add an existing version to a project, assigning an id if it has none
    pub fn with_version(self, project: impl Into<String>, mut version: JiraVersion) -> Self {
        {
            let mut state = self.lock();
            if version.id.is_none() {
                version.id = Some(state.allocate_id());
            }
            state.versions.entry(project.into()).or_default().push(version);
        }
        self
    }

    /// Comments added to an issue, oldest first
    pub fn comments(&self, issue_key: &str) -> Vec<String> {
        self.lock()
            .comments
            .get(issue_key)
            .cloned()
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl State {
    fn allocate_id(&mut self) -> String {
        self.next_version_id += 1;
        (10000 + self.next_version_id).to_string()
    }
}

impl IssueTracker for InMemoryTracker {
    fn issue_fields(&self, issue_key: &str) -> Result<Option<IssueFields>> {
        Ok(self.lock().issues.get(issue_key).cloned())
    }

    fn add_comment(&self, issue_key: &str, body: &str) -> Result<()> {
        let mut state = self.lock();
        if !state.issues.contains_key(issue_key) {
            return Err(Error::NotFound(format!("issue {}", issue_key)));
        }
        state
            .comments
            .entry(issue_key.to_string())
            .or_default()
            .push(body.to_string());
        Ok(())
    }

    fn project_versions(&self, project: &str) -> Result<Vec<JiraVersion>> {
        Ok(self
            .lock()
            .versions
            .get(project)
            .cloned()
            .unwrap_or_default())
    }

    fn version_by_name(&self, project: &str, name: &str) -> Result<Option<JiraVersion>> {
        Ok(self
            .lock()
            .versions
            .get(project)
            .and_then(|versions| versions.iter().find(|v| v.name == name))
            .cloned())
    }

    fn create_version(&self, project: &str, version: &NewVersion) -> Result<JiraVersion> {
        let mut state = self.lock();

        let exists = state
            .versions
            .get(project)
            .is_some_and(|versions| versions.iter().any(|v| v.name == version.name));
        if exists {
            return Err(Error::Api(format!(
                "A version with this name already exists in this project: {}",
                version.name
            )));
        }

        let created = JiraVersion {
            id: Some(state.allocate_id()),
            name: version.name.clone(),
            description: version.description.clone(),
            released: false,
            archived: false,
            start_date: version.start_date,
            release_date: None,
        };
        state
            .versions
            .entry(project.to_string())
            .or_default()
            .push(created.clone());

        Ok(created)
    }

    fn update_version(
        &self,
        project: &str,
        name: &str,
        update: &VersionUpdate,
    ) -> Result<JiraVersion> {
        let mut state = self.lock();
        let version = state
            .versions
            .get_mut(project)
            .and_then(|versions| versions.iter_mut().find(|v| v.name == name))
            .ok_or_else(|| Error::NotFound(format!("version {}", name)))?;

        update.apply(version);
        Ok(version.clone())
    }
}
