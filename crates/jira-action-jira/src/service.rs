//! Issue and release flows
//!
//! [`JiraService`] combines the release core (version naming, field
//! extraction) with an [`IssueTracker`] for one project.

use chrono::{Local, NaiveDate};
use jira_action_core::models::ReleaseConfig;
use jira_action_core::{fields, latest_released_matching, next_version_name};

use crate::auth::JiraAuth;
use crate::tracker::IssueTracker;
use crate::types::{
    CreateOutcome, IssueFields, JiraVersion, NewVersion, VersionBumpKind, VersionSearch,
    VersionUpdate,
};
use crate::{Error, Result};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct JiraService<T> {
    auth: JiraAuth,
    tracker: T,
    release: ReleaseConfig,
    today: fn() -> NaiveDate,
}

impl<T: IssueTracker> JiraService<T> {
    pub fn new(auth: JiraAuth, tracker: T, release: ReleaseConfig) -> Self {
        Self {
            auth,
            tracker,
            release,
            today: local_today,
        }
    }

    /// Replace the clock used for start and release dates
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn project(&self) -> &str {
        self.auth.project()
    }

    /// Field keys accepted by [`Self::field_value_by_name`]
    pub fn available_fields() -> Vec<&'static str> {
        fields::get_available_fields()
    }

    fn find_issue(&self, issue_key: &str) -> Result<IssueFields> {
        self.tracker
            .issue_fields(issue_key)?
            .ok_or_else(|| Error::NotFound(format!("can not find issue: {}", issue_key)))
    }

    pub fn add_comment(&self, issue_key: &str, comment: &str) -> Result<()> {
        if comment.trim().is_empty() {
            return Err(jira_action_core::Error::Validation(
                "Comment cannot be empty".to_string(),
            )
            .into());
        }

        self.find_issue(issue_key)?;
        self.tracker.add_comment(issue_key, comment)?;
        tracing::info!("Comment added to {}", issue_key);
        Ok(())
    }

    pub fn field_value_by_name(&self, issue_key: &str, field_key: &str) -> Result<String> {
        let issue_fields = self.find_issue(issue_key)?;
        let value = fields::get_value(field_key, &issue_fields)?;
        tracing::debug!("{}, {}, {}", issue_key, field_key, value);
        Ok(value)
    }

    pub fn list_versions(&self, search: &VersionSearch) -> Result<Vec<JiraVersion>> {
        let versions = self.tracker.project_versions(self.project())?;
        Ok(versions
            .into_iter()
            .filter(|version| search.matches(version))
            .collect())
    }

    /// Name following the latest released version starting with `prefix`
    ///
    /// `None` when no released version matches or its name carries no
    /// `major.minor.patch` suffix.
    pub fn generate_next_version_name(
        &self,
        kind: VersionBumpKind,
        prefix: &str,
    ) -> Result<Option<String>> {
        let versions = self.tracker.project_versions(self.project())?;

        let Some(latest) = latest_released_matching(&versions, prefix) else {
            tracing::debug!("No released version matches prefix {}", prefix);
            return Ok(None);
        };

        let next = next_version_name(kind, prefix, &latest.name);
        tracing::debug!(
            "generate_next_version_name, {} ({} after {}) -> {:?}",
            prefix,
            kind,
            latest.name,
            next
        );
        Ok(next)
    }

    /// Create the next version under `prefix`.
    ///
    /// Falls back to `fallback_name` when no name can be generated. Nothing is
    /// created if the project already has a version with the chosen name.
    pub fn create_version(
        &self,
        kind: VersionBumpKind,
        prefix: &str,
        fallback_name: Option<&str>,
    ) -> Result<CreateOutcome> {
        let name = match self.generate_next_version_name(kind, prefix)? {
            Some(name) => name,
            None => fallback_name
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string)
                .ok_or_else(|| Error::MissingVersionName(prefix.to_string()))?,
        };

        if self
            .tracker
            .version_by_name(self.project(), &name)?
            .is_some()
        {
            tracing::warn!("{} is exists", name);
            return Ok(CreateOutcome::AlreadyExists(name));
        }

        let version = self.tracker.create_version(
            self.project(),
            &NewVersion {
                name,
                description: Some(self.release.version_description.clone()),
                start_date: Some((self.today)()),
            },
        )?;
        tracing::info!("{} is created", version.name);
        Ok(CreateOutcome::Created(version))
    }

    /// Mark the named version released as of today
    pub fn release_version(&self, version_name: &str) -> Result<JiraVersion> {
        if self
            .tracker
            .version_by_name(self.project(), version_name)?
            .is_none()
        {
            tracing::warn!("{} is not exists", version_name);
            return Err(Error::NotFound(format!(
                "version is not exists, {}",
                version_name
            )));
        }

        let version = self.tracker.update_version(
            self.project(),
            version_name,
            &VersionUpdate {
                released: Some(true),
                release_date: Some((self.today)()),
            },
        )?;
        tracing::info!("{} is released", version_name);
        Ok(version)
    }
}
