//! JIRA credentials

use serde::Deserialize;
use std::fmt;

use crate::{Error, Result};

const MAX_URL_LEN: usize = 100;
const MAX_USERNAME_LEN: usize = 100;
const MAX_PROJECT_LEN: usize = 3;

/// Credentials and target project for one request
#[derive(Clone, Deserialize, PartialEq)]
#[serde(try_from = "RawJiraAuth")]
pub struct JiraAuth {
    url: String,
    project: String,
    username: String,
    api_token: String,
}

impl fmt::Debug for JiraAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraAuth")
            .field("url", &self.url)
            .field("project", &self.project)
            .field("username", &self.username)
            .field("api_token", &"***")
            .finish()
    }
}

#[derive(Deserialize)]
struct RawJiraAuth {
    jira_url: String,
    jira_project: String,
    jira_username: String,
    jira_token: String,
}

impl TryFrom<RawJiraAuth> for JiraAuth {
    type Error = Error;

    fn try_from(raw: RawJiraAuth) -> Result<Self> {
        JiraAuth::new(raw.jira_url, raw.jira_project, raw.jira_username, raw.jira_token)
    }
}

impl JiraAuth {
    pub fn new(url: String, project: String, username: String, api_token: String) -> Result<Self> {
        let auth = Self {
            url,
            project,
            username,
            api_token,
        };
        auth.validate()?;
        Ok(auth)
    }

    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::Auth("Jira URL cannot be empty".to_string()));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(Error::Auth(
                "Jira URL must start with http:// or https://".to_string(),
            ));
        }
        if self.url.chars().count() > MAX_URL_LEN {
            return Err(Error::Auth(format!(
                "Jira URL too long (max {} characters)",
                MAX_URL_LEN
            )));
        }

        if self.project.trim().is_empty() {
            return Err(Error::Auth("Jira project cannot be empty".to_string()));
        }
        if self.project.chars().count() > MAX_PROJECT_LEN {
            return Err(Error::Auth(format!(
                "Jira project key too long (max {} characters)",
                MAX_PROJECT_LEN
            )));
        }

        if self.username.trim().is_empty() {
            return Err(Error::Auth("Jira username cannot be empty".to_string()));
        }
        if self.username.chars().count() > MAX_USERNAME_LEN {
            return Err(Error::Auth(format!(
                "Jira username too long (max {} characters)",
                MAX_USERNAME_LEN
            )));
        }

        if self.api_token.is_empty() {
            return Err(Error::Auth("Jira token cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.username, self.api_token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(url: &str, project: &str, username: &str, token: &str) -> Result<JiraAuth> {
        JiraAuth::new(
            url.to_string(),
            project.to_string(),
            username.to_string(),
            token.to_string(),
        )
    }

    #[test]
    fn test_valid_auth() {
        let auth = auth("https://dev.atlassian.net/", "TJP", "user@dev.com", "secret").unwrap();
        assert_eq!(auth.project(), "TJP");
        assert_eq!(auth.url(), "https://dev.atlassian.net/");
        assert_eq!(auth.username(), "user@dev.com");
    }

    #[test]
    fn test_basic_auth_header() {
        let auth = auth("https://dev.atlassian.net/", "TJP", "user", "token").unwrap();
        // base64("user:token")
        assert_eq!(auth.to_basic_auth(), "Basic dXNlcjp0b2tlbg==");
    }

    #[test]
    fn test_debug_hides_token() {
        let auth = auth("https://dev.atlassian.net/", "TJP", "user", "hunter2").unwrap();
        let debug = format!("{:?}", auth);
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(auth("", "TJP", "user", "token").is_err());
        assert!(auth("dev.atlassian.net", "TJP", "user", "token").is_err());
        let long_url = format!("https://{}.net", "a".repeat(100));
        assert!(auth(&long_url, "TJP", "user", "token").is_err());
    }

    #[test]
    fn test_invalid_project() {
        assert!(auth("https://dev.atlassian.net", "", "user", "token").is_err());
        assert!(auth("https://dev.atlassian.net", "TJPX", "user", "token").is_err());
    }

    #[test]
    fn test_invalid_username_or_token() {
        assert!(auth("https://dev.atlassian.net", "TJP", " ", "token").is_err());
        assert!(auth("https://dev.atlassian.net", "TJP", &"u".repeat(101), "token").is_err());
        assert!(matches!(
            auth("https://dev.atlassian.net", "TJP", "user", ""),
            Err(Error::Auth(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let auth: JiraAuth = serde_json::from_str(
            r#"{
                "jira_url": "https://dev.atlassian.net/",
                "jira_project": "TJP",
                "jira_username": "user@dev.com",
                "jira_token": "secret_api_token"
            }"#,
        )
        .unwrap();
        assert_eq!(auth.project(), "TJP");

        let invalid = serde_json::from_str::<JiraAuth>(
            r#"{
                "jira_url": "https://dev.atlassian.net/",
                "jira_project": "TOOLONG",
                "jira_username": "user@dev.com",
                "jira_token": "secret_api_token"
            }"#,
        );
        assert!(invalid.is_err());
    }
}
