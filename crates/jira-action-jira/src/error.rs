//! Error types for the tracker integration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] jira_action_core::Error),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("JIRA API error: {0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No released version matches prefix '{0}' and no version name was given")]
    MissingVersionName(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the HTTP layer should answer with a 400-class status
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Core(e) => e.is_client_error(),
            Error::Auth(_) | Error::NotFound(_) | Error::MissingVersionName(_) => true,
            Error::Api(_) => false,
        }
    }
}
