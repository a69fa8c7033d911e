use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by an [`Asker`](crate::ask::Asker) implementation.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("interrupted")]
    Interrupted,

    #[error("invalid answer for '{name}': {reason}")]
    InvalidAnswer { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not prompt")]
    Prompt(#[source] AskError),

    #[error("unable to confirm")]
    Confirm(#[source] std::io::Error),

    #[error("could not read template {}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl From<AskError> for SubmitError {
    fn from(e: AskError) -> Self {
        SubmitError::Prompt(e)
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
