use std::{io, path::PathBuf};

use thiserror::Error;

pub type CustomResult<T> = Result<T, CustomError>;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Not a git repository: {0}")]
    NotAGitRepository(String),

    #[error("Cannot enter '{}': {source}", .path.display())]
    DirectoryChange {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create merge request: branch '{0}' does not exist on the remote")]
    BranchNotFound(String),

    #[error("Cannot create merge request: no release branch found on the remote")]
    NoReleaseBranch,

    #[error("Invalid selection: '{0}'")]
    Input(String),

    #[error("Cannot resolve the current branch (is HEAD detached?)")]
    UnknownCurrentBranch,

    #[error("No remote URL configured for this repository")]
    NoRemote,

    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error("Failed to open '{url}' in the browser: {source}")]
    BrowserOpen {
        url: String,
        #[source]
        source: io::Error,
    },
}
