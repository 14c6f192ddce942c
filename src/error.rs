use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("It can't be done because this is not a git repository.")]
    NoGitRepository,

    #[error("Please create some tags first.")]
    NoTagsFound,

    #[error("No 'origin' remote is configured for this repository.")]
    NoOriginRemote,

    #[error("Command `{command}` failed: {detail}")]
    Subprocess { command: String, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autochangelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a subprocess error with the failed command line attached
    pub fn subprocess(command: impl Into<String>, detail: impl Into<String>) -> Self {
        ChangelogError::Subprocess {
            command: command.into(),
            detail: detail.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }
}
