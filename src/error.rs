//! Error types for git-switch-interactive
//!
//! Uses `thiserror` for library errors. Every variant is fatal: the binary
//! prints it and exits non-zero, nothing is retried.

use thiserror::Error;

/// Result type alias for menu operations
pub type SwitchResult<T> = Result<T, SwitchError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum SwitchError {
    /// Branch listing could not be obtained
    #[error("error when running git branch: {0}")]
    SourceUnavailable(String),

    /// `git switch` exited unsuccessfully
    #[error("error when switching to branch '{branch}'.\n{details}")]
    SwitchFailed { branch: String, details: String },

    /// `git branch -D` exited unsuccessfully
    #[error("error when deleting branch '{branch}'.\n{details}")]
    DeleteFailed { branch: String, details: String },

    /// Terminal device could not be opened or put into raw mode
    #[error("terminal device unavailable: {0}")]
    DeviceUnavailable(#[source] std::io::Error),

    /// Reading an input frame from the terminal failed
    #[error("failed to read terminal input: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Writing a frame to standard output failed
    #[error("failed to write menu output: {0}")]
    Output(#[from] std::io::Error),
}
