//! Error types for civix

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Please provide a reason for rejection.")]
    EmptyRejectionReason,

    #[error("No issue is pending rejection")]
    NoPendingRejection,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid date window: {0}")]
    InvalidDateWindow(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
