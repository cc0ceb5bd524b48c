//! Custom Error and Result types for this library

use std::any::Any;
use thiserror::Error;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum UserboardError {
    /// The seed source answered with a non-success status code
    #[error("failed to fetch users: server responded with status {_0}")]
    Status(u16),

    /// Transport level failure talking to the seed source
    #[error("failed to fetch users: {_0}")]
    Transport(String),

    /// The seed source answered with a body that is not a list of users
    #[error("failed to decode users: {_0}")]
    Decode(String),

    /// The source panicked while fetching
    #[error("thread error: {_0}")]
    ThreadError(String),
}

impl From<ureq::Error> for UserboardError {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::StatusCode(code) => Self::Status(code),
            ureq::Error::Json(e) => Self::Decode(e.to_string()),
            e => Self::Transport(e.to_string()),
        }
    }
}

impl From<Box<dyn Any + Send>> for UserboardError {
    fn from(value: Box<dyn Any + Send>) -> Self {
        if let Some(s) = value.downcast_ref::<&'static str>() {
            Self::ThreadError(format!("Thread panicked with: {}", s))
        } else if let Some(s) = value.downcast_ref::<String>() {
            Self::ThreadError(format!("Thread panicked with: {}", s))
        } else {
            Self::ThreadError("Thread panicked with an unknown type".into())
        }
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`UserboardError`]
pub type Result<T> = std::result::Result<T, UserboardError>;

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
