//! Error types for the todo service.
//!
//! This module defines the central `Error` enum, which captures every
//! reportable failure in the todo service. It implements `From<Error>` for
//! `tonic::Status` so errors propagate to gRPC clients with the
//! appropriate status codes and messages.
//!
//! ## Error Cases
//! - `NotFound`: The referenced todo does not exist (or was deleted).
//! - `InvalidPageToken`: A `ListTodos` resume token could not be decoded.

use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the todo service.
#[derive(Clone, thiserror::Error, Debug)]
pub enum Error {
    /// No todo with the given id exists. Deleted ids are never revived, so
    /// this also covers every id that has been deleted.
    #[error("todo not found: {id}")]
    NotFound { id: String },

    /// The client supplied a page token that is not one of ours.
    ///
    /// This is deliberately not normalized to "start over": restarting
    /// pagination from the beginning would hand the caller duplicates.
    #[error("invalid page token: {reason}")]
    InvalidPageToken { reason: String },
}

impl Error {
    /// Shorthand for the common lookup-miss case.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { id } => Status::not_found(format!("todo not found: {id}")),
            Error::InvalidPageToken { reason } => Status::invalid_argument(reason),
        }
    }
}
