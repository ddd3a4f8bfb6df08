//! Shared types and error definitions used across the todo service.
//!
//! The `common` module defines reusable abstractions that are shared
//! between the gRPC service layer and the store.
//!
//! ## Submodules
//!
//! - [`error`] - Centralized service error type used throughout request
//!   handling.
//! - [`types`] - Common constants for pagination.
//!
//! These definitions are not tied to any specific layer and are imported
//! throughout the server for error propagation and page-size handling.

pub mod error;
pub mod types;

pub use error::{Error, Result};
