//! Server-side components of the todo service.
//!
//! This module contains the building blocks necessary to run the gRPC
//! server: configuration, the in-memory store, the service handler, and
//! telemetry setup.
//!
//! ## Submodules
//!
//! - [`config`] - CLI/environment configuration and validation.
//! - [`service`] - gRPC service implementation over the store.
//! - [`store`] - The in-memory todo store (the only owner of state).
//! - [`telemetry`] - Tracing-based structured logging initialization.
//!
//! These components are wired together in `main.rs`, which serves the
//! `TodoService` defined in `todo-tonic-core`.

pub mod config;
pub mod service;
pub mod store;
pub mod telemetry;
