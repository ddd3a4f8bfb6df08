//! gRPC service implementation for the todo store.
//!
//! This module contains the logic for handling client-facing gRPC
//! requests. Each RPC decodes into exactly one store operation; transport
//! concerns (status codes, proto conversions) stay here and never leak
//! into the store.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`TodoApi`).

pub mod handler;
