#![doc = include_str!("../README.md")]

mod common;
pub use common::*;

/// Generated protobuf and gRPC bindings for the `todo.v1` package.
pub mod proto {
    tonic::include_proto!("todo.v1");

    /// Encoded file descriptor set for the `todo.v1` package, registered
    /// with the reflection service at startup.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("todo_descriptor");
}
