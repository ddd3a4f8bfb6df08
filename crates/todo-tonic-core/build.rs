use std::env;
use std::path::PathBuf;

/// Builds the gRPC client and server code for the `todo.proto` definition
/// using `tonic-prost-build`.
///
/// The generated code lands in the crate's `OUT_DIR` together with a file
/// descriptor set (`todo_descriptor.bin`) that the server registers with
/// `tonic-reflection`.
///
/// # Files and Paths
///
/// - Proto file: `proto/todo.proto`
/// - Includes: `proto/`
///
/// # Output
///
/// Generated code is accessible in Rust via:
///
/// ```rust
/// pub mod proto {
///     tonic_prost::include_proto!("todo.v1");
/// }
/// ```
///
/// This module includes both gRPC service traits and message types.
fn main() {
    // Ensure a `protoc` binary is available without a system install by
    // falling back to the vendored one when `PROTOC` is not already set.
    if env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            // Safe: the build script is single-threaded at this point.
            unsafe {
                env::set_var("PROTOC", protoc);
            }
        }
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("todo_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/todo.proto"], &["proto"])
        .unwrap();
}
