use anyhow::bail;
use clap::Parser;
use todo_tonic_core::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Runtime configuration for the `todo-tonic-server` binary.
///
/// These settings control where the service listens and how `ListTodos`
/// normalizes client-supplied page sizes. All values are parsed from CLI
/// arguments or environment variables, with defaults suitable for local
/// development.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "todo-tonic-server",
    version,
    about = "A gRPC CRUD service for todo items"
)]
pub struct CliArgs {
    /// Page size applied when a client sends `page_size <= 0`.
    ///
    /// Environment variable: `DEFAULT_PAGE_SIZE`
    #[arg(long, env = "DEFAULT_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub default_page_size: i32,

    /// Hard cap on the number of todos returned per `ListTodos` page.
    ///
    /// Requests above this value are clamped rather than rejected. This
    /// bounds the time spent holding the store lock on a single call.
    ///
    /// Environment variable: `MAX_PAGE_SIZE`
    #[arg(long, env = "MAX_PAGE_SIZE", default_value_t = MAX_PAGE_SIZE)]
    pub max_page_size: i32,

    /// Address to listen on (TCP or Unix socket path; use --uds for Unix socket).
    ///
    /// Example: "0.0.0.0:50051" or "/tmp/todo-uds.sock"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:50051"))]
    pub server_addr: String,

    /// Listen on a Unix socket instead of TCP. If set, `SERVER_ADDR` must be a file path.
    #[arg(short, long, default_value_t = false)]
    pub uds: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub default_page_size: i32,
    pub max_page_size: i32,
    pub server_addr: String,
    pub uds: bool,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.default_page_size <= 0 {
            bail!("DEFAULT_PAGE_SIZE must be greater than 0");
        }

        if args.max_page_size < args.default_page_size {
            bail!(
                "MAX_PAGE_SIZE ({}) must not be smaller than DEFAULT_PAGE_SIZE ({})",
                args.max_page_size,
                args.default_page_size
            );
        }

        Ok(Self {
            default_page_size: args.default_page_size,
            max_page_size: args.max_page_size,
            server_addr: args.server_addr,
            uds: args.uds,
        })
    }
}
