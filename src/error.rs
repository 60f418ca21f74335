//! Startup and serving failures of the host binary.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable holds a value that does not parse.
    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
