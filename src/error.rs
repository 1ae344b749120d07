//! Unified error type.

use std::net::AddrParseError;

/// Infrastructure failures: configuration, binding, accepting.
///
/// Application-level outcomes (404, 405, 413) are HTTP
/// [`Response`](crate::Response) values, not `Error`s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: AddrParseError,
    },
}
