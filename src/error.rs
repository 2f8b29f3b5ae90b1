//! error types for mgmtdump

use thiserror::Error;

/// everything that can go wrong during one snapshot pass.
///
/// the first four variants are fatal: the runner prints them on the data
/// stream and returns -1. `Request` covers mid-scan query/introspection
/// failures, which also abort. `AttributeRead` is soft: logged to the
/// diagnostic stream, replaced with a sentinel, scan continues.
#[derive(Error, Debug)]
pub enum Error {
    #[error("PID {pid} is out of range for this platform")]
    InvalidPid { pid: String },

    #[error(
        "can't resolve management endpoint for PID {pid} ({reason}); \
         the target process may not expose a management endpoint"
    )]
    EndpointUnavailable { pid: String, reason: String },

    #[error(
        "failed to resolve target and connect; the target process may not \
         expose a management endpoint (bad endpoint URL '{url}': {reason})"
    )]
    MalformedEndpoint { url: String, reason: String },

    #[error("connection refused to endpoint {url}: {reason}")]
    ConnectFailed { url: String, reason: String },

    #[error("management request failed: {0}")]
    Request(String),

    #[error("failed to read attribute '{attr}' of '{object}': {reason}")]
    AttributeRead {
        object: String,
        attr: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
