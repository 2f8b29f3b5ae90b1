//! mgmtdump: management snapshot library
//!
//! connects to a running process's management endpoint by PID or URL, runs
//! one object-name query, and dumps every readable attribute. one
//! connection, one pass of output, exit.

pub mod cli;
pub mod error;
pub mod http;
pub mod mgmt;
pub mod resolve;
pub mod snapshot;
pub mod value;
