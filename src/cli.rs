//! CLI args for the mgmtdump bin

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "mgmtdump",
    version,
    about = "Dump managed objects and attributes from a running process"
)]
pub struct Args {
    /// PID of a local process, or a management endpoint URL
    pub target: Option<String>,

    /// object name pattern; matches every object when omitted
    pub pattern: Option<String>,
}
