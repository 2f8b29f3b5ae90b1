//! mgmtdump - management snapshot utility

use std::io::{self, Write};
use std::process;

use clap::Parser;
use mgmtdump::cli::Args;
use mgmtdump::http::HttpConnector;
use mgmtdump::resolve::FileResolver;
use mgmtdump::snapshot;

fn main() -> anyhow::Result<()> {
    // attribute read failures land on the diagnostic stream; default the
    // filter so they are visible without RUST_LOG set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let Some(target) = args.target else {
        println!(
            "Specify the PID or connection URL as first argument, \
             object pattern as second (optional)"
        );
        process::exit(-1);
    };

    let resolver = FileResolver::default();
    let connector = HttpConnector::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = snapshot::run(&resolver, &connector, &target, args.pattern.as_deref(), &mut out)?;
    out.flush()?;

    process::exit(code);
}
