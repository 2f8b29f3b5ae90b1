//! the snapshot pass itself
//!
//! one linear run: resolve, connect, query, walk objects, print. no retries
//! and no loops back to earlier stages. fatal failures print on the data
//! stream and return -1; a failed attribute read is contained to a sentinel
//! so the rest of the scan still happens.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::error::Error;
use crate::mgmt::{Connection, Connector, EndpointResolver};
use crate::resolve::Target;

/// matches every object in every naming domain
pub const DEFAULT_PATTERN: &str = "*:*";

/// sentinel for descriptors marked unreadable; no read is attempted
pub const NON_READABLE: &str = "#NON_READABLE";

/// sentinel for reads that failed
pub const READ_ERROR: &str = "#ERROR";

/// run one snapshot of `target` against `pattern`, writing the report to
/// `out`. returns the process exit code; `Err` only for sink write failures.
pub fn run<R, C, W>(
    resolver: &R,
    connector: &C,
    target: &str,
    pattern: Option<&str>,
    out: &mut W,
) -> io::Result<i32>
where
    R: EndpointResolver,
    C: Connector,
    W: Write,
{
    let url = match Target::classify(target) {
        Target::Pid(pid) => match resolver.resolve(pid) {
            Ok(url) => url,
            Err(e) => return fail(out, &e),
        },
        Target::Url(url) => url.to_string(),
    };

    // emitted before the connection attempt, so a refused connect still
    // shows what was dialed
    writeln!(out, "Connect via URL: {url}")?;

    let mut conn = match connector.connect(&url) {
        Ok(conn) => conn,
        Err(e) => return fail(out, &e),
    };

    let pattern = pattern.unwrap_or(DEFAULT_PATTERN);
    writeln!(out, "Will use '{pattern}' as pattern")?;

    // the query interface promises nothing about order or uniqueness
    let names: BTreeSet<_> = match conn.query_names(pattern) {
        Ok(names) => names.into_iter().collect(),
        Err(e) => return fail(out, &e),
    };

    for name in &names {
        writeln!(out, "{name}")?;
        let attrs = match conn.describe(name) {
            Ok(attrs) => attrs,
            Err(e) => return fail(out, &e),
        };
        // descriptors print in introspection order, values defensively
        for attr in attrs {
            let value = if attr.readable {
                match conn.read_attribute(name, &attr.name) {
                    Ok(v) => v.to_string(),
                    Err(e) => {
                        log::warn!("{e}");
                        READ_ERROR.to_string()
                    }
                }
            } else {
                NON_READABLE.to_string()
            };
            writeln!(out, "      {} {} = {}", attr.name, attr.type_name, value)?;
        }
    }

    Ok(0)
}

fn fail<W: Write>(out: &mut W, err: &Error) -> io::Result<i32> {
    writeln!(out, "{err}")?;
    Ok(-1)
}
