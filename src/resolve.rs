//! target classification and PID-to-endpoint resolution
//!
//! a managed process advertises its endpoint by writing the URL as the
//! first line of `$TMPDIR/mgmt-endpoints/<pid>` at startup. resolution is
//! one file read; the liveness probe only sharpens the error message.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::mgmt::EndpointResolver;

/// how the user spelled the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// whole string is decimal digits: a local process identifier
    Pid(&'a str),
    /// anything else: a literal endpoint URL
    Url(&'a str),
}

impl<'a> Target<'a> {
    /// classification is byte-wise and total; "too big for a pid" is the
    /// resolver's problem, not a classification failure
    pub fn classify(raw: &'a str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Target::Pid(raw)
        } else {
            Target::Url(raw)
        }
    }
}

/// resolver over the endpoint-advertisement directory
pub struct FileResolver {
    dir: PathBuf,
}

impl FileResolver {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        FileResolver { dir: dir.into() }
    }
}

impl Default for FileResolver {
    fn default() -> Self {
        FileResolver::with_dir(env::temp_dir().join("mgmt-endpoints"))
    }
}

impl EndpointResolver for FileResolver {
    fn resolve(&self, pid: &str) -> Result<String> {
        let parsed: libc::pid_t = pid.parse().map_err(|_| Error::InvalidPid {
            pid: pid.to_string(),
        })?;

        // leading zeros collapse here: "007" and "7" name the same file
        let path = self.dir.join(parsed.to_string());
        let unavailable = |reason: String| Error::EndpointUnavailable {
            pid: pid.to_string(),
            reason,
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let url = contents.lines().next().unwrap_or("").trim();
                if url.is_empty() {
                    return Err(unavailable(format!(
                        "advertisement file {} is empty",
                        path.display()
                    )));
                }
                Ok(url.to_string())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let reason = if process_alive(parsed) {
                    "process advertises no endpoint".to_string()
                } else {
                    "no such process".to_string()
                };
                Err(unavailable(reason))
            }
            Err(e) => Err(unavailable(format!(
                "can't read advertisement file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// signal 0 probe; EPERM still means the process exists
fn process_alive(pid: libc::pid_t) -> bool {
    let rc = unsafe { libc::kill(pid, 0) };
    rc == 0 || io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}
