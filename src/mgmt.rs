//! collaborator interfaces for the management framework
//!
//! the wire protocol is not ours: the runner only needs "resolve a PID to an
//! endpoint", "open a connection", and three calls on the open connection.
//! keeping these behind traits lets the snapshot pass run against scripted
//! doubles in tests and against the HTTP client in the bin.

use std::fmt;

use serde::Deserialize;

use crate::error::Result;
use crate::value::AttrValue;

/// opaque, totally ordered managed-object identity.
///
/// canonical form is the `domain:properties` string the framework returned;
/// ordering is plain string order, which is all the report needs for
/// deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectName(String);

impl ObjectName {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// one attribute descriptor from the framework's introspection call
#[derive(Debug, Clone, Deserialize)]
pub struct AttrInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub readable: bool,
}

/// maps a local PID to the management endpoint it advertises
pub trait EndpointResolver {
    /// `pid` is the digit string exactly as the user spelled it; parsing it
    /// into the platform pid type is the resolver's job so that failures
    /// come back as typed outcomes rather than panics upstream
    fn resolve(&self, pid: &str) -> Result<String>;
}

/// opens connections to management endpoints
pub trait Connector {
    type Conn: Connection;

    fn connect(&self, endpoint: &str) -> Result<Self::Conn>;
}

/// one open connection to a management endpoint
pub trait Connection {
    /// identities of the managed objects matching `pattern`; may contain
    /// duplicates and comes back in no particular order
    fn query_names(&mut self, pattern: &str) -> Result<Vec<ObjectName>>;

    /// attribute descriptors for one object, in introspection order
    fn describe(&mut self, name: &ObjectName) -> Result<Vec<AttrInfo>>;

    /// current value of one readable attribute
    fn read_attribute(&mut self, name: &ObjectName, attr: &str) -> Result<AttrValue>;
}
