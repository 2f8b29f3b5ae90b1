//! blocking HTTP client for the management endpoint
//!
//! the concrete side of the collaborator traits. a managed process serves a
//! small JSON surface:
//!
//!   GET {base}                                   reachability probe
//!   GET {base}/objects?pattern=P                 -> ["domain:name", ...]
//!   GET {base}/objects/{name}/attributes         -> [{name, type, readable}]
//!   GET {base}/objects/{name}/attributes/{attr}  -> any JSON value
//!
//! path segments are percent-encoded by URL construction, never by hand.

use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::{Error, Result};
use crate::mgmt::{AttrInfo, Connection, Connector, ObjectName};
use crate::value::AttrValue;

pub struct HttpConnector {
    client: Client,
}

impl HttpConnector {
    /// client with the library's default timeouts; the tool configures none
    /// of its own
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(HttpConnector { client })
    }
}

impl Connector for HttpConnector {
    type Conn = HttpConnection;

    fn connect(&self, endpoint: &str) -> Result<HttpConnection> {
        let base = Url::parse(endpoint).map_err(|e| Error::MalformedEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(Error::MalformedEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", base.scheme()),
            });
        }

        // one probe round-trip. any HTTP response proves the endpoint is
        // reachable; the status doesn't matter until real requests go out
        self.client
            .get(base.clone())
            .send()
            .map_err(|e| Error::ConnectFailed {
                url: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(HttpConnection {
            client: self.client.clone(),
            base,
        })
    }
}

#[derive(Debug)]
pub struct HttpConnection {
    client: Client,
    base: Url,
}

impl HttpConnection {
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Request(format!("endpoint {} cannot carry a path", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> std::result::Result<T, String> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?;
        resp.json::<T>()
            .map_err(|e| format!("bad payload from {url}: {e}"))
    }
}

impl Connection for HttpConnection {
    fn query_names(&mut self, pattern: &str) -> Result<Vec<ObjectName>> {
        let mut url = self.url(&["objects"])?;
        url.query_pairs_mut().append_pair("pattern", pattern);
        let names: Vec<String> = self.get_json(url).map_err(Error::Request)?;
        Ok(names.into_iter().map(ObjectName::new).collect())
    }

    fn describe(&mut self, name: &ObjectName) -> Result<Vec<AttrInfo>> {
        let url = self.url(&["objects", name.as_str(), "attributes"])?;
        self.get_json(url).map_err(Error::Request)
    }

    fn read_attribute(&mut self, name: &ObjectName, attr: &str) -> Result<AttrValue> {
        let url = self.url(&["objects", name.as_str(), "attributes", attr])?;
        let value: serde_json::Value = self.get_json(url).map_err(|reason| Error::AttributeRead {
            object: name.to_string(),
            attr: attr.to_string(),
            reason,
        })?;
        Ok(AttrValue::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_endpoint_is_malformed() {
        let connector = HttpConnector::new().unwrap();
        assert!(matches!(
            connector.connect("not a url"),
            Err(Error::MalformedEndpoint { .. })
        ));
    }

    #[test]
    fn foreign_scheme_is_malformed() {
        let connector = HttpConnector::new().unwrap();
        let err = connector
            .connect("service:jmx:rmi:///jndi/rmi://localhost:9999/jmxrmi")
            .unwrap_err();
        match err {
            Error::MalformedEndpoint { url, .. } => {
                assert!(url.starts_with("service:jmx"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreachable_endpoint_is_connect_failed() {
        let connector = HttpConnector::new().unwrap();
        // port 1 is never serving HTTP
        assert!(matches!(
            connector.connect("http://127.0.0.1:1/"),
            Err(Error::ConnectFailed { .. })
        ));
    }

    #[test]
    fn object_urls_encode_segments() {
        let conn = HttpConnection {
            client: Client::new(),
            base: Url::parse("http://127.0.0.1:9900/mgmt/").unwrap(),
        };
        let url = conn
            .url(&["objects", "java.lang:type=Memory Pool/old", "attributes"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9900/mgmt/objects/java.lang:type=Memory%20Pool%2Fold/attributes"
        );
    }
}
