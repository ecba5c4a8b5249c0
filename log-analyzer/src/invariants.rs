use derive_more::{AsRef, Debug, Display, From};
use serde::Serialize;

/// Origin address of a request, as written in the first field of the line.
#[derive(Debug, Display, AsRef, From, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Hostname(String);

impl Hostname {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Hostname {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// Requested route, kept verbatim (no percent-decoding).
#[derive(Debug, Display, AsRef, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Endpoint {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}
