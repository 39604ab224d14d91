//! Endpoint definitions
//!
//! An [`Endpoint`] is immutable once created and is identified externally
//! by an opaque key generated at store time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The HTTP verbs a virtual endpoint can be defined for
///
/// The set is fixed; anything else is rejected at decode time. `OPTION`
/// (without the trailing S) is the spelling the wire protocol uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTION
    Option,
}

impl Method {
    /// The allowed keyword spellings, in declaration order
    pub const KEYWORDS: &'static [&'static str] =
        &["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTION"];

    /// The wire spelling of this verb
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Option => "OPTION",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTION" => Ok(Self::Option),
            _ => Err(format!("unknown method: {s}")),
        }
    }
}

/// What a virtual endpoint replies with when invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponse {
    /// HTTP status to reply with
    pub status: u16,
    /// Headers to reply with
    pub headers: BTreeMap<String, String>,
    /// Response body, if any
    pub body: Option<String>,
}

impl Default for CannedResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body: None,
        }
    }
}

/// A user-defined virtual HTTP endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// The verb the endpoint answers to; any other verb is a miss
    pub method: Method,
    /// The canned response; `None` replays [`CannedResponse::default`]
    pub response: Option<CannedResponse>,
}
