//! Captured requests and their stored records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoint::Method;

/// One inbound call to a virtual endpoint, as captured at the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedRequest {
    /// The verb the caller used
    pub method: Method,
    /// Request headers, lowercased at the transport adapter
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON body, if one was sent
    pub body: Option<Value>,
}

/// A captured request plus the time it was stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// The captured request
    pub request: CapturedRequest,
    /// Epoch milliseconds at which the request was recorded
    pub requested_at: i64,
}
