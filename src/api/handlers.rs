//! Pure API handlers
//!
//! The three operations of the service. Each takes the store port and
//! typed-ish boundary input, validates with the domain schema, and returns
//! `Result<T, ApiError>`. Decode failures short-circuit before the store
//! is touched; store failures pass their message through as 500s.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::{CannedResponse, CapturedRequest, Method};
use crate::schema;
use crate::storage::EndpointStore;

use super::error::ApiError;
use super::types::{EndpointCreated, ResultsPage};

/// Define a new virtual endpoint from a JSON request body
pub fn define_endpoint(
    store: &dyn EndpointStore,
    body: &Value,
) -> Result<EndpointCreated, ApiError> {
    let endpoint = schema::ENDPOINT.decode(body)?;
    let key = store
        .add_endpoint(&endpoint)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    log::info!("defined endpoint {key} ({})", endpoint.method);
    Ok(EndpointCreated { key })
}

/// Fetch an endpoint's captured requests, newest first
///
/// `from_raw` is the raw `from` query parameter; malformed values are a
/// 400, an unknown key a 404.
pub fn fetch_results(
    store: &dyn EndpointStore,
    key: &str,
    from_raw: Option<&str>,
) -> Result<ResultsPage, ApiError> {
    let from = schema::decode_from_param(from_raw)?;
    let items = store
        .get_results(key, from)
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("endpoint not found"))?;
    Ok(ResultsPage { items })
}

/// Invoke a virtual endpoint: record the call, replay the canned response
///
/// An unknown key or a verb mismatch is indistinguishable from an unknown
/// route to the caller.
pub fn invoke_endpoint(
    store: &dyn EndpointStore,
    key: &str,
    method: Method,
    headers: BTreeMap<String, String>,
    body: Option<Value>,
) -> Result<CannedResponse, ApiError> {
    let endpoint = store
        .get_endpoint(key)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    match endpoint {
        Some(endpoint) if endpoint.method == method => {
            let request = CapturedRequest {
                method,
                headers,
                body,
            };
            store
                .add_request(key, request)
                .map_err(|e| ApiError::internal(e.to_string()))?
                .ok_or_else(|| ApiError::not_found("path not found"))?;
            Ok(endpoint.response.unwrap_or_default())
        },
        _ => Err(ApiError::not_found("path not found")),
    }
}
