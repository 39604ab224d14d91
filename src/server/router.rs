//! Method + path routing
//!
//! Maps an inbound call to one of the three API operations:
//!
//! | Trigger                           | Operation        |
//! |-----------------------------------|------------------|
//! | `POST /endpoints`                 | define endpoint  |
//! | `GET /endpoints/{key}/results`    | fetch results    |
//! | `{any verb} /{key}`               | invoke endpoint  |
//!
//! A leading `/api` prefix is accepted and stripped. Everything else is a
//! 404. The invoke branch treats the body as an opaque JSON passthrough.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::api::{self, ApiError, ErrorBody};
use crate::models::Method;
use crate::storage::EndpointStore;

/// A transport-agnostic view of one inbound HTTP request
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// Uppercase verb as sent on the wire, e.g. `POST`
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// Raw query string, if any, without the leading `?`
    pub query: Option<String>,
    /// Headers, names lowercased
    pub headers: BTreeMap<String, String>,
    /// Raw request body, if any
    pub body: Option<String>,
}

/// A transport-agnostic response
#[derive(Debug, Clone)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Response headers, in order
    pub headers: Vec<(String, String)>,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// Route one request to a handler and produce its reply
pub fn route(store: &dyn EndpointStore, req: &RawRequest) -> Reply {
    let path = req.path.strip_prefix("/api").unwrap_or(&req.path);

    if req.method == "POST" && path == "/endpoints" {
        return respond(define(store, req));
    }
    if req.method == "GET" {
        if let Some(key) = results_key(path) {
            let from = query_param(req.query.as_deref(), "from");
            return respond(api::fetch_results(store, key, from.as_deref()));
        }
    }
    if let Some(key) = invoke_key(path) {
        return match invoke(store, key, req) {
            Ok(reply) => reply,
            Err(e) => error_reply(&e),
        };
    }
    error_reply(&ApiError::not_found("path not found"))
}

fn define(store: &dyn EndpointStore, req: &RawRequest) -> Result<api::EndpointCreated, ApiError> {
    let body = parse_json_body(req.body.as_deref())?.unwrap_or(Value::Null);
    api::define_endpoint(store, &body)
}

fn invoke(store: &dyn EndpointStore, key: &str, req: &RawRequest) -> Result<Reply, ApiError> {
    // An unrecognized verb can never match a stored definition
    let method: Method = req
        .method
        .parse()
        .map_err(|_| ApiError::not_found("path not found"))?;
    let body = parse_json_body(req.body.as_deref())?;
    let canned = api::invoke_endpoint(store, key, method, req.headers.clone(), body)?;
    Ok(Reply {
        status: canned.status,
        headers: canned.headers.into_iter().collect(),
        body: canned.body.unwrap_or_default().into_bytes(),
    })
}

/// `/endpoints/{key}/results` with a non-empty, slash-free key
fn results_key(path: &str) -> Option<&str> {
    let key = path.strip_prefix("/endpoints/")?.strip_suffix("/results")?;
    (!key.is_empty() && !key.contains('/')).then_some(key)
}

/// `/{key}` with a non-empty, slash-free key
fn invoke_key(path: &str) -> Option<&str> {
    let key = path.strip_prefix('/')?;
    (!key.is_empty() && !key.contains('/')).then_some(key)
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

fn parse_json_body(body: Option<&str>) -> Result<Option<Value>, ApiError> {
    match body {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => serde_json::from_str(s).map(Some).map_err(|_| {
            ApiError::bad_request(format!("Only JSON body is supported for now: {s}"))
        }),
    }
}

// =============================================================================
// REPLY CONVERSION
// =============================================================================

fn respond<T: serde::Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => json_reply(200, &data),
        Err(e) => error_reply(&e),
    }
}

fn error_reply(error: &ApiError) -> Reply {
    json_reply(error.status_code(), &ErrorBody::new(error.message.clone()))
}

fn json_reply<T: serde::Serialize>(status: u16, data: &T) -> Reply {
    let body = serde_json::to_vec(data).unwrap_or_else(|_| b"{}".to_vec());
    Reply {
        status,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body,
    }
}
