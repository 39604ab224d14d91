//! Domain schema
//!
//! The two decoders the request handlers run against untrusted input: one
//! for endpoint definitions, one for the `from` pagination cursor. Built
//! from the [`crate::decode`] combinators; the decoders are constructed
//! once and live for the process lifetime.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde_json::Value;

use crate::decode::{self, DecodeError, Decoder};
use crate::models::{CannedResponse, Endpoint, Method};

/// Decoder for an endpoint definition request body
pub static ENDPOINT: LazyLock<Decoder<Endpoint>> = LazyLock::new(endpoint);

/// Decoder for the optional `from` cursor: a numeric-string timestamp
/// lower bound in epoch milliseconds, or `null` for "no lower bound"
pub static FROM_CURSOR: LazyLock<Decoder<Option<i64>>> = LazyLock::new(from_cursor);

/// Decode the raw `from` query parameter; an absent parameter is a valid
/// "no lower bound" cursor, not an error
pub fn decode_from_param(raw: Option<&str>) -> Result<Option<i64>, DecodeError> {
    let value = raw.map_or(Value::Null, |s| Value::String(s.to_string()));
    FROM_CURSOR.decode(&value)
}

fn method() -> Decoder<Method> {
    decode::keywords(Method::KEYWORDS)
        .and_then(|s| s.parse::<Method>().map_err(DecodeError::new))
}

fn status() -> Decoder<u16> {
    decode::number().and_then(|n| {
        if n.fract() == 0.0 && (100.0..=999.0).contains(&n) {
            Ok(n as u16)
        } else {
            Err(DecodeError::new(format!(
                "expected an HTTP status code, got {n}"
            )))
        }
    })
}

fn response() -> Decoder<CannedResponse> {
    decode::map3(
        decode::optional_field_or("status", status(), 200),
        decode::optional_field_or("headers", decode::dict(decode::string()), BTreeMap::new()),
        decode::optional_field("body", decode::string()),
        |status, headers, body| CannedResponse {
            status,
            headers,
            body,
        },
    )
}

fn endpoint() -> Decoder<Endpoint> {
    decode::map2(
        decode::field("method", method()),
        decode::optional_field("response", response()),
        |method, response| Endpoint { method, response },
    )
}

fn from_cursor() -> Decoder<Option<i64>> {
    decode::to_number(decode::string())
        .map(|n| n as i64)
        .or_none()
}
