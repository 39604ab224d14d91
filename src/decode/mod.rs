//! Decoder combinator library
//!
//! A `Decoder<T>` is a pure, reusable function from an untyped
//! [`serde_json::Value`] to either a well-typed `T` or a [`DecodeError`]
//! describing what was expected and where in the input it was missing.
//!
//! Decoders for compound shapes are assembled from decoders for their
//! parts: [`field`]/[`optional_field`] read one record field each, and
//! [`map2`]/[`map3`] zip field decoders into a struct. Components run in
//! declaration order, so the first failing field is always the one
//! reported. Unknown input fields are ignored.
//!
//! Decoders never mutate their input, never perform I/O, and are safe to
//! share across threads - build them once at startup and reuse them for
//! every request.
//!
//! # Examples
//!
//! ```
//! use hooktrack::decode::{self, Decoder};
//! use serde_json::json;
//!
//! let greeting: Decoder<String> = decode::field("greeting", decode::string());
//! let value = json!({ "greeting": "hello", "ignored": 1 });
//! assert_eq!(greeting.decode(&value).unwrap(), "hello");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

// =============================================================================
// FAILURE TYPE
// =============================================================================

/// Why a decode failed: a message plus the path of record fields and map
/// keys leading to the offending value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.path, .message))]
pub struct DecodeError {
    message: String,
    path: Vec<String>,
}

fn render(path: &[String], message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{}: {message}", path.join("."))
    }
}

impl DecodeError {
    /// Create a failure with an empty path
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// Prepend a path segment; used by combinators when delegating into a
    /// record field or map entry
    #[must_use]
    pub fn at(mut self, segment: &str) -> Self {
        self.path.insert(0, segment.to_string());
        self
    }

    /// The failure message without its path
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The dotted path from the input root to the failing value
    #[must_use]
    pub fn path(&self) -> String {
        self.path.join(".")
    }
}

// =============================================================================
// DECODER
// =============================================================================

/// A pure validate-and-convert function from untyped JSON to a `T`
pub struct Decoder<T> {
    run: Arc<dyn Fn(&Value) -> Result<T, DecodeError> + Send + Sync>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Decoder")
    }
}

impl<T: 'static> Decoder<T> {
    /// Build a decoder from a closure
    #[must_use]
    pub fn from_fn(
        run: impl Fn(&Value) -> Result<T, DecodeError> + Send + Sync + 'static,
    ) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Run the decoder against one input value
    pub fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        (self.run)(value)
    }

    /// Transform a successful decode
    #[must_use]
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoder<U> {
        Decoder::from_fn(move |value| self.decode(value).map(&f))
    }

    /// Chain a fallible transformation onto a successful decode
    #[must_use]
    pub fn and_then<U: 'static>(
        self,
        f: impl Fn(T) -> Result<U, DecodeError> + Send + Sync + 'static,
    ) -> Decoder<U> {
        Decoder::from_fn(move |value| self.decode(value).and_then(&f))
    }

    /// Top-level optional: `null` decodes to `None`, anything else delegates
    ///
    /// Used for inputs that may be absent entirely, such as a query
    /// parameter, where the caller substitutes `Value::Null` for "absent".
    #[must_use]
    pub fn or_none(self) -> Decoder<Option<T>> {
        Decoder::from_fn(move |value| match value {
            Value::Null => Ok(None),
            other => self.decode(other).map(Some),
        })
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Decode a JSON string
#[must_use]
pub fn string() -> Decoder<String> {
    Decoder::from_fn(|value| match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(DecodeError::new(format!(
            "expected a string, got {}",
            describe(other)
        ))),
    })
}

/// Decode a JSON number
#[must_use]
pub fn number() -> Decoder<f64> {
    Decoder::from_fn(|value| {
        value.as_f64().ok_or_else(|| {
            DecodeError::new(format!("expected a number, got {}", describe(value)))
        })
    })
}

/// Decode a string that exactly matches one of a fixed list of keywords
#[must_use]
pub fn keywords(allowed: &'static [&'static str]) -> Decoder<String> {
    Decoder::from_fn(move |value| match value {
        Value::String(s) if allowed.contains(&s.as_str()) => Ok(s.clone()),
        other => Err(DecodeError::new(format!(
            "expected one of {}, got {}",
            allowed.join(", "),
            describe(other)
        ))),
    })
}

/// Decode a string-keyed mapping whose values all satisfy `value`
///
/// Arrays are rejected. The first failing entry wins; its error is
/// annotated with the offending key.
#[must_use]
pub fn dict<T: 'static>(value: Decoder<T>) -> Decoder<BTreeMap<String, T>> {
    Decoder::from_fn(move |input| {
        let Some(map) = input.as_object() else {
            return Err(DecodeError::new(format!(
                "expected a string-keyed object, got {}",
                describe(input)
            )));
        };
        let mut out = BTreeMap::new();
        for (key, item) in map {
            let decoded = value.decode(item).map_err(|e| e.at(key))?;
            out.insert(key.clone(), decoded);
        }
        Ok(out)
    })
}

/// Decode via `inner` to a string, then parse the whole string as a number
///
/// Partial parses are rejected: the entire string must be a valid, finite
/// number. The empty string is rejected.
#[must_use]
pub fn to_number(inner: Decoder<String>) -> Decoder<f64> {
    Decoder::from_fn(move |input| {
        let raw = inner.decode(input)?;
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(DecodeError::new(format!(
                "expected a numeric string, got {raw:?}"
            ))),
        }
    })
}

// =============================================================================
// RECORD FIELDS
// =============================================================================

/// Decode a required field of a record
///
/// Fails if the input is not an object, if the field is absent, or if the
/// field's value fails `inner`. Inner failures are annotated with the
/// field name.
#[must_use]
pub fn field<T: 'static>(name: &'static str, inner: Decoder<T>) -> Decoder<T> {
    Decoder::from_fn(move |input| {
        let record = as_record(input)?;
        match record.get(name) {
            Some(value) => inner.decode(value).map_err(|e| e.at(name)),
            None => Err(DecodeError::new(format!(
                "missing required field \"{name}\""
            ))),
        }
    })
}

/// Decode an optional field of a record
///
/// Absent or `null` yields `None`. A present but invalid value fails; it
/// never silently falls back.
#[must_use]
pub fn optional_field<T: 'static>(name: &'static str, inner: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::from_fn(move |input| {
        let record = as_record(input)?;
        match record.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => inner.decode(value).map(Some).map_err(|e| e.at(name)),
        }
    })
}

/// Decode an optional field of a record, substituting `default` when absent
#[must_use]
pub fn optional_field_or<T>(name: &'static str, inner: Decoder<T>, default: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    optional_field(name, inner).map(move |value| value.unwrap_or_else(|| default.clone()))
}

// =============================================================================
// COMBINATORS
// =============================================================================

/// Combine two field decoders into one value
///
/// `a` runs before `b`, so the first failing field in declaration order is
/// the one reported.
#[must_use]
pub fn map2<A, B, T, F>(a: Decoder<A>, b: Decoder<B>, f: F) -> Decoder<T>
where
    A: 'static,
    B: 'static,
    T: 'static,
    F: Fn(A, B) -> T + Send + Sync + 'static,
{
    Decoder::from_fn(move |value| Ok(f(a.decode(value)?, b.decode(value)?)))
}

/// Combine three field decoders into one value, in declaration order
#[must_use]
pub fn map3<A, B, C, T, F>(a: Decoder<A>, b: Decoder<B>, c: Decoder<C>, f: F) -> Decoder<T>
where
    A: 'static,
    B: 'static,
    C: 'static,
    T: 'static,
    F: Fn(A, B, C) -> T + Send + Sync + 'static,
{
    Decoder::from_fn(move |value| Ok(f(a.decode(value)?, b.decode(value)?, c.decode(value)?)))
}

// =============================================================================
// HELPERS
// =============================================================================

fn as_record(input: &Value) -> Result<&serde_json::Map<String, Value>, DecodeError> {
    input.as_object().ok_or_else(|| {
        DecodeError::new(format!("expected an object, got {}", describe(input)))
    })
}

/// Describe a value's shape (and, for scalars, its content) for messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
