//! HTTP-agnostic API layer
//!
//! Typed request/response bodies and pure handler functions usable by any
//! HTTP server adapter.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: typed input in, `Result<T, ApiError>` out
//! - **The store is an explicit collaborator**: handlers take the
//!   [`crate::storage::EndpointStore`] port, so tests substitute a fake
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorCode};
pub use handlers::{define_endpoint, fetch_results, invoke_endpoint};
pub use types::{EndpointCreated, ErrorBody, ResultsPage};
