//! HTTP server adapters
//!
//! [`router`] is the pure method+path dispatcher, testable without
//! sockets; [`tiny_http`] binds it to a real listener.

pub mod router;
pub mod tiny_http;

pub use router::{route, RawRequest, Reply};
pub use tiny_http::serve;
