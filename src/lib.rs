//! hooktrack - define a virtual HTTP endpoint with a canned response and
//! track every request made to it
//!
//! This library provides the decoder combinator engine used to validate
//! untrusted JSON input, the domain schema built on top of it, the
//! HTTP-agnostic API handlers, and the pluggable request store.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod cli;
pub mod decode;
pub mod models;
pub mod schema;
pub mod server;
pub mod storage;
