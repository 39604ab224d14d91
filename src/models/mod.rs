//! Data models for hooktrack
//!
//! Core abstractions:
//! - Endpoint: a user-defined virtual HTTP target with a canned response
//! - `CapturedRequest`: one inbound call to an endpoint, as stored
//! - `ResultRecord`: a captured request plus the time it arrived

pub mod endpoint;
pub mod result;

pub use endpoint::{CannedResponse, Endpoint, Method};
pub use result::{CapturedRequest, ResultRecord};
