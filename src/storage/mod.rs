//! Storage abstraction for endpoints and captured requests
//!
//! The handlers talk to an [`EndpointStore`] port; the backing store is a
//! collaborator that can be swapped out. [`MemoryStore`] is the bundled
//! implementation. All stored items expire after a fixed retention window
//! from write time.

pub mod memory;

pub use memory::MemoryStore;

use crate::models::{CapturedRequest, Endpoint, ResultRecord};

/// Storage port for endpoint definitions and their request logs
///
/// Individual operations are atomic; there are no cross-item transactional
/// guarantees.
pub trait EndpointStore: Send + Sync {
    /// Store a new endpoint; returns the generated opaque key
    fn add_endpoint(&self, endpoint: &Endpoint) -> anyhow::Result<String>;

    /// Append a captured request to an endpoint's log, stamping the time
    ///
    /// Returns `None` if the key is unknown (or expired).
    fn add_request(
        &self,
        key: &str,
        request: CapturedRequest,
    ) -> anyhow::Result<Option<ResultRecord>>;

    /// Look up an endpoint by key
    fn get_endpoint(&self, key: &str) -> anyhow::Result<Option<Endpoint>>;

    /// Fetch an endpoint's captured requests, newest first
    ///
    /// `from` is an epoch-millisecond lower bound (inclusive); `None` means
    /// "everything still retained". Returns `None` if the key is unknown.
    fn get_results(
        &self,
        key: &str,
        from: Option<i64>,
    ) -> anyhow::Result<Option<Vec<ResultRecord>>>;
}
