//! In-memory endpoint store
//!
//! Cross-call state lives behind a single mutex; each operation locks,
//! mutates, and releases. Expired items are invisible to reads and pruned
//! opportunistically on writes, mirroring a TTL policy on a managed store.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use super::EndpointStore;
use crate::models::{CapturedRequest, Endpoint, ResultRecord};

/// In-memory [`EndpointStore`] with a sliding retention window
#[derive(Debug)]
pub struct MemoryStore {
    retention_ms: i64,
    entries: Mutex<HashMap<String, Entry>>,
}

#[derive(Debug)]
struct Entry {
    endpoint: Endpoint,
    stored_at: i64,
    results: Vec<ResultRecord>,
}

impl MemoryStore {
    /// Create a store that retains writes for `retention_secs` seconds
    #[must_use]
    pub fn new(retention_secs: u64) -> Self {
        Self {
            retention_ms: i64::try_from(retention_secs)
                .unwrap_or(i64::MAX)
                .saturating_mul(1000),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Oldest timestamp still retained at `now`
    const fn horizon(&self, now: i64) -> i64 {
        now.saturating_sub(self.retention_ms)
    }

    fn prune(&self, entries: &mut HashMap<String, Entry>, now: i64) {
        let horizon = self.horizon(now);
        entries.retain(|_, entry| entry.stored_at >= horizon);
        for entry in entries.values_mut() {
            entry.results.retain(|r| r.requested_at >= horizon);
        }
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("endpoint store mutex poisoned"))
    }
}

impl Default for MemoryStore {
    /// A store with the standard one-hour retention window
    fn default() -> Self {
        Self::new(3600)
    }
}

impl EndpointStore for MemoryStore {
    fn add_endpoint(&self, endpoint: &Endpoint) -> anyhow::Result<String> {
        let now = Self::now_ms();
        let key = Uuid::new_v4().to_string();
        let mut entries = self.lock()?;
        self.prune(&mut entries, now);
        entries.insert(
            key.clone(),
            Entry {
                endpoint: endpoint.clone(),
                stored_at: now,
                results: Vec::new(),
            },
        );
        log::debug!("stored endpoint {key} ({})", endpoint.method);
        Ok(key)
    }

    fn add_request(
        &self,
        key: &str,
        request: CapturedRequest,
    ) -> anyhow::Result<Option<ResultRecord>> {
        let now = Self::now_ms();
        let mut entries = self.lock()?;
        self.prune(&mut entries, now);
        let Some(entry) = entries.get_mut(key) else {
            return Ok(None);
        };
        let record = ResultRecord {
            request,
            requested_at: now,
        };
        entry.results.push(record.clone());
        log::debug!("recorded request {} for endpoint {key}", record.requested_at);
        Ok(Some(record))
    }

    fn get_endpoint(&self, key: &str) -> anyhow::Result<Option<Endpoint>> {
        let now = Self::now_ms();
        let entries = self.lock()?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.stored_at >= self.horizon(now))
            .map(|entry| entry.endpoint.clone()))
    }

    fn get_results(
        &self,
        key: &str,
        from: Option<i64>,
    ) -> anyhow::Result<Option<Vec<ResultRecord>>> {
        let now = Self::now_ms();
        let entries = self.lock()?;
        let Some(entry) = entries
            .get(key)
            .filter(|entry| entry.stored_at >= self.horizon(now))
        else {
            return Ok(None);
        };
        // Default lower bound is the retention horizon, like a TTL'd table
        let lower = from.unwrap_or_else(|| self.horizon(now)).max(self.horizon(now));
        let mut items: Vec<ResultRecord> = entry
            .results
            .iter()
            .filter(|r| r.requested_at >= lower)
            .cloned()
            .collect();
        items.reverse(); // appended oldest-first; callers want newest first
        Ok(Some(items))
    }
}
