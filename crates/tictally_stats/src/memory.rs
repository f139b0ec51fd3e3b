//! Process-local stats table.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::{Counter, PlayerStats, StatsBackend, StatsError, StatsMap};

/// Stats backend holding rows in memory.
///
/// Counts every write so callers can observe how often results were
/// persisted. Names marked as failing reject reads and writes, which
/// stands in for a flaky remote row.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: Mutex<BTreeMap<String, PlayerStats>>,
    failing: HashSet<String>,
    writes: AtomicUsize,
}

impl MemoryBackend {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes reads and writes for the given names fail.
    pub fn with_failing(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.failing.extend(names.into_iter().map(Into::into));
        self
    }

    /// Stores a row directly, replacing any existing one.
    pub async fn seed(&self, name: impl Into<String>, stats: PlayerStats) {
        self.rows.lock().await.insert(name.into(), stats);
    }

    /// Returns a copy of every stored row.
    pub async fn snapshot(&self) -> BTreeMap<String, PlayerStats> {
        self.rows.lock().await.clone()
    }

    /// Number of counter writes performed so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self, name: &str) -> Result<(), StatsError> {
        if self.failing.contains(name) {
            return Err(StatsError::new(format!("Simulated failure for '{}'", name)));
        }
        Ok(())
    }
}

#[async_trait]
impl StatsBackend for MemoryBackend {
    #[instrument(skip(self))]
    async fn insert_missing(&self, names: &[String]) -> Result<(), StatsError> {
        let mut rows = self.rows.lock().await;
        for name in names.iter().filter(|n| !n.trim().is_empty()) {
            rows.entry(name.clone()).or_default();
        }
        debug!(total = rows.len(), "Ensured rows");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn select(&self, names: &[String]) -> Result<StatsMap, StatsError> {
        let rows = self.rows.lock().await;
        Ok(names
            .iter()
            .filter_map(|n| rows.get(n).map(|s| (n.clone(), *s)))
            .collect())
    }

    #[instrument(skip(self))]
    async fn read(&self, name: &str, counter: Counter) -> Result<u32, StatsError> {
        self.check(name)?;
        let rows = self.rows.lock().await;
        rows.get(name)
            .map(|s| s.get(counter))
            .ok_or_else(|| StatsError::new(format!("No stats row for '{}'", name)))
    }

    #[instrument(skip(self))]
    async fn write(&self, name: &str, counter: Counter, value: u32) -> Result<(), StatsError> {
        self.check(name)?;
        let mut rows = self.rows.lock().await;
        let row = rows
            .get_mut(name)
            .ok_or_else(|| StatsError::new(format!("No stats row for '{}'", name)))?;
        row.set(counter, value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
