//! Storage backend abstraction.

use async_trait::async_trait;

use crate::{Counter, StatsError, StatsMap};

/// Raw table operations behind [`StatsStore`](crate::StatsStore).
///
/// Backends report every failure; the store decides what to swallow.
#[async_trait]
pub trait StatsBackend: Send + Sync + std::fmt::Debug {
    /// Inserts zero-valued rows for names not yet stored.
    ///
    /// Existing rows are left as they are.
    async fn insert_missing(&self, names: &[String]) -> Result<(), StatsError>;

    /// Loads the rows for the given names. Missing names are left out.
    async fn select(&self, names: &[String]) -> Result<StatsMap, StatsError>;

    /// Reads one counter. A missing row is an error.
    async fn read(&self, name: &str, counter: Counter) -> Result<u32, StatsError>;

    /// Overwrites one counter.
    async fn write(&self, name: &str, counter: Counter, value: u32) -> Result<(), StatsError>;
}
