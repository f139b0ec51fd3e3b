//! Degrading stats store facade.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{Counter, PostgrestBackend, StatsBackend, StatsConfig, StatsError, StatsMap};

/// Stats store handed to everything that persists results.
///
/// Wraps an optional [`StatsBackend`] with the failure policy: every
/// error is logged and swallowed, nothing is retried, and a store
/// without a backend turns every call into a no-op returning empty
/// results. Cloning shares the backend.
#[derive(Debug, Clone, Default)]
pub struct StatsStore {
    backend: Option<Arc<dyn StatsBackend>>,
}

impl StatsStore {
    /// Creates the store described by the config.
    ///
    /// A configured endpoint that cannot be turned into a client degrades
    /// to a disabled store.
    #[instrument(skip(config), fields(configured = config.is_configured()))]
    pub fn from_config(config: &StatsConfig) -> Self {
        match config {
            StatsConfig::Configured(endpoint) => match PostgrestBackend::new(endpoint.clone()) {
                Ok(backend) => Self::with_backend(Arc::new(backend)),
                Err(e) => {
                    warn!(error = %e, "Stats backend unavailable, stats disabled");
                    Self::disabled()
                }
            },
            StatsConfig::Unconfigured => Self::disabled(),
        }
    }

    /// Creates a store that ignores every call.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Creates a store over an explicit backend.
    pub fn with_backend(backend: Arc<dyn StatsBackend>) -> Self {
        info!(?backend, "Stats store enabled");
        Self {
            backend: Some(backend),
        }
    }

    /// Returns true when results will be persisted.
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Creates zero-valued rows for names not yet stored.
    #[instrument(skip(self))]
    pub async fn ensure_exists(&self, names: &[String]) {
        let Some(backend) = &self.backend else {
            return;
        };
        if let Err(e) = backend.insert_missing(names).await {
            warn!(error = %e, "Failed to ensure stats rows");
        }
    }

    /// Fetches stats for the names. Unknown names and failures yield no entry.
    #[instrument(skip(self))]
    pub async fn fetch_stats(&self, names: &[String]) -> StatsMap {
        let Some(backend) = &self.backend else {
            return StatsMap::new();
        };
        match backend.select(names).await {
            Ok(stats) => {
                debug!(count = stats.len(), "Stats fetched");
                stats
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch stats");
                StatsMap::new()
            }
        }
    }

    /// Adds one win for the player.
    #[instrument(skip(self))]
    pub async fn increment_win(&self, name: &str) {
        let Some(backend) = &self.backend else {
            return;
        };
        if name.trim().is_empty() {
            return;
        }
        self.ensure_exists(&[name.to_string()]).await;
        log_increment(name, Counter::Wins, increment(backend.as_ref(), name, Counter::Wins).await);
    }

    /// Adds one draw for each player, independently.
    #[instrument(skip(self))]
    pub async fn increment_draws(&self, names: &[String]) {
        let Some(backend) = &self.backend else {
            return;
        };
        self.ensure_exists(names).await;
        for name in names {
            log_increment(name, Counter::Draws, increment(backend.as_ref(), name, Counter::Draws).await);
        }
    }
}

/// Read-modify-write of one counter. Concurrent writers may lose updates.
async fn increment(
    backend: &dyn StatsBackend,
    name: &str,
    counter: Counter,
) -> Result<u32, StatsError> {
    let current = backend.read(name, counter).await?;
    let next = current.saturating_add(1);
    backend.write(name, counter, next).await?;
    Ok(next)
}

fn log_increment(name: &str, counter: Counter, result: Result<u32, StatsError>) {
    match result {
        Ok(value) => info!(name, column = counter.column(), value, "Stats counter incremented"),
        Err(e) => warn!(name, column = counter.column(), error = %e, "Failed to increment stats counter"),
    }
}
