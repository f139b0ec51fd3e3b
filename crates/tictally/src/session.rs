//! Effect execution and the local stats cache.

use tictally_game::Effect;
use tictally_stats::{PlayerStats, StatsMap, StatsStore};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Local read-through copy of the players' stats.
///
/// Replaced wholesale after every fetch. Names the store has not
/// reported read as zero.
#[derive(Debug, Clone, Default)]
pub struct StatsCache {
    stats: StatsMap,
}

impl StatsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached stats for a name, zero if unknown.
    pub fn get(&self, name: &str) -> PlayerStats {
        self.stats.get(name).copied().unwrap_or_default()
    }

    /// Replaces the cache with freshly fetched stats.
    pub fn replace(&mut self, stats: StatsMap) {
        debug!(count = stats.len(), "Stats cache refreshed");
        self.stats = stats;
    }
}

/// Runs one effect chain to completion and returns the refreshed stats.
///
/// The chain is strictly ordered: the write (or row creation) finishes
/// before the refresh starts.
#[instrument(skip(store), fields(effect = %effect))]
pub async fn run_effect(store: &StatsStore, effect: Effect) -> StatsMap {
    let names = effect.players().names();
    match &effect {
        Effect::RegisterPlayers(_) => store.ensure_exists(&names).await,
        Effect::RecordWin { winner, .. } => store.increment_win(winner).await,
        Effect::RecordDraw(_) => store.increment_draws(&names).await,
    }
    store.fetch_stats(&names).await
}

/// Runs effect chains one at a time and reports refreshed stats back to
/// the event loop.
///
/// A single worker task drains a queue, so a chain finishes (write, then
/// refresh) before the next one starts and refreshes arrive in the order
/// the effects were queued.
#[derive(Debug, Clone)]
pub struct EffectRunner {
    enabled: bool,
    tx: mpsc::UnboundedSender<Effect>,
}

impl EffectRunner {
    /// Starts the worker and returns the runner with the receiver for
    /// refreshed stats. Must be called inside a tokio runtime.
    #[instrument(skip(store), fields(enabled = store.is_enabled()))]
    pub fn new(store: StatsStore) -> (Self, mpsc::UnboundedReceiver<StatsMap>) {
        let (tx, effects) = mpsc::unbounded_channel();
        let (refresh_tx, refreshed) = mpsc::unbounded_channel();
        let enabled = store.is_enabled();
        tokio::spawn(drain(store, effects, refresh_tx));
        (Self { enabled, tx }, refreshed)
    }

    /// Returns true when queued effects reach a store.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues the effect behind any still in flight.
    ///
    /// Chains are never cancelled; one still queued after a reset
    /// completes and its refresh is delivered as usual. Returns false
    /// when the store is disabled and nothing was queued.
    #[instrument(skip(self), fields(effect = %effect))]
    pub fn submit(&self, effect: Effect) -> bool {
        if !self.enabled {
            debug!("Stats disabled, dropping effect");
            return false;
        }
        if self.tx.send(effect).is_err() {
            warn!("Effect worker gone, dropping effect");
            return false;
        }
        true
    }
}

/// Worker loop: one chain at a time, in queue order.
async fn drain(
    store: StatsStore,
    mut effects: mpsc::UnboundedReceiver<Effect>,
    refreshed: mpsc::UnboundedSender<StatsMap>,
) {
    while let Some(effect) = effects.recv().await {
        let stats = run_effect(&store, effect).await;
        if refreshed.send(stats).is_err() {
            info!("Event loop gone, stopping effect worker");
            break;
        }
    }
    debug!("Effect worker stopped");
}
