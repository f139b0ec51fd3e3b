//! Per-player win/draw statistics for tictally.
//!
//! # Architecture
//!
//! - **Config**: [`StatsConfig`] is either configured with a
//!   [`RemoteEndpoint`] or unconfigured
//! - **Backends**: [`StatsBackend`] implementations report raw table
//!   results ([`PostgrestBackend`] for Supabase, [`MemoryBackend`] in process)
//! - **Store**: [`StatsStore`] applies the failure policy on top, so
//!   callers never see an error
//!
//! # Example
//!
//! ```no_run
//! use tictally_stats::{StatsConfig, StatsStore};
//!
//! # async fn example() {
//! let store = StatsStore::from_config(&StatsConfig::from_env());
//! let names = vec!["Alice".to_string(), "Bob".to_string()];
//! store.ensure_exists(&names).await;
//! store.increment_win("Alice").await;
//! let stats = store.fetch_stats(&names).await;
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backend;
mod config;
mod error;
mod memory;
mod models;
mod postgrest;
mod store;

pub use backend::StatsBackend;
pub use config::{DEFAULT_TABLE, KEY_VAR, RemoteEndpoint, StatsConfig, URL_VAR};
pub use error::StatsError;
pub use memory::MemoryBackend;
pub use models::{Counter, PlayerStats, StatsMap, StatsRow};
pub use postgrest::PostgrestBackend;
pub use store::StatsStore;
