//! Stats store configuration.

use std::path::Path;

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::StatsError;

/// Environment variable holding the Supabase project URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the Supabase API key.
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Default name of the stats table.
pub const DEFAULT_TABLE: &str = "player_stats";

/// Location and credentials of the remote stats table.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct RemoteEndpoint {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    url: String,
    /// API key sent with every request.
    key: String,
    /// Table holding one row per player.
    table: String,
}

impl RemoteEndpoint {
    /// Creates an endpoint using the default table.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Replaces the table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

impl std::fmt::Debug for RemoteEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteEndpoint")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

/// Whether the stats store can be reached at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsConfig {
    /// Both URL and key are present.
    Configured(RemoteEndpoint),
    /// Either value is missing; stats are disabled.
    Unconfigured,
}

impl StatsConfig {
    /// Builds a config from optional raw values.
    ///
    /// Both must be present and non-blank, otherwise the result is
    /// [`StatsConfig::Unconfigured`].
    #[instrument(skip_all)]
    pub fn from_values(url: Option<String>, key: Option<String>) -> Self {
        let url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        let key = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        match (url, key) {
            (Some(url), Some(key)) => {
                info!(url = %url, "Stats store configured");
                Self::Configured(RemoteEndpoint::new(url, key))
            }
            (url, key) => {
                info!(
                    has_url = url.is_some(),
                    has_key = key.is_some(),
                    "Stats store not configured"
                );
                Self::Unconfigured
            }
        }
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_KEY` from the process environment.
    #[instrument]
    pub fn from_env() -> Self {
        Self::from_values(std::env::var(URL_VAR).ok(), std::env::var(KEY_VAR).ok())
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_KEY` from a dotenv file.
    ///
    /// The process environment is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        debug!("Loading stats config from env file");
        let mut url = None;
        let mut key = None;
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (name, value) = item?;
            match name.as_str() {
                URL_VAR => url = Some(value),
                KEY_VAR => key = Some(value),
                _ => {}
            }
        }
        Ok(Self::from_values(url, key))
    }

    /// Replaces the table name of a configured store.
    pub fn with_table(self, table: impl Into<String>) -> Self {
        match self {
            Self::Configured(endpoint) => Self::Configured(endpoint.with_table(table)),
            Self::Unconfigured => Self::Unconfigured,
        }
    }

    /// Returns true when the remote store is reachable in principle.
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    /// Returns the endpoint, if configured.
    pub fn endpoint(&self) -> Option<&RemoteEndpoint> {
        match self {
            Self::Configured(endpoint) => Some(endpoint),
            Self::Unconfigured => None,
        }
    }

    /// Passive status text for the footer indicator.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Configured(_) => "Stats env loaded",
            Self::Unconfigured => "Stats env not set",
        }
    }
}
