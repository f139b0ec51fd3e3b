//! Stats rows and domain types.

use std::collections::HashMap;

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Win and draw counts for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct PlayerStats {
    /// Games won.
    pub wins: u32,
    /// Games drawn.
    pub draws: u32,
}

impl PlayerStats {
    /// Returns the value of one counter.
    pub fn get(&self, counter: Counter) -> u32 {
        match counter {
            Counter::Wins => self.wins,
            Counter::Draws => self.draws,
        }
    }

    /// Sets the value of one counter.
    pub fn set(&mut self, counter: Counter, value: u32) {
        match counter {
            Counter::Wins => self.wins = value,
            Counter::Draws => self.draws = value,
        }
    }
}

/// Stats keyed by player name. Names absent from the store are absent here.
pub type StatsMap = HashMap<String, PlayerStats>;

/// One of the two counters stored per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    /// The `wins` column.
    Wins,
    /// The `draws` column.
    Draws,
}

impl Counter {
    /// Column name in the stats table.
    pub fn column(self) -> &'static str {
        match self {
            Counter::Wins => "wins",
            Counter::Draws => "draws",
        }
    }
}

/// Row as returned by the remote table.
///
/// Counters may come back null; they read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    /// Player name (unique key).
    pub name: String,
    /// Games won.
    #[serde(default)]
    pub wins: Option<u32>,
    /// Games drawn.
    #[serde(default)]
    pub draws: Option<u32>,
}

impl StatsRow {
    /// Creates a zero-valued row.
    pub fn zero(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wins: Some(0),
            draws: Some(0),
        }
    }

    /// Converts the row into counts, treating nulls as zero.
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::new(self.wins.unwrap_or(0), self.draws.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_counters_read_as_zero() {
        let row: StatsRow = serde_json::from_str(r#"{"name":"Alice","wins":null}"#)
            .expect("valid row");
        assert_eq!(row.stats(), PlayerStats::new(0, 0));
    }

    #[test]
    fn test_counter_access() {
        let mut stats = PlayerStats::new(2, 5);
        assert_eq!(stats.get(Counter::Draws), 5);
        stats.set(Counter::Wins, 3);
        assert_eq!(stats.wins, 3);
        assert_eq!(Counter::Draws.column(), "draws");
    }
}
