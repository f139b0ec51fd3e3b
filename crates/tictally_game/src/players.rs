//! Player identities for a session.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::instrument;

use super::types::Mark;

/// Display names for both sides, fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct PlayerIdentity {
    /// Name of the X side.
    x: String,
    /// Name of the O side.
    o: String,
}

impl PlayerIdentity {
    /// Creates an identity from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if either name is blank after trimming.
    #[instrument]
    pub fn new(x: &str, o: &str) -> Result<Self, NameError> {
        let (x, o) = (x.trim(), o.trim());
        if x.is_empty() {
            return Err(NameError::new("Player X name is empty"));
        }
        if o.is_empty() {
            return Err(NameError::new("Player O name is empty"));
        }
        Ok(Self {
            x: x.to_string(),
            o: o.to_string(),
        })
    }

    /// Returns the name playing the given mark.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Returns both names, X first.
    pub fn names(&self) -> Vec<String> {
        vec![self.x.clone(), self.o.clone()]
    }
}

/// Rejected player name input.
#[derive(Debug, Clone, Display, Error)]
#[display("Name error: {} at {}:{}", message, file, line)]
pub struct NameError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NameError {
    /// Creates a new name error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
