//! Row, position and round identifiers.
//!
//! Rows and positions are 1-based, matching how a board is read aloud:
//! row 1 is the bottom rung, position 1 is the leftmost column.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Row identifier (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub u8);

impl RowId {
    /// Create a new row ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The row after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Iterate rows `1..=count`.
    pub fn all(count: u8) -> impl Iterator<Item = RowId> {
        (1..=count).map(RowId)
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row({})", self.0)
    }
}

/// Column position within a row (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(pos: u8) -> Self {
        Self(pos)
    }

    /// Get the raw position value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate positions `1..=count` in ascending order.
    pub fn all(count: u8) -> impl Iterator<Item = Position> {
        (1..=count).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

/// Opaque short token correlating log lines to one round.
///
/// Carries no meaning beyond identity; two rounds started in the same
/// instant still differ because the round number is mixed in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(String);

impl RoundId {
    /// Derive a round ID from the current time and the round number.
    #[must_use]
    pub fn generate(round: u32) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = DefaultHasher::new();
        nanos.hash(&mut hasher);
        round.hash(&mut hasher);
        Self::from_token(format!("{:08x}", hasher.finish() as u32))
    }

    /// Wrap an existing token.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
