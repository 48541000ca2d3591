//! Hazard layouts.
//!
//! A `Layout` maps every row of the board to the one position in that row
//! holding the hazard. Layouts are generated fresh for each round and never
//! change afterwards; they are backed by `im::OrdMap` so handing a copy to
//! an event sink or a summary is O(1).

mod generator;

pub use generator::{generate_layout, FixedLayout, LayoutGenerator, UniformLayout};

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, Position, Result, RowId, SessionError};

/// Hazard position for each row of one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    hazards: OrdMap<RowId, Position>,
}

impl Layout {
    /// Build a layout and check it against the board.
    ///
    /// Fails if a row is repeated, missing or off the board, or if a hazard
    /// lies outside `1..=column_count`.
    pub fn from_entries(
        board: &BoardConfig,
        entries: impl IntoIterator<Item = (RowId, Position)>,
    ) -> Result<Self> {
        let mut hazards = OrdMap::new();
        for (row, hazard) in entries {
            if hazards.insert(row, hazard).is_some() {
                return Err(SessionError::config(format!("{row} appears twice in layout")));
            }
        }
        let layout = Self { hazards };
        layout.validate(board)?;
        Ok(layout)
    }

    /// Build a layout without checking it.
    ///
    /// Later duplicates overwrite earlier ones. Rows may be missing; the
    /// resolver reports those as [`SessionError::MissingRow`].
    pub fn from_entries_unchecked(entries: impl IntoIterator<Item = (RowId, Position)>) -> Self {
        Self {
            hazards: entries.into_iter().collect(),
        }
    }

    /// Check that every board row has exactly one in-range hazard.
    pub fn validate(&self, board: &BoardConfig) -> Result<()> {
        for (row, hazard) in self.iter() {
            if !board.contains_row(row) {
                return Err(SessionError::config(format!(
                    "{row} is outside the board's {} rows",
                    board.row_count
                )));
            }
            if !(1..=board.column_count).contains(&hazard.raw()) {
                return Err(SessionError::config(format!(
                    "hazard {hazard} in {row} is outside 1..={}",
                    board.column_count
                )));
            }
        }
        if let Some(row) = RowId::all(board.row_count).find(|r| !self.hazards.contains_key(r)) {
            return Err(SessionError::MissingRow { row });
        }
        Ok(())
    }

    /// Hazard position for a row, if the row is present.
    #[must_use]
    pub fn hazard(&self, row: RowId) -> Option<Position> {
        self.hazards.get(&row).copied()
    }

    /// Number of rows in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    /// Check if the layout has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    /// Iterate `(row, hazard)` pairs in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, Position)> + '_ {
        self.hazards.iter().map(|(row, hazard)| (*row, *hazard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(hazards: &[u8]) -> Vec<(RowId, Position)> {
        hazards
            .iter()
            .enumerate()
            .map(|(i, &h)| (RowId::new(i as u8 + 1), Position::new(h)))
            .collect()
    }

    #[test]
    fn test_from_entries_valid() {
        let board = BoardConfig::new(3, 5);
        let layout = Layout::from_entries(&board, entries(&[1, 5, 3])).unwrap();

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.hazard(RowId::new(2)), Some(Position::new(5)));
        assert_eq!(layout.hazard(RowId::new(4)), None);
    }

    #[test]
    fn test_from_entries_missing_row() {
        let board = BoardConfig::new(3, 5);
        let err = Layout::from_entries(&board, entries(&[1, 2])).unwrap_err();
        assert_eq!(err, SessionError::MissingRow { row: RowId::new(3) });
    }

    #[test]
    fn test_from_entries_rejects_out_of_range() {
        let board = BoardConfig::new(2, 5);
        assert!(Layout::from_entries(&board, entries(&[1, 6])).is_err());
        assert!(Layout::from_entries(&board, entries(&[0, 2])).is_err());
        assert!(Layout::from_entries(&board, entries(&[1, 2, 3])).is_err());
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let board = BoardConfig::new(1, 5);
        let dup = vec![
            (RowId::new(1), Position::new(2)),
            (RowId::new(1), Position::new(3)),
        ];
        assert!(matches!(
            Layout::from_entries(&board, dup),
            Err(SessionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_iter_is_row_ordered() {
        let layout = Layout::from_entries_unchecked(vec![
            (RowId::new(3), Position::new(1)),
            (RowId::new(1), Position::new(4)),
            (RowId::new(2), Position::new(2)),
        ]);
        let rows: Vec<u8> = layout.iter().map(|(r, _)| r.raw()).collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_serialization() {
        let board = BoardConfig::new(3, 5);
        let layout = Layout::from_entries(&board, entries(&[2, 2, 4])).unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, deserialized);
    }
}
