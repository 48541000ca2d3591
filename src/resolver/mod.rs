//! Safe-position resolution.
//!
//! Given a layout and a row, pick the position to select. The choice is
//! deterministic: the lowest-numbered column that is not the hazard.

use crate::core::{BoardConfig, Position, Result, RowId, SessionError};
use crate::layout::Layout;

/// A row's hazard together with the position chosen around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub hazard: Position,
    pub position: Position,
}

/// Look up `row`'s hazard and pick the position to select.
///
/// A row absent from the layout yields [`SessionError::MissingRow`]; a board
/// with no column besides the hazard yields `InvalidConfiguration`.
pub fn resolve_row(layout: &Layout, row: RowId, board: &BoardConfig) -> Result<Resolution> {
    let hazard = layout.hazard(row).ok_or(SessionError::MissingRow { row })?;

    let position = Position::all(board.column_count)
        .find(|&pos| pos != hazard)
        .ok_or_else(|| {
            SessionError::config(format!(
                "no safe position in {row} with {} columns",
                board.column_count
            ))
        })?;

    Ok(Resolution { hazard, position })
}

/// Resolve the position to select in `row`.
///
/// Returns the smallest position in `1..=board.column_count` that differs
/// from the row's hazard. A row absent from the layout is an invariant
/// violation and yields [`SessionError::MissingRow`].
pub fn resolve_safe_position(layout: &Layout, row: RowId, board: &BoardConfig) -> Result<Position> {
    resolve_row(layout, row, board).map(|r| r.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_row(hazard: u8) -> Layout {
        Layout::from_entries_unchecked(vec![(RowId::new(1), Position::new(hazard))])
    }

    #[test]
    fn test_picks_first_column_unless_hazard() {
        let board = BoardConfig::default();
        for hazard in 2..=5 {
            let pos = resolve_safe_position(&single_row(hazard), RowId::new(1), &board).unwrap();
            assert_eq!(pos, Position::new(1));
        }
    }

    #[test]
    fn test_hazard_in_first_column() {
        let board = BoardConfig::default();
        let pos = resolve_safe_position(&single_row(1), RowId::new(1), &board).unwrap();
        assert_eq!(pos, Position::new(2));
    }

    #[test]
    fn test_resolve_row_reports_hazard() {
        let board = BoardConfig::default();
        let resolution = resolve_row(&single_row(1), RowId::new(1), &board).unwrap();
        assert_eq!(resolution.hazard, Position::new(1));
        assert_eq!(resolution.position, Position::new(2));
    }

    #[test]
    fn test_missing_row() {
        let board = BoardConfig::default();
        let err = resolve_safe_position(&single_row(3), RowId::new(4), &board).unwrap_err();
        assert_eq!(err, SessionError::MissingRow { row: RowId::new(4) });
    }

    #[test]
    fn test_degenerate_board_has_no_safe_position() {
        let board = BoardConfig::new(1, 1);
        let err = resolve_safe_position(&single_row(1), RowId::new(1), &board).unwrap_err();
        assert!(matches!(err, SessionError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_does_not_touch_layout() {
        let board = BoardConfig::default();
        let layout = single_row(1);
        let before = layout.clone();
        let _ = resolve_safe_position(&layout, RowId::new(1), &board);
        assert_eq!(layout, before);
    }
}
