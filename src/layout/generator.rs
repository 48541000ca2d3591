//! Layout generation policies.

use crate::core::{BoardConfig, GameRng, RowId};

use super::Layout;

/// Produces the hazard layout for a new round.
///
/// Generators are swappable so tests can replace randomness with a fixed
/// board. Implementations must return a layout that passes
/// [`Layout::validate`] for the given board.
pub trait LayoutGenerator {
    /// Generate a fresh layout.
    fn generate(&mut self, board: &BoardConfig, rng: &mut GameRng) -> Layout;
}

/// Uniform generator: each row's hazard is drawn independently from
/// `1..=column_count`.
#[derive(Clone, Debug, Default)]
pub struct UniformLayout;

impl LayoutGenerator for UniformLayout {
    fn generate(&mut self, board: &BoardConfig, rng: &mut GameRng) -> Layout {
        generate_layout(board, rng)
    }
}

/// Generate a uniform layout for the board.
pub fn generate_layout(board: &BoardConfig, rng: &mut GameRng) -> Layout {
    Layout::from_entries_unchecked(
        RowId::all(board.row_count).map(|row| (row, rng.gen_position(board.column_count))),
    )
}

/// Replays the same layout every round.
#[derive(Clone, Debug)]
pub struct FixedLayout {
    layout: Layout,
}

impl FixedLayout {
    /// Create a generator that always returns `layout`.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl LayoutGenerator for FixedLayout {
    fn generate(&mut self, _board: &BoardConfig, _rng: &mut GameRng) -> Layout {
        self.layout.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_uniform_layout_is_valid() {
        let board = BoardConfig::default();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let layout = UniformLayout.generate(&board, &mut rng);
            assert_eq!(layout.len(), 10);
            assert!(layout.validate(&board).is_ok());
        }
    }

    #[test]
    fn test_uniform_layout_is_seed_deterministic() {
        let board = BoardConfig::default();
        let a = generate_layout(&board, &mut GameRng::new(5));
        let b = generate_layout(&board, &mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_layout_replays() {
        let board = BoardConfig::new(2, 5);
        let layout = Layout::from_entries(
            &board,
            vec![(RowId::new(1), Position::new(1)), (RowId::new(2), Position::new(3))],
        )
        .unwrap();

        let mut generator = FixedLayout::new(layout.clone());
        let mut rng = GameRng::new(0);
        assert_eq!(generator.generate(&board, &mut rng), layout);
        assert_eq!(generator.generate(&board, &mut rng), layout);
    }
}
