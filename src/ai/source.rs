use crate::error::MoveSourceError;
use crate::game::{Board, Piece};

/// Anything that can pick a column for one side of the game: a person at a
/// prompt or the heuristic agent.
pub trait MoveSource {
    /// Pick a column for the current position. The board is read-only; the
    /// session applies the move.
    fn select_move(&mut self, board: &Board) -> Result<usize, MoveSourceError>;

    /// Return the source's display name.
    fn name(&self) -> &str;

    /// The piece this source drops.
    fn piece(&self) -> Piece;
}
