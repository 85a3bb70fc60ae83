use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::source::MoveSource;
use crate::error::MoveSourceError;
use crate::game::{Board, Piece, CENTER_COLUMN};

/// Rule-based opponent. Each call looks at the position afresh:
///
/// 1. take a winning drop if there is one,
/// 2. otherwise block the opponent's winning drop,
/// 3. otherwise play the column closest to the center among the moves that
///    do not let the opponent win straight away (or among all legal moves
///    when every one of them does).
///
/// Ties in step 3 are broken at random, which is the only randomness in the
/// engine. The search never looks past the opponent's immediate reply.
pub struct HeuristicAgent {
    name: String,
    piece: Piece,
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new(piece: Piece) -> Self {
        HeuristicAgent {
            name: "Agent".to_string(),
            piece,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Agent with a reproducible tie-break.
    pub fn with_seed(piece: Piece, seed: u64) -> Self {
        HeuristicAgent {
            name: "Agent".to_string(),
            piece,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Pick a column for `board`. Fails only when no column is legal.
    pub fn choose_column(&mut self, board: &Board) -> Result<usize, MoveSourceError> {
        let valid = board.valid_columns();
        if valid.is_empty() {
            return Err(MoveSourceError::NoLegalMoves);
        }

        let safe = safe_moves(board, self.piece);

        if let Some(&col) = winning_moves(board, self.piece).first() {
            debug!(piece = self.piece.name(), col, "taking winning move");
            return Ok(col);
        }

        if let Some(&col) = winning_moves(board, self.piece.other()).first() {
            debug!(piece = self.piece.name(), col, "blocking opponent win");
            return Ok(col);
        }

        let pool = if safe.is_empty() {
            debug!(piece = self.piece.name(), "every move is unsafe, ignoring danger");
            valid
        } else {
            safe
        };

        let candidates = center_candidates(&pool);
        let col = if candidates.contains(&CENTER_COLUMN) {
            CENTER_COLUMN
        } else {
            candidates[self.rng.random_range(0..candidates.len())]
        };
        debug!(piece = self.piece.name(), col, ?candidates, "positional choice");
        Ok(col)
    }
}

impl MoveSource for HeuristicAgent {
    fn select_move(&mut self, board: &Board) -> Result<usize, MoveSourceError> {
        self.choose_column(board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }
}

/// Board after `piece` drops into `col`, or `None` if the column is closed.
fn simulate(board: &Board, col: usize, piece: Piece) -> Option<Board> {
    let row = board.next_open_row(col)?;
    Some(board.with_piece(row, col, piece))
}

/// Columns where dropping `piece` wins immediately, ascending.
pub fn winning_moves(board: &Board, piece: Piece) -> Vec<usize> {
    board
        .valid_columns()
        .into_iter()
        .filter(|&col| simulate(board, col, piece).is_some_and(|next| next.check_win(piece)))
        .collect()
}

/// Columns where dropping `piece` leaves the opponent a winning reply.
pub fn unsafe_moves(board: &Board, piece: Piece) -> Vec<usize> {
    board
        .valid_columns()
        .into_iter()
        .filter(|&col| {
            simulate(board, col, piece)
                .is_some_and(|future| !winning_moves(&future, piece.other()).is_empty())
        })
        .collect()
}

/// Legal columns that are not in [`unsafe_moves`].
pub fn safe_moves(board: &Board, piece: Piece) -> Vec<usize> {
    let unsafe_cols = unsafe_moves(board, piece);
    board
        .valid_columns()
        .into_iter()
        .filter(|col| !unsafe_cols.contains(col))
        .collect()
}

/// Members of `pool` tied for the smallest distance to the center column.
pub fn center_candidates(pool: &[usize]) -> Vec<usize> {
    let Some(best) = pool.iter().map(|&col| col.abs_diff(CENTER_COLUMN)).min() else {
        return Vec::new();
    };
    pool.iter()
        .copied()
        .filter(|&col| col.abs_diff(CENTER_COLUMN) == best)
        .collect()
}
