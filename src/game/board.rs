use super::player::Piece;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;
pub const CENTER_COLUMN: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The piece occupying this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Piece::Red),
            Cell::Yellow => Some(Piece::Yellow),
        }
    }
}

/// Result of the game as derived from the grid after a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Piece),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// The 6x7 grid. Row 0 is the bottom row; pieces settle on the lowest empty
/// cell of their column, so a non-empty cell always has a non-empty cell
/// beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from rows listed bottom row first.
    ///
    /// Fails with [`MoveError::FloatingPiece`] if any piece sits above an
    /// empty cell.
    pub fn from_rows(cells: [[Cell; COLS]; ROWS]) -> Result<Self, MoveError> {
        for row in 1..ROWS {
            for col in 0..COLS {
                if cells[row][col] != Cell::Empty && cells[row - 1][col] == Cell::Empty {
                    return Err(MoveError::FloatingPiece { row, col });
                }
            }
        }
        Ok(Board { cells })
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `col` is on the board and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Like [`Board::is_valid_move`], but says why a column is rejected.
    pub fn check_move(&self, col: usize) -> Result<(), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.cells[ROWS - 1][col] != Cell::Empty {
            return Err(MoveError::ColumnFull(col));
        }
        Ok(())
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Lowest empty row of `col`, or `None` if the column is full or off
    /// the board.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Put `piece` at (`row`, `col`). The row must come from
    /// [`Board::next_open_row`].
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty, "cell already occupied");
        debug_assert!(
            row == 0 || self.cells[row - 1][col] != Cell::Empty,
            "piece would float"
        );
        self.cells[row][col] = piece.to_cell();
    }

    /// Copy of this board with `piece` at (`row`, `col`); `self` is untouched.
    pub fn with_piece(&self, row: usize, col: usize, piece: Piece) -> Board {
        let mut next = *self;
        next.place(row, col, piece);
        next
    }

    /// Validate, find the landing row and place, in that order. Returns the
    /// row the piece landed in.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        self.check_move(col)?;
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.place(row, col, piece);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// True iff `piece` has four in a line anywhere on the board.
    pub fn check_win(&self, piece: Piece) -> bool {
        let cell = piece.to_cell();

        self.check_horizontal(cell)
            || self.check_vertical(cell)
            || self.check_diagonal_up(cell)
            || self.check_diagonal_down(cell)
    }

    /// Outcome after `last_mover` dropped a piece. A win is checked before
    /// a full board, so a last-cell win is a win and not a draw.
    pub fn outcome(&self, last_mover: Piece) -> GameOutcome {
        if self.check_win(last_mover) {
            GameOutcome::Winner(last_mover)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Four cells starting at (`row`, `col`) stepping by (`dr`, `dc`) all
    /// hold `cell`. The caller keeps the run on the board.
    fn run_of(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..CONNECT as isize).all(|i| {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            self.cells[r][c] == cell
        })
    }

    /// Horizontal (→)
    fn check_horizontal(&self, cell: Cell) -> bool {
        (0..ROWS).any(|row| (0..=COLS - CONNECT).any(|col| self.run_of(row, col, 0, 1, cell)))
    }

    /// Vertical (↑)
    fn check_vertical(&self, cell: Cell) -> bool {
        (0..=ROWS - CONNECT).any(|row| (0..COLS).any(|col| self.run_of(row, col, 1, 0, cell)))
    }

    /// Rising diagonal (↗)
    fn check_diagonal_up(&self, cell: Cell) -> bool {
        (0..=ROWS - CONNECT)
            .any(|row| (0..=COLS - CONNECT).any(|col| self.run_of(row, col, 1, 1, cell)))
    }

    /// Falling diagonal (↘)
    fn check_diagonal_down(&self, cell: Cell) -> bool {
        (CONNECT - 1..ROWS)
            .any(|row| (0..=COLS - CONNECT).any(|col| self.run_of(row, col, -1, 1, cell)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const R: Cell = Cell::Red;
    const Y: Cell = Cell::Yellow;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.valid_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece_lands_bottom_up() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Piece::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Red);

        let row = board.drop_piece(3, Piece::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Yellow);
    }

    #[test]
    fn test_next_open_row_tracks_drops() {
        for col in 0..COLS {
            let mut board = Board::new();
            for k in 0..ROWS {
                assert_eq!(board.next_open_row(col), Some(k));
                let row = board.next_open_row(col).unwrap();
                board.place(row, col, Piece::Red);
            }
            assert_eq!(board.next_open_row(col), None);
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Piece::Red).unwrap();
        }

        assert!(!board.is_valid_move(0));
        assert_eq!(board.check_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(
            board.drop_piece(0, Piece::Yellow),
            Err(MoveError::ColumnFull(0))
        );
        assert_eq!(board.valid_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert!(!board.is_valid_move(7));
        assert!(!board.is_valid_move(usize::MAX));
        assert_eq!(board.next_open_row(7), None);
        assert_eq!(board.check_move(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(
            board.drop_piece(7, Piece::Red),
            Err(MoveError::InvalidColumn(7))
        );
    }

    #[test]
    fn test_with_piece_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_piece(0, 2, Piece::Yellow);
        assert_eq!(board.get(0, 2), Cell::Empty);
        assert_eq!(next.get(0, 2), Cell::Yellow);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Piece::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());
    }

    #[test]
    fn test_one_empty_cell_is_not_full() {
        let mut board = Board::new();
        for col in 0..COLS {
            let height = if col == 4 { ROWS - 1 } else { ROWS };
            for _ in 0..height {
                board.drop_piece(col, Piece::Yellow).unwrap();
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.valid_columns(), vec![4]);
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_rows([
            [R, R, R, R, E, E, E],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
        ])
        .unwrap();
        assert!(board.check_win(Piece::Red));
        assert!(!board.check_win(Piece::Yellow));
    }

    #[test]
    fn test_broken_horizontal_line_is_not_a_win() {
        let swapped = Board::from_rows([
            [R, R, Y, R, E, E, E],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
        ])
        .unwrap();
        assert!(!swapped.check_win(Piece::Red));

        let gap = Board::from_rows([
            [R, E, R, R, E, E, E],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
        ])
        .unwrap();
        assert!(!gap.check_win(Piece::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Piece::Yellow).unwrap();
        }
        assert!(board.check_win(Piece::Yellow));
        assert!(!board.check_win(Piece::Red));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = Board::from_rows([
            [R, Y, Y, Y, E, E, E],
            [E, R, Y, Y, E, E, E],
            [E, E, R, Y, E, E, E],
            [E, E, E, R, E, E, E],
            [E; COLS],
            [E; COLS],
        ])
        .unwrap();
        assert!(board.check_win(Piece::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        // Mirror image of the rising diagonal: (3,0) (2,1) (1,2) (0,3)
        let board = Board::from_rows([
            [Y, Y, Y, R, E, E, E],
            [Y, Y, R, E, E, E, E],
            [Y, R, E, E, E, E, E],
            [R, E, E, E, E, E, E],
            [E; COLS],
            [E; COLS],
        ])
        .unwrap();
        assert!(board.check_win(Piece::Red));
        assert!(!board.check_win(Piece::Yellow));
    }

    #[test]
    fn test_win_in_top_right_corner() {
        let mut board = Board::new();
        for col in 3..COLS {
            for _ in 0..ROWS - 1 {
                board.drop_piece(col, Piece::Yellow).unwrap();
            }
        }
        // Yellow fills rows 0-4 of columns 3..7, so it already has lines.
        assert!(board.check_win(Piece::Yellow));
        for col in 3..COLS {
            board.drop_piece(col, Piece::Red).unwrap();
        }
        assert!(board.check_win(Piece::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Piece::Red).unwrap();
        }
        assert!(!board.check_win(Piece::Red));
    }

    #[test]
    fn test_outcome_after_fourth_drop() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(0, Piece::Red).unwrap();
            assert_eq!(board.outcome(Piece::Red), GameOutcome::InProgress);
        }
        board.drop_piece(0, Piece::Red).unwrap();
        assert_eq!(board.outcome(Piece::Red), GameOutcome::Winner(Piece::Red));
    }

    #[test]
    fn test_outcome_draw() {
        // Alternating columns, phase-shifted in pairs: no line of four.
        let shift = [0, 0, 1, 1, 0, 0, 1];
        let mut cells = [[E; COLS]; ROWS];
        for row in 0..ROWS {
            for col in 0..COLS {
                cells[row][col] = if (row + shift[col]) % 2 == 0 { R } else { Y };
            }
        }
        let board = Board::from_rows(cells).unwrap();
        assert!(board.is_full());
        assert!(!board.check_win(Piece::Red));
        assert!(!board.check_win(Piece::Yellow));
        assert_eq!(board.outcome(Piece::Yellow), GameOutcome::Draw);
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let result = Board::from_rows([
            [E; COLS],
            [E, E, R, E, E, E, E],
            [E; COLS],
            [E; COLS],
            [E; COLS],
            [E; COLS],
        ]);
        assert_eq!(result, Err(MoveError::FloatingPiece { row: 1, col: 2 }));
    }
}
