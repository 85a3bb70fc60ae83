use super::board::Cell;

/// The two players' marks. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Red,
    Yellow,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Red => Piece::Yellow,
            Piece::Yellow => Piece::Red,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Red => Cell::Red,
            Piece::Yellow => Cell::Yellow,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Red => "Red",
            Piece::Yellow => "Yellow",
        }
    }

    /// Single-character mark used by the console board.
    pub fn symbol(self) -> char {
        match self {
            Piece::Red => 'O',
            Piece::Yellow => 'X',
        }
    }
}
