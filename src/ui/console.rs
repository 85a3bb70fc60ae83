use std::fmt::Write as _;
use std::io::{self, Stdout, Write};

use crate::game::{Board, Cell, GameOutcome, Piece, Renderer, COLS, ROWS};

fn separator() -> String {
    let mut line = String::from("+");
    for _ in 0..COLS {
        line.push_str("---+");
    }
    line
}

/// Text picture of the board, top row first, with column numbers on top.
pub fn board_to_text(board: &Board) -> String {
    let mut out = String::from(" ");
    for col in 0..COLS {
        let _ = write!(out, " {col}  ");
    }
    let header_len = out.trim_end().len();
    out.truncate(header_len);
    out.push('\n');

    let sep = separator();
    out.push_str(&sep);
    out.push('\n');

    for row in (0..ROWS).rev() {
        out.push('|');
        for col in 0..COLS {
            let mark = match board.get(row, col) {
                Cell::Empty => ' ',
                Cell::Red => Piece::Red.symbol(),
                Cell::Yellow => Piece::Yellow.symbol(),
            };
            let _ = write!(out, " {mark} |");
        }
        out.push('\n');
        out.push_str(&sep);
        out.push('\n');
    }
    out
}

/// Prints the board and the result as plain text.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        ConsoleRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout() -> Self {
        ConsoleRenderer::new(io::stdout())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board) {
        if let Err(err) = self.out.write_all(board_to_text(board).as_bytes()) {
            tracing::warn!(%err, "failed to print board");
        }
    }

    fn announce(&mut self, outcome: GameOutcome, winner: Option<&str>) {
        let line = match (outcome, winner) {
            (GameOutcome::Winner(_), Some(name)) => format!("{name} wins!"),
            (GameOutcome::Winner(piece), None) => format!("{} wins!", piece.name()),
            (GameOutcome::Draw, _) => "It's a tie!".to_string(),
            (GameOutcome::InProgress, _) => return,
        };
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!(%err, "failed to print result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_text() {
        let text = board_to_text(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  0   1   2   3   4   5   6");
        assert_eq!(lines[1], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[2], "|   |   |   |   |   |   |   |");
        assert_eq!(lines.len(), 2 + ROWS * 2);
    }

    #[test]
    fn test_bottom_row_printed_last() {
        let mut board = Board::new();
        board.drop_piece(0, Piece::Red).unwrap();
        board.drop_piece(6, Piece::Yellow).unwrap();
        let text = board_to_text(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[lines.len() - 2], "| O |   |   |   |   |   | X |");
    }

    #[test]
    fn test_announce() {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.announce(GameOutcome::Winner(Piece::Yellow), Some("Player 2"));
        renderer.announce(GameOutcome::Draw, None);
        renderer.announce(GameOutcome::InProgress, None);
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "Player 2 wins!\nIt's a tie!\n");
    }
}
