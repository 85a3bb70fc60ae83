use std::io::{self, BufRead, Stdout, Write};

use tracing::debug;

use super::source::MoveSource;
use crate::error::MoveSourceError;
use crate::game::{Board, Piece, COLS};

/// Line-at-a-time input for [`HumanPlayer`].
pub trait LineInput {
    /// Append one line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineInput for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// The process's stdin, locked only while a line is read so that two
/// players can share it.
pub struct StdinInput;

impl LineInput for StdinInput {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// A person typing column numbers at a prompt.
///
/// Non-numeric input, out-of-range columns and full columns are reported on
/// `output` and the prompt repeats. End of input is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    piece: Piece,
    input: R,
    output: W,
}

impl<R: LineInput, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, piece: Piece, input: R, output: W) -> Self {
        HumanPlayer {
            name: name.into(),
            piece,
            input,
            output,
        }
    }

    /// Give back the input and output handles.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}, choose a column (0-{}): ", self.name, COLS - 1)?;
        self.output.flush()
    }
}

impl HumanPlayer<StdinInput, Stdout> {
    /// Player reading from the process's stdin and writing to stdout.
    pub fn stdin(name: impl Into<String>, piece: Piece) -> Self {
        HumanPlayer::new(name, piece, StdinInput, io::stdout())
    }
}

impl<R: LineInput, W: Write> MoveSource for HumanPlayer<R, W> {
    fn select_move(&mut self, board: &Board) -> Result<usize, MoveSourceError> {
        loop {
            self.prompt()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(MoveSourceError::InputExhausted);
            }

            let value: i64 = match line.trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Please enter a number between 0 and {}.",
                        COLS - 1
                    )?;
                    continue;
                }
            };

            let Ok(col) = usize::try_from(value) else {
                writeln!(self.output, "Column {value} is out of range. Try again.")?;
                continue;
            };
            match board.check_move(col) {
                Ok(()) => return Ok(col),
                Err(err) => {
                    debug!(player = %self.name, col, %err, "rejected input");
                    writeln!(self.output, "Invalid move: {err}. Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(
            "Player 1",
            Piece::Red,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn output_of(player: HumanPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.into_parts().1).unwrap()
    }

    #[test]
    fn accepts_valid_column() {
        let mut p = player("4\n");
        assert_eq!(p.select_move(&Board::new()).unwrap(), 4);
        assert_eq!(output_of(p), "Player 1, choose a column (0-6): ");
    }

    #[test]
    fn reprompts_on_garbage_and_out_of_range() {
        let mut p = player("abc\n9\n-1\n 2 \n");
        assert_eq!(p.select_move(&Board::new()).unwrap(), 2);
        let out = output_of(p);
        assert!(out.contains("Please enter a number between 0 and 6."));
        assert!(out.contains("Invalid move: column 9 is out of range (expected 0-6)."));
        assert!(out.contains("Column -1 is out of range."));
        assert_eq!(out.matches("choose a column").count(), 4);
    }

    #[test]
    fn reprompts_on_full_column() {
        let mut board = Board::new();
        for _ in 0..crate::game::ROWS {
            board.drop_piece(1, Piece::Yellow).unwrap();
        }
        let mut p = player("1\n0\n");
        assert_eq!(p.select_move(&board).unwrap(), 0);
        assert!(output_of(p).contains("Invalid move: column 1 is full."));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = player("x\n");
        assert!(matches!(
            p.select_move(&Board::new()),
            Err(MoveSourceError::InputExhausted)
        ));
    }
}
