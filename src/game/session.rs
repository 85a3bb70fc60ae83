use tracing::{debug, info};

use super::{Board, GameOutcome, Piece};
use crate::ai::MoveSource;
use crate::error::{MoveError, SessionError};

/// Something that shows the game to the players.
pub trait Renderer {
    /// Show the current grid.
    fn render(&mut self, board: &Board);

    /// Report how the game ended. `winner` is the winning player's name.
    fn announce(&mut self, outcome: GameOutcome, winner: Option<&str>);
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub piece: Piece,
    pub column: usize,
    pub row: usize,
    pub outcome: GameOutcome,
}

/// One game between two move sources. The first source moves first.
pub struct Session {
    board: Board,
    players: [Box<dyn MoveSource>; 2],
    current: usize,
    outcome: GameOutcome,
    history: Vec<usize>,
}

impl Session {
    pub fn new(
        first: Box<dyn MoveSource>,
        second: Box<dyn MoveSource>,
    ) -> Result<Self, SessionError> {
        if first.piece() == second.piece() {
            return Err(SessionError::SamePiece(first.piece()));
        }
        Ok(Session {
            board: Board::new(),
            players: [first, second],
            current: 0,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The source whose turn it is.
    pub fn current_player(&self) -> &dyn MoveSource {
        self.players[self.current].as_ref()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Columns played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Name of the player holding `piece`.
    pub fn name_of(&self, piece: Piece) -> Option<&str> {
        self.players
            .iter()
            .find(|player| player.piece() == piece)
            .map(|player| player.name())
    }

    /// Ask the current player for a column, drop its piece, and pass the turn.
    pub fn play_turn(&mut self) -> Result<TurnResult, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let player = &mut self.players[self.current];
        let column = player.select_move(&self.board)?;
        let piece = player.piece();

        let illegal = |error: MoveError| SessionError::IllegalMove {
            player: player.name().to_string(),
            error,
        };
        self.board.check_move(column).map_err(&illegal)?;
        let row = self
            .board
            .next_open_row(column)
            .ok_or_else(|| illegal(MoveError::ColumnFull(column)))?;
        self.board.place(row, column, piece);
        self.history.push(column);

        self.outcome = self.board.outcome(piece);
        debug!(piece = piece.name(), column, row, outcome = ?self.outcome, "move applied");

        self.current = 1 - self.current;

        Ok(TurnResult {
            piece,
            column,
            row,
            outcome: self.outcome,
        })
    }

    /// Play turns until the game ends, rendering after every move.
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<GameOutcome, SessionError> {
        renderer.render(&self.board);

        while !self.is_over() {
            self.play_turn()?;
            renderer.render(&self.board);
        }

        let winner = match self.outcome {
            GameOutcome::Winner(piece) => self.name_of(piece),
            _ => None,
        };
        info!(outcome = ?self.outcome, moves = self.history.len(), "game finished");
        renderer.announce(self.outcome, winner);

        Ok(self.outcome)
    }
}
