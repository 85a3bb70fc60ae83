use crate::ai::{HeuristicAgent, MoveSource};
use crate::config::{AppConfig, GameMode};
use crate::error::MoveError;
use crate::game::{Board, GameOutcome, Piece, CENTER_COLUMN, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    board: Board,
    to_move: Piece,
    outcome: GameOutcome,
    agent: Option<HeuristicAgent>,
    red_name: String,
    yellow_name: String,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app for a human-vs-agent or human-vs-human game. Returns
    /// `None` for agent-vs-agent, which has nobody at the keyboard.
    pub fn new(config: &AppConfig) -> Option<Self> {
        let agent_piece = match config.players.mode {
            GameMode::HumanVsAgent => Some(Piece::Yellow),
            GameMode::AgentVsHuman => Some(Piece::Red),
            GameMode::HumanVsHuman => None,
            GameMode::AgentVsAgent => return None,
        };
        let agent = agent_piece.map(|piece| {
            let agent = match config.agent.seed {
                Some(seed) => HeuristicAgent::with_seed(piece, seed),
                None => HeuristicAgent::new(piece),
            };
            let name = match piece {
                Piece::Red => &config.players.first_name,
                Piece::Yellow => &config.players.second_name,
            };
            agent.named(name.clone())
        });

        let mut app = App {
            board: Board::new(),
            to_move: Piece::Red,
            outcome: GameOutcome::InProgress,
            agent,
            red_name: config.players.first_name.clone(),
            yellow_name: config.players.second_name.clone(),
            selected_column: CENTER_COLUMN,
            should_quit: false,
            message: None,
        };
        app.agent_reply();
        Some(app)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '0'..='9') => {
                self.selected_column = (c as usize) - ('0' as usize);
                self.drop_selected();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_selected();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = Piece::Red;
        self.outcome = GameOutcome::InProgress;
        self.selected_column = CENTER_COLUMN;
        self.message = Some("New game started!".to_string());
        self.agent_reply();
    }

    /// Drop the human's piece in the selected column, then let the agent
    /// answer.
    fn drop_selected(&mut self) {
        if self.outcome.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.board.check_move(self.selected_column) {
            Ok(()) => {
                self.apply(self.selected_column);
                self.agent_reply();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(_) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
        if self.selected_column >= COLS {
            self.selected_column = COLS - 1;
        }
    }

    fn agent_reply(&mut self) {
        if self.outcome.is_over() {
            return;
        }
        let Some(agent) = self.agent.as_mut() else {
            return;
        };
        if agent.piece() != self.to_move {
            return;
        }
        match agent.select_move(&self.board) {
            Ok(col) => self.apply(col),
            Err(err) => self.message = Some(format!("Agent failed: {err}")),
        }
    }

    /// Place a piece for the side to move in a column already checked legal.
    fn apply(&mut self, col: usize) {
        let Some(row) = self.board.next_open_row(col) else {
            return;
        };
        self.board.place(row, col, self.to_move);
        self.outcome = self.board.outcome(self.to_move);
        self.to_move = self.to_move.other();

        match self.outcome {
            GameOutcome::Winner(piece) => {
                self.message = Some(format!("{} wins!", self.name_of(piece)));
            }
            GameOutcome::Draw => self.message = Some("It's a tie!".to_string()),
            GameOutcome::InProgress => {}
        }
    }

    fn name_of(&self, piece: Piece) -> &str {
        match piece {
            Piece::Red => &self.red_name,
            Piece::Yellow => &self.yellow_name,
        }
    }

    fn status(&self) -> String {
        if self.outcome.is_over() {
            "Game Over".to_string()
        } else {
            format!("Current Player: {}", self.name_of(self.to_move))
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.board,
            self.to_move,
            &self.status(),
            self.selected_column,
            &self.message,
        );
    }
}
