use crate::game::{Match, MoveError, TurnOutcome, CELLS, SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    game: Match,
    cursor: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game: Match) -> Self {
        App {
            game,
            cursor: 4, // Start in the centre
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

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
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor % SIZE > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor % SIZE < SIZE - 1 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor >= SIZE {
                    self.cursor -= SIZE;
                }
            }
            KeyCode::Down => {
                if self.cursor + SIZE < CELLS {
                    self.cursor += SIZE;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place(self.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                self.place(index);
            }
            KeyCode::Char('n' | 'N') => {
                if self.game.status().is_over() {
                    self.game.new_round();
                    self.cursor = 4;
                    self.message = Some(format!(
                        "Round {}: {} starts",
                        self.game.round(),
                        self.game.current_player().name()
                    ));
                } else {
                    self.message =
                        Some("Finish this round first, or press 'r' to restart.".to_string());
                }
            }
            KeyCode::Char('r' | 'R') => {
                self.game.restart();
                self.cursor = 4;
                self.message = Some("Match restarted, scores cleared.".to_string());
            }
            _ => {}
        }
    }

    /// Place the current player's marker at `index`
    fn place(&mut self, index: usize) {
        let mover = self.game.current_player().name().to_string();

        match self.game.play(index) {
            Ok(TurnOutcome::Won(marker)) => {
                self.message = Some(format!(
                    "{} ({}) wins! Press 'n' for another round.",
                    mover, marker
                ));
            }
            Ok(TurnOutcome::Draw) => {
                self.message = Some("It's a draw! Press 'n' for another round.".to_string());
            }
            Ok(TurnOutcome::Continue { .. }) => {}
            Err(MoveError::InvalidMove) => {
                debug!(index, "cell taken");
                self.message = Some("That cell is taken, try again.".to_string());
            }
            Err(MoveError::RoundOver) => {
                self.message = Some("Round over! Press 'n' for another round.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.cursor, self.message.as_deref());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Match::default())
    }
}
