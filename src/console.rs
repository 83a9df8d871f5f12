//! Line-based front end: prints the board as text and reads one cell number
//! per line. Works over any reader/writer pair so it can be driven by stdin or
//! by a script in tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::game::{parse_cell, Board, Cell, Marker, Match, MoveError, TurnOutcome, SIZE};

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    /// The players declined another round
    Finished,
    /// `q` or end of input in the middle of a round
    Cancelled,
}

pub struct ConsoleGame<R, W> {
    game: Match,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(game: Match, input: R, output: W) -> Self {
        ConsoleGame {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Run rounds until the players stop or input runs out.
    pub fn run(&mut self) -> io::Result<ConsoleExit> {
        writeln!(self.output, "--- Tic-Tac-Toe Console Game Started ---")?;
        writeln!(
            self.output,
            "{} is X, {} is O. Enter numbers 1-9 to make a move, q to quit.",
            self.game.player(Marker::X).name(),
            self.game.player(Marker::O).name(),
        )?;

        loop {
            if self.play_round()? == ConsoleExit::Cancelled {
                writeln!(self.output, "Game cancelled.")?;
                self.print_scores()?;
                return Ok(ConsoleExit::Cancelled);
            }

            self.print_scores()?;
            if !self.ask("Play another round? (y/n):")? {
                writeln!(self.output, "Thanks for playing!")?;
                return Ok(ConsoleExit::Finished);
            }
            self.game.new_round();
        }
    }

    fn play_round(&mut self) -> io::Result<ConsoleExit> {
        self.print_board()?;

        loop {
            let player = self.game.current_player();
            let prompt = format!(
                "It's {}'s turn ({}). Enter a number (1-9):",
                player.name(),
                player.marker()
            );
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(ConsoleExit::Cancelled);
            };
            if line.trim().eq_ignore_ascii_case("q") {
                return Ok(ConsoleExit::Cancelled);
            }

            let index = match parse_cell(&line) {
                Ok(index) => index,
                Err(e) => {
                    debug!(input = line.trim(), error = %e, "unparseable cell");
                    writeln!(self.output, "Invalid input: {e}. Try again.")?;
                    continue;
                }
            };

            let mover = self.game.current_player().clone();
            match self.game.play(index) {
                Ok(outcome) => {
                    self.print_board()?;
                    match outcome {
                        TurnOutcome::Won(_) => {
                            writeln!(
                                self.output,
                                "{} ({}) wins!",
                                mover.name(),
                                mover.marker()
                            )?;
                            return Ok(ConsoleExit::Finished);
                        }
                        TurnOutcome::Draw => {
                            writeln!(self.output, "It's a draw!")?;
                            return Ok(ConsoleExit::Finished);
                        }
                        TurnOutcome::Continue { .. } => {}
                    }
                }
                Err(MoveError::InvalidMove) => {
                    writeln!(
                        self.output,
                        "Invalid move. Cell taken or index out of range. Try again."
                    )?;
                }
                Err(MoveError::RoundOver) => return Ok(ConsoleExit::Finished),
            }
        }
    }

    /// Read one line after printing `text`. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask(&mut self, question: &str) -> io::Result<bool> {
        Ok(self
            .prompt(question)?
            .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(self.game.board()))?;
        writeln!(self.output)
    }

    fn print_scores(&mut self) -> io::Result<()> {
        let x = self.game.player(Marker::X);
        let o = self.game.player(Marker::O);
        writeln!(
            self.output,
            "Score after round {}: {} (X) {} - {} {} (O)",
            self.game.round(),
            x.name(),
            self.game.score(Marker::X),
            self.game.score(Marker::O),
            o.name(),
        )
    }
}

/// Text rendering of the board. Empty cells show the number to type for them.
pub fn render_board(board: &Board) -> String {
    let cells = board.snapshot();
    let rows: Vec<String> = cells
        .chunks(SIZE)
        .enumerate()
        .map(|(row, chunk)| {
            let labels: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * SIZE + col + 1).to_string(),
                    Cell::X => "X".to_string(),
                    Cell::O => "O".to_string(),
                })
                .collect();
            format!(" {} \n", labels.join(" | "))
        })
        .collect();
    rows.join("---+---+---\n")
}
