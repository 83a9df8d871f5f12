//! Core Tic-Tac-Toe logic: the board engine, markers and players, typed cell
//! input, and the match controller that drives rounds and scores.

mod board;
mod input;
mod player;
mod session;

pub use board::{Board, Cell, CELLS, SIZE, WIN_LINES};
pub use input::{parse_cell, validate_name, InputError, MAX_NAME_LEN};
pub use player::{Marker, Player};
pub use session::{Match, MoveError, RoundStatus, TurnOutcome};
