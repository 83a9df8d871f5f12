//! # Tic-Tac-Toe
//!
//! A two-player Tic-Tac-Toe game with a line-based console mode and a terminal
//! UI built with Ratatui. Both front ends sit on the same rule engine.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board engine, markers, match controller
//! - [`console`]: Prompt-driven text front end
//! - [`ui`]: Terminal UI: grid, scoreboard, round controls
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
