use std::num::IntErrorKind;

use super::board::CELLS;

/// Longest player name the scoreboard has room for.
pub const MAX_NAME_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not a cell, pick 1-9")]
    OutOfRange(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,

    #[error("'{0}' is already taken by the other player")]
    DuplicateName(String),
}

/// Turn a typed cell number (1-9) into a board index (0-8).
pub fn parse_cell(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    let number: i64 = text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(text.to_string())
        }
        _ => InputError::NotANumber(text.to_string()),
    })?;

    if !(1..=CELLS as i64).contains(&number) {
        return Err(InputError::OutOfRange(text.to_string()));
    }
    Ok((number - 1) as usize)
}

/// Check a player name and return it trimmed.
pub fn validate_name(name: &str) -> Result<&str, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(InputError::NameTooLong);
    }
    Ok(name)
}
