use tracing::{debug, info};

use super::input::{validate_name, InputError};
use super::{Board, Marker, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won(Marker),
    Draw,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        self != RoundStatus::InProgress
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Won(Marker),
    Draw,
    Continue { next: Marker },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move: cell taken or index out of range")]
    InvalidMove,

    #[error("the round is over")]
    RoundOver,
}

/// One match between two players: a board, the running scores, and whose turn
/// it is. Rounds share scores; `restart` wipes them.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    players: [Player; 2],
    scores: [u32; 2],
    current: Marker,
    round_starter: Marker,
    status: RoundStatus,
    round: u32,
}

impl Match {
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Match {
            board: Board::new(),
            players: [
                Player::new(player_x, Marker::X),
                Player::new(player_o, Marker::O),
            ],
            scores: [0, 0],
            current: Marker::X,
            round_starter: Marker::X,
            status: RoundStatus::InProgress,
            round: 1,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, marker: Marker) -> &Player {
        &self.players[marker.index()]
    }

    /// The player whose turn it is (after a finished round, the one who moved last)
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn score(&self, marker: Marker) -> u32 {
        self.scores[marker.index()]
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// 1-based number of the round being played
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Play the current player's marker at `index`.
    ///
    /// Order matters: the move is placed, then checked for a win, then for a
    /// draw, and only then does the turn pass to the other player.
    pub fn play<I>(&mut self, index: I) -> Result<TurnOutcome, MoveError>
    where
        I: TryInto<usize> + Copy + std::fmt::Debug,
    {
        if self.status.is_over() {
            return Err(MoveError::RoundOver);
        }

        let marker = self.current;
        if !self.board.place(index, marker) {
            debug!(?index, %marker, "move rejected");
            return Err(MoveError::InvalidMove);
        }
        debug!(?index, %marker, "move accepted");

        if self.board.has_win(marker) {
            self.status = RoundStatus::Won(marker);
            self.scores[marker.index()] += 1;
            info!(
                round = self.round,
                winner = self.player(marker).name(),
                %marker,
                "round won"
            );
            return Ok(TurnOutcome::Won(marker));
        }

        if self.board.is_full() {
            self.status = RoundStatus::Draw;
            info!(round = self.round, "round drawn");
            return Ok(TurnOutcome::Draw);
        }

        self.current = marker.other();
        Ok(TurnOutcome::Continue { next: self.current })
    }

    /// Clear the board for another round, keeping scores. The player who did
    /// not open the previous round opens this one.
    pub fn new_round(&mut self) {
        self.board.reset();
        self.round_starter = self.round_starter.other();
        self.current = self.round_starter;
        self.status = RoundStatus::InProgress;
        self.round += 1;
        debug!(round = self.round, starter = %self.current, "new round");
    }

    /// Start the match over: empty board, zero scores, X to move.
    pub fn restart(&mut self) {
        self.board.reset();
        self.scores = [0, 0];
        self.round_starter = Marker::X;
        self.current = Marker::X;
        self.status = RoundStatus::InProgress;
        self.round = 1;
        info!("match restarted");
    }

    /// Change a player's display name. Surrounding whitespace is dropped; the
    /// name must fit the scoreboard and differ from the other player's.
    pub fn rename(&mut self, marker: Marker, name: &str) -> Result<(), InputError> {
        let name = validate_name(name)?;
        if self.player(marker.other()).name() == name {
            return Err(InputError::DuplicateName(name.to_string()));
        }
        self.players[marker.index()].set_name(name.to_string());
        info!(%marker, name, "player renamed");
        Ok(())
    }
}

impl Default for Match {
    fn default() -> Self {
        Match::new("Player 1", "Player 2")
    }
}
