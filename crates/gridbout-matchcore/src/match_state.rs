//! The per-match state machine.
//!
//! A match owns two seats (one board each), the turn pointer, and the move
//! counter. The value space 1..=25 is shared: an accepted move marks the
//! selected value on **both** boards, so a single move can advance both
//! participants' line counts at once. The turn-holder check is the sole
//! admission control — a move from anyone but the turn holder is rejected
//! with no state change.
//!
//! All validation happens before any mutation; there is no rollback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use gridbout_types::{
    Board, ConnectionId, GridboutError, MatchId, MatchRules, PlayerName, Result,
    constants::{MAX_CELL_VALUE, MIN_CELL_VALUE},
};

use crate::generator::generate_board;

/// Lifecycle phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Invite issued; boards not yet delivered. Transient — a constructed
    /// match is already `Active`, since invites are auto-accepted.
    Inviting,
    /// Accepting moves from the turn holder.
    Active,
    /// Terminal. The match is removed from its directory exactly once,
    /// when this phase is reached.
    Resolved,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inviting => write!(f, "INVITING"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Resolved => write!(f, "RESOLVED"),
        }
    }
}

/// One participant's side of a match.
#[derive(Debug, Clone)]
pub struct Seat {
    /// The participant's live connection.
    pub connection: ConnectionId,
    /// Display name, captured at match creation.
    pub name: PlayerName,
    /// This participant's board — an independent permutation of 1..=25.
    pub board: Board,
    /// Current completed-line count.
    pub score: u8,
}

/// The result of an accepted move. All arrays are seat-indexed.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    /// The value that was marked on both boards.
    pub value: u8,
    /// Move count after this move.
    pub move_count: u64,
    /// Post-move completed-line counts.
    pub scores: [u8; 2],
    /// Whether each seat's line count just increased.
    pub line_completed: [bool; 2],
    /// The winning seat, if this move resolved the match.
    pub winner: Option<usize>,
    /// The seat nominally holding the turn after this move (the mover's
    /// opponent, even on a winning move — superseded by `winner`).
    pub next_turn: usize,
}

/// A two-participant match: boards, turn pointer, move counter, timestamps.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    seats: [Seat; 2],
    /// Seat index of the turn holder — always 0 or 1, so the "turn holder
    /// is a participant" invariant is structural.
    turn: usize,
    phase: MatchPhase,
    move_count: u64,
    rules: MatchRules,
    started_at: DateTime<Utc>,
    last_turn_at: DateTime<Utc>,
}

impl Match {
    /// Create an active match with freshly generated boards. The inviter
    /// holds the first turn.
    #[must_use]
    pub fn new(
        inviter: (ConnectionId, PlayerName),
        invitee: (ConnectionId, PlayerName),
        rules: MatchRules,
    ) -> Self {
        Self::with_boards(inviter, invitee, generate_board(), generate_board(), rules)
    }

    /// Create an active match with caller-supplied boards. Used wherever
    /// deterministic boards are needed.
    #[must_use]
    pub fn with_boards(
        inviter: (ConnectionId, PlayerName),
        invitee: (ConnectionId, PlayerName),
        inviter_board: Board,
        invitee_board: Board,
        rules: MatchRules,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: MatchId::new(),
            seats: [
                Seat {
                    connection: inviter.0,
                    name: inviter.1,
                    board: inviter_board,
                    score: 0,
                },
                Seat {
                    connection: invitee.0,
                    name: invitee.1,
                    board: invitee_board,
                    score: 0,
                },
            ],
            turn: 0,
            phase: MatchPhase::Active,
            move_count: 0,
            rules,
            started_at: now,
            last_turn_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    #[must_use]
    pub fn rules(&self) -> MatchRules {
        self.rules
    }

    /// Both seats, inviter first.
    #[must_use]
    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    /// The seat at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub fn seat(&self, index: usize) -> &Seat {
        &self.seats[index]
    }

    /// Seat index of `connection`, if it participates in this match.
    #[must_use]
    pub fn seat_of(&self, connection: ConnectionId) -> Option<usize> {
        self.seats.iter().position(|s| s.connection == connection)
    }

    #[must_use]
    pub fn is_participant(&self, connection: ConnectionId) -> bool {
        self.seat_of(connection).is_some()
    }

    /// The seat currently holding the turn.
    #[must_use]
    pub fn turn_holder(&self) -> &Seat {
        &self.seats[self.turn]
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the last accepted move landed (match start before any move).
    #[must_use]
    pub fn last_turn_at(&self) -> DateTime<Utc> {
        self.last_turn_at
    }

    /// Whole seconds elapsed since match start, floored.
    #[must_use]
    pub fn elapsed_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// Apply a move from `mover`.
    ///
    /// Rejections leave the match untouched — no mark, no move-count
    /// increment, no turn change:
    /// - [`GridboutError::MatchNotActive`] if the match already resolved;
    /// - [`GridboutError::NotYourTurn`] if `mover` is not the turn holder
    ///   (a non-participant is never the turn holder);
    /// - [`GridboutError::InvalidNumber`] if `value` is outside 1..=25.
    ///
    /// On acceptance: `value` is marked on both boards, the move counter
    /// and turn timestamp advance, both scores are recounted, and the win
    /// check runs — mover first, so if both seats reach the threshold on
    /// the same move the mover wins. Without a winner the turn passes to
    /// the other seat.
    pub fn apply_move(&mut self, mover: ConnectionId, value: u8) -> Result<AppliedMove> {
        if self.phase != MatchPhase::Active {
            return Err(GridboutError::MatchNotActive);
        }
        let mover_seat = match self.seat_of(mover) {
            Some(seat) if seat == self.turn => seat,
            _ => return Err(GridboutError::NotYourTurn),
        };
        if !(MIN_CELL_VALUE..=MAX_CELL_VALUE).contains(&value) {
            return Err(GridboutError::InvalidNumber(value));
        }

        let previous = [self.seats[0].score, self.seats[1].score];
        for seat in &mut self.seats {
            seat.board.mark(value);
            seat.score = seat.board.completed_lines();
        }
        self.move_count += 1;
        self.last_turn_at = Utc::now();

        let scores = [self.seats[0].score, self.seats[1].score];
        let line_completed = [scores[0] > previous[0], scores[1] > previous[1]];
        let other = 1 - mover_seat;

        let winner = if scores[mover_seat] >= self.rules.win_lines {
            Some(mover_seat)
        } else if scores[other] >= self.rules.win_lines {
            // Only the mover's call can change counts, so this branch needs
            // a prior move to have already set the opponent's count.
            Some(other)
        } else {
            None
        };

        if let Some(winner_seat) = winner {
            self.phase = MatchPhase::Resolved;
            tracing::debug!(
                match_id = %self.id,
                winner = %self.seats[winner_seat].name,
                moves = self.move_count,
                "match resolved"
            );
        } else {
            self.turn = other;
        }

        Ok(AppliedMove {
            value,
            move_count: self.move_count,
            scores,
            line_completed,
            winner,
            next_turn: other,
        })
    }

    /// Resolve the match by forfeit: `leaver` exited or disconnected, and
    /// the remaining seat wins unconditionally, regardless of score.
    /// Returns the winning seat index.
    pub fn resolve_forfeit(&mut self, leaver: ConnectionId) -> Result<usize> {
        let leaver_seat = self
            .seat_of(leaver)
            .ok_or(GridboutError::NotAParticipant(leaver))?;
        self.phase = MatchPhase::Resolved;
        let winner_seat = 1 - leaver_seat;
        tracing::debug!(
            match_id = %self.id,
            leaver = %self.seats[leaver_seat].name,
            winner = %self.seats[winner_seat].name,
            "match forfeited"
        );
        Ok(winner_seat)
    }
}
