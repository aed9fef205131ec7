//! Outbound event wire types (coordinator → clients).
//!
//! The coordinator decides *what* to send *to whom*; the transport owns
//! delivery. Each event is addressed to a single connection via
//! [`Outbound`] — broadcasts are expanded into one envelope per recipient
//! so the ordering guarantee stays explicit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Board, ConnectionId, MatchId, PlayerName, PlayerStats};

/// An event emitted by the coordinator.
///
/// Board-carrying events are per-recipient: each participant receives their
/// own board, their own score, and a line-completed flag computed relative
/// to themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Login succeeded; carries the online list and the caller's stats.
    LoggedIn {
        players: Vec<PlayerName>,
        stats: PlayerStats,
    },
    /// Login rejected.
    LoginFailed { message: String },
    /// The online list changed (someone logged in or out).
    Joined { players: Vec<PlayerName> },
    /// An invite arrived for the recipient.
    #[serde(rename_all = "camelCase")]
    GameInvite { from: PlayerName, match_id: MatchId },
    /// A match started; carries the recipient's own board.
    #[serde(rename_all = "camelCase")]
    StartGame {
        match_id: MatchId,
        player_id: PlayerName,
        matrix: Board,
        score: u8,
        opponent_score: u8,
    },
    /// A move was applied; carries the recipient's own post-move board.
    #[serde(rename_all = "camelCase")]
    UpdateMatrix {
        matrix: Board,
        current_player: PlayerName,
        score: u8,
        opponent_score: u8,
        line_completed: bool,
    },
    /// The caller moved out of turn. Sent only to the offender.
    NotYourTurn,
    /// The turn passed.
    #[serde(rename_all = "camelCase")]
    TurnChange { current_player: PlayerName },
    /// The match resolved by reaching the win threshold; carries the
    /// recipient's own updated stats.
    #[serde(rename_all = "camelCase")]
    GameOver {
        message: String,
        winner: PlayerName,
        game_duration: i64,
        move_count: u64,
        player_stats: PlayerStats,
    },
    /// The opponent exited or disconnected; the recipient wins by forfeit.
    #[serde(rename_all = "camelCase")]
    OpponentLeft {
        message: String,
        winner: PlayerName,
        game_duration: i64,
        move_count: u64,
        player_stats: PlayerStats,
    },
    /// The invite could not be delivered.
    InviteFailed { message: String },
}

impl ServerEvent {
    /// The wire name of this event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "loggedIn",
            Self::LoginFailed { .. } => "loginFailed",
            Self::Joined { .. } => "joined",
            Self::GameInvite { .. } => "gameInvite",
            Self::StartGame { .. } => "startGame",
            Self::UpdateMatrix { .. } => "updateMatrix",
            Self::NotYourTurn => "notYourTurn",
            Self::TurnChange { .. } => "turnChange",
            Self::GameOver { .. } => "gameOver",
            Self::OpponentLeft { .. } => "opponentLeft",
            Self::InviteFailed { .. } => "inviteFailed",
        }
    }
}

impl fmt::Display for ServerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An event addressed to one connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outbound {
    /// The connection this event must be delivered to.
    pub to: ConnectionId,
    /// The event payload.
    pub event: ServerEvent,
}

impl Outbound {
    #[must_use]
    pub fn new(to: ConnectionId, event: ServerEvent) -> Self {
        Self { to, event }
    }
}
