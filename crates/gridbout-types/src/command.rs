//! Inbound command wire types (client → coordinator).
//!
//! Disconnects have no command form: the transport reports them directly
//! to the coordinator.

use serde::{Deserialize, Serialize};

use crate::{MatchId, PlayerName};

/// A command sent by a connected client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ClientCommand {
    /// Claim a display name. Precondition: the name is not already online.
    Login { username: PlayerName },
    /// Invite an online player into a match. Precondition: `to` is online
    /// and is not the caller's own name.
    #[serde(rename_all = "camelCase")]
    Invite { to: PlayerName },
    /// Select a number on the caller's turn.
    #[serde(rename_all = "camelCase")]
    NumberSelected { match_id: MatchId, number: u8 },
    /// Voluntarily leave a match, forfeiting it.
    #[serde(rename_all = "camelCase")]
    ExitGame { match_id: MatchId },
}

impl ClientCommand {
    /// The wire name of this command.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Invite { .. } => "invite",
            Self::NumberSelected { .. } => "numberSelected",
            Self::ExitGame { .. } => "exitGame",
        }
    }
}
