//! Error types for the GridBout duel engine.
//!
//! All errors use the `GB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Session errors
//! - 2xx: Invite errors
//! - 3xx: Match errors
//! - 9xx: General / internal errors
//!
//! Every error is recovered at the coordinator boundary — none of them
//! terminates the process. Handlers validate before mutating, so a rejected
//! command leaves session and match state unchanged and the client may
//! simply retry.

use thiserror::Error;

use crate::{ConnectionId, MatchId, PlayerName};

/// Central error enum for all GridBout operations.
#[derive(Debug, Error)]
pub enum GridboutError {
    // =================================================================
    // Session Errors (1xx)
    // =================================================================
    /// The requested display name is already held by an online player.
    #[error("GB_ERR_100: Username is already taken: {0}")]
    NameTaken(PlayerName),

    // =================================================================
    // Invite Errors (2xx)
    // =================================================================
    /// A player tried to invite their own display name.
    #[error("GB_ERR_200: A player cannot invite themselves")]
    SelfInvite,

    /// The invited name has no online identity.
    #[error("GB_ERR_201: Player is not online: {0}")]
    PlayerOffline(PlayerName),

    // =================================================================
    // Match Errors (3xx)
    // =================================================================
    /// No match with this identity exists (it may already be resolved).
    #[error("GB_ERR_300: Match not found: {0}")]
    MatchNotFound(MatchId),

    /// A move arrived from a player who does not hold the turn.
    #[error("GB_ERR_301: Not your turn")]
    NotYourTurn,

    /// A move arrived for a match that is no longer active.
    #[error("GB_ERR_302: Match is not active")]
    MatchNotActive,

    /// The selected number is outside the shared 1..=25 value space.
    #[error("GB_ERR_303: Number out of range 1..=25: {0}")]
    InvalidNumber(u8),

    /// The connection is not a participant in the addressed match.
    #[error("GB_ERR_304: Not a participant in this match: {0}")]
    NotAParticipant(ConnectionId),

    /// A match with this identity already exists in the directory.
    #[error("GB_ERR_305: Match already exists: {0}")]
    DuplicateMatch(MatchId),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("GB_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GridboutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GridboutError::NameTaken("ada".to_string());
        let msg = format!("{err}");
        assert!(msg.starts_with("GB_ERR_100"), "Got: {msg}");
        assert!(msg.contains("ada"));
    }

    #[test]
    fn match_not_found_display() {
        let id = MatchId::from_bytes([7u8; 16]);
        let msg = format!("{}", GridboutError::MatchNotFound(id));
        assert!(msg.contains("GB_ERR_300"));
        assert!(msg.contains("match:"));
    }

    #[test]
    fn all_errors_have_gb_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GridboutError::SelfInvite),
            Box::new(GridboutError::PlayerOffline("bob".into())),
            Box::new(GridboutError::NotYourTurn),
            Box::new(GridboutError::MatchNotActive),
            Box::new(GridboutError::InvalidNumber(26)),
            Box::new(GridboutError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GB_ERR_"),
                "Error missing GB_ERR_ prefix: {msg}"
            );
        }
    }
}
