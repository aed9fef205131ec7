//! Win/loss tally types.
//!
//! Stats are keyed by display name and live for the process lifetime:
//! created lazily at first login, never deleted, mutated only by match
//! resolution (win, loss, or forfeit via exit/disconnect).

use serde::{Deserialize, Serialize};

/// Cumulative win/loss record for one display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Matches won, including wins by opponent forfeit.
    pub wins: u32,
    /// Matches lost, including losses by own forfeit.
    pub losses: u32,
}

impl PlayerStats {
    /// A fresh zero record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total matches resolved for this player.
    #[must_use]
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Whether this record has never been touched by a resolution.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.wins == 0 && self.losses == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let stats = PlayerStats::new();
        assert!(stats.is_zero());
        assert_eq!(stats.total_games(), 0);
    }

    #[test]
    fn total_games_sums_both() {
        let stats = PlayerStats { wins: 3, losses: 2 };
        assert_eq!(stats.total_games(), 5);
        assert!(!stats.is_zero());
    }

    #[test]
    fn serde_roundtrip() {
        let stats = PlayerStats { wins: 7, losses: 1 };
        let json = serde_json::to_string(&stats).unwrap();
        let back: PlayerStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
