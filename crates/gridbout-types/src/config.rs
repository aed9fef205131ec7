//! Rule configuration for GridBout matches.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunable rules for a single match.
///
/// Defaults match the standard game; tests lower `win_lines` to drive a
/// match to resolution in a handful of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Completed lines required to win.
    pub win_lines: u8,
}

impl MatchRules {
    /// Rules with a custom win threshold.
    #[must_use]
    pub fn with_win_lines(win_lines: u8) -> Self {
        Self { win_lines }
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            win_lines: constants::WIN_LINES,
        }
    }
}
