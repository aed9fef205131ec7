//! # gridbout-matchcore
//!
//! **Game core**: board generation and the per-match state machine.
//!
//! This crate holds the part of the engine with real invariant-preservation
//! complexity and nothing else — no registries, no event fan-out, no I/O.
//! The coordinator drives it and decides what to tell each participant.
//!
//! ## Match lifecycle
//!
//! ```text
//! Inviting -> Active -> Resolved
//! ```
//!
//! `Inviting` is transient: a match is `Active` as soon as both boards are
//! generated (an invite is auto-accepted on delivery). `Resolved` is
//! terminal and reached three ways: a participant's completed-line count
//! hits the win threshold, a participant exits voluntarily, or a
//! participant disconnects. The last two forfeit the match to the remaining
//! participant regardless of score.

pub mod generator;
pub mod match_state;

pub use generator::{generate_board, generate_board_with};
pub use match_state::{AppliedMove, Match, MatchPhase, Seat};
