//! # gridbout-types
//!
//! Shared types, errors, and configuration for the **GridBout** duel engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ConnectionId`], [`MatchId`], [`PlayerName`]
//! - **Board model**: [`Board`], [`Cell`]
//! - **Stats model**: [`PlayerStats`]
//! - **Wire types**: [`ClientCommand`] (inbound), [`ServerEvent`] and
//!   [`Outbound`] (outbound)
//! - **Configuration**: [`MatchRules`]
//! - **Errors**: [`GridboutError`] with `GB_ERR_` prefix codes
//! - **Constants**: board geometry and system-wide defaults

pub mod board;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod stats;

// Re-export all primary types at crate root for ergonomic imports:
//   use gridbout_types::{Board, ConnectionId, ServerEvent, ...};

pub use board::*;
pub use command::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use stats::*;

// Constants are accessed via `gridbout_types::constants::FOO`
// (not re-exported to avoid name collisions).
