//! # gridbout-directory
//!
//! **Registry plane**: the process-wide stores the coordinator composes.
//!
//! - [`SessionDirectory`]: connection identity ↔ display name, plus the
//!   insertion-ordered online list
//! - [`MatchDirectory`]: match identity → live match, with participant
//!   lookup for the disconnect path
//! - [`StatsStore`]: display name → win/loss tally, lazily created at
//!   first login and never deleted
//!
//! All three are plain owned objects constructed once at process start and
//! held by the coordinator — there is no ambient global access. Lifetime is
//! the process lifetime; nothing here persists across restarts. Mutation
//! happens on one logical thread of control, so no store takes a lock.

pub mod match_directory;
pub mod session_directory;
pub mod stats_store;

pub use match_directory::MatchDirectory;
pub use session_directory::SessionDirectory;
pub use stats_store::StatsStore;
