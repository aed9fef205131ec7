//! # gridbout-coordinator
//!
//! **Orchestration plane**: the single entry point that composes the
//! session directory, match directory, stats store, and match core.
//!
//! ## Architecture
//!
//! The coordinator sits between the transport and the game core:
//! 1. **SessionDirectory**: who is online, under which name
//! 2. **MatchDirectory**: which matches are in flight
//! 3. **StatsStore**: win/loss tallies per name
//! 4. **Match** (matchcore): per-match turn and board state
//!
//! ## Command flow
//!
//! ```text
//! transport → Coordinator::handle() → validate → mutate → Vec<Outbound>
//! ```
//!
//! Each inbound command is processed to completion on one logical thread
//! of control before the next — handlers are O(1)–O(25) and never suspend,
//! so no store takes a lock. The coordinator only decides *what* to send
//! *to whom*; delivering the returned envelopes is the transport's job.

pub mod coordinator;

pub use coordinator::Coordinator;
