//! Match registry: match identity → live match.
//!
//! A match enters the directory when an invite succeeds and leaves it
//! exactly once, at terminal resolution (win, exit, or disconnect).

use std::collections::HashMap;

use gridbout_matchcore::Match;
use gridbout_types::{ConnectionId, GridboutError, MatchId, Result};

/// Registry of in-flight matches.
#[derive(Debug, Default)]
pub struct MatchDirectory {
    matches: HashMap<MatchId, Match>,
}

impl MatchDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly created match.
    ///
    /// # Errors
    /// Returns [`GridboutError::DuplicateMatch`] if the identity is already
    /// present. With UUIDv7 identities this does not happen in practice.
    pub fn insert(&mut self, m: Match) -> Result<MatchId> {
        let id = m.id();
        if self.matches.contains_key(&id) {
            return Err(GridboutError::DuplicateMatch(id));
        }
        self.matches.insert(id, m);
        Ok(id)
    }

    /// Look up a match.
    ///
    /// # Errors
    /// Returns [`GridboutError::MatchNotFound`] if absent — which includes
    /// matches that already resolved.
    pub fn get(&self, id: MatchId) -> Result<&Match> {
        self.matches.get(&id).ok_or(GridboutError::MatchNotFound(id))
    }

    /// Mutable lookup; same error contract as [`MatchDirectory::get`].
    pub fn get_mut(&mut self, id: MatchId) -> Result<&mut Match> {
        self.matches
            .get_mut(&id)
            .ok_or(GridboutError::MatchNotFound(id))
    }

    /// Remove a match at terminal resolution.
    pub fn remove(&mut self, id: MatchId) -> Option<Match> {
        let removed = self.matches.remove(&id);
        if removed.is_some() {
            tracing::debug!(match_id = %id, remaining = self.matches.len(), "match removed");
        }
        removed
    }

    /// The match a connection participates in, if any. Used on disconnect
    /// to locate the in-flight match of a vanished identity.
    #[must_use]
    pub fn find_by_participant(&self, connection: ConnectionId) -> Option<MatchId> {
        self.matches
            .values()
            .find(|m| m.is_participant(connection))
            .map(Match::id)
    }

    /// Whether a match with this identity is in flight.
    #[must_use]
    pub fn contains(&self, id: MatchId) -> bool {
        self.matches.contains_key(&id)
    }

    /// Number of in-flight matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match is in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
