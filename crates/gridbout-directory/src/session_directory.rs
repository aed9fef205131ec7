//! Session registry: connection identity ↔ display name.
//!
//! Uses a primary map keyed by connection plus an insertion-ordered name
//! list for broadcasts. Name uniqueness is enforced among *online* players
//! only — a name frees up the moment its holder logs out.

use std::collections::HashMap;

use gridbout_types::{ConnectionId, GridboutError, PlayerName, Result};

/// Registry of live sessions.
#[derive(Debug, Default)]
pub struct SessionDirectory {
    /// ConnectionId → display name.
    sessions: HashMap<ConnectionId, PlayerName>,
    /// Online names in login order (broadcast order).
    online: Vec<PlayerName>,
}

impl SessionDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `connection` under `name`.
    ///
    /// # Errors
    /// Returns [`GridboutError::NameTaken`] if `name` is already online
    /// (case-sensitive exact match). A connection that logs in again is
    /// first logged out, so a connection never holds two names.
    pub fn login(&mut self, connection: ConnectionId, name: &str) -> Result<()> {
        if self.is_online(name) {
            return Err(GridboutError::NameTaken(name.to_string()));
        }
        self.logout(connection);
        self.sessions.insert(connection, name.to_string());
        self.online.push(name.to_string());
        tracing::info!(%connection, name, online = self.online.len(), "player logged in");
        Ok(())
    }

    /// Remove `connection` and free its name. Idempotent: returns the name
    /// that was registered, or `None` if the connection was unknown.
    pub fn logout(&mut self, connection: ConnectionId) -> Option<PlayerName> {
        let name = self.sessions.remove(&connection)?;
        self.online.retain(|n| n != &name);
        tracing::info!(%connection, name = %name, online = self.online.len(), "player logged out");
        Some(name)
    }

    /// The display name registered for `connection`.
    #[must_use]
    pub fn name_of(&self, connection: ConnectionId) -> Option<&str> {
        self.sessions.get(&connection).map(String::as_str)
    }

    /// The connection currently holding `name`.
    #[must_use]
    pub fn connection_of(&self, name: &str) -> Option<ConnectionId> {
        self.sessions
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(conn, _)| *conn)
    }

    /// Whether `name` is held by an online player.
    #[must_use]
    pub fn is_online(&self, name: &str) -> bool {
        self.online.iter().any(|n| n == name)
    }

    /// Online names in login order.
    #[must_use]
    pub fn online_names(&self) -> &[PlayerName] {
        &self.online
    }

    /// All live connections (broadcast recipients). Iteration order is
    /// unspecified; event envelopes are addressed individually.
    pub fn connections(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        self.sessions.keys().copied()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no one is online.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
