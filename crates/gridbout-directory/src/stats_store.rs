//! Win/loss tally store, keyed by display name.
//!
//! Records are created lazily at first login and never deleted, so a
//! player who disconnects and returns under the same name keeps their
//! tally for the process lifetime. Increments against a name with no
//! record are a loud no-op, never a crash.

use std::collections::HashMap;

use gridbout_types::{PlayerName, PlayerStats};

/// Registry of per-name win/loss records.
#[derive(Debug, Default)]
pub struct StatsStore {
    stats: HashMap<PlayerName, PlayerStats>,
}

impl StatsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize `name` to a zero record if absent; returns the current
    /// snapshot either way. Called at login.
    pub fn ensure(&mut self, name: &str) -> PlayerStats {
        *self.stats.entry(name.to_string()).or_default()
    }

    /// Current snapshot for `name`, zero if never initialized.
    #[must_use]
    pub fn get(&self, name: &str) -> PlayerStats {
        self.stats.get(name).copied().unwrap_or_default()
    }

    /// Whether `name` has ever been initialized.
    #[must_use]
    pub fn has_record(&self, name: &str) -> bool {
        self.stats.contains_key(name)
    }

    /// Record a win for `name`.
    pub fn record_win(&mut self, name: &str) {
        if let Some(entry) = self.stats.get_mut(name) {
            entry.wins += 1;
        } else {
            tracing::warn!(name, "win recorded for a name with no stats record");
        }
    }

    /// Record a loss for `name`.
    pub fn record_loss(&mut self, name: &str) {
        if let Some(entry) = self.stats.get_mut(name) {
            entry.losses += 1;
        } else {
            tracing::warn!(name, "loss recorded for a name with no stats record");
        }
    }

    /// Number of names with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether no record exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_initializes_once() {
        let mut store = StatsStore::new();
        assert!(!store.has_record("ada"));
        assert!(store.ensure("ada").is_zero());
        assert!(store.has_record("ada"));

        store.record_win("ada");
        // A later ensure must not reset the tally.
        assert_eq!(store.ensure("ada").wins, 1);
    }

    #[test]
    fn get_defaults_to_zero() {
        let store = StatsStore::new();
        assert!(store.get("nobody").is_zero());
        assert!(store.is_empty());
    }

    #[test]
    fn increments_accumulate() {
        let mut store = StatsStore::new();
        store.ensure("ada");
        store.record_win("ada");
        store.record_win("ada");
        store.record_loss("ada");
        let stats = store.get("ada");
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
    }

    #[test]
    fn increment_without_record_is_a_noop() {
        let mut store = StatsStore::new();
        store.record_win("ghost");
        store.record_loss("ghost");
        assert!(!store.has_record("ghost"));
        assert!(store.get("ghost").is_zero());
    }

    #[test]
    fn records_survive_logout_cycles() {
        // The store has no notion of sessions: a returning name sees its
        // old tally.
        let mut store = StatsStore::new();
        store.ensure("ada");
        store.record_loss("ada");
        let back = store.ensure("ada");
        assert_eq!(back.losses, 1);
    }
}
