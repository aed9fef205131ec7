//! The match coordinator.
//!
//! One public method per inbound command, each taking all identifiers
//! explicitly and returning the addressed events to deliver. Every method
//! validates before mutating: a rejected command leaves all stores
//! untouched, so the client may simply retry.

use gridbout_directory::{MatchDirectory, SessionDirectory, StatsStore};
use gridbout_matchcore::Match;
use gridbout_types::{
    Board, ClientCommand, ConnectionId, GridboutError, MatchId, MatchRules, Outbound, PlayerName,
    PlayerStats, ServerEvent,
};

/// Orchestrates sessions, matches, and stats. Constructed once at process
/// start; callers hold the coordinator, never the raw stores.
#[derive(Debug, Default)]
pub struct Coordinator {
    sessions: SessionDirectory,
    matches: MatchDirectory,
    stats: StatsStore,
    rules: MatchRules,
}

impl Coordinator {
    /// A coordinator with standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A coordinator with custom match rules.
    #[must_use]
    pub fn with_rules(rules: MatchRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    // =================================================================
    // Commands
    // =================================================================

    /// Dispatch an inbound command to the matching handler.
    pub fn handle(&mut self, conn: ConnectionId, command: ClientCommand) -> Vec<Outbound> {
        match command {
            ClientCommand::Login { username } => self.login(conn, &username),
            ClientCommand::Invite { to } => self.invite(conn, &to),
            ClientCommand::NumberSelected { match_id, number } => {
                self.number_selected(conn, match_id, number)
            }
            ClientCommand::ExitGame { match_id } => self.exit_game(conn, match_id),
        }
    }

    /// Claim a display name for a connection.
    ///
    /// On success the caller receives `loggedIn` with the online list and
    /// their stats snapshot (lazily initialized), and everyone receives the
    /// updated `joined` list. A name already online yields `loginFailed` to
    /// the caller only.
    pub fn login(&mut self, conn: ConnectionId, username: &str) -> Vec<Outbound> {
        if let Err(err) = self.sessions.login(conn, username) {
            tracing::debug!(%conn, username, %err, "login rejected");
            return vec![Outbound::new(
                conn,
                ServerEvent::LoginFailed {
                    message: "Username is already taken.".to_string(),
                },
            )];
        }

        let stats = self.stats.ensure(username);
        let players = self.sessions.online_names().to_vec();
        let mut out = vec![Outbound::new(
            conn,
            ServerEvent::LoggedIn { players, stats },
        )];
        out.extend(self.joined_broadcast());
        out
    }

    /// Invite an online player into a match.
    ///
    /// Failures (`SelfInvite`, `PlayerOffline`) yield `inviteFailed` to the
    /// inviter and create nothing. On success the invitee receives
    /// `gameInvite` and both participants receive `startGame` carrying
    /// their own freshly generated board; the inviter holds the first turn.
    pub fn invite(&mut self, from: ConnectionId, to_name: &str) -> Vec<Outbound> {
        let Some(inviter_name) = self.sessions.name_of(from).map(str::to_owned) else {
            tracing::debug!(%from, to_name, "invite from an unknown connection ignored");
            return Vec::new();
        };

        let invitee = if to_name == inviter_name {
            Err(GridboutError::SelfInvite)
        } else {
            self.sessions
                .connection_of(to_name)
                .ok_or_else(|| GridboutError::PlayerOffline(to_name.to_string()))
        };
        let to_conn = match invitee {
            Ok(conn) => conn,
            Err(err) => {
                tracing::debug!(%from, to_name, %err, "invite rejected");
                let message = match err {
                    GridboutError::SelfInvite => "You cannot invite yourself.",
                    _ => "Player is not online.",
                };
                return vec![Outbound::new(
                    from,
                    ServerEvent::InviteFailed {
                        message: message.to_string(),
                    },
                )];
            }
        };

        let m = Match::new(
            (from, inviter_name.clone()),
            (to_conn, to_name.to_string()),
            self.rules,
        );
        let match_id = m.id();

        let mut out = vec![Outbound::new(
            to_conn,
            ServerEvent::GameInvite {
                from: inviter_name.clone(),
                match_id,
            },
        )];
        for seat in m.seats() {
            out.push(Outbound::new(
                seat.connection,
                ServerEvent::StartGame {
                    match_id,
                    player_id: seat.name.clone(),
                    matrix: seat.board.clone(),
                    score: 0,
                    opponent_score: 0,
                },
            ));
        }

        if let Err(err) = self.matches.insert(m) {
            tracing::error!(%match_id, %err, "match registration failed");
            return vec![Outbound::new(
                from,
                ServerEvent::InviteFailed {
                    message: "Player is not online.".to_string(),
                },
            )];
        }
        tracing::info!(%match_id, inviter = %inviter_name, invitee = to_name, "match started");
        out
    }

    /// Apply a turn-holder's number selection.
    ///
    /// An unknown match is a silent no-op (it may already be resolved);
    /// an out-of-turn move yields `notYourTurn` to the caller only. An
    /// accepted move sends each participant `updateMatrix` with their own
    /// post-move board and flags, then either `turnChange` to both, or —
    /// when the win threshold is reached — `gameOver` to both, with stats
    /// recorded and the match removed in the same call.
    pub fn number_selected(
        &mut self,
        conn: ConnectionId,
        match_id: MatchId,
        number: u8,
    ) -> Vec<Outbound> {
        let Ok(m) = self.matches.get_mut(match_id) else {
            tracing::debug!(%conn, %match_id, "move for an unknown match ignored");
            return Vec::new();
        };

        let applied = match m.apply_move(conn, number) {
            Ok(applied) => applied,
            Err(GridboutError::NotYourTurn) => {
                return vec![Outbound::new(conn, ServerEvent::NotYourTurn)];
            }
            Err(err) => {
                tracing::debug!(%conn, %match_id, number, %err, "move rejected");
                return Vec::new();
            }
        };

        let seats: Vec<(ConnectionId, PlayerName, Board)> = m
            .seats()
            .iter()
            .map(|seat| (seat.connection, seat.name.clone(), seat.board.clone()))
            .collect();
        let next_name = seats[applied.next_turn].1.clone();
        let duration = m.elapsed_secs();

        let mut out = Vec::new();
        for (idx, (seat_conn, _, board)) in seats.iter().enumerate() {
            out.push(Outbound::new(
                *seat_conn,
                ServerEvent::UpdateMatrix {
                    matrix: board.clone(),
                    current_player: next_name.clone(),
                    score: applied.scores[idx],
                    opponent_score: applied.scores[1 - idx],
                    line_completed: applied.line_completed[idx],
                },
            ));
        }

        match applied.winner {
            None => {
                for (seat_conn, _, _) in &seats {
                    out.push(Outbound::new(
                        *seat_conn,
                        ServerEvent::TurnChange {
                            current_player: next_name.clone(),
                        },
                    ));
                }
            }
            Some(winner_idx) => {
                let winner_name = seats[winner_idx].1.clone();
                let loser_name = seats[1 - winner_idx].1.clone();
                self.stats.record_win(&winner_name);
                self.stats.record_loss(&loser_name);

                let message = format!("{winner_name} wins!");
                for (seat_conn, seat_name, _) in &seats {
                    out.push(Outbound::new(
                        *seat_conn,
                        ServerEvent::GameOver {
                            message: message.clone(),
                            winner: winner_name.clone(),
                            game_duration: duration,
                            move_count: applied.move_count,
                            player_stats: self.stats.get(seat_name),
                        },
                    ));
                }
                self.matches.remove(match_id);
                tracing::info!(
                    %match_id,
                    winner = %winner_name,
                    moves = applied.move_count,
                    duration,
                    "match won"
                );
            }
        }
        out
    }

    /// Voluntary forfeit. A silent no-op if the match is unknown; the
    /// exiting participant receives nothing (they initiated it).
    pub fn exit_game(&mut self, conn: ConnectionId, match_id: MatchId) -> Vec<Outbound> {
        self.forfeit(conn, match_id, "exit")
    }

    /// A connection vanished: log it out, broadcast the shrunken online
    /// list, and forfeit its in-flight match, if any, to the opponent.
    pub fn disconnect(&mut self, conn: ConnectionId) -> Vec<Outbound> {
        let name = self.sessions.logout(conn);
        let mut out = if name.is_some() {
            self.joined_broadcast()
        } else {
            Vec::new()
        };

        if let Some(match_id) = self.matches.find_by_participant(conn) {
            out.extend(self.forfeit(conn, match_id, "disconnect"));
        }
        out
    }

    // =================================================================
    // Introspection
    // =================================================================

    /// Online names in login order.
    #[must_use]
    pub fn online_players(&self) -> &[PlayerName] {
        self.sessions.online_names()
    }

    /// Current stats snapshot for a name (zero if never logged in).
    #[must_use]
    pub fn stats_of(&self, name: &str) -> PlayerStats {
        self.stats.get(name)
    }

    /// Whether a match is still in flight.
    #[must_use]
    pub fn has_match(&self, match_id: MatchId) -> bool {
        self.matches.contains(match_id)
    }

    /// Number of in-flight matches.
    #[must_use]
    pub fn active_match_count(&self) -> usize {
        self.matches.len()
    }

    // =================================================================
    // Internals
    // =================================================================

    /// The updated online list, addressed to every live connection.
    fn joined_broadcast(&self) -> Vec<Outbound> {
        let players = self.sessions.online_names().to_vec();
        self.sessions
            .connections()
            .map(|conn| {
                Outbound::new(
                    conn,
                    ServerEvent::Joined {
                        players: players.clone(),
                    },
                )
            })
            .collect()
    }

    /// Shared terminal path for exit and disconnect: the remaining
    /// participant wins unconditionally, regardless of score. The loss
    /// lands only if the leaver ever had a stats record.
    fn forfeit(
        &mut self,
        leaver: ConnectionId,
        match_id: MatchId,
        cause: &'static str,
    ) -> Vec<Outbound> {
        let Ok(m) = self.matches.get_mut(match_id) else {
            tracing::debug!(%leaver, %match_id, cause, "forfeit for an unknown match ignored");
            return Vec::new();
        };
        let winner_idx = match m.resolve_forfeit(leaver) {
            Ok(idx) => idx,
            Err(err) => {
                tracing::debug!(%leaver, %match_id, %err, "forfeit rejected");
                return Vec::new();
            }
        };

        let winner_conn = m.seat(winner_idx).connection;
        let winner_name = m.seat(winner_idx).name.clone();
        let leaver_name = m.seat(1 - winner_idx).name.clone();
        let duration = m.elapsed_secs();
        let move_count = m.move_count();

        self.stats.record_win(&winner_name);
        if self.stats.has_record(&leaver_name) {
            self.stats.record_loss(&leaver_name);
        }

        let out = vec![Outbound::new(
            winner_conn,
            ServerEvent::OpponentLeft {
                message: format!("Player {leaver_name} has left the game. You win!"),
                winner: winner_name.clone(),
                game_duration: duration,
                move_count,
                player_stats: self.stats.get(&winner_name),
            },
        )];
        self.matches.remove(match_id);
        tracing::info!(
            %match_id,
            winner = %winner_name,
            leaver = %leaver_name,
            cause,
            "match forfeited"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_for<'a>(out: &'a [Outbound], conn: ConnectionId) -> Vec<&'a ServerEvent> {
        out.iter()
            .filter(|o| o.to == conn)
            .map(|o| &o.event)
            .collect()
    }

    #[test]
    fn login_emits_logged_in_and_joined() {
        let mut coord = Coordinator::new();
        let conn = ConnectionId::new();
        let out = coord.login(conn, "ada");

        let events = events_for(&out, conn);
        assert_eq!(events.len(), 2);
        assert!(
            matches!(events[0], ServerEvent::LoggedIn { players, stats }
                if players == &["ada"] && stats.is_zero())
        );
        assert!(matches!(events[1], ServerEvent::Joined { players } if players == &["ada"]));
        assert_eq!(coord.online_players(), ["ada"]);
    }

    #[test]
    fn second_login_sees_existing_stats() {
        let mut coord = Coordinator::new();
        let first = ConnectionId::new();
        coord.login(first, "ada");
        coord.disconnect(first);

        let out = coord.login(ConnectionId::new(), "ada");
        assert!(out.iter().any(|o| matches!(
            &o.event,
            ServerEvent::LoggedIn { stats, .. } if stats.is_zero()
        )));
    }

    #[test]
    fn taken_name_fails_for_caller_only() {
        let mut coord = Coordinator::new();
        coord.login(ConnectionId::new(), "ada");

        let intruder = ConnectionId::new();
        let out = coord.login(intruder, "ada");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, intruder);
        assert!(matches!(
            &out[0].event,
            ServerEvent::LoginFailed { message } if message == "Username is already taken."
        ));
        assert_eq!(coord.online_players(), ["ada"]);
    }

    #[test]
    fn invite_offline_player_fails() {
        let mut coord = Coordinator::new();
        let ada = ConnectionId::new();
        coord.login(ada, "ada");

        let out = coord.invite(ada, "ghost");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, ada);
        assert!(matches!(
            &out[0].event,
            ServerEvent::InviteFailed { message } if message == "Player is not online."
        ));
        assert_eq!(coord.active_match_count(), 0);
    }

    #[test]
    fn self_invite_fails() {
        let mut coord = Coordinator::new();
        let ada = ConnectionId::new();
        coord.login(ada, "ada");

        let out = coord.invite(ada, "ada");
        assert!(matches!(&out[0].event, ServerEvent::InviteFailed { .. }));
        assert_eq!(coord.active_match_count(), 0);
    }

    #[test]
    fn invite_before_login_is_ignored() {
        let mut coord = Coordinator::new();
        coord.login(ConnectionId::new(), "bob");
        let out = coord.invite(ConnectionId::new(), "bob");
        assert!(out.is_empty());
        assert_eq!(coord.active_match_count(), 0);
    }

    #[test]
    fn move_for_unknown_match_is_silent() {
        let mut coord = Coordinator::new();
        let conn = ConnectionId::new();
        coord.login(conn, "ada");
        let out = coord.number_selected(conn, MatchId::new(), 5);
        assert!(out.is_empty());
    }

    #[test]
    fn exit_unknown_match_is_silent() {
        let mut coord = Coordinator::new();
        let conn = ConnectionId::new();
        coord.login(conn, "ada");
        assert!(coord.exit_game(conn, MatchId::new()).is_empty());
    }

    #[test]
    fn disconnect_of_unknown_connection_is_silent() {
        let mut coord = Coordinator::new();
        assert!(coord.disconnect(ConnectionId::new()).is_empty());
    }

    #[test]
    fn handle_dispatches_commands() {
        let mut coord = Coordinator::new();
        let conn = ConnectionId::new();
        let out = coord.handle(
            conn,
            ClientCommand::Login {
                username: "ada".to_string(),
            },
        );
        assert!(!out.is_empty());
        assert_eq!(coord.online_players(), ["ada"]);
    }
}
