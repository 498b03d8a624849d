//! Per-connection negotiation state and the two protocol reactions.
//!
//! A [`NegotiationTracker`] owns one cursor into the fallback pool and one
//! optional recovery record per connection. It is a pure state holder: the
//! external dispatcher delivers "nickname in use" and "user quit" events,
//! and reactions are queued through a [`CommandSink`].

use crate::command::{CommandSink, OutboundCommand};
use crate::config::Config;
use crate::error::ConfigError;
use crate::nick::irc_eq;
use crate::pool::NickPool;
use dashmap::DashMap;
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Reason sent with the disconnect request once every fallback failed.
pub const EXHAUSTED_REASON: &str = "All specified alternate nicks are in use";

/// Opaque, stable identity for one client connection.
///
/// Assigned by the external connection manager and used only as a map key;
/// the tracker never dereferences a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Mint a fresh connection identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ConnectionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Negotiation progress for one connection.
#[derive(Debug, Default)]
struct ConnectionState {
    /// Next pool index to try. Monotonically non-decreasing within an
    /// episode; reset only by reconnection (a fresh entry).
    cursor: usize,
    /// Originally desired nickname, recorded on the first conflict when
    /// recovery is enabled and cleared once reclaimed.
    primary_nick: Option<String>,
}

/// Tracks nickname negotiation independently for every active connection.
///
/// Connection entries are created lazily on the first conflict event and
/// live until [`remove_connection`](Self::remove_connection); ownership of
/// connection lifetime stays with the external connection manager.
pub struct NegotiationTracker {
    pool: NickPool,
    recovery: bool,
    sync_current_nick: bool,
    connections: DashMap<ConnectionId, ConnectionState>,
}

impl NegotiationTracker {
    /// Create a tracker over a validated fallback pool.
    ///
    /// Recovery and cached-nickname sync are off by default.
    pub fn new(pool: NickPool) -> Self {
        Self {
            pool,
            recovery: false,
            sync_current_nick: false,
            connections: DashMap::new(),
        }
    }

    /// Enable or disable primary-nickname recovery.
    #[must_use]
    pub fn with_recovery(mut self, recovery: bool) -> Self {
        self.recovery = recovery;
        self
    }

    /// Enable or disable the advisory
    /// [`SyncCurrentNick`](OutboundCommand::SyncCurrentNick) side effect.
    #[must_use]
    pub fn with_sync_current_nick(mut self, sync: bool) -> Self {
        self.sync_current_nick = sync;
        self
    }

    /// Build a tracker straight from configuration.
    ///
    /// Fails when the configured nick list has no grammar-valid entries.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let pool = NickPool::new(&config.nicks)?;
        Ok(Self::new(pool)
            .with_recovery(config.recovery)
            .with_sync_current_nick(config.sync_current_nick))
    }

    /// The validated fallback pool this tracker walks.
    pub fn pool(&self) -> &NickPool {
        &self.pool
    }

    /// React to a "nickname in use" conflict event.
    ///
    /// Selects the next fallback from the pool and queues a
    /// [`Nick`](OutboundCommand::Nick) request, or queues a
    /// [`Quit`](OutboundCommand::Quit) with [`EXHAUSTED_REASON`] once the
    /// pool is spent. With recovery enabled, the first rejected nickname of
    /// the episode is recorded as the primary nickname.
    pub fn on_nickname_in_use(&self, conn: ConnectionId, rejected: &str, sink: &CommandSink<'_>) {
        // The entry guard is held across the read-advance-emit sequence so
        // overlapping conflict events cannot claim the same fallback.
        let mut state = self.connections.entry(conn).or_default();

        let Some(next) = self.pool.get(state.cursor) else {
            info!(conn = %conn, "alternate nick list exhausted, requesting disconnect");
            sink.send(OutboundCommand::Quit(EXHAUSTED_REASON.to_string()));
            return;
        };
        let next = next.to_string();

        if self.recovery && state.primary_nick.is_none() {
            debug!(conn = %conn, nick = %rejected, "saving rejected nick as primary");
            state.primary_nick = Some(rejected.to_string());
        }

        state.cursor += 1;
        debug!(conn = %conn, nick = %next, cursor = state.cursor, "switching to alternate nick");
        sink.send(OutboundCommand::Nick(next.clone()));
        if self.sync_current_nick {
            sink.send(OutboundCommand::SyncCurrentNick(next));
        }
    }

    /// React to a "user quit" event on a connection.
    ///
    /// Only meaningful with recovery enabled: if the departing nickname
    /// matches the primary nickname recorded for `conn` (RFC 1459 case
    /// folding), queue a request for it and clear the record. Fires at most
    /// once per recorded primary nickname; a non-matching or repeated quit
    /// is not an error and has no effect.
    pub fn on_user_quit(&self, conn: ConnectionId, departed: &str, sink: &CommandSink<'_>) {
        if !self.recovery {
            return;
        }
        let Some(mut state) = self.connections.get_mut(&conn) else {
            return;
        };
        if let Some(primary) = state.primary_nick.take_if(|p| irc_eq(p, departed)) {
            debug!(conn = %conn, nick = %primary, "primary nick freed, reclaiming");
            sink.send(OutboundCommand::Nick(primary.clone()));
            if self.sync_current_nick {
                sink.send(OutboundCommand::SyncCurrentNick(primary));
            }
        }
    }

    /// Drop all state for a connection.
    ///
    /// Called by the connection manager on teardown; a later conflict event
    /// for the same identity starts a fresh negotiation episode.
    pub fn remove_connection(&self, conn: ConnectionId) {
        self.connections.remove(&conn);
    }

    /// Whether any state is tracked for `conn`.
    pub fn is_tracking(&self, conn: ConnectionId) -> bool {
        self.connections.contains_key(&conn)
    }

    /// The connection's cursor position, if it is tracked.
    pub fn cursor(&self, conn: ConnectionId) -> Option<usize> {
        self.connections.get(&conn).map(|state| state.cursor)
    }

    /// The connection's recorded primary nickname, if any.
    ///
    /// Clones out of the map so no shard guard outlives the call.
    pub fn primary_nick(&self, conn: ConnectionId) -> Option<String> {
        self.connections
            .get(&conn)
            .and_then(|state| state.primary_nick.clone())
    }
}
