//! # altnick
//!
//! Alternate-nickname negotiation for IRC-style chat clients.
//!
//! When a server rejects a requested nickname as already in use, this crate
//! deterministically walks a pre-configured ordered fallback list, requests
//! the next candidate, and — optionally — reclaims the originally desired
//! nickname once its holder quits. Progress is tracked independently per
//! connection, so one process can negotiate several sessions at once.
//!
//! The crate is a pure state holder driven by inbound protocol events: the
//! transport, the event dispatch loop, and wire encoding all live with the
//! caller. Reactions are queued as [`OutboundCommand`]s through a
//! [`CommandSink`].
//!
//! ## Quick start
//!
//! ```rust
//! use altnick::{CommandSink, ConnectionId, NegotiationTracker, NickPool, OutboundCommand};
//! use parking_lot::Mutex;
//!
//! let pool = NickPool::new(["Foo", "Foo_", "FooBar"]).unwrap();
//! let tracker = NegotiationTracker::new(pool);
//!
//! let captured = Mutex::new(Vec::new());
//! let conn = ConnectionId::new();
//! tracker.on_nickname_in_use(conn, "Foo", &CommandSink::Capturing(&captured));
//!
//! assert_eq!(
//!     captured.into_inner(),
//!     vec![OutboundCommand::Nick("Foo".into())]
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod error;
pub mod nick;
pub mod pool;
pub mod tracker;

pub use self::command::{CommandSink, OutboundCommand};
pub use self::config::Config;
pub use self::error::ConfigError;
pub use self::nick::{NickExt, irc_eq, irc_lower_char, irc_to_lower};
pub use self::pool::NickPool;
pub use self::tracker::{ConnectionId, EXHAUSTED_REASON, NegotiationTracker};
