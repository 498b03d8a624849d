//! Outbound commands queued toward the transport layer.

use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Commands the negotiation core emits in reaction to protocol events.
///
/// Commands are queued for later transmission by the transport layer; the
/// core never writes to a socket itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundCommand {
    /// Request a nickname change to the carried nickname.
    Nick(String),
    /// Disconnect from the server with a human-readable reason.
    Quit(String),
    /// Advisory: the connection owner should refresh its cached current
    /// nickname. Only emitted when `sync_current_nick` is enabled.
    SyncCurrentNick(String),
}

/// Middleware for routing emitted commands.
///
/// `Queue` forwards to the connection's transport-bound queue; `Capturing`
/// buffers commands for inspection, so the core stays testable without a
/// real connection.
#[derive(Clone)]
pub enum CommandSink<'a> {
    /// Forward into the per-connection outbound queue.
    Queue(&'a mpsc::UnboundedSender<OutboundCommand>),
    /// Buffer commands for later inspection.
    Capturing(&'a Mutex<Vec<OutboundCommand>>),
}

impl CommandSink<'_> {
    /// Queue or buffer a command depending on sink mode.
    ///
    /// A closed queue means the connection is already being torn down, so
    /// the command is dropped.
    pub fn send(&self, cmd: OutboundCommand) {
        match self {
            Self::Queue(tx) => {
                let _ = tx.send(cmd);
            }
            Self::Capturing(buf) => buf.lock().push(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capturing_sink_buffers_in_order() {
        let buf = Mutex::new(Vec::new());
        let sink = CommandSink::Capturing(&buf);
        sink.send(OutboundCommand::Nick("Foo".into()));
        sink.send(OutboundCommand::Quit("bye".into()));

        let commands = buf.into_inner();
        assert_eq!(
            commands,
            vec![
                OutboundCommand::Nick("Foo".into()),
                OutboundCommand::Quit("bye".into()),
            ]
        );
    }

    #[test]
    fn queue_sink_delivers_to_receiver() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = CommandSink::Queue(&tx);
        sink.send(OutboundCommand::Nick("Foo".into()));

        assert_eq!(rx.try_recv().unwrap(), OutboundCommand::Nick("Foo".into()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_to_closed_queue_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sink = CommandSink::Queue(&tx);
        // Must not panic; the connection is gone and the command is moot.
        sink.send(OutboundCommand::Nick("Foo".into()));
    }
}
