//! In-process message channel between the two editor windows.

use super::SyncMessage;
use log::debug;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// One side of a bidirectional, order-preserving message link.
#[derive(Debug)]
pub struct SyncEndpoint {
    tx: Sender<SyncMessage>,
    rx: Receiver<SyncMessage>,
    open: bool,
}

impl SyncEndpoint {
    /// Create two connected endpoints.
    pub fn pair() -> (SyncEndpoint, SyncEndpoint) {
        let (a_tx, b_rx) = channel();
        let (b_tx, a_rx) = channel();
        (
            SyncEndpoint {
                tx: a_tx,
                rx: a_rx,
                open: true,
            },
            SyncEndpoint {
                tx: b_tx,
                rx: b_rx,
                open: true,
            },
        )
    }

    /// False once the peer has gone away or a send failed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Fire-and-forget send. Skipped silently when the link is closed.
    pub fn send(&mut self, message: SyncMessage) -> bool {
        if !self.open {
            return false;
        }
        let kind = message.kind();
        if self.tx.send(message).is_err() {
            debug!("Sync peer gone, dropping '{}'", kind);
            self.open = false;
            return false;
        }
        debug!("Sync sent '{}'", kind);
        true
    }

    /// Take every queued message in arrival order.
    ///
    /// Messages already queued before the peer disconnected are still
    /// returned.
    pub fn drain(&mut self) -> Vec<SyncMessage> {
        let mut messages = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(message) => messages.push(message),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.open = false;
                    break;
                }
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_delivers_in_order() {
        let (mut a, mut b) = SyncEndpoint::pair();
        a.send(SyncMessage::TabMode { value: true });
        a.send(SyncMessage::TabMode { value: false });
        b.send(SyncMessage::ReturnEditor);

        assert_eq!(
            b.drain(),
            vec![
                SyncMessage::TabMode { value: true },
                SyncMessage::TabMode { value: false }
            ]
        );
        assert_eq!(a.drain(), vec![SyncMessage::ReturnEditor]);
        assert!(b.drain().is_empty());
    }

    #[test]
    fn test_send_to_dropped_peer_closes() {
        let (mut a, b) = SyncEndpoint::pair();
        drop(b);
        assert!(a.is_open());
        assert!(!a.send(SyncMessage::ReturnEditor));
        assert!(!a.is_open());
        assert!(!a.send(SyncMessage::ReturnEditor));
    }

    #[test]
    fn test_drain_after_peer_drop_returns_queued_then_closes() {
        let (mut a, mut b) = SyncEndpoint::pair();
        b.send(SyncMessage::EditorWindowClosed);
        drop(b);

        assert_eq!(a.drain(), vec![SyncMessage::EditorWindowClosed]);
        assert!(!a.is_open());
    }
}
