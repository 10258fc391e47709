//! Async asset-completion channel.
//!
//! Clip and mesh loading happen off the frame sequence; completions queue
//! here and the session drains them non-blocking at the top of each tick.
//! Uses `std::sync::mpsc` under the hood with non-blocking drain helpers.

use crate::anim::{AnimClip, AnimState};
use std::sync::mpsc::{self, Receiver, Sender};

/// A completed load delivered by the external asset pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetEvent {
    /// The character mesh is ready; the session may start advancing.
    MeshReady,
    /// A clip finished loading for `state`.
    Clip { state: AnimState, clip: AnimClip },
}

#[derive(Clone)]
pub struct AssetTx(Sender<AssetEvent>);

pub struct AssetRx(Receiver<AssetEvent>);

/// Create a sender/receiver pair. The underlying channel is unbounded.
#[must_use]
pub fn channel() -> (AssetTx, AssetRx) {
    let (s, r) = mpsc::channel::<AssetEvent>();
    (AssetTx(s), AssetRx(r))
}

impl AssetTx {
    /// Try to send; returns false if the receiver is dropped.
    #[must_use]
    pub fn try_send(&self, ev: AssetEvent) -> bool {
        self.0.send(ev).is_ok()
    }
}

impl AssetRx {
    /// Non-blocking receive of a single completion.
    #[must_use]
    pub fn try_recv(&self) -> Option<AssetEvent> {
        self.0.try_recv().ok()
    }

    /// Drain all currently queued completions.
    #[must_use]
    pub fn drain(&self) -> Vec<AssetEvent> {
        let mut out = Vec::new();
        while let Some(ev) = self.try_recv() {
            out.push(ev);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_and_drain() {
        let (tx, rx) = channel();
        assert!(tx.try_send(AssetEvent::MeshReady));
        assert!(tx.try_send(AssetEvent::Clip {
            state: AnimState::Idle,
            clip: AnimClip {
                name: "Idle".into(),
                duration: 2.0,
            },
        }));
        let drained = rx.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], AssetEvent::MeshReady);
        assert!(rx.try_recv().is_none());
    }
}
