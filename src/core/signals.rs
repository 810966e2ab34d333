//=========================================================================
// Signal Bus
//=========================================================================
//
// Runtime-owned channels for the two cross-component signals.
//
// Architecture:
//   host input ──ClickSignal──┐
//                             ├─► SignalBus ──subscribe()──► Game
//   entities ──SoundRequest───┘                (drained each tick)
//
// The Game holds a `SignalSubscription` instead of registering global
// listeners; dropping it detaches the Game from both channels.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::trace;

//=== Internal Dependencies ===============================================

use super::input::EventTarget;

//=== Signals =============================================================

/// A click reported by the host, with the element it landed on and the
/// surface-local pointer at the moment it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickSignal {
    pub target: EventTarget,
    pub x: f32,
    pub y: f32,
}

/// Request to play a named sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundRequest {
    pub name: String,
}

//=== SoundRequester ======================================================

/// Cloneable handle used to request sounds by name.
///
/// A detached requester (the default) drops requests silently.
#[derive(Debug, Clone, Default)]
pub struct SoundRequester {
    sender: Option<Sender<SoundRequest>>,
}

impl SoundRequester {
    pub fn play(&self, name: &str) {
        let Some(sender) = &self.sender else {
            trace!(target: "sound", "No sound listener, dropping '{}'", name);
            return;
        };

        if sender.send(SoundRequest { name: name.to_string() }).is_err() {
            trace!(target: "sound", "Sound channel closed, dropping '{}'", name);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.sender.is_some()
    }
}

//=== SignalBus ===========================================================

/// Owner of the click and sound-request channels.
pub struct SignalBus {
    click_tx: Sender<ClickSignal>,
    click_rx: Receiver<ClickSignal>,
    sound_tx: Sender<SoundRequest>,
    sound_rx: Receiver<SoundRequest>,
}

impl SignalBus {
    pub fn new() -> Self {
        let (click_tx, click_rx) = unbounded();
        let (sound_tx, sound_rx) = unbounded();
        Self {
            click_tx,
            click_rx,
            sound_tx,
            sound_rx,
        }
    }

    /// Publishes a click at a surface-local position.
    pub fn publish_click(&self, target: EventTarget, x: f32, y: f32) {
        // The bus keeps its own receiver, so sending cannot fail.
        let _ = self.click_tx.send(ClickSignal { target, x, y });
    }

    /// Publishing handle for sound requests.
    pub fn sound_requester(&self) -> SoundRequester {
        SoundRequester {
            sender: Some(self.sound_tx.clone()),
        }
    }

    /// Hands out receiving ends for a new listener.
    pub fn subscribe(&self) -> SignalSubscription {
        SignalSubscription {
            clicks: self.click_rx.clone(),
            sounds: self.sound_rx.clone(),
            requester: self.sound_requester(),
        }
    }

    /// Discards queued signals nobody consumed.
    pub fn purge(&self) -> usize {
        self.click_rx.try_iter().count() + self.sound_rx.try_iter().count()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

//=== SignalSubscription ==================================================

/// Receiving side held by the active Game.
pub struct SignalSubscription {
    clicks: Receiver<ClickSignal>,
    sounds: Receiver<SoundRequest>,
    requester: SoundRequester,
}

impl SignalSubscription {
    pub fn requester(&self) -> SoundRequester {
        self.requester.clone()
    }

    /// Next pending click, if any.
    pub fn next_click(&self) -> Option<ClickSignal> {
        match self.clicks.try_recv() {
            Ok(click) => Some(click),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Next pending sound request, if any.
    pub fn next_sound(&self) -> Option<SoundRequest> {
        match self.sounds.try_recv() {
            Ok(request) => Some(request),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_receives_clicks_in_order() {
        let bus = SignalBus::new();
        let sub = bus.subscribe();

        bus.publish_click(EventTarget::Surface, 300.0, 210.0);
        bus.publish_click(EventTarget::Elsewhere, 0.0, 0.0);

        assert_eq!(
            sub.next_click(),
            Some(ClickSignal { target: EventTarget::Surface, x: 300.0, y: 210.0 })
        );
        assert_eq!(sub.next_click().map(|c| c.target), Some(EventTarget::Elsewhere));
        assert!(sub.next_click().is_none());
    }

    #[test]
    fn requester_publishes_sound_names() {
        let bus = SignalBus::new();
        let sub = bus.subscribe();

        sub.requester().play("ouch");

        assert_eq!(
            sub.next_sound(),
            Some(SoundRequest { name: "ouch".to_string() })
        );
    }

    #[test]
    fn detached_requester_is_a_noop() {
        let requester = SoundRequester::default();
        assert!(!requester.is_attached());
        requester.play("hit");
    }

    #[test]
    fn purge_drops_unconsumed_signals() {
        let bus = SignalBus::new();
        bus.publish_click(EventTarget::Surface, 1.0, 1.0);
        bus.sound_requester().play("hit");

        assert_eq!(bus.purge(), 2);
        assert!(bus.subscribe().next_click().is_none());
    }
}
