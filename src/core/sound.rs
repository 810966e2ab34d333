//=========================================================================
// Sound Service
//=========================================================================
//
// Named-clip playback contract and the in-process clip registry.
//
// Components never hold the service directly: they publish a
// `SoundRequest` through the signal bus and the Game resolves the name
// here.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::error::SoundError;

//=== SoundService ========================================================

/// Maps logical sound names to playable clips.
pub trait SoundService {
    /// Registers (or replaces) a clip under `name`.
    fn load(&mut self, name: &str, source: &str, playback_rate: Option<f32>);

    /// Plays the clip from time zero, cutting off a previous playback.
    fn play(&mut self, name: &str) -> Result<(), SoundError>;
}

//=== SoundClip ===========================================================

/// Registered clip and its playback bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundClip {
    pub source: String,
    pub playback_rate: f32,
    pub position: Duration,
    pub play_count: u32,
}

impl SoundClip {
    fn new(source: &str, playback_rate: f32) -> Self {
        Self {
            source: source.to_string(),
            playback_rate,
            position: Duration::ZERO,
            play_count: 0,
        }
    }
}

//=== SoundBank ===========================================================

/// Clip registry implementing [`SoundService`].
///
/// Decoding and output belong to the host's audio backend; the bank
/// owns naming, playback rate and restart semantics.
#[derive(Debug, Default)]
pub struct SoundBank {
    clips: HashMap<String, SoundClip>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clip(&self, name: &str) -> Option<&SoundClip> {
        self.clips.get(name)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl SoundService for SoundBank {
    fn load(&mut self, name: &str, source: &str, playback_rate: Option<f32>) {
        let rate = playback_rate.unwrap_or(1.0);
        info!(target: "sound", "Loaded sound '{}' from {} (rate {})", name, source, rate);
        self.clips.insert(name.to_string(), SoundClip::new(source, rate));
    }

    fn play(&mut self, name: &str) -> Result<(), SoundError> {
        let clip = self
            .clips
            .get_mut(name)
            .ok_or_else(|| SoundError::Missing(name.to_string()))?;

        clip.position = Duration::ZERO;
        clip.play_count += 1;
        debug!(target: "sound", "Playing '{}' from the start (#{})", name, clip.play_count);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_playback_rate() {
        let mut bank = SoundBank::new();
        bank.load("ouch", "ouch.mp3", None);
        bank.load("hit", "hit.mp3", Some(2.0));

        assert_eq!(bank.clip("ouch").map(|c| c.playback_rate), Some(1.0));
        assert_eq!(bank.clip("hit").map(|c| c.playback_rate), Some(2.0));
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn play_restarts_from_zero() {
        let mut bank = SoundBank::new();
        bank.load("hit", "hit.mp3", None);

        assert!(bank.play("hit").is_ok());
        assert!(bank.play("hit").is_ok());

        let clip = bank.clip("hit").unwrap();
        assert_eq!(clip.position, Duration::ZERO);
        assert_eq!(clip.play_count, 2);
    }

    #[test]
    fn play_missing_sound_is_an_error() {
        let mut bank = SoundBank::new();
        assert_eq!(
            bank.play("nope"),
            Err(SoundError::Missing("nope".to_string()))
        );
    }
}
