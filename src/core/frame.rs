//=========================================================================
// Frame Counter
//=========================================================================
//
// Numbers scheduled ticks and decides what each tick does.
//
// Rules:
//   odd frame   → update phase only
//   even frame  → render phase only
//   frame % N   → slow tick ("each second"), after the phase above
//
// At a ~60Hz host refresh rate and N = 60, updates and renders each run
// at ~30Hz and the slow tick at ~1Hz.
//
//=========================================================================

/// Default slow-tick modulus.
pub const DEFAULT_SLOW_TICK_MODULUS: u64 = 60;

//=== FramePhase ==========================================================

/// Work performed by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Scene state was committed.
    Update,

    /// The surface was cleared and repainted.
    Render,

    /// The runtime is not running; nothing happened.
    Idle,
}

//=== FrameStep ===========================================================

/// Outcome of advancing the counter by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    pub frame: u64,
    pub phase: FramePhase,
    pub slow_tick: bool,
}

//=== FrameCounter ========================================================

/// Monotonic tick counter with the update/render alternation rule.
#[derive(Debug, Clone)]
pub struct FrameCounter {
    frame: u64,
    slow_tick_modulus: u64,
}

impl FrameCounter {
    /// # Panics
    ///
    /// Panics if `slow_tick_modulus == 0`.
    pub fn new(slow_tick_modulus: u64) -> Self {
        assert!(slow_tick_modulus > 0, "Slow tick modulus must be positive");
        Self {
            frame: 0,
            slow_tick_modulus,
        }
    }

    /// Increments the counter and classifies the new frame.
    pub fn advance(&mut self) -> FrameStep {
        self.frame = self.frame.wrapping_add(1);

        let phase = if self.frame % 2 == 1 {
            FramePhase::Update
        } else {
            FramePhase::Render
        };

        FrameStep {
            frame: self.frame,
            phase,
            slow_tick: self.frame % self.slow_tick_modulus == 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn slow_tick_modulus(&self) -> u64 {
        self.slow_tick_modulus
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new(DEFAULT_SLOW_TICK_MODULUS)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
