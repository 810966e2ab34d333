//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use gw_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Runtime, RuntimeBuilder};
pub use crate::error::{EngineError, SoundError};

// Scene graph
pub use crate::core::entity::{
    Button, ButtonStyle, Cursor, DrawableState, Entity, FrameContext, HitRegion, Label,
    StateMachine,
};
pub use crate::core::game::{Game, GameOptions};
pub use crate::core::scene::{Scene, SceneBehavior};

// Input
pub use crate::core::input::{EventTarget, MouseButton, PointerEvent};

// Drawing and sound
pub use crate::core::sound::{SoundBank, SoundService};
pub use crate::core::surface::{Color, DrawingSurface, EllipseArc, RecordingSurface, TextBaseline};
