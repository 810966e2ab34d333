//=========================================================================
// GW Core
//
// Building blocks of the runtime, independent of any windowing host.
//
// Responsibilities:
// - Scene graph: Game → Scene → Entity, with a shared Navigator
// - Frame numbering and the update/render/slow-tick rules
// - Pointer normalization and the click / sound-request channels
// - The drawing and sound contracts consumed by entities
//
// Notes:
// Everything here is single-threaded. Shared state between a scene and
// its entities uses `Rc<Cell<_>>`/`Rc<RefCell<_>>`; cross-component
// signals go through the runtime's `SignalBus`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod entity;
pub mod frame;
pub mod game;
pub mod input;
pub mod navigator;
pub mod scene;
pub mod shapes;
pub mod signals;
pub mod sound;
pub mod surface;

//=== Public API ==========================================================

pub use entity::{
    Button, ButtonStyle, Cursor, DrawableState, Entity, FrameContext, HitRegion, Label,
    StateMachine,
};
pub use frame::{FrameCounter, FramePhase, FrameStep};
pub use game::{Game, GameOptions};
pub use input::{EventTarget, MouseButton, PointerEvent, PointerTracker};
pub use navigator::Navigator;
pub use scene::{DefaultBehavior, Scene, SceneBehavior};
pub use signals::{ClickSignal, SignalBus, SignalSubscription, SoundRequest, SoundRequester};
pub use sound::{SoundBank, SoundClip, SoundService};
pub use surface::{
    Color, DrawCommand, DrawingSurface, EllipseArc, LinearGradient, RecordingSurface, TextBaseline,
};
