//=========================================================================
// Entities
//=========================================================================
//
// Anything a scene draws or routes input to.
//
// Architecture:
//   Entity (trait)
//     ├─ required:   id(), render()
//     ├─ optional:   hit_region()       → hit-testable
//     │              follows_pointer()  → tracks the pointer
//     │              on_change / on_click / on_mouse_over / on_mouse_out
//     └─ Cursor: Entity + press()/release() (discrete UP/DOWN state)
//
// Capabilities are chosen per type by overriding the defaulted methods
// rather than by a class hierarchy. Stateful characters delegate their
// skin to a `StateMachine`.
//
//=========================================================================

//=== Module Declarations =================================================

mod state_machine;
mod widgets;

//=== Public API ==========================================================

pub use state_machine::{DrawableState, StateMachine};
pub use widgets::{Button, ButtonStyle, Label};

//=== Internal Dependencies ===============================================

use crate::core::navigator::Navigator;
use crate::core::signals::SoundRequester;
use crate::core::surface::DrawingSurface;

//=== HitRegion ===========================================================

/// Axis-aligned rectangle in scene-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict containment: points on any edge are outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let beyond_top_left = px > self.x && py > self.y;
        let within_bottom_right = px < self.x + self.width && py < self.y + self.height;
        beyond_top_left && within_bottom_right
    }
}

//=== FrameContext ========================================================

/// What an entity or scene hook may reach during a callback.
pub struct FrameContext<'a> {
    navigator: &'a Navigator,
    sounds: &'a SoundRequester,
    pointer: (f32, f32),
    mouse_down: bool,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        navigator: &'a Navigator,
        sounds: &'a SoundRequester,
        pointer: (f32, f32),
        mouse_down: bool,
    ) -> Self {
        Self {
            navigator,
            sounds,
            pointer,
            mouse_down,
        }
    }

    /// Switches the active scene by name.
    pub fn goto(&self, scene: &str) -> bool {
        self.navigator.goto(scene)
    }

    /// Requests a sound by name.
    pub fn play_sound(&self, name: &str) {
        self.sounds.play(name);
    }

    /// Last-known pointer position in scene-local coordinates.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn active_scene(&self) -> Option<&str> {
        self.navigator.active_name()
    }
}

//=== Entity ==============================================================

/// Drawable and optionally interactive object owned by a scene.
pub trait Entity {
    /// Identity used by `Scene::remove_entity`; not required to be unique.
    fn id(&self) -> &str;

    /// Paints the entity. The scene wraps this call in save/restore.
    fn render(&self, surface: &mut dyn DrawingSurface);

    /// Screen region for pointer hit-testing; `None` opts out.
    fn hit_region(&self) -> Option<HitRegion> {
        None
    }

    fn is_on_me(&self, x: f32, y: f32) -> bool {
        self.hit_region().is_some_and(|r| r.contains(x, y))
    }

    /// A game cursor is only moved with the pointer when this is true.
    fn follows_pointer(&self) -> bool {
        false
    }

    /// Per-update commit with the scene's last-known pointer position.
    fn on_change(&mut self, _x: f32, _y: f32, _ctx: &FrameContext<'_>) {}

    fn on_click(&mut self, _ctx: &FrameContext<'_>) {}

    fn on_mouse_over(&mut self, _ctx: &FrameContext<'_>) {}

    fn on_mouse_out(&mut self, _ctx: &FrameContext<'_>) {}
}

//=== Cursor ==============================================================

/// Custom pointer drawn by the game on top of every scene.
pub trait Cursor: Entity {
    /// Mouse button went down on the surface.
    fn press(&mut self, ctx: &FrameContext<'_>);

    /// Logical (debounced) mouse release.
    fn release(&mut self, ctx: &FrameContext<'_>);
}

//=========================================================================
// Unit Tests
//=========================================================================
