//=========================================================================
// Pointer Input
//=========================================================================
//
// Host-independent pointer events and their normalization into
// surface-local coordinates.
//
// Event Flow:
// ```text
// Host (winit, browser shim, tests)
//         ↓
//    PointerEvent (client-area coordinates + target)
//         ↓
//    PointerTracker (global → surface-local, rounded)
//         ↓
//    Game::on_mouse_over / on_mouse_down / on_mouse_up
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The engine reacts to every button the same way; the identifier is
/// kept for hosts and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons).
    Other,
}

//=== EventTarget =========================================================

/// Element a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The drawing surface bound to the runtime.
    Surface,

    /// Anything outside the drawing surface.
    Elsewhere,
}

impl EventTarget {
    pub fn is_surface(self) -> bool {
        matches!(self, EventTarget::Surface)
    }
}

//=== PointerEvent ========================================================

/// Raw pointer event in client-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32, target: EventTarget },
    Pressed { button: MouseButton, target: EventTarget },
    Released { button: MouseButton, target: EventTarget },
    Clicked { target: EventTarget },
}

impl PointerEvent {
    pub fn target(&self) -> EventTarget {
        match *self {
            PointerEvent::Moved { target, .. }
            | PointerEvent::Pressed { target, .. }
            | PointerEvent::Released { target, .. }
            | PointerEvent::Clicked { target } => target,
        }
    }
}

//=== PointerTracker ======================================================

/// Tracks the global pointer and converts it to surface-local pixels.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    origin: (f32, f32),
    global: (f32, f32),
    local: (f32, f32),
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the surface's top-left corner in client-area coordinates.
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = (x, y);
    }

    /// Records a global pointer position.
    pub fn record_global(&mut self, x: f32, y: f32) {
        self.global = (x, y);
    }

    /// Converts the last global position into rounded surface-local
    /// coordinates and records it.
    pub fn localize(&mut self) -> (f32, f32) {
        let x = (self.global.0 - self.origin.0).round();
        let y = (self.global.1 - self.origin.1).round();
        self.local = (x, y);
        self.local
    }

    pub fn global(&self) -> (f32, f32) {
        self.global
    }

    /// Last surface-local position.
    pub fn local(&self) -> (f32, f32) {
        self.local
    }

    /// Forgets recorded positions, keeping the origin.
    pub fn reset(&mut self) {
        self.global = (0.0, 0.0);
        self.local = (0.0, 0.0);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
