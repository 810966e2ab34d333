//=========================================================================
// Platform Event Mapper
//
// Converts Winit window events into engine `PointerEvent`s.
//
// Responsibilities:
// - Translate cursor movement, cursor leave and mouse buttons
// - Decide the event target (the window is the drawing surface)
// - Synthesize `Clicked` after a left press and release inside the window
//
// Winit has no click event, so the mapper keeps just enough state to
// produce one the way a browser does: a left release that follows a left
// press, both inside the surface.
//
//=========================================================================

use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

use crate::core::input::{EventTarget, MouseButton, PointerEvent};

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== PointerMapper =======================================================

#[derive(Debug, Clone, Default)]
pub(crate) struct PointerMapper {
    inside: bool,
    last_position: (f32, f32),
    left_pressed_inside: bool,
}

impl PointerMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps one window event; unrelated events yield nothing.
    pub fn map(&mut self, event: &WindowEvent) -> Vec<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.cursor_moved(position.x as f32, position.y as f32)]
            }
            WindowEvent::CursorLeft { .. } => vec![self.cursor_left()],
            WindowEvent::MouseInput { state, button, .. } => {
                self.button(*state, MouseButton::from(*button))
            }
            _ => Vec::new(),
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> PointerEvent {
        self.inside = true;
        self.last_position = (x, y);
        PointerEvent::Moved {
            x,
            y,
            target: EventTarget::Surface,
        }
    }

    /// The pointer left the window; reported as a move off the surface.
    pub fn cursor_left(&mut self) -> PointerEvent {
        self.inside = false;
        let (x, y) = self.last_position;
        PointerEvent::Moved {
            x,
            y,
            target: EventTarget::Elsewhere,
        }
    }

    pub fn button(&mut self, state: ElementState, button: MouseButton) -> Vec<PointerEvent> {
        let target = self.target();

        match state {
            ElementState::Pressed => {
                if button == MouseButton::Left {
                    self.left_pressed_inside = self.inside;
                }
                vec![PointerEvent::Pressed { button, target }]
            }
            ElementState::Released => {
                let mut events = vec![PointerEvent::Released { button, target }];
                if button == MouseButton::Left {
                    if self.left_pressed_inside && self.inside {
                        events.push(PointerEvent::Clicked { target });
                    }
                    self.left_pressed_inside = false;
                }
                events
            }
        }
    }

    fn target(&self) -> EventTarget {
        if self.inside {
            EventTarget::Surface
        } else {
            EventTarget::Elsewhere
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
