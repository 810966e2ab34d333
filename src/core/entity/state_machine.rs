//=========================================================================
// State Machine
//=========================================================================
//
// Named-state skin delegation for stateful characters.
//
// The state list is fixed at construction; the first entry is the
// initial state. Transitions are unconditional and unvalidated: an
// unknown name is only noticed when drawing, which then logs a warning
// and skips.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::surface::DrawingSurface;

//=== DrawableState =======================================================

/// One named skin of a stateful character.
pub trait DrawableState {
    fn name(&self) -> &str;

    /// Draws the skin with its anchor at `(x, y)`.
    fn draw(&self, surface: &mut dyn DrawingSurface, x: f32, y: f32);
}

//=== StateMachine ========================================================

pub struct StateMachine {
    states: Vec<Box<dyn DrawableState>>,
    current: String,
}

impl StateMachine {
    pub fn new(states: Vec<Box<dyn DrawableState>>) -> Self {
        let current = states
            .first()
            .map(|s| s.name().to_string())
            .unwrap_or_default();

        if states.is_empty() {
            warn!(target: "entity", "State machine created without states");
        }

        Self { states, current }
    }

    pub fn current_state(&self) -> &str {
        &self.current
    }

    pub fn is_in(&self, name: &str) -> bool {
        self.current == name
    }

    /// Overwrites the current state name.
    pub fn change_state(&mut self, name: &str) {
        if self.current != name {
            self.current.clear();
            self.current.push_str(name);
        }
    }

    /// Linear lookup of the current state.
    pub fn find_state(&self) -> Option<&dyn DrawableState> {
        self.states
            .iter()
            .find(|s| s.name() == self.current)
            .map(|s| s.as_ref())
    }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|s| s.name())
    }

    /// Draws the current state, or warns and skips if it is unknown.
    pub fn draw_at(&self, surface: &mut dyn DrawingSurface, x: f32, y: f32) {
        match self.find_state() {
            Some(state) => state.draw(surface, x, y),
            None => warn!(target: "entity", "State '{}' not found, skipping draw", self.current),
        }
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.state_names().collect();
        f.debug_struct("StateMachine")
            .field("states", &names)
            .field("current", &self.current)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
