//=========================================================================
// Scene Navigator
//=========================================================================
//
// Shared record of which scene is active.
//
// The navigator stores a validated index into the game's scene list
// instead of a free-form name, so "zero or several active scenes"
// cannot happen: `goto` with an unknown name is reported and ignored.
//
// One navigator is created per Game and cloned into each of its scenes;
// clones share the same active slot.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

//=== NavigatorInner ======================================================

#[derive(Debug, Default)]
struct NavigatorInner {
    names: Vec<String>,
    active: Cell<Option<usize>>,
}

//=== Navigator ===========================================================

/// Shared handle to the active-scene slot.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    inner: Rc<NavigatorInner>,
}

impl Navigator {
    /// Creates a navigator over a fixed, ordered set of scene names.
    ///
    /// No scene is active until the first `goto`.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            inner: Rc::new(NavigatorInner {
                names,
                active: Cell::new(None),
            }),
        }
    }

    /// Activates the scene called `name`.
    ///
    /// Returns `false` (and logs a warning) when no scene has that name.
    pub fn goto(&self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                debug!(target: "scene", "Navigating to scene '{}'", name);
                self.inner.active.set(Some(index));
                true
            }
            None => {
                warn!(target: "scene", "Cannot navigate to unknown scene '{}'", name);
                false
            }
        }
    }

    /// True when `name` is the active scene.
    pub fn is_active(&self, name: &str) -> bool {
        self.active_name() == Some(name)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.inner.active.get()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_index()
            .and_then(|i| self.inner.names.get(i))
            .map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.inner.names.iter().position(|n| n == name)
    }

    /// Scene names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.inner.names
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
