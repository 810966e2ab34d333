//=========================================================================
// Mole
//=========================================================================
//
// One burrow of the field. Each update the mole re-evaluates its state
// from the shared `MoleBoard`:
//
//   visible && mouse down && hammer on hit spot → hited (score once)
//   visible                                     → stand
//   otherwise                                   → idle
//
// The board is written by the field scene after every mole ran, so a
// mole always sees the previous update's pointer and button state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::f32::consts::PI;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::entity::{DrawableState, Entity, FrameContext, StateMachine};
use crate::core::shapes::draw_circle;
use crate::core::surface::{Color, DrawingSurface, EllipseArc};

//=== Tunables ============================================================

pub const IDLE: &str = "idle";
pub const STAND: &str = "stand";
pub const HITED: &str = "hited";

/// Offset from a mole's anchor to the spot the hammer must reach.
pub const HIT_SPOT_OFFSET: (f32, f32) = (36.0, 6.0);

/// Hits closer than this many pixels count.
pub const HIT_THRESHOLD: f32 = 30.0;

/// Hole radius; the hole is `2 * HOLE_RADIUS` wide.
const HOLE_RADIUS: f32 = 36.0;

//=== Collision ===========================================================

/// Hammer-to-mole collision test.
///
/// The offset is added to the mole-minus-hammer difference before the
/// distance is taken, so a hammer resting exactly on the mole's anchor
/// is `hypot(offset)` away.
pub fn is_hit(mole: (f32, f32), offset: (f32, f32), hammer: (f32, f32), threshold: f32) -> bool {
    let dx = (mole.0 - hammer.0) + offset.0;
    let dy = (mole.1 - hammer.1) + offset.1;
    dx.hypot(dy) < threshold
}

//=== MoleBoard ===========================================================

/// State shared by every mole of one field.
#[derive(Debug, Default)]
pub struct MoleBoard {
    visible: Cell<usize>,
    mouse_down: Cell<bool>,
    hammer: Cell<(f32, f32)>,
}

impl MoleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid index allowed to show up; may point past the last mole.
    pub fn visible(&self) -> usize {
        self.visible.get()
    }

    pub fn set_visible(&self, index: usize) {
        self.visible.set(index);
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down.get()
    }

    pub fn hammer(&self) -> (f32, f32) {
        self.hammer.get()
    }

    /// Records the pointer state seen by the scene this update.
    pub fn record_pointer(&self, hammer: (f32, f32), mouse_down: bool) {
        self.hammer.set(hammer);
        self.mouse_down.set(mouse_down);
    }
}

//=== Mole Skins ==========================================================

/// Mole drawn at a given height above its burrow.
struct MoleSkin {
    name: &'static str,
    rise: f32,
    eyes_open: bool,
    debug_dot: bool,
}

impl MoleSkin {
    fn draw_head(&self, surface: &mut dyn DrawingSurface, x: f32, y: f32) {
        let r = HOLE_RADIUS;
        let top = y - self.rise;

        // head and body
        surface.set_fill_color(Color::hex(0xAD7223));
        surface.set_stroke_color(Color::hex(0x666666));
        surface.begin_path();
        surface.arc(x + r, top + 66.0, 20.0, PI * 0.75, PI * 2.25);
        surface.line_to(x + r * 5.0 / 3.0, top + 120.0);
        surface.ellipse(EllipseArc::full(x + r, top + 120.0, r * 2.0 / 3.0, 10.0).span(0.0, PI));
        surface.close_path();
        surface.stroke();
        surface.fill();

        if self.eyes_open {
            surface.set_fill_color(Color::BLACK);
            for dx in [-10.0, 10.0] {
                surface.begin_path();
                surface.arc(x + r + dx, top + 62.0, 3.0, 0.0, 2.0 * PI);
                surface.fill();
            }
        } else {
            surface.begin_path();
            for side in [-1.0, 1.0] {
                surface.move_to(x + r + 12.0 * side, top + 56.0);
                surface.line_to(x + r + 6.0 * side, top + 60.0);
                surface.line_to(x + r + 12.0 * side, top + 64.0);
            }
            surface.stroke();
        }

        // nose
        surface.set_fill_color(Color::hex(0xCFA049));
        surface.begin_path();
        surface.ellipse(EllipseArc::full(x + r, top + 70.0, r * 0.18, r * 0.2));
        surface.fill();
        surface.set_fill_color(Color::BLACK);
        surface.begin_path();
        surface.arc(x + r, top + 72.0, 2.0, 0.0, 2.0 * PI);
        surface.fill();

        // mouth
        surface.set_stroke_color(Color::hex(0x333333));
        surface.begin_path();
        surface.ellipse(EllipseArc::full(x + r, top + 65.0, r * 0.14, r * 0.2).span(0.0, PI));
        surface.stroke();

        // mustache
        surface.set_stroke_color(Color::BLACK);
        surface.begin_path();
        for side in [-1.0, 1.0] {
            for dy in [0.0, 3.0] {
                surface.move_to(x + r + 8.0 * side, top + 70.0 + dy);
                surface.line_to(x + r + 16.0 * side, top + 68.0 + dy);
            }
        }
        surface.stroke();
    }
}

impl DrawableState for MoleSkin {
    fn name(&self) -> &str {
        self.name
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, x: f32, y: f32) {
        let r = HOLE_RADIUS;
        surface.save();

        // clip to the space above the hole's front rim
        surface.begin_path();
        surface.move_to(x, y);
        surface.line_to(x + 2.0 * r, y);
        surface.line_to(x + 2.0 * r, y + 50.0);
        surface.ellipse(EllipseArc::full(x + r, y + 50.0, r, r * 0.3).span(0.0, PI));
        surface.clip();

        surface.set_fill_color(Color::BLACK);
        surface.begin_path();
        surface.ellipse(EllipseArc::full(x + r, y + 50.0, r, r * 0.3));
        surface.fill();

        self.draw_head(surface, x, y);
        surface.restore();

        if self.debug_dot {
            let (ox, oy) = HIT_SPOT_OFFSET;
            draw_circle(surface, x + ox, y + oy, 4.0, Color::RED, Color::RED);
        }
    }
}

fn mole_states(debug: bool) -> StateMachine {
    StateMachine::new(vec![
        Box::new(MoleSkin { name: IDLE, rise: 0.0, eyes_open: true, debug_dot: false }),
        Box::new(MoleSkin { name: STAND, rise: 45.0, eyes_open: true, debug_dot: debug }),
        Box::new(MoleSkin { name: HITED, rise: 20.0, eyes_open: false, debug_dot: false }),
    ])
}

//=== Mole ================================================================

type HitCallback = Box<dyn FnMut()>;

pub struct Mole {
    id: String,
    index: usize,
    x: f32,
    y: f32,
    states: StateMachine,
    board: Rc<MoleBoard>,
    on_hit: Option<HitCallback>,
}

impl Mole {
    pub fn new(index: usize, x: f32, y: f32, board: Rc<MoleBoard>) -> Self {
        Self {
            id: format!("mole-{}", index),
            index,
            x,
            y,
            states: mole_states(false),
            board,
            on_hit: None,
        }
    }

    /// Shows the hit spot on the standing skin.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.states = mole_states(debug);
        self
    }

    /// Runs once per transition into `hited`.
    pub fn with_hit_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_hit = Some(Box::new(callback));
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn current_state(&self) -> &str {
        self.states.current_state()
    }

    fn is_visible(&self) -> bool {
        self.index == self.board.visible()
    }

    fn is_struck(&self) -> bool {
        is_hit(self.position(), HIT_SPOT_OFFSET, self.board.hammer(), HIT_THRESHOLD)
    }
}

impl Entity for Mole {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_change(&mut self, _x: f32, _y: f32, ctx: &FrameContext<'_>) {
        let visible = self.is_visible();

        if visible && self.board.is_mouse_down() && self.is_struck() {
            if !self.states.is_in(HITED) {
                debug!(target: "scene", "Mole {} hit", self.index);
                ctx.play_sound("ouch");
                if let Some(on_hit) = self.on_hit.as_mut() {
                    on_hit();
                }
            }
            self.states.change_state(HITED);
            return;
        }

        self.states.change_state(if visible { STAND } else { IDLE });
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        self.states.draw_at(surface, self.x, self.y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
