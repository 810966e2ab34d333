//=========================================================================
// Hammer
//=========================================================================
//
// Custom cursor with two poses. Pressing swings it DOWN (and plays
// "hit"), the debounced release lifts it UP again. While DOWN a star
// burst is drawn under the head.
//
//=========================================================================

use std::f32::consts::PI;

use crate::core::entity::{Cursor, Entity, FrameContext};
use crate::core::shapes::{draw_circle, draw_rotated_rect, draw_star};
use crate::core::surface::{Color, DrawingSurface, EllipseArc};

//=== HammerState =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HammerState {
    #[default]
    Up,
    Down,
}

impl HammerState {
    pub fn as_str(self) -> &'static str {
        match self {
            HammerState::Up => "UP",
            HammerState::Down => "DOWN",
        }
    }
}

//=== Hammer ==============================================================

#[derive(Debug, Clone, Default)]
pub struct Hammer {
    state: HammerState,
    x: f32,
    y: f32,
    debug: bool,
}

impl Hammer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the hammer's reference point with a green dot.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn state(&self) -> HammerState {
        self.state
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn paint_up(&self, surface: &mut dyn DrawingSurface) {
        let (mx, my) = (self.x, self.y);

        surface.set_fill_color(Color::RED);
        for step in -3..=3 {
            let offset = step as f32;
            surface.begin_path();
            surface.ellipse(
                EllipseArc::full(mx - 4.0 * offset, my + 6.0 * offset, 6.0, 20.0).rotated(-PI / 3.0),
            );
            surface.fill();
        }
        draw_rotated_rect(surface, mx + 6.0, my + 22.0, 80.0, 10.0, 30.0, Color::ORANGE);

        if self.debug {
            draw_circle(surface, mx, my, 4.0, Color::hex(0x00FF00), Color::BLACK);
        }
    }

    fn paint_down(&self, surface: &mut dyn DrawingSurface) {
        let (mx, my) = (self.x, self.y);

        surface.set_fill_color(Color::RED);
        for (i, dy) in [-8.0, -2.0, 4.0, 10.0, 16.0, 22.0, 28.0].into_iter().enumerate() {
            let rx = if i == 2 { 12.0 } else { 6.0 };
            surface.begin_path();
            surface.ellipse(EllipseArc::full(mx, my + dy, rx, 20.0).rotated(-PI / 2.0));
            surface.fill();
        }
        draw_rotated_rect(surface, mx + 6.0, my + 22.0, 80.0, 10.0, 15.0, Color::ORANGE);

        if self.debug {
            draw_circle(surface, mx, my + 10.0, 4.0, Color::hex(0x00FF00), Color::BLACK);
        }
    }
}

impl Entity for Hammer {
    fn id(&self) -> &str {
        "hammer"
    }

    fn follows_pointer(&self) -> bool {
        true
    }

    fn on_change(&mut self, x: f32, y: f32, _ctx: &FrameContext<'_>) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        match self.state {
            HammerState::Up => self.paint_up(surface),
            HammerState::Down => {
                draw_star(surface, self.x - 10.0, self.y + 30.0, 12, 30.0, 15.0);
                self.paint_down(surface);
            }
        }
    }
}

impl Cursor for Hammer {
    fn press(&mut self, ctx: &FrameContext<'_>) {
        if self.state == HammerState::Up {
            ctx.play_sound("hit");
        }
        self.state = HammerState::Down;
    }

    fn release(&mut self, _ctx: &FrameContext<'_>) {
        self.state = HammerState::Up;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Navigator;
    use crate::core::signals::SignalBus;
    use crate::core::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn starts_up_and_toggles() {
        let mut hammer = Hammer::new();
        let nav = Navigator::default();
        let bus = SignalBus::new();
        let sounds = bus.sound_requester();
        let ctx = FrameContext::new(&nav, &sounds, (0.0, 0.0), false);

        assert_eq!(hammer.state(), HammerState::Up);
        hammer.press(&ctx);
        assert_eq!(hammer.state().as_str(), "DOWN");
        hammer.release(&ctx);
        assert_eq!(hammer.state().as_str(), "UP");
    }

    #[test]
    fn hit_sound_plays_only_on_swing_down() {
        let mut hammer = Hammer::new();
        let nav = Navigator::default();
        let bus = SignalBus::new();
        let subscription = bus.subscribe();
        let sounds = subscription.requester();
        let ctx = FrameContext::new(&nav, &sounds, (0.0, 0.0), true);

        hammer.press(&ctx);
        hammer.press(&ctx);

        assert_eq!(subscription.next_sound().map(|s| s.name), Some("hit".to_string()));
        assert!(subscription.next_sound().is_none());
    }

    #[test]
    fn follows_pointer() {
        let mut hammer = Hammer::new();
        let nav = Navigator::default();
        let sounds = Default::default();
        let ctx = FrameContext::new(&nav, &sounds, (0.0, 0.0), false);

        hammer.on_change(120.0, 80.0, &ctx);
        assert!(hammer.follows_pointer());
        assert_eq!(hammer.position(), (120.0, 80.0));
    }

    #[test]
    fn star_burst_only_while_down() {
        let mut hammer = Hammer::new();
        let nav = Navigator::default();
        let sounds = Default::default();
        let ctx = FrameContext::new(&nav, &sounds, (0.0, 0.0), false);
        let stroke_width_5 = |surface: &RecordingSurface| {
            surface.commands().contains(&DrawCommand::LineWidth(5.0))
        };

        let mut surface = RecordingSurface::new();
        hammer.render(&mut surface);
        assert!(!stroke_width_5(&surface));

        hammer.press(&ctx);
        let mut surface = RecordingSurface::new();
        hammer.render(&mut surface);
        assert!(stroke_width_5(&surface));
        assert_eq!(surface.depth(), 0);
    }
}
