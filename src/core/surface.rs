//=========================================================================
// Drawing Surface
//=========================================================================
//
// Immediate-mode 2D drawing contract consumed by scenes and entities.
//
// Architecture:
//   Scene::on_paint() → Entity::render(&mut dyn DrawingSurface)
//                              ↓
//        host backend (canvas, rasterizer) or RecordingSurface
//
// The engine never rasterizes anything itself. A backend implements
// `DrawingSurface`; `RecordingSurface` is the headless backend that
// records every call as a `DrawCommand`.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Color ===============================================================

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

//=== Text Baseline =======================================================

/// Vertical anchor used by `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

//=== Shape Parameters ====================================================

/// Elliptical arc, angles in radians measured clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseArc {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub rotation: f32,
    pub start: f32,
    pub end: f32,
}

impl EllipseArc {
    /// A full, unrotated ellipse.
    pub fn full(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            rotation: 0.0,
            start: 0.0,
            end: std::f32::consts::TAU,
        }
    }

    pub fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn span(mut self, start: f32, end: f32) -> Self {
        self.start = start;
        self.end = end;
        self
    }
}

/// Two-stop linear gradient between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub start_color: Color,
    pub end_color: Color,
}

//=== DrawingSurface ======================================================

/// Immediate-mode drawing context.
///
/// Mirrors the small subset of a 2D canvas API the engine needs. Style
/// and transform state is scoped with `save`/`restore`; callers keep the
/// two calls balanced around every draw.
pub trait DrawingSurface {
    //--- State ------------------------------------------------------------

    /// Pushes the current style, transform and clip state.
    fn save(&mut self);

    /// Pops the state pushed by the matching `save`.
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    fn rotate(&mut self, radians: f32);

    //--- Styles -----------------------------------------------------------

    fn set_fill_color(&mut self, color: Color);

    fn set_fill_gradient(&mut self, gradient: LinearGradient);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_font_size(&mut self, px: f32);

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    //--- Rectangles -------------------------------------------------------

    /// Resets a rectangle to fully transparent pixels.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    //--- Paths ------------------------------------------------------------

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Circular arc, angles in radians.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32);

    fn ellipse(&mut self, arc: EllipseArc);

    fn close_path(&mut self);

    fn fill(&mut self);

    fn stroke(&mut self);

    /// Intersects the clip region with the current path.
    fn clip(&mut self);

    //--- Text -------------------------------------------------------------

    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

//=== DrawCommand =========================================================

/// One recorded `DrawingSurface` call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    FillColor(Color),
    FillGradient(LinearGradient),
    StrokeColor(Color),
    LineWidth(f32),
    FontSize(f32),
    TextBaseline(TextBaseline),
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    StrokeRect { x: f32, y: f32, width: f32, height: f32 },
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Arc { cx: f32, cy: f32, radius: f32, start: f32, end: f32 },
    Ellipse(EllipseArc),
    ClosePath,
    Fill,
    Stroke,
    Clip,
    FillText { text: String, x: f32, y: f32 },
}

//=== RecordingSurface ====================================================

/// Headless surface that records every call in order.
///
/// Used by hosts without a rasterizer and by tests asserting paint
/// order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    depth: usize,
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since the last `take`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current save/restore nesting depth (0 when balanced).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest save nesting seen so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Texts passed to `fill_text`, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.record(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            log::warn!(target: "surface", "restore() without matching save()");
        } else {
            self.depth -= 1;
        }
        self.record(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.record(DrawCommand::Translate(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.record(DrawCommand::Rotate(radians));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(DrawCommand::FillColor(color));
    }

    fn set_fill_gradient(&mut self, gradient: LinearGradient) {
        self.record(DrawCommand::FillGradient(gradient));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.record(DrawCommand::LineWidth(width));
    }

    fn set_font_size(&mut self, px: f32) {
        self.record(DrawCommand::FontSize(px));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.record(DrawCommand::TextBaseline(baseline));
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.record(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.record(DrawCommand::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.record(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.record(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.record(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.record(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        self.record(DrawCommand::Arc { cx, cy, radius, start, end });
    }

    fn ellipse(&mut self, arc: EllipseArc) {
        self.record(DrawCommand::Ellipse(arc));
    }

    fn close_path(&mut self) {
        self.record(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.record(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.record(DrawCommand::Stroke);
    }

    fn clip(&mut self) {
        self.record(DrawCommand::Clip);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.record(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

//=== Shared Surfaces =====================================================

/// Lets a host keep a handle on the surface it bound to the runtime.
impl<S: DrawingSurface + ?Sized> DrawingSurface for Rc<RefCell<S>> {
    fn save(&mut self) {
        self.borrow_mut().save();
    }

    fn restore(&mut self) {
        self.borrow_mut().restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.borrow_mut().translate(x, y);
    }

    fn rotate(&mut self, radians: f32) {
        self.borrow_mut().rotate(radians);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.borrow_mut().set_fill_color(color);
    }

    fn set_fill_gradient(&mut self, gradient: LinearGradient) {
        self.borrow_mut().set_fill_gradient(gradient);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.borrow_mut().set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.borrow_mut().set_line_width(width);
    }

    fn set_font_size(&mut self, px: f32) {
        self.borrow_mut().set_font_size(px);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.borrow_mut().set_text_baseline(baseline);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.borrow_mut().clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.borrow_mut().fill_rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.borrow_mut().stroke_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.borrow_mut().begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.borrow_mut().move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.borrow_mut().line_to(x, y);
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        self.borrow_mut().arc(cx, cy, radius, start, end);
    }

    fn ellipse(&mut self, arc: EllipseArc) {
        self.borrow_mut().ellipse(arc);
    }

    fn close_path(&mut self) {
        self.borrow_mut().close_path();
    }

    fn fill(&mut self) {
        self.borrow_mut().fill();
    }

    fn stroke(&mut self) {
        self.borrow_mut().stroke();
    }

    fn clip(&mut self) {
        self.borrow_mut().clip();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.borrow_mut().fill_text(text, x, y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_splits_channels() {
        assert_eq!(Color::hex(0x448EE4), Color::rgb(0x44, 0x8E, 0xE4));
        assert_eq!(Color::hex(0x448EE4).a, 255);
    }

    #[test]
    fn recording_tracks_save_depth() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.save();
        assert_eq!(surface.depth(), 2);
        surface.restore();
        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.max_depth(), 2);
    }

    #[test]
    fn unbalanced_restore_does_not_underflow() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.commands(), &[DrawCommand::Restore]);
    }

    #[test]
    fn take_drains_commands() {
        let mut surface = RecordingSurface::new();
        surface.fill_text("score: 0", 540.0, 30.0);
        assert_eq!(surface.texts(), vec!["score: 0"]);

        let taken = surface.take();
        assert_eq!(taken.len(), 1);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn shared_handle_records_into_inner_surface() {
        let shared = Rc::new(RefCell::new(RecordingSurface::new()));
        let mut handle = shared.clone();

        handle.save();
        handle.fill_text("through the handle", 1.0, 2.0);
        handle.restore();

        assert_eq!(shared.borrow().texts(), vec!["through the handle"]);
        assert_eq!(shared.borrow().depth(), 0);
    }
}
