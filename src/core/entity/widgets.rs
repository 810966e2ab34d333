//=========================================================================
// Widgets
//=========================================================================
//
// Ready-made entities for menus and HUDs: a clickable `Button` with a
// hover highlight and a static `Label`.
//
//=========================================================================

use super::{Entity, FrameContext, HitRegion};
use crate::core::surface::{Color, DrawingSurface, TextBaseline};

//=== ButtonStyle =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub skin: Color,
    pub label_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 30.0,
            text: "Enter".to_string(),
            skin: Color::RED,
            label_color: Color::WHITE,
        }
    }
}

impl ButtonStyle {
    /// Default-sized button at `(x, y)` showing `text`.
    pub fn at(x: f32, y: f32, text: &str) -> Self {
        Self {
            x,
            y,
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_skin(mut self, skin: Color) -> Self {
        self.skin = skin;
        self
    }
}

//=== Button ==============================================================

type ClickCallback = Box<dyn FnMut(&FrameContext<'_>)>;

/// Rectangular button invoking a callback when clicked.
pub struct Button {
    id: String,
    style: ButtonStyle,
    hovered: bool,
    on_click: ClickCallback,
}

impl Button {
    /// The button's id defaults to its label text.
    pub fn new<F>(style: ButtonStyle, on_click: F) -> Self
    where
        F: FnMut(&FrameContext<'_>) + 'static,
    {
        Self {
            id: style.text.clone(),
            style,
            hovered: false,
            on_click: Box::new(on_click),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn set_label(&mut self, text: &str) {
        self.style.text = text.to_string();
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Entity for Button {
    fn id(&self) -> &str {
        &self.id
    }

    fn hit_region(&self) -> Option<HitRegion> {
        let s = &self.style;
        Some(HitRegion::new(s.x, s.y, s.width, s.height))
    }

    fn on_mouse_over(&mut self, _ctx: &FrameContext<'_>) {
        self.hovered = true;
    }

    fn on_mouse_out(&mut self, _ctx: &FrameContext<'_>) {
        self.hovered = false;
    }

    fn on_click(&mut self, ctx: &FrameContext<'_>) {
        (self.on_click)(ctx);
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        let s = &self.style;
        let stroke_width = if self.hovered { 3.0 } else { 1.0 };

        surface.set_fill_color(s.skin);
        surface.fill_rect(s.x, s.y, s.width, s.height);
        surface.set_stroke_color(s.skin);
        surface.set_line_width(stroke_width);
        surface.stroke_rect(s.x - 2.0, s.y - 2.0, s.width + 4.0, s.height + 4.0);

        surface.set_font_size(24.0);
        surface.set_text_baseline(TextBaseline::Top);
        surface.set_fill_color(s.label_color);
        surface.fill_text(&s.text, s.x + 10.0, s.y + 4.0);
    }
}

//=== Label ===============================================================

/// Single line of text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    id: String,
    text: String,
    x: f32,
    y: f32,
    font_size: f32,
    color: Color,
}

impl Label {
    pub fn new(text: &str, x: f32, y: f32) -> Self {
        Self {
            id: text.to_string(),
            text: text.to_string(),
            x,
            y,
            font_size: 12.0,
            color: Color::WHITE,
        }
    }

    pub fn with_font_size(mut self, px: f32) -> Self {
        self.font_size = px;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Entity for Label {
    fn id(&self) -> &str {
        &self.id
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        surface.set_font_size(self.font_size);
        surface.set_text_baseline(TextBaseline::Top);
        surface.set_fill_color(self.color);
        surface.fill_text(&self.text, self.x, self.y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::core::navigator::Navigator;
    use crate::core::signals::SoundRequester;
    use crate::core::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn button_id_defaults_to_label() {
        let button = Button::new(ButtonStyle::at(250.0, 200.0, "Enter Game"), |_| {});
        assert_eq!(button.id(), "Enter Game");
        assert_eq!(button.with_id("enter").id(), "enter");
    }

    #[test]
    fn button_click_runs_callback() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut button = Button::new(ButtonStyle::default(), move |_| {
            counter.set(counter.get() + 1);
        });

        let nav = Navigator::default();
        let sounds = SoundRequester::default();
        let ctx = FrameContext::new(&nav, &sounds, (0.0, 0.0), false);
        button.on_click(&ctx);
        button.on_click(&ctx);

        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn hover_thickens_border() {
        let mut button = Button::new(ButtonStyle::default(), |_| {});
        let nav = Navigator::default();
        let sounds = SoundRequester::default();
        let ctx = FrameContext::new(&nav, &sounds, (0.0, 0.0), false);

        button.on_mouse_over(&ctx);
        assert!(button.is_hovered());

        let mut surface = RecordingSurface::new();
        button.render(&mut surface);
        assert!(surface.commands().contains(&DrawCommand::LineWidth(3.0)));

        button.on_mouse_out(&ctx);
        let mut surface = RecordingSurface::new();
        button.render(&mut surface);
        assert!(surface.commands().contains(&DrawCommand::LineWidth(1.0)));
    }

    #[test]
    fn label_text_can_change() {
        let mut label = Label::new("score: 0", 540.0, 30.0).with_font_size(16.0);
        label.set_text("score: 3");

        let mut surface = RecordingSurface::new();
        label.render(&mut surface);

        assert_eq!(label.id(), "score: 0");
        assert_eq!(surface.texts(), vec!["score: 3"]);
        assert!(label.hit_region().is_none());
    }
}
