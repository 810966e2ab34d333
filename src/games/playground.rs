//=========================================================================
// Playground
//=========================================================================
//
// Two-scene sample: "Welcome" and "Main", each with a button leading to
// the other one.
//
//=========================================================================

use crate::core::entity::{Button, ButtonStyle, Label};
use crate::core::game::{Game, GameOptions};
use crate::core::scene::{Scene, SceneBehavior};
use crate::core::surface::{Color, DrawingSurface};
use crate::error::EngineError;

pub const WELCOME: &str = "Welcome";
pub const MAIN: &str = "Main";

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

//--- Main Background -----------------------------------------------------

struct GreenField;

impl SceneBehavior for GreenField {
    fn draw_background(&self, surface: &mut dyn DrawingSurface, width: f32, height: f32) {
        surface.set_fill_color(Color::GREEN);
        surface.fill_rect(0.0, 0.0, width, height);
        surface.set_stroke_color(Color::BLACK);
        surface.set_line_width(1.0);
        surface.stroke_rect(20.0, 20.0, width - 40.0, height - 40.0);
    }
}

//--- Scenes --------------------------------------------------------------

pub fn welcome_scene() -> Scene {
    let mut scene = Scene::new(WELCOME);
    scene.add_entity(Label::new("== WELCOME ==", 160.0, 90.0).with_font_size(36.0));

    let style = ButtonStyle::at(250.0, 200.0, "Enter Game").with_width(150.0);
    scene.add_entity(Button::new(style, |ctx| {
        ctx.goto(MAIN);
    }));
    scene
}

pub fn main_scene() -> Scene {
    let mut scene = Scene::with_behavior(MAIN, GreenField);
    scene.add_entity(Label::new("== MAIN ==", 220.0, 90.0).with_font_size(36.0));

    let style = ButtonStyle::at(250.0, 200.0, "Go Back")
        .with_width(150.0)
        .with_skin(Color::BLACK);
    scene.add_entity(Button::new(style, |ctx| {
        ctx.goto(WELCOME);
    }));
    scene
}

/// Builds the playground game at 640x480.
pub fn build() -> Result<Game, EngineError> {
    Game::new(vec![welcome_scene(), main_scene()], GameOptions::new(WIDTH, HEIGHT))
}

//=========================================================================
// Unit Tests
//=========================================================================
