//=========================================================================
// Whac-A-Mole Scenes
//=========================================================================
//
// "Welcome" with a button into the field, and "MainScene": sky, grass,
// a 4x4 grid of moles and the score.
//
// Architecture:
//   MoleField (builder)
//     ├─ board: Rc<MoleBoard>   ← FieldBehavior writes, moles read
//     ├─ score: Rc<Cell<u32>>   ← mole hit callbacks, ScoreLabel reads
//     └─ into_scene() → Scene { moles…, ScoreLabel } + FieldBehavior
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::f32::consts::PI;
use std::rc::Rc;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::mole::{Mole, MoleBoard};
use crate::core::entity::{Button, ButtonStyle, Entity, FrameContext, Label};
use crate::core::scene::{Scene, SceneBehavior};
use crate::core::shapes::{draw_filled_rect, draw_gradient_rect, draw_solid_triangle};
use crate::core::surface::{Color, DrawingSurface, EllipseArc, TextBaseline};

//=== Constants ===========================================================

pub const WELCOME: &str = "Welcome";
pub const MAIN_SCENE: &str = "MainScene";

pub const GRID_SIZE: usize = 4;
pub const GRID_ORIGIN: (f32, f32) = (36.0, 100.0);
pub const CELL_PITCH: (f32, f32) = (100.0, 64.0);

/// Range of the visible-index roll. It matches the grid size, but a
/// larger value leaves some seconds without any mole.
pub const DEFAULT_VISIBLE_RANGE: u32 = 16;

const GRASS_BLADES: usize = 100;

const SKY_TOP: Color = Color::hex(0x448EE4);
const SKY_BOTTOM: Color = Color::hex(0x5ACAF9);
const GRASSLAND: Color = Color::hex(0xBED742);
const BLADE: Color = Color::hex(0x1D953F);

//=== Welcome =============================================================

pub fn welcome_scene() -> Scene {
    let mut scene = Scene::new(WELCOME);
    scene.add_entity(Label::new("== Welcome to Whac A Mole ==", 140.0, 90.0).with_font_size(24.0));

    let style = ButtonStyle::at(250.0, 200.0, "Enter Game").with_width(150.0);
    scene.add_entity(Button::new(style, |ctx| {
        ctx.goto(MAIN_SCENE);
    }));
    scene
}

//=== ScoreLabel ==========================================================

/// "score: N", read from the shared counter at draw time.
struct ScoreLabel {
    score: Rc<Cell<u32>>,
    x: f32,
    y: f32,
}

impl Entity for ScoreLabel {
    fn id(&self) -> &str {
        "score"
    }

    fn render(&self, surface: &mut dyn DrawingSurface) {
        surface.set_font_size(16.0);
        surface.set_text_baseline(TextBaseline::Top);
        surface.set_fill_color(Color::WHITE);
        surface.fill_text(&format!("score: {}", self.score.get()), self.x, self.y);
    }
}

//=== FieldBehavior =======================================================

struct FieldBehavior {
    grass: Vec<(f32, f32)>,
    board: Rc<MoleBoard>,
    rng: StdRng,
    visible_range: u32,
}

impl SceneBehavior for FieldBehavior {
    fn draw_background(&self, surface: &mut dyn DrawingSurface, width: f32, height: f32) {
        draw_gradient_rect(surface, SKY_TOP, SKY_BOTTOM, width, height);
        draw_filled_rect(surface, 0.0, height / 2.0, width, height / 2.0, GRASSLAND);

        // hill: upper half of an ellipse resting on the horizon
        surface.set_fill_color(GRASSLAND);
        surface.begin_path();
        surface.ellipse(
            EllipseArc::full(width / 2.0, height / 2.0, width / 1.8, height / 3.0).span(PI, 2.0 * PI),
        );
        surface.fill();

        for &(x, y) in &self.grass {
            draw_solid_triangle(surface, (x, y), (x + 8.0, y - 30.0), (x + 4.0, y), BLADE);
        }
    }

    fn on_scene_update(&mut self, x: f32, y: f32, ctx: &FrameContext<'_>) {
        self.board.record_pointer((x, y), ctx.is_mouse_down());
    }

    fn on_each_second(&mut self, _ctx: &FrameContext<'_>) {
        let index = self.rng.gen_range(0..self.visible_range) as usize;
        trace!(target: "scene", "Mole {} may show up", index);
        self.board.set_visible(index);
    }
}

//=== MoleField ===========================================================

/// Builder for the mole field scene.
pub struct MoleField {
    width: f32,
    height: f32,
    seed: Option<u64>,
    visible_range: u32,
    debug: bool,
    board: Rc<MoleBoard>,
    score: Rc<Cell<u32>>,
}

impl MoleField {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            seed: None,
            visible_range: DEFAULT_VISIBLE_RANGE,
            debug: false,
            board: Rc::new(MoleBoard::new()),
            score: Rc::new(Cell::new(0)),
        }
    }

    /// Makes grass placement and mole rolls reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Panics
    ///
    /// Panics if `range == 0`.
    pub fn with_visible_range(mut self, range: u32) -> Self {
        assert!(range > 0, "Visible range must be positive");
        self.visible_range = range;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn board(&self) -> Rc<MoleBoard> {
        self.board.clone()
    }

    pub fn score(&self) -> Rc<Cell<u32>> {
        self.score.clone()
    }

    pub fn into_scene(self) -> Scene {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let grass = (0..GRASS_BLADES)
            .map(|_| {
                let x = self.width * rng.gen::<f32>();
                let y = self.height / 2.0 + self.height / 2.0 * rng.gen::<f32>();
                (x, y)
            })
            .collect();

        let behavior = FieldBehavior {
            grass,
            board: self.board.clone(),
            rng,
            visible_range: self.visible_range,
        };
        let mut scene = Scene::with_behavior(MAIN_SCENE, behavior);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let x = col as f32 * CELL_PITCH.0 + GRID_ORIGIN.0;
                let y = row as f32 * CELL_PITCH.1 + GRID_ORIGIN.1;
                let score = self.score.clone();

                let mole = Mole::new(row * GRID_SIZE + col, x, y, self.board.clone())
                    .with_debug(self.debug)
                    .with_hit_callback(move || score.set(score.get() + 1));
                scene.add_entity(mole);
            }
        }

        scene.add_entity(ScoreLabel {
            score: self.score,
            x: self.width - 100.0,
            y: 30.0,
        });
        scene
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
