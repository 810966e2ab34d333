//=========================================================================
// Whac-A-Mole
//=========================================================================
//
// Sample game on top of the engine: moles pop out of a 4x4 grid once a
// second and the player scores by hammering the one standing.
//
// Scenes: "Welcome" → "MainScene". The hammer replaces the system
// cursor; "hit" plays on every swing and "ouch" on every scored hit.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod hammer;
pub mod mole;
pub mod scenes;

pub use hammer::{Hammer, HammerState};
pub use mole::{is_hit, Mole, MoleBoard};
pub use scenes::{welcome_scene, MoleField, MAIN_SCENE, WELCOME};

//=== Imports =============================================================

use log::info;

use crate::core::game::{Game, GameOptions};
use crate::core::sound::SoundService;
use crate::error::EngineError;

//=== Constants ===========================================================

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

pub const HIT_SOUND: &str = "hit";
pub const OUCH_SOUND: &str = "ouch";

//=== Assembly ============================================================

/// Builds the game at 640x480. Pass a seed for a reproducible field.
pub fn build(seed: Option<u64>) -> Result<Game, EngineError> {
    let field = MoleField::new(WIDTH, HEIGHT);
    let field = match seed {
        Some(seed) => field.with_seed(seed),
        None => field,
    };
    assemble(field)
}

/// Builds the game around an already configured field.
pub fn assemble(field: MoleField) -> Result<Game, EngineError> {
    let options = GameOptions::new(WIDTH, HEIGHT)
        .with_cursor(Hammer::new())
        .show_fancy_cursor(true);

    let game = Game::new(vec![welcome_scene(), field.into_scene()], options)?;
    info!(target: "game", "Whac-A-Mole assembled");
    Ok(game)
}

/// Registers the game's two clips.
pub fn load_sounds(service: &mut impl SoundService) {
    service.load(HIT_SOUND, "sounds/hit.mp3", Some(2.0));
    service.load(OUCH_SOUND, "sounds/ouch.mp3", None);
}

//=========================================================================
// Unit Tests
//=========================================================================
