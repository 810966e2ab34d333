//=========================================================================
// GW Engine — Library Root
//
// A small 2D engine: scenes of drawable, interactive entities driven by
// a frame scheduler that alternates update and render phases.
//
// Responsibilities:
// - Expose the runtime (`Runtime`, `RuntimeBuilder`) and the scene graph
// - Ship the sample games built on top of it
// - Keep the winit host behind `platform`
//
// Typical usage:
// ```no_run
// use gw_engine::{games, platform::Host, RuntimeBuilder};
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     let runtime = RuntimeBuilder::new().build();
//     Host::new(runtime, games::playground::build()?).run()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine building blocks. Most applications only need
// the re-exports below or the prelude.
//
pub mod core;
pub mod error;
pub mod games;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{
    Color, DrawingSurface, Entity, Game, GameOptions, RecordingSurface, Scene, SceneBehavior,
};
pub use engine::{Runtime, RuntimeBuilder};
pub use error::{EngineError, SoundError};
