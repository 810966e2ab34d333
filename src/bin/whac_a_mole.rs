//=========================================================================
// Whac-A-Mole Launcher
//
// Opens a 640x480 window and runs the game until it is closed.
// Set `RUST_LOG=debug` (or `trace`) for engine diagnostics.
//
//=========================================================================

use std::error::Error;

use log::info;

use gw_engine::core::sound::SoundBank;
use gw_engine::games::whac_a_mole;
use gw_engine::platform::Host;
use gw_engine::RuntimeBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sounds = SoundBank::new();
    whac_a_mole::load_sounds(&mut sounds);

    let game = whac_a_mole::build(None)?.with_sound_service(sounds);
    let runtime = RuntimeBuilder::new().build();

    info!(target: "game", "Launching Whac-A-Mole");
    Host::new(runtime, game).with_title("Whac A Mole").run()?;
    Ok(())
}
