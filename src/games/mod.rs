//=========================================================================
// Sample Games
//=========================================================================

pub mod playground;
pub mod whac_a_mole;
