//! Movement domain: system modules.

mod hazards;
mod input;
mod movement;

pub(crate) use hazards::detect_hazards;
pub(crate) use input::read_movement_intent;
pub(crate) use movement::{apply_player_step, apply_respawns, spawn_player};
