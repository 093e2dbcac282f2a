//! Movement domain: character physics, collision resolution, and hazards.

mod components;
pub mod kinematics;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CollisionBox, Kinematics, Player};
pub use resources::{DeathDebounce, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{SessionState, SimSet, movement_active};
use crate::movement::systems::{
    apply_player_step, apply_respawns, detect_hazards, read_movement_intent, spawn_player,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<DeathDebounce>()
            .add_systems(OnEnter(SessionState::Running), spawn_player)
            .add_systems(
                Update,
                (
                    read_movement_intent,
                    apply_player_step,
                    detect_hazards.run_if(movement_active),
                    apply_respawns,
                )
                    .chain()
                    .in_set(SimSet::Physics)
                    .run_if(in_state(SessionState::Running)),
            );
    }
}
