//! Session domain: progress sets, death/respawn flow, and the focus
//! protocol.

mod focus;
mod progress;
mod systems;

#[cfg(test)]
mod tests;

pub use focus::{FocusState, angular_difference, bearing_deg};
pub use progress::{SessionProgress, SessionTuning};

use bevy::prelude::*;

use crate::core::{SessionState, SimSet};
use crate::session::focus::{enter_focus_mode, exit_focus_mode, process_fire_attempts};
use crate::session::systems::{
    ambient_target_hits, collect_crystals, handle_player_death, reveal_crystals,
    track_checkpoints, update_boss_gate,
};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionProgress>()
            .init_resource::<SessionTuning>()
            .init_resource::<FocusState>()
            .add_systems(
                Update,
                (
                    track_checkpoints,
                    ambient_target_hits,
                    enter_focus_mode,
                    process_fire_attempts,
                    exit_focus_mode,
                    collect_crystals,
                    reveal_crystals,
                    update_boss_gate,
                    handle_player_death,
                )
                    .chain()
                    .in_set(SimSet::Sensing)
                    .run_if(in_state(SessionState::Running)),
            );
    }
}
