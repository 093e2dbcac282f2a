//! Core domain: session states, shared resources, and the message surface.

mod events;
mod resources;
mod schedule;
mod state;

pub use events::{
    BossGateOpenedEvent, CheckpointReachedEvent, CrystalCollectedEvent, LevelReadyEvent,
    PlayerDiedEvent, PlayerMovedEvent, RespawnRequest, TargetShotEvent,
};
pub use resources::{MovementFrozen, SessionConfig, movement_active};
pub use schedule::SimSet;
pub use state::SessionState;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SimSet::Input,
                SimSet::Geometry,
                SimSet::Physics,
                SimSet::Sensing,
            )
                .chain(),
        )
        .init_state::<SessionState>()
        .init_resource::<SessionConfig>()
        .init_resource::<MovementFrozen>()
        .add_message::<LevelReadyEvent>()
        .add_message::<PlayerMovedEvent>()
        .add_message::<CheckpointReachedEvent>()
        .add_message::<CrystalCollectedEvent>()
        .add_message::<TargetShotEvent>()
        .add_message::<BossGateOpenedEvent>()
        .add_message::<PlayerDiedEvent>()
        .add_message::<RespawnRequest>();
    }
}
