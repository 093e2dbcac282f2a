//! Movement domain: death-by-position sensing.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::PlayerDiedEvent;
use crate::level::data::LevelData;
use crate::movement::components::Player;
use crate::movement::kinematics::hazard_hit;
use crate::movement::resources::{DeathDebounce, MovementTuning};

/// Kill-plane and pit-cavity sensing over the resolved position. Death
/// events are debounced so one fall produces exactly one signal.
pub(crate) fn detect_hazards(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    level: Res<LevelData>,
    mut debounce: ResMut<DeathDebounce>,
    player: Query<&Transform, With<Player>>,
    mut death_events: MessageWriter<PlayerDiedEvent>,
) {
    let Ok(transform) = player.single() else {
        return;
    };
    let position = transform.translation;

    if !hazard_hit(position, tuning.kill_plane_y, &level.pits) {
        return;
    }

    let now = time.elapsed_secs();
    if !debounce.accepts(now, tuning.death_debounce) {
        return;
    }
    debounce.last_death_at = Some(now);

    info!("[HAZARD] death at {:?}", position);
    death_events.write(PlayerDiedEvent { position });
}
