//! Session domain: the aim-and-fire focus protocol.
//!
//! Approaching an unshot focus-flagged target freezes normal movement and
//! points the camera at it; a fire event is accepted only when the aiming
//! angle is within tolerance of the bearing to the target. Focus ends when
//! the target is shot or the character drifts out of the disengagement
//! radius.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{MovementFrozen, TargetShotEvent};
use crate::level::components::{TargetNode, TargetWasShot};
use crate::movement::Player;
use crate::pose::{FireLatch, LatestFire, PoseIntent};
use crate::session::progress::{SessionProgress, SessionTuning};

const FREEZE_SOURCE: &str = "focus";

#[derive(Debug, Clone, Copy)]
pub struct EngagedTarget {
    pub entity: Entity,
    pub target_id: u32,
}

#[derive(Resource, Debug, Default)]
pub struct FocusState {
    pub engaged: Option<EngagedTarget>,
}

/// Wrapped absolute angular difference in degrees, in [0, 180].
pub fn angular_difference(a_deg: f32, b_deg: f32) -> f32 {
    let diff = (a_deg - b_deg).rem_euclid(360.0);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Bearing from `from` to `to` in the XZ plane, degrees in [0, 360).
pub fn bearing_deg(from: Vec3, to: Vec3) -> f32 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    dx.atan2(dz).to_degrees().rem_euclid(360.0)
}

pub(crate) fn enter_focus_mode(
    tuning: Res<SessionTuning>,
    mut focus: ResMut<FocusState>,
    mut frozen: ResMut<MovementFrozen>,
    player: Query<&Transform, With<Player>>,
    targets: Query<(Entity, &TargetNode, &Transform), Without<TargetWasShot>>,
) {
    if focus.engaged.is_some() {
        return;
    }
    let Ok(player_transform) = player.single() else {
        return;
    };

    for (entity, node, target_transform) in &targets {
        if !node.camera_focus {
            continue;
        }
        let distance = player_transform
            .translation
            .distance(target_transform.translation);
        if distance <= tuning.focus_engage_radius {
            focus.engaged = Some(EngagedTarget {
                entity,
                target_id: node.id,
            });
            frozen.freeze(FREEZE_SOURCE);
            info!(
                "[FOCUS] engaged target {} at distance {:.2}",
                node.id, distance
            );
            return;
        }
    }
}

/// Compare each new fire token's aiming angle against the bearing to the
/// engaged target. A hit marks the target shot; a miss leaves focus mode
/// active.
pub(crate) fn process_fire_attempts(
    mut commands: Commands,
    tuning: Res<SessionTuning>,
    focus: Res<FocusState>,
    fire: Res<LatestFire>,
    mut latch: ResMut<FireLatch>,
    intent: Res<PoseIntent>,
    mut progress: ResMut<SessionProgress>,
    player: Query<&Transform, With<Player>>,
    targets: Query<(&TargetNode, &Transform), Without<TargetWasShot>>,
    mut shot_events: MessageWriter<TargetShotEvent>,
) {
    let Some(engaged) = focus.engaged else {
        return;
    };
    let Some(sample) = fire.0 else {
        return;
    };
    if !latch.take_new(&sample) {
        return;
    }
    let Ok(player_transform) = player.single() else {
        return;
    };
    let Ok((node, target_transform)) = targets.get(engaged.entity) else {
        return;
    };

    let bearing = bearing_deg(player_transform.translation, target_transform.translation);
    let offset = angular_difference(intent.aim_angle_deg, bearing);

    if offset <= tuning.aim_tolerance_deg {
        commands.entity(engaged.entity).insert(TargetWasShot);
        progress.record_target(node.id);
        shot_events.write(TargetShotEvent { target_id: node.id });
        info!(
            "[FOCUS] target {} shot (aim off by {:.1} deg)",
            node.id, offset
        );
    } else {
        info!(
            "[FOCUS] shot rejected: aim off by {:.1} deg (tolerance {:.1})",
            offset, tuning.aim_tolerance_deg
        );
    }
}

/// Leave focus mode when the engaged target is shot or the character drifts
/// past the disengagement radius.
pub(crate) fn exit_focus_mode(
    tuning: Res<SessionTuning>,
    mut focus: ResMut<FocusState>,
    mut frozen: ResMut<MovementFrozen>,
    player: Query<&Transform, With<Player>>,
    shot: Query<&TargetWasShot>,
    transforms: Query<&Transform, With<TargetNode>>,
) {
    let Some(engaged) = focus.engaged else {
        return;
    };

    let target_shot = shot.get(engaged.entity).is_ok();
    let drifted = match (player.single(), transforms.get(engaged.entity)) {
        (Ok(player_transform), Ok(target_transform)) => {
            player_transform
                .translation
                .distance(target_transform.translation)
                > tuning.focus_disengage_radius
        }
        _ => true,
    };

    if target_shot || drifted {
        focus.engaged = None;
        frozen.unfreeze(FREEZE_SOURCE);
        info!(
            "[FOCUS] disengaged target {} ({})",
            engaged.target_id,
            if target_shot { "shot" } else { "drifted" }
        );
    }
}
