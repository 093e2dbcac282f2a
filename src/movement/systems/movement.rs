//! Movement domain: the per-frame character step and respawn application.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{MovementFrozen, PlayerMovedEvent, RespawnRequest};
use crate::level::components::PlatformBody;
use crate::level::data::{LevelData, Volume};
use crate::movement::components::{CollisionBox, Kinematics, Player};
use crate::movement::kinematics::{BodyState, StepIntent, step};
use crate::movement::resources::{MovementInput, MovementTuning};

/// Spawn the character slightly above the first checkpoint; the first few
/// ticks drop it onto the ground.
pub(crate) fn spawn_player(mut commands: Commands, level: Res<LevelData>) {
    let start = level
        .first_checkpoint()
        .map(|cp| cp.position)
        .unwrap_or(Vec3::ZERO);

    commands.spawn((
        Player,
        Kinematics::default(),
        CollisionBox::default(),
        Transform::from_translation(start + Vec3::Y * 0.8),
    ));
    info!("[PLAYER] spawned at {:?}", start);
}

/// One simulation tick: gravity, jump, smoothing, displacement, resolution.
///
/// While movement is frozen (focus mode), velocity is forced to zero, no
/// physics step executes, and no position notification is emitted.
pub(crate) fn apply_player_step(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    frozen: Res<MovementFrozen>,
    level: Res<LevelData>,
    platforms: Query<(&PlatformBody, &Transform), Without<Player>>,
    mut player: Query<(&mut Transform, &mut Kinematics, &CollisionBox), With<Player>>,
    mut moved_events: MessageWriter<PlayerMovedEvent>,
) {
    let Ok((mut transform, mut kinematics, collision_box)) = player.single_mut() else {
        return;
    };

    if frozen.is_frozen() {
        kinematics.velocity = Vec3::ZERO;
        return;
    }

    // Currently-relevant solids: ground segments plus platforms at their
    // positions this frame. Pits are sensed separately, never resolved.
    let mut supports: Vec<Volume> =
        Vec::with_capacity(level.ground.len() + platforms.iter().count());
    supports.extend(level.ground.iter().map(|segment| segment.volume()));
    supports.extend(
        platforms
            .iter()
            .map(|(body, platform_transform)| {
                Volume::new(platform_transform.translation, body.half_extents)
            }),
    );

    let state = BodyState {
        position: transform.translation,
        velocity: kinematics.velocity,
        grounded: kinematics.grounded,
    };
    let intent = StepIntent {
        jump: input.jump,
        forward_speed: input.forward_speed,
    };

    let (next, outcome) = step(
        &state,
        &collision_box.shape,
        intent,
        time.delta_secs(),
        &tuning,
        &supports,
    );

    if outcome.jumped {
        debug!("[PLAYER] jump at z={:.2}", next.position.z);
    }

    transform.translation = next.position;
    kinematics.velocity = next.velocity;
    kinematics.grounded = next.grounded;

    moved_events.write(PlayerMovedEvent {
        position: next.position,
    });
}

/// Apply respawn requests: hard position set, zero velocity, grounded
/// cleared. Each distinct token is applied exactly once.
pub(crate) fn apply_respawns(
    mut respawn_events: MessageReader<RespawnRequest>,
    mut player: Query<(&mut Transform, &mut Kinematics), With<Player>>,
) {
    for request in respawn_events.read() {
        let Ok((mut transform, mut kinematics)) = player.single_mut() else {
            continue;
        };
        if kinematics.last_respawn_token == Some(request.token) {
            continue;
        }
        transform.translation = request.position;
        kinematics.velocity = Vec3::ZERO;
        kinematics.grounded = false;
        kinematics.last_respawn_token = Some(request.token);
        info!(
            "[RESPAWN] applied token {} at {:?}",
            request.token, request.position
        );
    }
}
