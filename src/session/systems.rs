//! Session domain: checkpoint, crystal, target, gate, and death/respawn
//! bookkeeping over the resolved character position.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{
    BossGateOpenedEvent, CheckpointReachedEvent, CrystalCollectedEvent, PlayerDiedEvent,
    RespawnRequest, TargetShotEvent,
};
use crate::level::components::{
    BossGateNode, CrystalCollected, CrystalHidden, CrystalNode, GateOpen, TargetNode,
    TargetWasShot,
};
use crate::level::data::LevelData;
use crate::movement::{CollisionBox, MovementTuning, Player};
use crate::session::progress::{SessionProgress, SessionTuning};

/// Record entry into a checkpoint footprint. Idempotent: re-entering the
/// checkpoint the character is already anchored to is a no-op.
pub(crate) fn track_checkpoints(
    level: Res<LevelData>,
    mut progress: ResMut<SessionProgress>,
    player: Query<&Transform, With<Player>>,
    mut checkpoint_events: MessageWriter<CheckpointReachedEvent>,
) {
    let Ok(transform) = player.single() else {
        return;
    };

    for checkpoint in &level.checkpoints {
        if !checkpoint.contains(transform.translation) {
            continue;
        }
        if progress.current_checkpoint == Some(checkpoint.id) {
            continue;
        }
        progress.current_checkpoint = Some(checkpoint.id);
        info!("[CHECKPOINT] reached {}", checkpoint.id);
        checkpoint_events.write(CheckpointReachedEvent {
            checkpoint_id: checkpoint.id,
        });
    }
}

/// Shoot non-focus targets by ambient proximity.
pub(crate) fn ambient_target_hits(
    mut commands: Commands,
    tuning: Res<SessionTuning>,
    mut progress: ResMut<SessionProgress>,
    player: Query<&Transform, With<Player>>,
    targets: Query<(Entity, &TargetNode, &Transform), Without<TargetWasShot>>,
    mut shot_events: MessageWriter<TargetShotEvent>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    for (entity, node, target_transform) in &targets {
        if node.camera_focus {
            continue;
        }
        let distance = player_transform
            .translation
            .distance(target_transform.translation);
        if distance > tuning.ambient_shot_radius {
            continue;
        }
        commands.entity(entity).insert(TargetWasShot);
        progress.record_target(node.id);
        info!("[TARGET] {} shot by contact", node.id);
        shot_events.write(TargetShotEvent { target_id: node.id });
    }
}

/// Pick up visible, uncollected crystals within the pickup radius of the
/// collision-box center. Hidden crystals are excluded by the marker until
/// their gating target reveals them.
pub(crate) fn collect_crystals(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut progress: ResMut<SessionProgress>,
    player: Query<(&Transform, &CollisionBox), With<Player>>,
    crystals: Query<
        (Entity, &CrystalNode, &Transform),
        (Without<CrystalCollected>, Without<CrystalHidden>, Without<Player>),
    >,
    mut collected_events: MessageWriter<CrystalCollectedEvent>,
) {
    let Ok((transform, collision_box)) = player.single() else {
        return;
    };
    let center = collision_box.shape.center(transform.translation);

    for (entity, node, crystal_transform) in &crystals {
        if center.distance(crystal_transform.translation) > tuning.pickup_radius {
            continue;
        }
        commands.entity(entity).insert(CrystalCollected);
        if progress.record_crystal(node.id) {
            info!(
                "[CRYSTAL] collected {} (total {})",
                node.id,
                progress.crystals_collected.len(),
            );
            collected_events.write(CrystalCollectedEvent {
                crystal_id: node.id,
            });
        }
    }
}

/// Reveal hidden crystals whose gating target was shot. Runs after crystal
/// collection in the tick, so a revealed crystal becomes collectible the
/// following tick.
pub(crate) fn reveal_crystals(
    mut commands: Commands,
    mut shot_events: MessageReader<TargetShotEvent>,
    hidden: Query<(Entity, &CrystalNode), With<CrystalHidden>>,
) {
    for event in shot_events.read() {
        for (entity, node) in &hidden {
            if node.requires_target == Some(event.target_id) {
                commands.entity(entity).remove::<CrystalHidden>();
                info!(
                    "[CRYSTAL] {} revealed by target {}",
                    node.id, event.target_id
                );
            }
        }
    }
}

/// Open the boss gate the first time the collected-crystal count reaches its
/// threshold. The marker is never removed, so the gate cannot close again.
pub(crate) fn update_boss_gate(
    mut commands: Commands,
    progress: Res<SessionProgress>,
    gates: Query<(Entity, &BossGateNode), Without<GateOpen>>,
    mut gate_events: MessageWriter<BossGateOpenedEvent>,
) {
    for (entity, gate) in &gates {
        if !progress.gate_open(gate.required_crystals) {
            continue;
        }
        commands.entity(entity).insert(GateOpen);
        info!(
            "[GATE] open with {} crystals",
            progress.crystals_collected.len()
        );
        gate_events.write(BossGateOpenedEvent {
            crystals_collected: progress.crystals_collected.len() as u32,
        });
    }
}

/// Answer a death with a respawn request anchored at the last entered
/// checkpoint (or the first checkpoint before any has been entered), under a
/// fresh token so the controller applies it exactly once.
pub(crate) fn handle_player_death(
    mut death_events: MessageReader<PlayerDiedEvent>,
    level: Res<LevelData>,
    tuning: Res<SessionTuning>,
    mut progress: ResMut<SessionProgress>,
    mut respawn_events: MessageWriter<RespawnRequest>,
) {
    for event in death_events.read() {
        progress.deaths += 1;

        let anchor = progress
            .current_checkpoint
            .and_then(|id| level.checkpoint(id))
            .or_else(|| level.first_checkpoint());
        let Some(checkpoint) = anchor else {
            warn!("[RESPAWN] no checkpoint to respawn at");
            continue;
        };

        let token = progress.next_respawn_token();
        info!(
            "[RESPAWN] death #{} at {:?} -> checkpoint {} (token {})",
            progress.deaths, event.position, checkpoint.id, token
        );
        respawn_events.write(RespawnRequest {
            position: checkpoint.position + Vec3::Y * tuning.respawn_height,
            token,
        });
    }
}
