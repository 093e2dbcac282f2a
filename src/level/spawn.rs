//! Level domain: instantiating generated level data into the world.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{LevelReadyEvent, SessionConfig, SessionState};
use crate::level::components::{
    BossGateNode, CrystalHidden, CrystalNode, MovingPlatform, PlatformBody, TargetNode,
};
use crate::level::data::PlatformKind;
use crate::level::r#gen::generate;

/// Generate the level for the configured seed, spawn its entities, publish
/// the data as a read-only resource, and release the simulation gate.
pub(crate) fn spawn_level(
    mut commands: Commands,
    config: Res<SessionConfig>,
    mut ready_events: MessageWriter<LevelReadyEvent>,
    mut next_state: ResMut<NextState<SessionState>>,
) {
    let level = generate(config.seed);

    for platform in &level.platforms {
        let mut entity = commands.spawn((
            PlatformBody {
                half_extents: platform.volume.half_extents,
            },
            Transform::from_translation(platform.volume.center),
        ));
        if let PlatformKind::Moving {
            direction,
            distance,
            angular_speed,
        } = platform.kind
        {
            entity.insert(MovingPlatform {
                origin: platform.volume.center,
                direction,
                distance,
                angular_speed,
            });
        }
    }

    for crystal in &level.crystals {
        let mut entity = commands.spawn((
            CrystalNode {
                id: crystal.id,
                requires_target: crystal.requires_target,
            },
            Transform::from_translation(crystal.position),
        ));
        if crystal.hidden {
            entity.insert(CrystalHidden);
        }
    }

    for target in &level.targets {
        commands.spawn((
            TargetNode {
                id: target.id,
                reveals_crystal: target.reveals_crystal,
                camera_focus: target.camera_focus,
            },
            Transform::from_translation(target.position),
        ));
    }

    commands.spawn((
        BossGateNode {
            required_crystals: level.boss_gate.required_crystals,
        },
        Transform::from_translation(level.boss_gate.position),
    ));

    info!(
        "[LEVEL] seed={} length={} ({} platforms, {} pits, {} crystals, {} targets, {} checkpoints)",
        level.seed,
        level.length,
        level.platforms.len(),
        level.pits.len(),
        level.crystals.len(),
        level.targets.len(),
        level.checkpoints.len(),
    );

    ready_events.write(LevelReadyEvent {
        seed: level.seed,
        length: level.length,
    });
    commands.insert_resource(level);
    next_state.set(SessionState::Running);
}
