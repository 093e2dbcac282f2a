//! Session domain: tests for progress tracking, the aim protocol math, and
//! schedule-driven protocol scenarios.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::SessionPlugin;
use super::focus::{angular_difference, bearing_deg};
use super::progress::{SessionProgress, SessionTuning};
use crate::core::{CorePlugin, MovementFrozen};
use crate::level::LevelPlugin;
use crate::level::components::{CrystalHidden, CrystalNode, TargetNode, TargetWasShot};
use crate::level::data::Checkpoint;
use crate::movement::{MovementPlugin, Player};
use crate::pose::{FireSample, HipSample, LatestFire, LatestHipSample, PosePlugin};

// -----------------------------------------------------------------------------
// Progress sets
// -----------------------------------------------------------------------------

#[test]
fn test_crystal_set_only_grows() {
    let mut progress = SessionProgress::default();
    assert!(progress.record_crystal(1));
    assert!(!progress.record_crystal(1));
    assert!(progress.record_crystal(2));
    assert_eq!(progress.crystals_collected.len(), 2);
}

#[test]
fn test_target_set_only_grows() {
    let mut progress = SessionProgress::default();
    assert!(progress.record_target(7));
    assert!(!progress.record_target(7));
    assert_eq!(progress.targets_shot.len(), 1);
}

#[test]
fn test_gate_opens_at_threshold_and_stays_open() {
    let mut progress = SessionProgress::default();
    assert!(!progress.gate_open(3));

    progress.record_crystal(1);
    progress.record_crystal(2);
    assert!(!progress.gate_open(3));

    // Re-collecting an already-counted crystal does not move the count.
    progress.record_crystal(2);
    assert!(!progress.gate_open(3));

    progress.record_crystal(3);
    assert!(progress.gate_open(3));
    assert!(progress.gate_open(3));
}

#[test]
fn test_respawn_tokens_are_distinct() {
    let mut progress = SessionProgress::default();
    let a = progress.next_respawn_token();
    let b = progress.next_respawn_token();
    let c = progress.next_respawn_token();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert!(a < b && b < c);
}

// -----------------------------------------------------------------------------
// Aim math
// -----------------------------------------------------------------------------

#[test]
fn test_angular_difference_wraps() {
    assert_eq!(angular_difference(10.0, 350.0), 20.0);
    assert_eq!(angular_difference(350.0, 10.0), 20.0);
    assert_eq!(angular_difference(0.0, 0.0), 0.0);
    assert_eq!(angular_difference(180.0, 0.0), 180.0);
    assert_eq!(angular_difference(359.0, 1.0), 2.0);
}

#[test]
fn test_angular_difference_is_symmetric() {
    for (a, b) in [(15.0, 275.0), (0.0, 181.0), (90.0, 90.5)] {
        assert_eq!(angular_difference(a, b), angular_difference(b, a));
    }
}

#[test]
fn test_bearing_cardinal_directions() {
    let origin = Vec3::ZERO;
    assert!((bearing_deg(origin, Vec3::new(0.0, 0.0, 1.0)) - 0.0).abs() < 1e-4);
    assert!((bearing_deg(origin, Vec3::new(1.0, 0.0, 0.0)) - 90.0).abs() < 1e-4);
    assert!((bearing_deg(origin, Vec3::new(0.0, 0.0, -1.0)) - 180.0).abs() < 1e-4);
    assert!((bearing_deg(origin, Vec3::new(-1.0, 0.0, 0.0)) - 270.0).abs() < 1e-4);
}

#[test]
fn test_bearing_ignores_height() {
    let a = bearing_deg(Vec3::new(0.0, 0.2, 90.0), Vec3::new(0.0, 2.5, 98.0));
    let b = bearing_deg(Vec3::new(0.0, 5.0, 90.0), Vec3::new(0.0, 0.0, 98.0));
    assert!((a - b).abs() < 1e-4);
}

#[test]
fn test_aim_tolerance_decision() {
    let tuning = SessionTuning::default();
    let bearing = 0.0;

    // On the boundary is a hit; wrapped near-misses count too.
    assert!(angular_difference(12.0, bearing) <= tuning.aim_tolerance_deg);
    assert!(angular_difference(349.0, bearing) <= tuning.aim_tolerance_deg);
    // Just outside is a miss from either side.
    assert!(angular_difference(12.5, bearing) > tuning.aim_tolerance_deg);
    assert!(angular_difference(347.0, bearing) > tuning.aim_tolerance_deg);
}

// -----------------------------------------------------------------------------
// Checkpoint footprints
// -----------------------------------------------------------------------------

#[test]
fn test_checkpoint_contains_standing_character() {
    let cp = Checkpoint {
        id: 2,
        position: Vec3::new(0.0, 0.2, 45.0),
        width: 4.0,
        depth: 3.0,
    };
    assert!(cp.contains(Vec3::new(0.0, 0.2, 45.0)));
    assert!(cp.contains(Vec3::new(1.9, 0.25, 46.4)));
    // Outside the footprint does not count.
    assert!(!cp.contains(Vec3::new(0.0, 0.2, 47.0)));
    // Neither does a jump arcing over the footprint.
    assert!(!cp.contains(Vec3::new(0.0, 1.0, 45.0)));
    assert!(!cp.contains(Vec3::new(0.0, 0.4, 45.0)));
}

// -----------------------------------------------------------------------------
// Schedule-driven scenarios
// -----------------------------------------------------------------------------

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .add_plugins((
            CorePlugin,
            LevelPlugin,
            MovementPlugin,
            PosePlugin,
            SessionPlugin,
        ));
    // First updates: level generation, state transition, player spawn.
    app.update();
    app.update();
    app
}

fn place_player(app: &mut App, position: Vec3) {
    let mut query = app
        .world_mut()
        .query_filtered::<&mut Transform, With<Player>>();
    let mut transform = query.single_mut(app.world_mut()).unwrap();
    transform.translation = position;
}

fn hidden_crystal_entity(app: &mut App) -> (Entity, Vec3) {
    let mut query = app
        .world_mut()
        .query_filtered::<(Entity, &Transform), (With<CrystalNode>, With<CrystalHidden>)>();
    let (entity, transform) = query.single(app.world()).unwrap();
    (entity, transform.translation)
}

fn focus_target_entity(app: &mut App) -> (Entity, Vec3) {
    target_entity(app, true)
}

fn ambient_target_entity(app: &mut App) -> (Entity, Vec3) {
    target_entity(app, false)
}

fn target_entity(app: &mut App, camera_focus: bool) -> (Entity, Vec3) {
    let mut query = app.world_mut().query::<(Entity, &TargetNode, &Transform)>();
    let (entity, _, transform) = query
        .iter(app.world())
        .find(|(_, node, _)| node.camera_focus == camera_focus)
        .unwrap();
    (entity, transform.translation)
}

#[test]
fn test_hidden_crystal_not_collectible_until_revealed() {
    let mut app = test_app();
    let (crystal, crystal_pos) = hidden_crystal_entity(&mut app);

    // Standing on the crystal while it is hidden collects nothing.
    place_player(&mut app, Vec3::new(0.0, 0.2, crystal_pos.z));
    for _ in 0..5 {
        app.update();
    }
    let crystal_node = app.world().get::<CrystalNode>(crystal).unwrap();
    let crystal_id = crystal_node.id;
    assert!(
        !app.world()
            .resource::<SessionProgress>()
            .crystals_collected
            .contains(&crystal_id)
    );

    // Once revealed, the same spot collects it.
    app.world_mut()
        .entity_mut(crystal)
        .remove::<CrystalHidden>();
    place_player(&mut app, Vec3::new(0.0, 0.2, crystal_pos.z));
    for _ in 0..5 {
        app.update();
    }
    assert!(
        app.world()
            .resource::<SessionProgress>()
            .crystals_collected
            .contains(&crystal_id)
    );
}

#[test]
fn test_ambient_target_shot_by_contact() {
    let mut app = test_app();
    let (geode, geode_pos) = ambient_target_entity(&mut app);

    // Running through the geode shoots it without any focus handshake.
    place_player(&mut app, Vec3::new(0.0, 0.2, geode_pos.z));
    for _ in 0..3 {
        app.update();
    }

    assert!(app.world().get::<TargetWasShot>(geode).is_some());
    assert!(!app.world().resource::<MovementFrozen>().is_frozen());

    let target_id = app.world().get::<TargetNode>(geode).unwrap().id;
    assert!(
        app.world()
            .resource::<SessionProgress>()
            .targets_shot
            .contains(&target_id)
    );
}

#[test]
fn test_focus_fire_miss_then_hit() {
    let mut app = test_app();
    let (target, target_pos) = focus_target_entity(&mut app);

    // Approach within the engage radius; movement freezes.
    place_player(&mut app, Vec3::new(0.0, 0.2, target_pos.z - 2.0));
    app.update();
    assert!(app.world().resource::<MovementFrozen>().is_frozen());

    // Aim 90 degrees off the lane, pull the trigger: rejected.
    app.world_mut().resource_mut::<LatestHipSample>().0 = Some(HipSample {
        hip_y: 300.0,
        body_height: 200.0,
        forward_speed: Some(0.0),
        aim_angle_deg: Some(90.0),
        frame: 1,
    });
    app.world_mut().resource_mut::<LatestFire>().0 = Some(FireSample { token: 1, at: 0.0 });
    app.update();
    assert!(app.world().get::<TargetWasShot>(target).is_none());
    assert!(app.world().resource::<MovementFrozen>().is_frozen());

    // Aim straight down the lane (bearing to the target is 0): hit.
    app.world_mut().resource_mut::<LatestHipSample>().0 = Some(HipSample {
        hip_y: 300.0,
        body_height: 200.0,
        forward_speed: Some(0.0),
        aim_angle_deg: Some(0.0),
        frame: 2,
    });
    app.world_mut().resource_mut::<LatestFire>().0 = Some(FireSample { token: 2, at: 0.1 });
    app.update();
    assert!(app.world().get::<TargetWasShot>(target).is_some());

    let target_id = app.world().get::<TargetNode>(target).unwrap().id;
    assert!(
        app.world()
            .resource::<SessionProgress>()
            .targets_shot
            .contains(&target_id)
    );

    // Shooting the target releases the freeze and reveals its crystal.
    app.update();
    assert!(!app.world().resource::<MovementFrozen>().is_frozen());
    let mut hidden = app
        .world_mut()
        .query_filtered::<Entity, (With<CrystalNode>, With<CrystalHidden>)>();
    assert_eq!(hidden.iter(app.world()).count(), 0);
}
