//! Movement domain: tests for the collision resolver, tick step, and hazard
//! sensing.

use bevy::prelude::Vec3;

use super::kinematics::{
    BodyShape, BodyState, JUMP_READY_EPS, StepIntent, hazard_hit, resolve, step,
};
use super::resources::{DeathDebounce, MovementTuning};
use crate::level::data::{GROUND_TOP_Y, Pit, PitPart, Volume};

const DT: f32 = 1.0 / 60.0;

/// One wide slab whose top is the ground surface, long enough for any test.
fn ground() -> Volume {
    Volume::new(
        Vec3::new(0.0, 0.0, 100.0),
        Vec3::new(4.0, GROUND_TOP_Y, 100.0),
    )
}

fn teaching_pit() -> Vec<Pit> {
    vec![
        Pit {
            volume: Volume::new(Vec3::new(0.0, 0.0, 15.0), Vec3::new(1.5, GROUND_TOP_Y, 1.75)),
            part: PitPart::Deck,
        },
        Pit {
            volume: Volume::new(Vec3::new(0.0, -2.0, 15.0), Vec3::new(1.5, 2.5, 1.75)),
            part: PitPart::Cavity,
        },
    ]
}

// -----------------------------------------------------------------------------
// Resolver
// -----------------------------------------------------------------------------

#[test]
fn test_resolve_rests_on_surface() {
    let shape = BodyShape::default();
    let anchor = shape.anchor_on(GROUND_TOP_Y);
    let desired = Vec3::new(0.0, anchor - 0.01, 5.0);
    let resolution = resolve(
        desired,
        anchor,
        Vec3::new(0.0, -0.4, 0.0),
        &shape,
        &[ground()],
    );

    assert!(resolution.grounded);
    assert_eq!(resolution.position.y, anchor);
    assert_eq!(resolution.velocity.y, 0.0);
}

#[test]
fn test_resolve_catches_descending_crossing() {
    let shape = BodyShape::default();
    // Bottom was above the surface last tick and would end below it now.
    let resolution = resolve(
        Vec3::new(0.0, 0.0, 5.0),
        0.5,
        Vec3::new(0.0, -3.0, 0.0),
        &shape,
        &[ground()],
    );

    assert!(resolution.grounded);
    assert_eq!(resolution.position.y, shape.anchor_on(GROUND_TOP_Y));
}

#[test]
fn test_resolve_ignores_ascending_body() {
    let shape = BodyShape::default();
    let resolution = resolve(
        Vec3::new(0.0, 0.15, 5.0),
        0.5,
        Vec3::new(0.0, 2.0, 0.0),
        &shape,
        &[ground()],
    );

    assert!(!resolution.grounded);
    assert_eq!(resolution.position.y, 0.15);
}

#[test]
fn test_resolve_ignores_surface_already_passed() {
    let shape = BodyShape::default();
    // Bottom was already below the top last tick; falling through continues.
    let resolution = resolve(
        Vec3::new(0.0, -1.0, 5.0),
        -0.5,
        Vec3::new(0.0, -3.0, 0.0),
        &shape,
        &[ground()],
    );

    assert!(!resolution.grounded);
}

#[test]
fn test_resolve_prefers_highest_qualifying_surface() {
    let shape = BodyShape::default();
    let low = ground();
    let high = Volume::new(Vec3::new(0.0, 0.7, 5.0), Vec3::new(1.5, 0.3, 1.5));

    let resolution = resolve(
        Vec3::new(0.0, -0.2, 5.0),
        1.05,
        Vec3::new(0.0, -5.0, 0.0),
        &shape,
        &[low, high],
    );

    assert!(resolution.grounded);
    assert_eq!(resolution.position.y, shape.anchor_on(high.top()));
}

#[test]
fn test_resolve_outside_footprint_falls() {
    let shape = BodyShape::default();
    let ledge = Volume::new(Vec3::new(0.0, 0.7, 30.0), Vec3::new(1.5, 0.3, 1.5));
    let resolution = resolve(
        Vec3::new(0.0, 0.5, 50.0),
        1.2,
        Vec3::new(0.0, -2.0, 0.0),
        &shape,
        &[ledge],
    );

    assert!(!resolution.grounded);
}

#[test]
fn test_resolve_empty_supports_is_noop() {
    let shape = BodyShape::default();
    let desired = Vec3::new(0.0, -2.0, 5.0);
    let velocity = Vec3::new(0.0, -8.0, 1.0);
    let resolution = resolve(desired, -1.0, velocity, &shape, &[]);

    assert!(!resolution.grounded);
    assert_eq!(resolution.position, desired);
    assert_eq!(resolution.velocity, velocity);
}

// -----------------------------------------------------------------------------
// Tick step
// -----------------------------------------------------------------------------

fn resting_state(shape: &BodyShape, z: f32) -> BodyState {
    BodyState {
        position: Vec3::new(0.0, shape.anchor_on(GROUND_TOP_Y), z),
        velocity: Vec3::ZERO,
        grounded: true,
    }
}

#[test]
fn test_step_jump_only_from_ground() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let supports = [ground()];

    let state = resting_state(&shape, 5.0);
    let intent = StepIntent {
        jump: true,
        forward_speed: 0.0,
    };
    let (next, outcome) = step(&state, &shape, intent, DT, &tuning, &supports);
    assert!(outcome.jumped);
    assert!(!next.grounded);
    assert!(next.velocity.y > JUMP_READY_EPS);

    // The same intent while airborne does nothing.
    let (after, outcome) = step(&next, &shape, intent, DT, &tuning, &supports);
    assert!(!outcome.jumped);
    assert!(after.velocity.y < next.velocity.y);
}

#[test]
fn test_step_gravity_integrates_while_airborne() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let state = BodyState::at(Vec3::new(0.0, 5.0, 5.0));

    let (next, _) = step(&state, &shape, StepIntent::default(), DT, &tuning, &[]);
    assert!((next.velocity.y - (-tuning.gravity * DT)).abs() < 1e-5);
    assert!(next.position.y < state.position.y);
}

#[test]
fn test_step_forward_speed_converges() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let supports = [ground()];
    let intent = StepIntent {
        jump: false,
        forward_speed: 1.0,
    };

    let mut state = resting_state(&shape, 5.0);
    let first_v = step(&state, &shape, intent, DT, &tuning, &supports)
        .0
        .velocity
        .z;
    assert!(first_v > 0.0 && first_v < tuning.max_forward_speed);

    for _ in 0..200 {
        state = step(&state, &shape, intent, DT, &tuning, &supports).0;
    }
    assert!((state.velocity.z - tuning.max_forward_speed).abs() < 0.01);

    // Dropping the intent decays the speed back toward zero.
    for _ in 0..200 {
        state = step(&state, &shape, StepIntent::default(), DT, &tuning, &supports).0;
    }
    assert!(state.velocity.z < 0.01);
}

#[test]
fn test_step_locks_lane() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let mut state = resting_state(&shape, 5.0);
    state.position.x = 3.0;
    state.velocity.x = 2.0;

    let (next, _) = step(&state, &shape, StepIntent::default(), DT, &tuning, &[ground()]);
    assert_eq!(next.position.x, tuning.lane_x);
    assert_eq!(next.velocity.x, 0.0);
}

#[test]
fn test_step_drop_lands_on_ground() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let supports = [ground()];

    let mut state = BodyState::at(Vec3::new(0.0, 1.5, 2.0));
    for _ in 0..120 {
        state = step(&state, &shape, StepIntent::default(), DT, &tuning, &supports).0;
        if state.grounded {
            break;
        }
    }
    assert!(state.grounded);
    assert!((state.position.y - shape.anchor_on(GROUND_TOP_Y)).abs() < 1e-4);
}

#[test]
fn test_step_jump_arc_returns_to_ground() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let supports = [ground()];

    let mut state = resting_state(&shape, 5.0);
    let jump = StepIntent {
        jump: true,
        forward_speed: 0.0,
    };
    state = step(&state, &shape, jump, DT, &tuning, &supports).0;
    assert!(!state.grounded);

    let mut peak = state.position.y;
    for _ in 0..240 {
        state = step(&state, &shape, StepIntent::default(), DT, &tuning, &supports).0;
        peak = peak.max(state.position.y);
        if state.grounded {
            break;
        }
    }
    assert!(state.grounded);
    assert!(peak > shape.anchor_on(GROUND_TOP_Y) + 1.0);
    assert!((state.position.y - shape.anchor_on(GROUND_TOP_Y)).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Hazard sensing
// -----------------------------------------------------------------------------

#[test]
fn test_hazard_kill_plane() {
    let tuning = MovementTuning::default();
    assert!(hazard_hit(
        Vec3::new(0.0, tuning.kill_plane_y - 0.1, 40.0),
        tuning.kill_plane_y,
        &[],
    ));
    assert!(!hazard_hit(
        Vec3::new(0.0, 0.2, 40.0),
        tuning.kill_plane_y,
        &[],
    ));
}

#[test]
fn test_hazard_pit_cavity() {
    let pits = teaching_pit();
    // Walking height inside the pit footprint is lethal.
    assert!(hazard_hit(Vec3::new(0.0, 0.2, 15.0), -6.0, &pits));
    // Just before and just past the pit is safe.
    assert!(!hazard_hit(Vec3::new(0.0, 0.2, 12.0), -6.0, &pits));
    assert!(!hazard_hit(Vec3::new(0.0, 0.2, 18.0), -6.0, &pits));
    // Jumping over clears the cavity's height band.
    assert!(!hazard_hit(Vec3::new(0.0, 1.2, 15.0), -6.0, &pits));
}

#[test]
fn test_hazard_deck_alone_is_not_lethal() {
    let deck = vec![Pit {
        volume: Volume::new(Vec3::new(0.0, 0.0, 15.0), Vec3::new(1.5, GROUND_TOP_Y, 1.75)),
        part: PitPart::Deck,
    }];
    assert!(!hazard_hit(Vec3::new(0.0, 0.2, 15.0), -6.0, &deck));
}

#[test]
fn test_walk_into_teaching_pit_dies_once_then_respawns() {
    let shape = BodyShape::default();
    let tuning = MovementTuning::default();
    let level = crate::level::r#gen::generate(1);
    let supports: Vec<Volume> = level.ground.iter().map(|s| s.volume()).collect();

    let start = level.first_checkpoint().unwrap().position;
    let mut state = BodyState::at(start + Vec3::Y * 0.8);
    let intent = StepIntent {
        jump: false,
        forward_speed: 1.0,
    };
    let mut debounce = DeathDebounce::default();
    let mut deaths = 0;
    let mut now = 0.0;

    for _ in 0..1200 {
        state = step(&state, &shape, intent, DT, &tuning, &supports).0;
        now += DT;
        if hazard_hit(state.position, tuning.kill_plane_y, &level.pits)
            && debounce.accepts(now, tuning.death_debounce)
        {
            debounce.last_death_at = Some(now);
            deaths += 1;
            // Respawn at the anchoring checkpoint and stop walking forward.
            state = BodyState::at(start + Vec3::Y * 0.8);
            break;
        }
    }

    assert_eq!(deaths, 1);
    assert!(!hazard_hit(state.position, tuning.kill_plane_y, &level.pits));
    // A second hit immediately after is debounced.
    assert!(!debounce.accepts(now + 0.1, tuning.death_debounce));
    assert!(debounce.accepts(now + tuning.death_debounce + 0.1, tuning.death_debounce));
}

// -----------------------------------------------------------------------------
// Debounce
// -----------------------------------------------------------------------------

#[test]
fn test_death_debounce_window() {
    let mut debounce = DeathDebounce::default();
    assert!(debounce.accepts(0.0, 1.5));
    debounce.last_death_at = Some(10.0);
    assert!(!debounce.accepts(11.0, 1.5));
    assert!(debounce.accepts(11.5, 1.5));
}
