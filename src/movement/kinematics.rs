//! Movement domain: the pure per-tick physics step and collision resolver.
//!
//! Everything in this module is a plain function over plain data so a test
//! harness (or any host loop) can drive ticks without the framework. The
//! ECS systems in `movement::systems` are thin adapters over these.

use bevy::prelude::*;

use crate::level::data::{Pit, PitPart, Volume};
use crate::movement::resources::MovementTuning;

/// Vertical tolerance for treating a surface as support. Also the band
/// within which a previous-frame bottom still counts as "was above".
pub const SUPPORT_EPS: f32 = 0.05;

/// A jump is only honored while grounded with vertical velocity at or below
/// this value; there is no double or air jumping.
pub const JUMP_READY_EPS: f32 = 0.1;

/// Fixed collision half-extents and the offset from the character's logical
/// anchor (its feet) to the collision-box center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyShape {
    pub half_extents: Vec3,
    pub center_offset: Vec3,
}

impl Default for BodyShape {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(0.4, 0.9, 0.4),
            center_offset: Vec3::new(0.0, 0.9, 0.0),
        }
    }
}

impl BodyShape {
    /// Collision-box center for a given anchor position.
    pub fn center(&self, anchor: Vec3) -> Vec3 {
        anchor + self.center_offset
    }

    /// Y coordinate of the collision-box bottom for a given anchor position.
    pub fn bottom(&self, anchor: Vec3) -> f32 {
        anchor.y + self.center_offset.y - self.half_extents.y
    }

    /// Anchor Y that places the collision-box bottom exactly on `surface_y`.
    pub fn anchor_on(&self, surface_y: f32) -> f32 {
        surface_y - self.center_offset.y + self.half_extents.y
    }
}

/// The character's physical state, mutated once per tick and reset wholesale
/// on respawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
}

impl BodyState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            grounded: false,
        }
    }
}

/// Discrete intent for one tick, already reduced from upstream signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepIntent {
    pub jump: bool,
    /// Forward-speed fraction in [0, 1]; values outside are clamped.
    pub forward_speed: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    pub jumped: bool,
}

/// Resolve a desired anchor position against the supplied support volumes.
///
/// Only vertical support matters: the lane is fixed laterally and platforms
/// never block forward travel, they only provide or deny a floor. A surface
/// catches the character when its box bottom was at or above the surface
/// last tick and at or below it now, while descending. When several surfaces
/// qualify at the same footprint, the nearest one not below the previous
/// bottom wins, so the character cannot tunnel through a platform that held
/// it last frame. An empty support set is a no-op: the character keeps
/// falling.
pub fn resolve(
    desired: Vec3,
    prev_bottom: f32,
    velocity: Vec3,
    shape: &BodyShape,
    supports: &[Volume],
) -> Resolution {
    let center = shape.center(desired);
    let desired_bottom = shape.bottom(desired);

    let mut best_top: Option<f32> = None;
    if velocity.y <= 0.0 {
        for volume in supports {
            if !volume.overlaps_footprint(
                center.x,
                center.z,
                shape.half_extents.x,
                shape.half_extents.z,
            ) {
                continue;
            }
            let top = volume.top();
            if prev_bottom >= top - SUPPORT_EPS && desired_bottom <= top + SUPPORT_EPS {
                if best_top.is_none_or(|best| top > best) {
                    best_top = Some(top);
                }
            }
        }
    }

    match best_top {
        Some(top) => Resolution {
            position: Vec3::new(desired.x, shape.anchor_on(top), desired.z),
            velocity: Vec3::new(velocity.x, 0.0, velocity.z),
            grounded: true,
        },
        None => Resolution {
            position: desired,
            velocity,
            grounded: false,
        },
    }
}

/// Advance the character by one tick of `dt` seconds.
///
/// Order matches the controller contract: gravity, jump trigger, forward
/// smoothing and lane lock, tentative displacement, collision resolution.
pub fn step(
    state: &BodyState,
    shape: &BodyShape,
    intent: StepIntent,
    dt: f32,
    tuning: &MovementTuning,
    supports: &[Volume],
) -> (BodyState, StepOutcome) {
    let mut velocity = state.velocity;
    let mut outcome = StepOutcome::default();

    // Gravity integration; grounded vertical velocity stays clamped to zero
    // unless a jump fires below.
    if state.grounded {
        velocity.y = 0.0;
    } else {
        velocity.y -= tuning.gravity * dt;
    }

    let mut grounded = state.grounded;
    if intent.jump && grounded && velocity.y <= JUMP_READY_EPS {
        velocity.y = tuning.jump_speed;
        grounded = false;
        outcome.jumped = true;
    }

    // Exponential smoothing toward the forward target; the coefficient is a
    // per-frame constant (accepted frame-rate sensitivity). Lateral velocity
    // is always forced to zero.
    let target = intent.forward_speed.clamp(0.0, 1.0) * tuning.max_forward_speed;
    velocity.z += (target - velocity.z) * tuning.forward_smoothing;
    velocity.x = 0.0;

    let mut desired = state.position + velocity * dt;
    desired.x = tuning.lane_x;

    let prev_bottom = shape.bottom(state.position);
    let resolved = resolve(desired, prev_bottom, velocity, shape, supports);

    (
        BodyState {
            position: resolved.position,
            velocity: resolved.velocity,
            grounded: if outcome.jumped {
                false
            } else {
                resolved.grounded
            },
        },
        outcome,
    )
}

/// True when the anchor position is lethal: below the kill plane, or inside
/// any pit cavity's footprint and height band.
pub fn hazard_hit(position: Vec3, kill_plane_y: f32, pits: &[Pit]) -> bool {
    if position.y < kill_plane_y {
        return true;
    }
    pits.iter().any(|pit| {
        pit.part == PitPart::Cavity
            && pit.volume.contains_xz(position.x, position.z)
            && position.y >= pit.volume.bottom()
            && position.y <= pit.volume.top()
    })
}
