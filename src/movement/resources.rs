//! Movement domain: tuning and per-tick input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub gravity: f32,
    pub jump_speed: f32,
    pub max_forward_speed: f32,
    /// Per-frame exponential smoothing coefficient for forward speed.
    pub forward_smoothing: f32,
    /// The single travel lane's lateral coordinate.
    pub lane_x: f32,
    /// Falling below this Y is lethal regardless of pit footprints.
    pub kill_plane_y: f32,
    /// Distance from the collision-box center within which a crystal is
    /// picked up.
    pub pickup_radius: f32,
    /// Minimum interval between death events, so one fall cannot trigger
    /// several.
    pub death_debounce: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 25.0,
            jump_speed: 9.0,
            max_forward_speed: 6.0,
            forward_smoothing: 0.15,
            lane_x: 0.0,
            kill_plane_y: -6.0,
            pickup_radius: 1.2,
            death_debounce: 1.5,
        }
    }
}

/// Reduced movement intent for the current tick, written by the input system
/// from the latest pose classification (or overrides) and read by the
/// physics step.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub jump: bool,
    /// Forward-speed fraction in [0, 1].
    pub forward_speed: f32,
}

/// Timestamp of the last accepted death event.
#[derive(Resource, Debug, Default)]
pub struct DeathDebounce {
    pub last_death_at: Option<f32>,
}

impl DeathDebounce {
    /// True when a death at `now` is far enough from the previous one.
    pub fn accepts(&self, now: f32, min_interval: f32) -> bool {
        self.last_death_at
            .is_none_or(|last| now - last >= min_interval)
    }
}
