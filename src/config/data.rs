//! Config domain: serde definitions for the tuning file.

use serde::Deserialize;

use crate::movement::MovementTuning;
use crate::pose::PoseCalibration;
use crate::session::SessionTuning;

/// On-disk layout of `assets/data/tuning.ron`. Every section is optional;
/// missing sections keep the compiled defaults.
#[derive(Debug, Default, Deserialize)]
pub struct TuningFile {
    pub movement: Option<MovementDef>,
    pub pose: Option<PoseDef>,
    pub session: Option<SessionDef>,
}

#[derive(Debug, Deserialize)]
pub struct MovementDef {
    pub gravity: f32,
    pub jump_speed: f32,
    pub max_forward_speed: f32,
    pub forward_smoothing: f32,
    pub lane_x: f32,
    pub kill_plane_y: f32,
    pub pickup_radius: f32,
    pub death_debounce: f32,
}

impl From<MovementDef> for MovementTuning {
    fn from(def: MovementDef) -> Self {
        Self {
            gravity: def.gravity,
            jump_speed: def.jump_speed,
            max_forward_speed: def.max_forward_speed,
            forward_smoothing: def.forward_smoothing,
            lane_x: def.lane_x,
            kill_plane_y: def.kill_plane_y,
            pickup_radius: def.pickup_radius,
            death_debounce: def.death_debounce,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PoseDef {
    pub rise_velocity: f32,
    pub min_displacement_ratio: f32,
    pub peak_timeout_frames: u32,
}

impl From<PoseDef> for PoseCalibration {
    fn from(def: PoseDef) -> Self {
        Self {
            rise_velocity: def.rise_velocity,
            min_displacement_ratio: def.min_displacement_ratio,
            peak_timeout_frames: def.peak_timeout_frames,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionDef {
    pub focus_engage_radius: f32,
    pub focus_disengage_radius: f32,
    pub aim_tolerance_deg: f32,
    pub ambient_shot_radius: f32,
    pub respawn_height: f32,
}

impl From<SessionDef> for SessionTuning {
    fn from(def: SessionDef) -> Self {
        Self {
            focus_engage_radius: def.focus_engage_radius,
            focus_disengage_radius: def.focus_disengage_radius,
            aim_tolerance_deg: def.aim_tolerance_deg,
            ambient_shot_radius: def.ambient_shot_radius,
            respawn_height: def.respawn_height,
        }
    }
}
