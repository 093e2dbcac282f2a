//! Pose domain: input feed and classified-intent resources.

use bevy::prelude::*;

/// Per-frame movement classification handed to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Standing,
    /// Emitted for exactly one tick when a jump is detected.
    Jumping,
    /// No usable pose this frame; treated as standing with zero speed.
    Unknown,
}

/// Latest sample from the external pose estimator. Producing these is the
/// collaborator's concern (async inference on its own cadence); the
/// simulation only ever reads the most recent one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HipSample {
    /// Hip height in image coordinates (larger = lower in frame).
    pub hip_y: f32,
    /// Estimated full body height in the same units.
    pub body_height: f32,
    /// Continuous walking-speed estimate in [0, 1], when available.
    pub forward_speed: Option<f32>,
    /// Aiming angle in degrees [0, 360), when available.
    pub aim_angle_deg: Option<f32>,
    /// Monotonic sample counter; unchanged counter means no new inference.
    pub frame: u64,
}

#[derive(Resource, Debug, Default)]
pub struct LatestHipSample(pub Option<HipSample>);

/// Latest discrete fire event from the controller trigger. The token
/// increments once per physical pull; consumers latch on it so one pull is
/// processed at most once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireSample {
    pub token: u64,
    pub at: f32,
}

#[derive(Resource, Debug, Default)]
pub struct LatestFire(pub Option<FireSample>);

/// Latch over fire tokens.
#[derive(Resource, Debug, Default)]
pub struct FireLatch {
    last_token: Option<u64>,
}

impl FireLatch {
    /// Returns true exactly once per distinct token.
    pub fn take_new(&mut self, sample: &FireSample) -> bool {
        if self.last_token == Some(sample.token) {
            return false;
        }
        self.last_token = Some(sample.token);
        true
    }
}

/// The classifier's output for the current tick, read by the movement input
/// system and the focus protocol.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PoseIntent {
    pub stance: Stance,
    pub forward_speed: f32,
    pub aim_angle_deg: f32,
}

impl Default for PoseIntent {
    fn default() -> Self {
        Self {
            stance: Stance::Unknown,
            forward_speed: 0.0,
            aim_angle_deg: 0.0,
        }
    }
}
