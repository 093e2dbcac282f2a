//! Pose domain: per-tick classification of the latest sample.

use bevy::prelude::*;

use crate::pose::classifier::{JumpDetector, PoseCalibration};
use crate::pose::resources::{LatestHipSample, PoseIntent, Stance};

/// Wraps the detector with the bookkeeping needed to feed it only new
/// samples.
#[derive(Resource, Debug, Default)]
pub(crate) struct ClassifierState {
    pub detector: JumpDetector,
    pub last_frame: Option<u64>,
    pub last_sample_at: f32,
}

/// Reduce the latest hip sample to this tick's `PoseIntent`. A missing feed
/// degrades to `Unknown` (neutral intent) rather than failing; a stale frame
/// keeps the previous continuous fields but never re-emits a jump.
pub(crate) fn classify_pose(
    time: Res<Time>,
    calibration: Res<PoseCalibration>,
    feed: Res<LatestHipSample>,
    mut state: ResMut<ClassifierState>,
    mut intent: ResMut<PoseIntent>,
) {
    let Some(sample) = feed.0 else {
        *intent = PoseIntent::default();
        return;
    };

    let now = time.elapsed_secs();
    if state.last_frame == Some(sample.frame) {
        // No new inference this tick; jump intent is single-shot.
        if intent.stance == Stance::Jumping {
            intent.stance = Stance::Standing;
        }
        return;
    }

    let dt = if state.last_frame.is_some() {
        now - state.last_sample_at
    } else {
        0.0
    };
    state.last_frame = Some(sample.frame);
    state.last_sample_at = now;

    let stance = state.detector.observe(&sample, dt, &calibration);
    if stance == Stance::Jumping {
        debug!("[POSE] jump detected at frame {}", sample.frame);
    }

    intent.stance = stance;
    if let Some(speed) = sample.forward_speed {
        intent.forward_speed = speed.clamp(0.0, 1.0);
    }
    if let Some(angle) = sample.aim_angle_deg {
        intent.aim_angle_deg = angle.rem_euclid(360.0);
    }
}
