//! Pose domain: hip-trajectory jump detection.
//!
//! The detector is an explicit finite state machine over hip-height samples
//! rather than ad hoc counters: a fast upward hip movement arms it, a large
//! enough displacement followed by the peak emits a single jump, and a
//! timeout abandons slow drifts that never become jumps. Thresholds are
//! calibration data, tuned empirically and loaded from configuration.

use bevy::prelude::*;

use crate::pose::resources::{HipSample, Stance};

/// Empirically tuned detection thresholds. Values are preserved from field
/// calibration; change them in `tuning.ron`, not here.
#[derive(Resource, Debug, Clone)]
pub struct PoseCalibration {
    /// Hip velocity (image units/s, negative = upward) that arms the
    /// detector.
    pub rise_velocity: f32,
    /// Upward displacement required before a peak counts, as a fraction of
    /// body height.
    pub min_displacement_ratio: f32,
    /// Frames allowed between arming and the peak before the attempt is
    /// abandoned.
    pub peak_timeout_frames: u32,
}

impl Default for PoseCalibration {
    fn default() -> Self {
        Self {
            rise_velocity: -4.0,
            min_displacement_ratio: 0.03,
            peak_timeout_frames: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum JumpPhase {
    Idle,
    /// Armed by a fast upward hip movement; `baseline_y` is the hip height
    /// where the rise began.
    Rising { baseline_y: f32, frames: u32 },
    /// Jump already emitted; waiting for the hips to come back down.
    Falling { baseline_y: f32 },
}

/// Stateful jump detector. Feed it every new pose sample in order.
#[derive(Debug)]
pub struct JumpDetector {
    phase: JumpPhase,
    prev_hip_y: Option<f32>,
}

impl Default for JumpDetector {
    fn default() -> Self {
        Self {
            phase: JumpPhase::Idle,
            prev_hip_y: None,
        }
    }
}

impl JumpDetector {
    /// Classify one new sample. `dt` is the time since the previous sample.
    /// Returns `Stance::Jumping` for exactly the sample where the jump peak
    /// is confirmed.
    pub fn observe(&mut self, sample: &HipSample, dt: f32, cal: &PoseCalibration) -> Stance {
        let Some(prev) = self.prev_hip_y else {
            self.prev_hip_y = Some(sample.hip_y);
            return Stance::Standing;
        };
        if dt <= 0.0 {
            return Stance::Standing;
        }

        // Image coordinates grow downward, so rising hips have negative
        // velocity.
        let velocity = (sample.hip_y - prev) / dt;
        self.prev_hip_y = Some(sample.hip_y);

        match self.phase {
            JumpPhase::Idle => {
                if velocity < cal.rise_velocity {
                    self.phase = JumpPhase::Rising {
                        baseline_y: prev,
                        frames: 0,
                    };
                }
                Stance::Standing
            }
            JumpPhase::Rising { baseline_y, frames } => {
                let frames = frames + 1;
                if frames > cal.peak_timeout_frames {
                    self.phase = JumpPhase::Idle;
                    return Stance::Standing;
                }

                let displacement = baseline_y - sample.hip_y;
                let high_enough = displacement > cal.min_displacement_ratio * sample.body_height;
                if high_enough && velocity >= 0.0 {
                    // Peak reached: the hips stopped rising after a real
                    // displacement.
                    self.phase = JumpPhase::Falling { baseline_y };
                    return Stance::Jumping;
                }

                self.phase = JumpPhase::Rising { baseline_y, frames };
                Stance::Standing
            }
            JumpPhase::Falling { baseline_y } => {
                // Back near the baseline means the landing finished.
                let remaining = baseline_y - sample.hip_y;
                if remaining <= 0.5 * cal.min_displacement_ratio * sample.body_height {
                    self.phase = JumpPhase::Idle;
                }
                Stance::Standing
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = JumpPhase::Idle;
        self.prev_hip_y = None;
    }
}
