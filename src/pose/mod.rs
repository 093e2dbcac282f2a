//! Pose domain: jump detection over hip samples and intent classification.
//!
//! Pose estimation itself (camera, skeletal keypoints) lives outside the
//! simulation; collaborators push the latest `HipSample` and `FireSample`
//! and this domain reduces them to a per-tick `PoseIntent`.

pub mod classifier;
mod resources;
mod systems;


pub use classifier::{JumpDetector, PoseCalibration};
pub use resources::{FireLatch, FireSample, HipSample, LatestFire, LatestHipSample, PoseIntent, Stance};

use bevy::prelude::*;

use crate::core::SimSet;
use crate::pose::systems::{ClassifierState, classify_pose};

pub struct PosePlugin;

impl Plugin for PosePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PoseCalibration>()
            .init_resource::<LatestHipSample>()
            .init_resource::<LatestFire>()
            .init_resource::<FireLatch>()
            .init_resource::<ClassifierState>()
            .init_resource::<PoseIntent>()
            .add_systems(Update, classify_pose.in_set(SimSet::Input));
    }
}
