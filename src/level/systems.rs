//! Level domain: per-frame systems for time-parameterized geometry.

use bevy::prelude::*;

use crate::level::components::MovingPlatform;

/// Recompute moving-platform positions from elapsed time. Runs before
/// collision resolution so the character lands on where the platform is this
/// frame, not where it was.
pub(crate) fn oscillate_platforms(
    time: Res<Time>,
    mut query: Query<(&MovingPlatform, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    for (platform, mut transform) in &mut query {
        let offset =
            platform.direction * (platform.distance * (platform.angular_speed * elapsed).sin());
        transform.translation = platform.origin + offset;
    }
}
