//! Movement domain: reducing the latest pose classification to movement
//! intent.

use bevy::prelude::*;

use crate::movement::resources::MovementInput;
use crate::pose::{PoseIntent, Stance};

/// Sample the classifier's output into this tick's movement intent. An
/// absent or unknown pose degrades to standing with zero forward speed; a
/// failed upstream sensor never fails the tick.
pub(crate) fn read_movement_intent(intent: Res<PoseIntent>, mut input: ResMut<MovementInput>) {
    input.jump = intent.stance == Stance::Jumping;
    input.forward_speed = match intent.stance {
        Stance::Unknown => 0.0,
        _ => intent.forward_speed.clamp(0.0, 1.0),
    };
}
