//! Movement domain: character components.

use bevy::prelude::*;

use crate::movement::kinematics::BodyShape;

#[derive(Component, Debug)]
pub struct Player;

/// Per-frame mutable physics state. Position lives in the entity's
/// `Transform` (the anchor is at the feet); everything else is here.
#[derive(Component, Debug, Default)]
pub struct Kinematics {
    pub velocity: Vec3,
    pub grounded: bool,
    /// Token of the last applied respawn request; each distinct token is
    /// applied at most once.
    pub last_respawn_token: Option<u64>,
}

/// Fixed collision box for the character.
#[derive(Component, Debug, Default)]
pub struct CollisionBox {
    pub shape: BodyShape,
}
