//! Core domain: simulation ordering within a tick.

use bevy::prelude::*;

/// One tick runs strictly in this order: sample inputs, move time-driven
/// geometry, step the character, then run game-state sensing over the
/// resolved position.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub enum SimSet {
    Input,
    Geometry,
    Physics,
    Sensing,
}
