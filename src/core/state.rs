//! Core domain: session lifecycle states.

use bevy::prelude::*;

/// Simulation is gated on `Running`: no physics or sensing system executes
/// until the level exists, so an uninitialized level is never treated as
/// all void.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Running,
}
