//! Level domain: deterministic generation, level data, and spawned geometry.

pub mod components;
pub mod data;
pub mod r#gen;
pub mod rng;
mod spawn;
mod systems;


pub use components::{
    BossGateNode, CrystalCollected, CrystalHidden, CrystalNode, GateOpen, MovingPlatform,
    PlatformBody, TargetNode, TargetWasShot,
};
pub use data::{
    BossGate, Checkpoint, Crystal, CrystalHue, Decor, DecorKind, GROUND_TOP_Y, GroundSegment,
    LevelData, LightKind, LightMarker, Pit, PitPart, Platform, PlatformKind, Target, TargetKind,
    Volume,
};
pub use r#gen::{HIGH_PLATFORM_TOP, LEVEL_LENGTH, MIN_PIT_HALF_WIDTH, REQUIRED_CRYSTALS, generate};

use bevy::prelude::*;

use crate::core::{SessionState, SimSet};
use crate::level::spawn::spawn_level;
use crate::level::systems::oscillate_platforms;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level).add_systems(
            Update,
            oscillate_platforms
                .in_set(SimSet::Geometry)
                .run_if(in_state(SessionState::Running)),
        );
    }
}
