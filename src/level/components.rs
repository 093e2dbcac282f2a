//! Level domain: components for spawned level entities.
//!
//! Irreversible state transitions (reveal, collect, shoot, gate open) are
//! expressed as marker components inserted or removed exactly once.

use bevy::prelude::*;

/// Collidable box carried by every platform entity. The entity's `Transform`
/// holds the current center; moving platforms get theirs recomputed each
/// frame.
#[derive(Component, Debug)]
pub struct PlatformBody {
    pub half_extents: Vec3,
}

/// Sinusoidal oscillation parameters for a moving platform.
#[derive(Component, Debug)]
pub struct MovingPlatform {
    pub origin: Vec3,
    pub direction: Vec3,
    pub distance: f32,
    pub angular_speed: f32,
}

#[derive(Component, Debug)]
pub struct CrystalNode {
    pub id: u32,
    pub requires_target: Option<u32>,
}

/// Present while a gated crystal has not been revealed; removed when its
/// gating target is shot.
#[derive(Component, Debug)]
pub struct CrystalHidden;

/// Terminal for the session.
#[derive(Component, Debug)]
pub struct CrystalCollected;

#[derive(Component, Debug)]
pub struct TargetNode {
    pub id: u32,
    pub reveals_crystal: Option<u32>,
    /// Requires the aim-and-fire protocol; ambient proximity does not shoot it.
    pub camera_focus: bool,
}

/// Terminal for the session.
#[derive(Component, Debug)]
pub struct TargetWasShot;

#[derive(Component, Debug)]
pub struct BossGateNode {
    pub required_crystals: u32,
}

/// Inserted once when the collected-crystal count first reaches the gate's
/// threshold; never removed.
#[derive(Component, Debug)]
pub struct GateOpen;
