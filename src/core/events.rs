//! Core domain: messages forming the session's outward callback surface.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired once after level generation, signaling downstream consumers that
/// geometry exists.
#[derive(Debug)]
pub struct LevelReadyEvent {
    pub seed: u64,
    pub length: f32,
}

impl Message for LevelReadyEvent {}

/// Fired every tick the character's resolved position changes, for
/// camera-follow and UI consumers.
#[derive(Debug)]
pub struct PlayerMovedEvent {
    pub position: Vec3,
}

impl Message for PlayerMovedEvent {}

/// Fired when the character enters a checkpoint footprint it was not already
/// anchored to.
#[derive(Debug)]
pub struct CheckpointReachedEvent {
    pub checkpoint_id: u32,
}

impl Message for CheckpointReachedEvent {}

/// Fired when a crystal transitions to collected.
#[derive(Debug)]
pub struct CrystalCollectedEvent {
    pub crystal_id: u32,
}

impl Message for CrystalCollectedEvent {}

/// Fired when a target transitions to shot.
#[derive(Debug)]
pub struct TargetShotEvent {
    pub target_id: u32,
}

impl Message for TargetShotEvent {}

/// Fired once, the first time the collected-crystal count reaches the boss
/// gate's threshold.
#[derive(Debug)]
pub struct BossGateOpenedEvent {
    pub crystals_collected: u32,
}

impl Message for BossGateOpenedEvent {}

/// Fired when the character falls below the kill plane or into a pit cavity.
/// Debounced by the hazard system; the session layer answers with a
/// `RespawnRequest`.
#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub position: Vec3,
}

impl Message for PlayerDiedEvent {}

/// Hard reset of the character's physical state. Applied at most once per
/// distinct token so a re-delivered request cannot double-teleport.
#[derive(Debug)]
pub struct RespawnRequest {
    pub position: Vec3,
    pub token: u64,
}

impl Message for RespawnRequest {}
