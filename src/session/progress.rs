//! Session domain: monotonic progress tracking.

use bevy::prelude::*;
use std::collections::HashSet;

/// Session-lifetime progress. The id sets only ever grow; they are reset
/// exclusively by starting a new session.
#[derive(Resource, Debug, Default)]
pub struct SessionProgress {
    pub crystals_collected: HashSet<u32>,
    pub targets_shot: HashSet<u32>,
    /// Most recently entered checkpoint; the respawn anchor.
    pub current_checkpoint: Option<u32>,
    pub deaths: u32,
    respawn_serial: u64,
}

impl SessionProgress {
    /// Returns true when the crystal was not already collected.
    pub fn record_crystal(&mut self, id: u32) -> bool {
        self.crystals_collected.insert(id)
    }

    /// Returns true when the target was not already shot.
    pub fn record_target(&mut self, id: u32) -> bool {
        self.targets_shot.insert(id)
    }

    /// Derived gate predicate: once the distinct-crystal count reaches the
    /// threshold this stays true, since the set never shrinks.
    pub fn gate_open(&self, required_crystals: u32) -> bool {
        self.crystals_collected.len() as u32 >= required_crystals
    }

    /// Fresh token for a respawn request, distinct from all previous ones.
    pub fn next_respawn_token(&mut self) -> u64 {
        self.respawn_serial += 1;
        self.respawn_serial
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SessionTuning {
    /// Distance to an unshot focus target that engages focus mode.
    pub focus_engage_radius: f32,
    /// Drifting past this distance disengages focus mode.
    pub focus_disengage_radius: f32,
    /// Maximum wrapped angular difference (degrees) for a hit.
    pub aim_tolerance_deg: f32,
    /// Proximity at which non-focus targets are shot by ambient contact.
    pub ambient_shot_radius: f32,
    /// Lift above the checkpoint surface when respawning.
    pub respawn_height: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            focus_engage_radius: 4.0,
            focus_disengage_radius: 6.0,
            aim_tolerance_deg: 12.0,
            ambient_shot_radius: 1.5,
            respawn_height: 0.8,
        }
    }
}
