//! Core domain: shared resources for session configuration and movement
//! freezing.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// Resource tracking whether normal movement is disabled.
/// Movement is frozen if any source is active (focus mode, menus, ...).
#[derive(Resource, Debug, Default)]
pub struct MovementFrozen {
    pub sources: HashSet<String>,
}

impl MovementFrozen {
    pub fn is_frozen(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn freeze(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unfreeze(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when normal movement is allowed
pub fn movement_active(frozen: Res<MovementFrozen>) -> bool {
    !frozen.is_frozen()
}

#[derive(Resource, Debug)]
pub struct SessionConfig {
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}
