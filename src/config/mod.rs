//! Config domain: RON-backed tuning for movement, pose calibration, and
//! session rules.

pub mod data;
mod loader;


pub use loader::{TuningLoadError, load_tuning_file};

use bevy::prelude::*;

use crate::config::loader::apply_tuning;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_tuning);
    }
}
