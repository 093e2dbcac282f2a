//! Config domain: loading and validating the tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::config::data::TuningFile;
use crate::movement::MovementTuning;
use crate::pose::PoseCalibration;
use crate::session::SessionTuning;

/// Error type for tuning-load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse the tuning file. A missing or malformed file is an error for the
/// caller to log; it never aborts the session.
pub fn load_tuning_file(path: &Path) -> Result<TuningFile, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Apply the tuning file over the compiled defaults, clamping values that
/// would break the simulation.
pub(crate) fn apply_tuning(
    mut movement: ResMut<MovementTuning>,
    mut pose: ResMut<PoseCalibration>,
    mut session: ResMut<SessionTuning>,
) {
    let path = Path::new("assets/data/tuning.ron");
    let file = match load_tuning_file(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("[CONFIG] {}; using compiled defaults", e);
            return;
        }
    };

    if let Some(def) = file.movement {
        *movement = def.into();
    }
    if let Some(def) = file.pose {
        *pose = def.into();
    }
    if let Some(def) = file.session {
        *session = def.into();
    }

    validate_movement(&mut movement);
    validate_session(&mut session);

    info!("[CONFIG] tuning loaded from {}", path.display());
}

fn validate_movement(tuning: &mut MovementTuning) {
    if tuning.gravity <= 0.0 {
        error!("[CONFIG] gravity must be positive, clamping to default");
        tuning.gravity = MovementTuning::default().gravity;
    }
    if tuning.jump_speed <= 0.0 {
        error!("[CONFIG] jump_speed must be positive, clamping to default");
        tuning.jump_speed = MovementTuning::default().jump_speed;
    }
    if !(0.0..=1.0).contains(&tuning.forward_smoothing) {
        error!("[CONFIG] forward_smoothing must be in [0, 1], clamping");
        tuning.forward_smoothing = tuning.forward_smoothing.clamp(0.0, 1.0);
    }
}

fn validate_session(tuning: &mut SessionTuning) {
    if tuning.aim_tolerance_deg <= 0.0 || tuning.aim_tolerance_deg > 180.0 {
        error!("[CONFIG] aim_tolerance_deg must be in (0, 180], clamping to default");
        tuning.aim_tolerance_deg = SessionTuning::default().aim_tolerance_deg;
    }
    if tuning.focus_disengage_radius < tuning.focus_engage_radius {
        error!("[CONFIG] focus_disengage_radius below engage radius, raising");
        tuning.focus_disengage_radius = tuning.focus_engage_radius;
    }
}
