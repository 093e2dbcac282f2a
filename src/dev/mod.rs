//! Dev tools: a scripted pose feed for headless runs.
//!
//! With no camera attached, the simulation would sit at `Stance::Unknown`
//! forever. This plugin synthesizes the external feeds instead: a walker at
//! full forward speed that performs a hip-dip jump every few seconds and
//! pulls the trigger periodically while aiming straight down the lane. Useful
//! for watching a whole run in the logs.

use bevy::prelude::*;

use crate::core::SimSet;
use crate::pose::{FireSample, HipSample, LatestFire, LatestHipSample};

const HIP_BASELINE: f32 = 300.0;
const BODY_HEIGHT: f32 = 200.0;
const JUMP_PERIOD: f32 = 3.0;
const JUMP_RISE: f32 = 20.0;
const FIRE_PERIOD: f32 = 1.5;

#[derive(Resource, Debug, Default)]
struct ScriptedFeed {
    frame: u64,
    fire_token: u64,
    last_fire_at: f32,
}

pub struct DevPlugin;

impl Plugin for DevPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptedFeed>()
            .add_systems(Update, drive_scripted_feed.before(SimSet::Input));
    }
}

/// Publish one synthetic hip sample per tick and a fresh fire token at a
/// fixed cadence.
fn drive_scripted_feed(
    time: Res<Time>,
    mut feed: ResMut<ScriptedFeed>,
    mut hips: ResMut<LatestHipSample>,
    mut fire: ResMut<LatestFire>,
) {
    let elapsed = time.elapsed_secs();
    feed.frame += 1;

    // Image coordinates grow downward: a jump is a brief drop in hip_y.
    let phase = elapsed % JUMP_PERIOD;
    let hip_y = if (0.1..0.4).contains(&phase) {
        HIP_BASELINE - JUMP_RISE
    } else {
        HIP_BASELINE
    };

    hips.0 = Some(HipSample {
        hip_y,
        body_height: BODY_HEIGHT,
        forward_speed: Some(1.0),
        aim_angle_deg: Some(0.0),
        frame: feed.frame,
    });

    if elapsed - feed.last_fire_at >= FIRE_PERIOD {
        feed.fire_token += 1;
        feed.last_fire_at = elapsed;
        fire.0 = Some(FireSample {
            token: feed.fire_token,
            at: elapsed,
        });
    }
}
