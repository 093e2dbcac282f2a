mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod dev;
mod level;
mod movement;
mod pose;
mod session;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins(bevy::log::LogPlugin::default())
    .add_plugins(StatesPlugin)
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        pose::PosePlugin,
        session::SessionPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(dev::DevPlugin);

    app.run();
}
