//! The alien invasion game: a ship that slides along the bottom of the screen.

use alien_invasion::{
    plugin,
    settings::{log_settings, Settings, SettingsError},
    Scene,
};
use bevy::prelude::*;

fn main() -> Result<(), SettingsError> {
    let settings = Settings::load()?;
    let scene = Scene::alien_invasion(&settings);

    plugin::app(scene)
        .insert_resource(settings)
        .add_systems(Startup, log_settings)
        .run();

    Ok(())
}
