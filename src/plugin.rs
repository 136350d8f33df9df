//! Wiring a scene into a Bevy app

use bevy::{prelude::*, window::WindowResolution};

use crate::components::ScreenBounds;
use crate::scene::Scene;
use crate::systems::*;

/// Installs the shared game loop for a scene: startup spawning, ship placement,
/// fixed-rate movement and clamping, and Escape to quit.
pub struct ScenePlugin {
    pub scene: Scene,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let scene = self.scene.clone();

        if let Some(fixed_time) = fixed_time(&scene) {
            app.insert_resource(fixed_time);
        }

        app.insert_resource(ClearColor(scene.background))
            .insert_resource(ScreenBounds::new(scene.width, scene.height))
            .insert_resource(scene)
            .add_systems(Startup, (log_scene, spawn_scene))
            .add_systems(Update, (place_loaded_ships, bevy::window::close_on_esc))
            .add_systems(FixedUpdate, (move_ship, clamp_ships).chain());
    }
}

/// The fixed timestep for a scene, if it caps its frame rate.
pub fn fixed_time(scene: &Scene) -> Option<Time<Fixed>> {
    scene.frame_rate.map(Time::<Fixed>::from_hz)
}

/// Build an app with a window sized and titled for the scene.
pub fn app(scene: Scene) -> App {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: scene.caption.clone(),
                    resolution: WindowResolution::new(scene.width, scene.height),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            // Scaled pixel art keeps its hard edges
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(ScenePlugin { scene });
    app
}

/// Open a window for the scene and run until it is closed.
pub fn run(scene: Scene) {
    app(scene).run();
}
