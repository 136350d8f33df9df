//! The systems that make up the shared game loop

use bevy::{
    app::AppExit,
    asset::LoadState,
    prelude::*,
    sprite::MaterialMesh2dBundle,
};

use crate::components::*;
use crate::scene::{Scene, SceneContent, Shape, ShipConfig};

// Spawn the camera and whatever the scene asks to draw
pub fn spawn_scene(
    mut commands: Commands,
    scene: Res<Scene>,
    screen: Res<ScreenBounds>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    match &scene.content {
        SceneContent::Empty => {}
        SceneContent::Shapes(shapes) => {
            // Later shapes are drawn on top of earlier ones
            for (depth, shape) in shapes.iter().enumerate() {
                let z = depth as f32;
                match *shape {
                    Shape::Rect { x, y, w, h, color } => {
                        let centre = rect_centre(&screen, x, y, w, h);
                        commands.spawn(SpriteBundle {
                            sprite: Sprite {
                                color,
                                custom_size: Some(Vec2::new(w, h)),
                                ..default()
                            },
                            transform: Transform::from_translation(centre.extend(z)),
                            ..default()
                        });
                    }
                    Shape::Circle {
                        centre,
                        radius,
                        color,
                    } => {
                        let centre = screen.to_world(centre);
                        commands.spawn(MaterialMesh2dBundle {
                            mesh: meshes.add(shape::Circle::new(radius).into()).into(),
                            material: materials.add(ColorMaterial::from(color)),
                            transform: Transform::from_translation(centre.extend(z)),
                            ..default()
                        });
                    }
                    Shape::Line {
                        from,
                        to,
                        width,
                        color,
                    } => {
                        let (transform, size) = line_transform(&screen, from, to, width, z);
                        commands.spawn(SpriteBundle {
                            sprite: Sprite {
                                color,
                                custom_size: Some(size),
                                ..default()
                            },
                            transform,
                            ..default()
                        });
                    }
                }
            }
        }
        SceneContent::Ship(ship) => spawn_ship(&mut commands, &asset_server, ship),
    }
}

fn spawn_ship(commands: &mut Commands, asset_server: &AssetServer, config: &ShipConfig) {
    let mut ship = commands.spawn((
        SpriteBundle {
            texture: asset_server.load(config.image.clone()),
            transform: Transform {
                // The z-scale of 2D objects must always be 1.0
                scale: Vec3::new(config.scale, config.scale, 1.0),
                ..default()
            },
            ..default()
        },
        Ship,
        PendingPlacement {
            source: config.image.clone(),
            centre_x: config.centre_x,
            bottom: config.bottom,
            scale: config.scale,
        },
    ));

    if let Some(speed) = config.speed {
        ship.insert(Speed(speed));
    }
    if config.clamp {
        ship.insert(ClampToScreen);
    }
}

pub fn log_scene(scene: Res<Scene>) {
    info!(
        "opening \"{}\" ({}x{}), fixed rate {:?}",
        scene.caption, scene.width, scene.height, scene.frame_rate
    );
}

// Once a ship's image is available, measure it and move it to its starting spot.
// An image that fails to load ends the game.
pub fn place_loaded_ships(
    mut commands: Commands,
    screen: Res<ScreenBounds>,
    images: Res<Assets<Image>>,
    asset_server: Res<AssetServer>,
    mut query: Query<(Entity, &mut Transform, &Handle<Image>, &PendingPlacement)>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    for (entity, mut transform, handle, placement) in &mut query {
        if asset_server.get_load_state(handle.id()) == Some(LoadState::Failed) {
            error!("could not load ship image {}", placement.source);
            commands.entity(entity).remove::<PendingPlacement>();
            app_exit_events.send(AppExit);
            continue;
        }

        let Some(image) = images.get(handle.id()) else {
            continue;
        };

        let image_size = Vec2::new(
            image.texture_descriptor.size.width as f32,
            image.texture_descriptor.size.height as f32,
        );
        let size = fitted_size(image_size, placement.scale);
        let centre = placed_centre(&screen, placement.centre_x, placement.bottom, size);
        transform.translation = centre.extend(transform.translation.z);

        debug!("placed {} at {:?}, size {:?}", placement.source, centre, size);
        commands
            .entity(entity)
            .remove::<PendingPlacement>()
            .insert(SpriteBounds(size));
    }
}

// Use keyboard input to move the ship by its fixed per-tick speed.
// Ships still waiting for their image stay where they are.
pub fn move_ship(
    keyboard_input: Res<Input<KeyCode>>,
    mut query: Query<(&mut Transform, &Speed), (With<Ship>, Without<PendingPlacement>)>,
) {
    let direction = movement_direction(&keyboard_input);
    if direction == 0.0 {
        return;
    }

    for (mut transform, speed) in &mut query {
        transform.translation.x += direction * **speed;
    }
}

// Keep clamped sprites inside the screen horizontally
pub fn clamp_ships(
    screen: Res<ScreenBounds>,
    mut query: Query<(&mut Transform, &SpriteBounds), With<ClampToScreen>>,
) {
    for (mut transform, bounds) in &mut query {
        let centre_x = screen.to_screen(transform.translation.truncate()).x;
        let clamped = clamp_centre_x(centre_x, bounds.x / 2.0, screen.width);
        transform.translation.x = clamped - screen.width / 2.0;
    }
}

/// -1 for left, +1 for right, 0 when neither or both are held.
pub fn movement_direction(keyboard_input: &Input<KeyCode>) -> f32 {
    let mut direction = 0.0;

    if keyboard_input.pressed(KeyCode::Left) {
        direction -= 1.0;
    }

    if keyboard_input.pressed(KeyCode::Right) {
        direction += 1.0;
    }

    direction
}

/// Clamp the centre of a sprite so its edges stay within `[0, screen_width]`.
///
/// The left edge is clamped first and the right edge second, so a sprite wider
/// than the screen ends up flush with the right edge.
pub fn clamp_centre_x(centre_x: f32, half_width: f32, screen_width: f32) -> f32 {
    let mut left = centre_x - half_width;
    if left < 0.0 {
        left = 0.0;
    }
    if left + half_width * 2.0 > screen_width {
        left = screen_width - half_width * 2.0;
    }
    left + half_width
}

/// Scaled sizes are truncated to whole pixels.
pub fn fitted_size(image_size: Vec2, scale: f32) -> Vec2 {
    (image_size * scale).floor()
}

/// World-space centre of a sprite of `size` whose bottom edge sits at `bottom`
/// and whose centre sits at `centre_x`, both given in screen pixels.
///
/// The left edge lands on a whole pixel, `centre_x - floor(width / 2)`, so a
/// sprite with an odd width sits half a pixel right of `centre_x`.
pub fn placed_centre(screen: &ScreenBounds, centre_x: f32, bottom: f32, size: Vec2) -> Vec2 {
    let left = centre_x - (size.x / 2.0).floor();
    screen.to_world(Vec2::new(left + size.x / 2.0, bottom - size.y / 2.0))
}

pub fn rect_centre(screen: &ScreenBounds, x: f32, y: f32, w: f32, h: f32) -> Vec2 {
    screen.to_world(Vec2::new(x + w / 2.0, y + h / 2.0))
}

/// A line is drawn as a thin quad stretched between its end points.
pub fn line_transform(
    screen: &ScreenBounds,
    from: Vec2,
    to: Vec2,
    width: f32,
    z: f32,
) -> (Transform, Vec2) {
    let from = screen.to_world(from);
    let to = screen.to_world(to);
    let delta = to - from;
    let midpoint = (from + to) / 2.0;

    let transform = Transform::from_translation(midpoint.extend(z))
        .with_rotation(Quat::from_rotation_z(delta.y.atan2(delta.x)));
    (transform, Vec2::new(delta.length(), width))
}
