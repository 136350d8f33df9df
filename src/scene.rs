//! Scene descriptions for each entry point
//!
//! A scene is plain data: window, background, frame cap and what to draw.
//! All positions are in screen pixels with the origin at the top-left.

use bevy::prelude::*;

use crate::constants::*;
use crate::settings::Settings;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Scene {
    pub caption: String,
    pub width: f32,
    pub height: f32,
    pub background: Color,
    /// Fixed ticks per second. `None` leaves Bevy's default fixed timestep.
    pub frame_rate: Option<f64>,
    pub content: SceneContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneContent {
    Empty,
    Shapes(Vec<Shape>),
    Ship(ShipConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle, `x`/`y` being its top-left corner.
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        centre: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipConfig {
    pub image: String,
    pub scale: f32,
    pub centre_x: f32,
    pub bottom: f32,
    /// Pixels per tick. `None` keeps the ship still.
    pub speed: Option<f32>,
    pub clamp: bool,
}

impl Scene {
    fn lesson(caption: &str, background: Color, content: SceneContent) -> Self {
        Scene {
            caption: caption.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            background,
            frame_rate: Some(FRAME_RATE),
            content,
        }
    }

    fn lesson_ship(scale: f32, speed: Option<f32>, clamp: bool) -> SceneContent {
        SceneContent::Ship(ShipConfig {
            image: LESSON_SHIP.to_string(),
            scale,
            centre_x: LESSON_SHIP_CENTRE_X,
            bottom: LESSON_SHIP_BOTTOM,
            speed,
            clamp,
        })
    }

    /// The alien invasion game: a scaled ship that slides along the bottom of the screen.
    pub fn alien_invasion(settings: &Settings) -> Self {
        Scene {
            caption: settings.caption.clone(),
            width: settings.screen_width,
            height: settings.screen_height,
            background: settings.background(),
            frame_rate: Some(settings.frame_rate),
            content: SceneContent::Ship(ShipConfig {
                image: settings.ship_image.clone(),
                scale: settings.ship_scale,
                centre_x: (settings.screen_width / 2.0).floor(),
                bottom: settings.screen_height - settings.ship_bottom_margin,
                speed: Some(settings.ship_speed),
                clamp: true,
            }),
        }
    }

    pub fn background_color() -> Self {
        Scene {
            frame_rate: None,
            ..Self::lesson("Lesson 2: Background Color", PINK, SceneContent::Empty)
        }
    }

    pub fn capped_frame_rate() -> Self {
        Self::lesson("Lesson 3: Frame Rate", YELLOW, SceneContent::Empty)
    }

    pub fn drawing_shapes() -> Self {
        Self::lesson(
            "Lesson 4: Drawing Shapes",
            BLACK,
            SceneContent::Shapes(vec![
                Shape::Rect {
                    x: 100.0,
                    y: 100.0,
                    w: 200.0,
                    h: 150.0,
                    color: RED,
                },
                Shape::Circle {
                    centre: Vec2::new(400.0, 300.0),
                    radius: 60.0,
                    color: GREEN,
                },
                Shape::Line {
                    from: Vec2::ZERO,
                    to: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    width: 5.0,
                    color: BLUE,
                },
            ]),
        )
    }

    pub fn loading_image() -> Self {
        Self::lesson(
            "Lesson 5: Loading Image",
            SKY_BLUE,
            Self::lesson_ship(1.0, None, false),
        )
    }

    pub fn movement() -> Self {
        Self::lesson(
            "Lesson 6: Movement",
            SKY_BLUE,
            Self::lesson_ship(1.0, Some(SHIP_SPEED), false),
        )
    }

    pub fn scaling() -> Self {
        Self::lesson(
            "Lesson 8: Scaling",
            SKY_BLUE,
            Self::lesson_ship(LESSON_SHIP_SCALE, Some(SHIP_SPEED), true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alien_invasion_ship_sits_near_the_bottom() {
        let scene = Scene::alien_invasion(&Settings::default());
        assert_eq!(scene.caption, "My First Game");
        assert_eq!(scene.frame_rate, Some(60.0));
        let SceneContent::Ship(ship) = scene.content else {
            panic!("alien invasion should have a ship");
        };
        assert_eq!(ship.centre_x, 400.0);
        assert_eq!(ship.bottom, 580.0);
        assert_eq!(ship.scale, 3.0);
        assert_eq!(ship.speed, Some(5.0));
        assert!(ship.clamp);
    }

    #[test]
    fn only_lesson_two_runs_uncapped() {
        assert_eq!(Scene::background_color().frame_rate, None);
        for scene in [
            Scene::capped_frame_rate(),
            Scene::drawing_shapes(),
            Scene::loading_image(),
            Scene::movement(),
            Scene::scaling(),
        ] {
            assert_eq!(scene.frame_rate, Some(60.0), "{}", scene.caption);
        }
    }

    #[test]
    fn lessons_differ_in_movement_and_clamping() {
        let ship = |scene: Scene| match scene.content {
            SceneContent::Ship(ship) => ship,
            other => panic!("expected a ship, got {other:?}"),
        };
        let still = ship(Scene::loading_image());
        assert_eq!(still.speed, None);

        let moving = ship(Scene::movement());
        assert_eq!(moving.speed, Some(5.0));
        assert!(!moving.clamp);

        let scaled = ship(Scene::scaling());
        assert_eq!(scaled.scale, 2.0);
        assert!(scaled.clamp);
    }

    #[test]
    fn shapes_lesson_draws_three_primitives() {
        let SceneContent::Shapes(shapes) = Scene::drawing_shapes().content else {
            panic!("lesson 4 should draw shapes");
        };
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Rect { w, h, .. } if w == 200.0 && h == 150.0));
        assert!(matches!(shapes[1], Shape::Circle { radius, .. } if radius == 60.0));
        assert!(matches!(shapes[2], Shape::Line { width, .. } if width == 5.0));
    }
}
