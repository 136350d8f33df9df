//! All of the constants used by the scenes

use bevy::prelude::*;

// Window
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FRAME_RATE: f64 = 60.0;
pub const MAX_FRAME_RATE: f64 = 1000.0;

// Ship
pub const SHIP_SPEED: f32 = 5.0; // pixels per fixed tick
pub const SHIP_SCALE: f32 = 3.0;
pub const SHIP_BOTTOM_MARGIN: f32 = 20.0;
pub const ALIEN_INVASION_SHIP: &str = "A-20g.png";
pub const LESSON_SHIP: &str = "B-17g.png";
pub const LESSON_SHIP_CENTRE_X: f32 = 400.0;
pub const LESSON_SHIP_BOTTOM: f32 = 580.0;
pub const LESSON_SHIP_SCALE: f32 = 2.0;

// Colours
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const PINK: Color = Color::rgb(1.0, 128.0 / 255.0, 1.0);
pub const YELLOW: Color = Color::rgb(200.0 / 255.0, 155.0 / 255.0, 60.0 / 255.0);
pub const SKY_BLUE: Color = Color::rgb(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

// Captions
pub const ALIEN_INVASION_CAPTION: &str = "My First Game";
