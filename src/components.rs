//! The components and resources shared by every scene

use bevy::prelude::*;

/// The player's ship.
#[derive(Component)]
pub struct Ship;

/// Horizontal distance moved per fixed tick while a direction key is held.
#[derive(Component, Deref, DerefMut, Debug, Clone, Copy, PartialEq)]
pub struct Speed(pub f32);

/// Entities carrying this marker are kept inside the screen horizontally.
#[derive(Component)]
pub struct ClampToScreen;

/// On-screen size of a sprite in pixels, measured after scaling.
#[derive(Component, Deref, DerefMut, Debug, Clone, Copy, PartialEq)]
pub struct SpriteBounds(pub Vec2);

/// Where a ship should sit once its image has finished loading.
///
/// `centre_x` and `bottom` are screen coordinates (origin top-left, y down).
/// The component is removed once the ship has been placed.
#[derive(Component, Debug, Clone)]
pub struct PendingPlacement {
    pub source: String,
    pub centre_x: f32,
    pub bottom: f32,
    pub scale: f32,
}

/// Size of the display surface in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        // Make sure we haven't messed up our constants
        assert!(width > 0.0 && height > 0.0);
        ScreenBounds { width, height }
    }

    /// Convert a point from screen pixels (origin top-left, y down)
    /// to world space (origin at the centre of the window, y up).
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Convert a point from world space back to screen pixels.
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}
