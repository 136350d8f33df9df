//! Game settings
//!
//! Settings are layered with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `settings.toml` in the working directory (optional)
//! 3. Environment variables (`ALIEN_SHIP_SPEED=7` -> `ship_speed = 7`)

use std::path::Path;

use bevy::prelude::*;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

pub const SETTINGS_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "ALIEN_";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Load(#[from] figment::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning values for the alien invasion game.
///
/// Only the screen and ship fields drive the game; the bullet, alien and
/// fleet values are carried for completeness and logged at startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub caption: String,
    pub bg_color: [u8; 3],
    pub frame_rate: f64,

    // Ship
    pub ship_image: String,
    pub ship_scale: f32,
    pub ship_speed: f32,
    pub ship_bottom_margin: f32,
    pub ship_limit: u32,

    // Bullets
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: [u8; 3],
    pub bullets_allowed: u32,

    // Aliens
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    pub fleet_direction: i8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            caption: ALIEN_INVASION_CAPTION.to_string(),
            bg_color: [0, 0, 0],
            frame_rate: FRAME_RATE,
            ship_image: ALIEN_INVASION_SHIP.to_string(),
            ship_scale: SHIP_SCALE,
            ship_speed: SHIP_SPEED,
            ship_bottom_margin: SHIP_BOTTOM_MARGIN,
            ship_limit: 3,
            bullet_speed: 5.0,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: [231, 84, 128],
            bullets_allowed: 300,
            alien_speed: 1.0,
            fleet_drop_speed: 10.0,
            fleet_direction: 1,
        }
    }
}

impl Settings {
    /// Load settings from the working directory and environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load settings using a specific settings file. A missing file is not an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let settings: Settings = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("screen_width", self.screen_width.into())?;
        positive("screen_height", self.screen_height.into())?;
        positive("frame_rate", self.frame_rate)?;
        positive("ship_scale", self.ship_scale.into())?;
        not_negative("ship_speed", self.ship_speed.into())?;
        not_negative("ship_bottom_margin", self.ship_bottom_margin.into())?;

        // Anything faster rounds the fixed timestep down to zero
        if self.frame_rate > MAX_FRAME_RATE {
            return Err(SettingsError::Invalid {
                field: "frame_rate",
                reason: "must not exceed 1000 ticks per second",
            });
        }
        Ok(())
    }

    pub fn background(&self) -> Color {
        let [r, g, b] = self.bg_color;
        Color::rgb_u8(r, g, b)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be a positive finite number",
        });
    }
    Ok(())
}

fn not_negative(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be a finite number, zero or more",
        });
    }
    Ok(())
}

pub fn log_settings(settings: Res<Settings>) {
    info!("settings: {:?}", *settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_match_the_game() {
        let settings = Settings::default();
        assert_eq!(settings.screen_width, 800.0);
        assert_eq!(settings.screen_height, 600.0);
        assert_eq!(settings.ship_speed, 5.0);
        assert_eq!(settings.ship_scale, 3.0);
        assert_eq!(settings.bullets_allowed, 300);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let settings = Settings::load().map_err(|e| e.to_string())?;
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                SETTINGS_FILE,
                r#"
                screen_width = 1200
                screen_height = 800
                bg_color = [245, 245, 220]
                ship_speed = 4
                "#,
            )?;
            jail.set_env("ALIEN_SHIP_SPEED", "7");

            let settings = Settings::load().map_err(|e| e.to_string())?;
            assert_eq!(settings.screen_width, 1200.0);
            assert_eq!(settings.screen_height, 800.0);
            assert_eq!(settings.bg_color, [245, 245, 220]);
            assert_eq!(settings.ship_speed, 7.0);
            assert_eq!(settings.caption, ALIEN_INVASION_CAPTION);
            Ok(())
        });
    }

    #[test]
    fn invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(SETTINGS_FILE, "screen_width = 0")?;
            let err = Settings::load().expect_err("zero width should fail");
            assert!(matches!(
                err,
                SettingsError::Invalid {
                    field: "screen_width",
                    ..
                }
            ));
            Ok(())
        });
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        Jail::expect_with(|jail| {
            jail.create_file(SETTINGS_FILE, "ship_speed = \"fast\"")?;
            let err = Settings::load().expect_err("string speed should fail");
            assert!(matches!(err, SettingsError::Load(_)));
            Ok(())
        });
    }

    #[test]
    fn infinite_frame_rate_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(SETTINGS_FILE, "frame_rate = inf")?;
            let err = Settings::load().expect_err("infinite rate should fail");
            assert!(matches!(
                err,
                SettingsError::Invalid {
                    field: "frame_rate",
                    ..
                }
            ));
            Ok(())
        });
    }

    #[test]
    fn nan_screen_width_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(SETTINGS_FILE, "screen_width = nan")?;
            let err = Settings::load().expect_err("nan width should fail");
            assert!(matches!(
                err,
                SettingsError::Invalid {
                    field: "screen_width",
                    ..
                }
            ));
            Ok(())
        });
    }

    #[test]
    fn non_finite_values_fail_validation() {
        let cases = [
            Settings {
                frame_rate: f64::NAN,
                ..Settings::default()
            },
            Settings {
                frame_rate: 1.0e12,
                ..Settings::default()
            },
            Settings {
                screen_height: f32::INFINITY,
                ..Settings::default()
            },
            Settings {
                ship_scale: f32::NAN,
                ..Settings::default()
            },
            Settings {
                ship_speed: f32::INFINITY,
                ..Settings::default()
            },
        ];
        for settings in cases {
            assert!(settings.validate().is_err(), "{settings:?}");
        }
    }

    #[test]
    fn negative_speed_is_rejected() {
        let settings = Settings {
            ship_speed: -1.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
