//! Alien invasion and the tutorial scenes leading up to it.
//!
//! Every binary describes a [`Scene`] and hands it to [`run`], which installs
//! the shared fixed-rate loop: poll input, move, clamp, redraw.

pub mod components;
pub mod constants;
pub mod plugin;
pub mod scene;
pub mod settings;
pub mod systems;

pub use plugin::{app, run, ScenePlugin};
pub use scene::{Scene, SceneContent, Shape, ShipConfig};
pub use settings::{Settings, SettingsError};
