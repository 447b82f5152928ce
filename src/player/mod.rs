//! Playback controls
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `controller`: `PlaybackController`, mounting and every control operation
//! - `surface`: builds the control markup and keeps handles to its elements
//! - `events`: listener registration and the (element, event) -> action table
//! - `icons`: button icons
//! - `time`: `MM:SS` formatting for the time labels
//!
//! The controller never caches playback state. Position, duration, volume,
//! mute and rate are read from the media element whenever an event arrives.

mod controller;
mod events;
mod icons;
mod surface;
mod time;

pub use controller::PlaybackController;
pub use events::ControlAction;
pub use icons::Icon;
pub use surface::{ControlSurface, SpeedOption, SETTINGS_VISIBLE_CLASS, SPEED_OPTIONS};
pub use time::format_time;
