//! vidctl - custom playback controls for native media elements
//!
//! Mounts a control surface (play/pause, seek, skip, volume/mute, speed,
//! fullscreen) around a media element inside a host document and keeps the
//! displayed state in sync with the element.
//!
//! # Usage
//!
//! ```
//! use vidctl::host::{EventType, HostDocument, MemoryDocument};
//! use vidctl::{PlaybackController, PlayerOptions};
//!
//! let mut doc = MemoryDocument::new();
//! doc.create_mount("player");
//!
//! let config = PlayerOptions::new("player", "movie.mp4").resolve().unwrap();
//! let controller = PlaybackController::mount(&mut doc, config);
//!
//! let video = controller.surface().unwrap().video();
//! doc.simulated_media_mut(video).unwrap().load_metadata(90.0);
//! controller.handle_event(&mut doc, video, EventType::LoadedMetadata);
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod player;
pub mod style;

pub use config::{PlayerConfig, PlayerOptions};
pub use error::{ConfigError, PlayerError};
pub use player::{format_time, ControlAction, ControlSurface, Icon, PlaybackController};
