//! Host document abstraction.
//!
//! The player never talks to a concrete page. Everything it needs from the
//! host (element lookup and creation, attributes, listeners, the media
//! element and fullscreen) goes through the traits in this module:
//!
//! - `document`: `HostDocument`, `NodeId` and `EventType`
//! - `media`: `MediaElement` plus `SimulatedMedia`, a clock-driven media element
//! - `memory`: `MemoryDocument`, an in-memory host used for headless
//!   embedding and tests

mod document;
mod error;
mod media;
mod memory;

pub use document::{EventType, HostDocument, NodeId};
pub use error::HostError;
pub use media::{MediaElement, SimulatedMedia};
pub use memory::MemoryDocument;
