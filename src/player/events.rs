//! Event bindings for the control surface.
//!
//! Listeners are registered once at mount time. The resulting table maps an
//! (element, event) pair to the control action it triggers; the host routes
//! events back through `PlaybackController::handle_event`.

use crate::host::{EventType, HostDocument, NodeId};
use crate::player::surface::ControlSurface;

/// An operation of the controller, as triggered by an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Media metadata (duration) loaded
    MetadataLoaded,
    /// Media position changed during playback
    TimeUpdate,
    /// Seek bar dragged
    Seek,
    /// Play or pause
    TogglePlay,
    /// Skip forward by the configured step
    SkipForward,
    /// Skip backward by the configured step
    SkipBackward,
    /// Mute or unmute
    ToggleMute,
    /// Volume slider moved
    UpdateVolume,
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Show or hide the speed menu
    ToggleSettings,
    /// Set the playback rate
    ChangeSpeed(f64),
}

/// One registered listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Binding {
    pub node: NodeId,
    pub event: EventType,
    pub action: ControlAction,
}

/// Register every listener of `surface` with the host.
///
/// The media element listens for both click (play/pause) and double click
/// (fullscreen), like a native player.
pub(crate) fn bind<D: HostDocument + ?Sized>(doc: &mut D, surface: &ControlSurface) -> Vec<Binding> {
    let mut table = vec![
        (surface.video, EventType::LoadedMetadata, ControlAction::MetadataLoaded),
        (surface.video, EventType::TimeUpdate, ControlAction::TimeUpdate),
        (surface.seek_bar, EventType::Input, ControlAction::Seek),
        (surface.video, EventType::DoubleClick, ControlAction::ToggleFullscreen),
        (surface.video, EventType::Click, ControlAction::TogglePlay),
        (surface.play_btn, EventType::Click, ControlAction::TogglePlay),
        (surface.volume, EventType::Input, ControlAction::UpdateVolume),
        (surface.mute_btn, EventType::Click, ControlAction::ToggleMute),
        (surface.fullscreen_btn, EventType::Click, ControlAction::ToggleFullscreen),
        (surface.forward_btn, EventType::Click, ControlAction::SkipForward),
        (surface.backward_btn, EventType::Click, ControlAction::SkipBackward),
        (surface.settings_btn, EventType::Click, ControlAction::ToggleSettings),
    ];
    table.extend(surface.speed_options.iter().map(|option| {
        (option.node, EventType::Click, ControlAction::ChangeSpeed(option.rate))
    }));

    table
        .into_iter()
        .map(|(node, event, action)| {
            doc.add_event_listener(node, event);
            Binding {
                node,
                event,
                action,
            }
        })
        .collect()
}

/// Find the action bound to `event` on `node`.
pub(crate) fn lookup(bindings: &[Binding], node: NodeId, event: EventType) -> Option<ControlAction> {
    bindings
        .iter()
        .find(|b| b.node == node && b.event == event)
        .map(|b| b.action)
}
