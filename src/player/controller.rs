//! The playback controller.
//!
//! Holds no playback state of its own: every operation reads the media
//! element live through the host document and writes the result back into
//! the control surface.

use tracing::{debug, error, trace, warn};

use crate::config::{PlayerConfig, PlayerOptions};
use crate::error::PlayerError;
use crate::host::{EventType, HostDocument, NodeId};
use crate::player::events::{self, Binding, ControlAction};
use crate::player::icons::{render_icon, Icon};
use crate::player::surface::{ControlSurface, SETTINGS_VISIBLE_CLASS};
use crate::player::time::{format_time, whole_seconds};
use crate::style;

/// Custom playback controls bound to one media element.
///
/// A controller whose mount was not found is inert: it owns no surface and
/// every operation is a no-op.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    config: PlayerConfig,
    surface: Option<ControlSurface>,
    bindings: Vec<Binding>,
}

impl PlaybackController {
    /// Mount the player into the element with id `config.mount_id()`.
    ///
    /// Builds the control markup, registers listeners and injects the
    /// stylesheets. If the mount element does not exist the error is logged
    /// and an inert controller is returned; the document is left untouched.
    pub fn mount<D: HostDocument + ?Sized>(doc: &mut D, config: PlayerConfig) -> Self {
        let Some(mount) = doc.element_by_id(config.mount_id()) else {
            error!(mount_id = config.mount_id(), "Parent element not found!");
            return Self {
                config,
                surface: None,
                bindings: Vec::new(),
            };
        };
        Self::attach(doc, mount, config)
    }

    /// Like `mount`, but reports a missing mount element as an error.
    pub fn try_mount<D: HostDocument + ?Sized>(
        doc: &mut D,
        config: PlayerConfig,
    ) -> Result<Self, PlayerError> {
        let mount = doc
            .element_by_id(config.mount_id())
            .ok_or_else(|| PlayerError::MountNotFound {
                id: config.mount_id().to_string(),
            })?;
        Ok(Self::attach(doc, mount, config))
    }

    /// Resolve `options` and mount.
    pub fn from_options<D: HostDocument + ?Sized>(
        doc: &mut D,
        options: PlayerOptions,
    ) -> Result<Self, PlayerError> {
        let config = options.resolve()?;
        Self::try_mount(doc, config)
    }

    fn attach<D: HostDocument + ?Sized>(doc: &mut D, mount: NodeId, config: PlayerConfig) -> Self {
        let surface = ControlSurface::build(doc, mount, &config);
        let bindings = events::bind(doc, &surface);
        let injection = style::inject_styles(doc, &config);
        debug!(
            mount_id = config.mount_id(),
            src = config.src(),
            listeners = bindings.len(),
            ?injection,
            "Player mounted"
        );
        Self {
            config,
            surface: Some(surface),
            bindings,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// The control surface, or `None` for an inert controller.
    pub fn surface(&self) -> Option<&ControlSurface> {
        self.surface.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The action bound to `event` on `target`, if any.
    pub fn action_for(&self, target: NodeId, event: EventType) -> Option<ControlAction> {
        events::lookup(&self.bindings, target, event)
    }

    /// Route a host event to the bound action.
    ///
    /// Returns the action that ran, or `None` if nothing listens for
    /// `event` on `target`.
    pub fn handle_event<D: HostDocument + ?Sized>(
        &self,
        doc: &mut D,
        target: NodeId,
        event: EventType,
    ) -> Option<ControlAction> {
        let action = self.action_for(target, event)?;
        self.perform(doc, action);
        Some(action)
    }

    /// Run a control action directly.
    pub fn perform<D: HostDocument + ?Sized>(&self, doc: &mut D, action: ControlAction) {
        if !matches!(action, ControlAction::TimeUpdate) {
            debug!(?action, mount_id = self.config.mount_id(), "Control action");
        }
        match action {
            ControlAction::MetadataLoaded => self.on_metadata_loaded(doc),
            ControlAction::TimeUpdate => self.on_time_update(doc),
            ControlAction::Seek => self.on_seek_input(doc),
            ControlAction::TogglePlay => self.toggle_play(doc),
            ControlAction::SkipForward => self.skip_forward(doc),
            ControlAction::SkipBackward => self.skip_backward(doc),
            ControlAction::ToggleMute => self.toggle_mute(doc),
            ControlAction::UpdateVolume => self.update_volume(doc),
            ControlAction::ToggleFullscreen => self.toggle_fullscreen(doc),
            ControlAction::ToggleSettings => self.toggle_settings_menu(doc),
            ControlAction::ChangeSpeed(rate) => self.change_speed(doc, rate),
        }
    }

    /// Size the seek bar to the media duration and enable it.
    ///
    /// An unknown or infinite duration (live streams) leaves the seek bar
    /// disabled.
    pub fn on_metadata_loaded<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Some(duration) = doc.media(surface.video).map(|m| m.duration()) else {
            return;
        };
        if !duration.is_finite() {
            debug!(duration, "Media has no finite duration, seek bar stays disabled");
            return;
        }

        let total = duration.max(0.0).floor();
        doc.set_attribute(surface.seek_bar, "max", &whole_seconds(total));
        doc.set_text_content(surface.duration, &format_time(total));
        doc.remove_attribute(surface.seek_bar, "disabled");
    }

    /// Mirror the media position into the time label and seek bar.
    pub fn on_time_update<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Some(current) = doc.media(surface.video).map(|m| m.current_time()) else {
            return;
        };

        let seconds = current.floor();
        trace!(seconds, "Time update");
        doc.set_text_content(surface.current_time, &format_time(seconds));
        doc.set_attribute(surface.seek_bar, "value", &whole_seconds(seconds));
    }

    /// Seek the media to the seek bar's value.
    ///
    /// The time label is updated immediately instead of waiting for the
    /// next time update. Ignored while the seek bar is disabled (before
    /// metadata has loaded).
    pub fn on_seek_input<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        let Some(surface) = &self.surface else {
            return;
        };
        if doc.has_attribute(surface.seek_bar, "disabled") {
            return;
        }
        let Some(seconds) = doc
            .attribute(surface.seek_bar, "value")
            .and_then(|value| parse_seek_value(&value))
        else {
            return;
        };
        let Some(media) = doc.media_mut(surface.video) else {
            return;
        };

        media.set_current_time(seconds);
        doc.set_text_content(surface.current_time, &format_time(seconds));
    }

    /// Play if paused, pause if playing, and swap the button icon.
    ///
    /// Does nothing while any element is fullscreen: clicks then belong to
    /// the native fullscreen controls.
    pub fn toggle_play<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        let Some(surface) = &self.surface else {
            return;
        };
        if doc.fullscreen_element().is_some() {
            return;
        }
        let Some(media) = doc.media_mut(surface.video) else {
            return;
        };

        let icon = if media.paused() {
            media.play();
            Icon::Pause
        } else {
            media.pause();
            Icon::Play
        };
        render_icon(doc, surface.play_btn, icon);
    }

    /// Move the position by `seconds` (negative skips back), clamped to
    /// `[0, duration]`.
    pub fn skip<D: HostDocument + ?Sized>(&self, doc: &mut D, seconds: f64) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Some(media) = doc.media_mut(surface.video) else {
            return;
        };

        let target = clamp_position(media.current_time() + seconds, media.duration());
        media.set_current_time(target);
    }

    pub fn skip_forward<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        self.skip(doc, self.config.skip_amount());
    }

    pub fn skip_backward<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        self.skip(doc, -self.config.skip_amount());
    }

    /// Flip the muted flag.
    ///
    /// Muting drops the volume slider to 0; unmuting puts it back at the
    /// media's volume, which is kept while muted.
    pub fn toggle_mute<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Some(media) = doc.media_mut(surface.video) else {
            return;
        };

        let was_muted = media.muted();
        let volume = media.volume();
        media.set_muted(!was_muted);

        let (slider, icon) = if was_muted {
            (volume.to_string(), Icon::VolumeUp)
        } else {
            ("0".to_string(), Icon::VolumeMute)
        };
        doc.set_attribute(surface.volume, "value", &slider);
        render_icon(doc, surface.mute_btn, icon);
    }

    /// Apply the volume slider's value to the media.
    pub fn update_volume<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Some(volume) = doc
            .attribute(surface.volume, "value")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
        else {
            return;
        };
        if let Some(media) = doc.media_mut(surface.video) {
            media.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    /// Request fullscreen on the media element, or leave fullscreen if
    /// anything is fullscreen already.
    pub fn toggle_fullscreen<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        if doc.fullscreen_element().is_some() {
            if let Err(err) = doc.exit_fullscreen() {
                warn!(%err, "Failed to exit fullscreen");
            }
            return;
        }

        let Some(surface) = &self.surface else {
            return;
        };
        if let Err(err) = doc.request_fullscreen(surface.video) {
            warn!(%err, mount_id = self.config.mount_id(), "Fullscreen request rejected");
        }
    }

    /// Set the media playback rate.
    pub fn change_speed<D: HostDocument + ?Sized>(&self, doc: &mut D, rate: f64) {
        let Some(surface) = &self.surface else {
            return;
        };
        if !rate.is_finite() || rate <= 0.0 {
            return;
        }
        if let Some(media) = doc.media_mut(surface.video) {
            media.set_playback_rate(rate);
        }
    }

    /// Show or hide the speed menu.
    pub fn toggle_settings_menu<D: HostDocument + ?Sized>(&self, doc: &mut D) {
        if let Some(surface) = &self.surface {
            doc.toggle_class(surface.settings_menu, SETTINGS_VISIBLE_CLASS);
        }
    }
}

/// Integer part of a range input value (`parseInt` semantics for plain
/// numbers). Empty or non-numeric values yield `None`.
fn parse_seek_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(f64::trunc)
}

/// Clamp a target position to `[0, duration]`. Without a known duration only
/// the lower bound applies.
fn clamp_position(target: f64, duration: f64) -> f64 {
    let target = target.max(0.0);
    if duration.is_finite() {
        target.min(duration.max(0.0))
    } else {
        target
    }
}
