//! Control surface construction.
//!
//! Builds the player markup inside the mount element and keeps handles to
//! every element the controller touches afterwards. Inner elements are
//! identified by class rather than document-level id so that several players
//! can share one document.

use crate::config::PlayerConfig;
use crate::host::{HostDocument, NodeId};
use crate::player::icons::{render_icon, Icon};

/// Playback rates offered by the settings menu.
pub const SPEED_OPTIONS: [f64; 3] = [1.0, 2.0, 3.0];

/// Class toggled on the settings menu to show it.
pub const SETTINGS_VISIBLE_CLASS: &str = "show-settings";

/// One entry of the speed menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedOption {
    /// The `<p>` element
    pub node: NodeId,
    /// Playback rate applied on click
    pub rate: f64,
}

/// Handles to the elements making up one player.
///
/// Created once at mount time and never rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSurface {
    pub(crate) container: NodeId,
    pub(crate) video: NodeId,
    pub(crate) current_time: NodeId,
    pub(crate) seek_bar: NodeId,
    pub(crate) duration: NodeId,
    pub(crate) backward_btn: NodeId,
    pub(crate) play_btn: NodeId,
    pub(crate) forward_btn: NodeId,
    pub(crate) mute_btn: NodeId,
    pub(crate) volume: NodeId,
    pub(crate) settings_menu: NodeId,
    pub(crate) speed_options: Vec<SpeedOption>,
    pub(crate) settings_btn: NodeId,
    pub(crate) fullscreen_btn: NodeId,
}

impl ControlSurface {
    /// Replace the contents of `mount` with the player markup.
    ///
    /// # Arguments
    /// * `doc` - Host document owning `mount`
    /// * `mount` - Element the player is built into
    /// * `config` - Supplies the media source
    pub(crate) fn build<D: HostDocument + ?Sized>(
        doc: &mut D,
        mount: NodeId,
        config: &PlayerConfig,
    ) -> Self {
        doc.clear_children(mount);

        let container = element(doc, mount, "div", &[("class", "video-container")]);
        let video = element(
            doc,
            container,
            "video",
            &[
                ("src", config.src()),
                ("class", "object-fit-contain"),
                ("preload", "auto"),
            ],
        );
        let controls = element(doc, container, "div", &[("class", "controls-container")]);

        // Seek row
        let playback = element(doc, controls, "div", &[("class", "playback-cont")]);
        let current_time = time_label(doc, playback, "time-span current-time");
        let seek_bar = element(
            doc,
            playback,
            "input",
            &[
                ("class", "playback"),
                ("type", "range"),
                ("min", "0"),
                ("step", "1"),
                ("value", "0"),
                ("disabled", ""),
            ],
        );
        let duration = time_label(doc, playback, "time-span duration");

        // Button row
        let buttons = element(doc, controls, "div", &[("class", "controls-btns")]);
        let left = element(doc, buttons, "div", &[("class", "l-btns")]);
        let backward_btn = button(
            doc,
            left,
            &[("class", "backward-btn"), ("value", "backward")],
            Icon::Rewind,
        );
        let play_btn = button(
            doc,
            left,
            &[("class", "play-btn"), ("value", "play")],
            Icon::Play,
        );
        let forward_btn = button(
            doc,
            left,
            &[("class", "forward-btn"), ("value", "forward")],
            Icon::FastForward,
        );
        let volume_controls = element(doc, left, "div", &[("class", "volume-controls")]);
        let mute_btn = button(
            doc,
            volume_controls,
            &[("class", "mute-btn"), ("title", "Mute/Unmute")],
            Icon::VolumeUp,
        );
        let volume = element(
            doc,
            volume_controls,
            "input",
            &[
                ("class", "volume"),
                ("type", "range"),
                ("value", "1"),
                ("step", "0.01"),
                ("min", "0"),
                ("max", "1"),
            ],
        );

        let right = element(doc, buttons, "div", &[("class", "r-btns")]);
        let settings_menu = element(doc, right, "div", &[("class", "settings-options")]);
        let mut speed_options = Vec::with_capacity(SPEED_OPTIONS.len());
        for rate in SPEED_OPTIONS {
            let speed = rate.to_string();
            let node = element(doc, settings_menu, "p", &[("data-speed", speed.as_str())]);
            doc.set_text_content(node, &format!("{}x speed", speed));
            speed_options.push(SpeedOption {
                node,
                rate: parse_speed(doc.attribute(node, "data-speed").as_deref()),
            });
        }
        let settings_btn = button(
            doc,
            right,
            &[("class", "setting-btn fullscreen-btn"), ("title", "settings")],
            Icon::Gear,
        );
        let fullscreen_btn = button(
            doc,
            right,
            &[("class", "fullscreen-btn"), ("title", "Fullscreen")],
            Icon::Fullscreen,
        );

        Self {
            container,
            video,
            current_time,
            seek_bar,
            duration,
            backward_btn,
            play_btn,
            forward_btn,
            mute_btn,
            volume,
            settings_menu,
            speed_options,
            settings_btn,
            fullscreen_btn,
        }
    }

    /// The `.video-container` wrapping everything.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The media element.
    pub fn video(&self) -> NodeId {
        self.video
    }

    pub fn current_time_label(&self) -> NodeId {
        self.current_time
    }

    pub fn seek_bar(&self) -> NodeId {
        self.seek_bar
    }

    pub fn duration_label(&self) -> NodeId {
        self.duration
    }

    pub fn backward_button(&self) -> NodeId {
        self.backward_btn
    }

    pub fn play_button(&self) -> NodeId {
        self.play_btn
    }

    pub fn forward_button(&self) -> NodeId {
        self.forward_btn
    }

    pub fn mute_button(&self) -> NodeId {
        self.mute_btn
    }

    pub fn volume_slider(&self) -> NodeId {
        self.volume
    }

    pub fn settings_menu(&self) -> NodeId {
        self.settings_menu
    }

    pub fn speed_options(&self) -> &[SpeedOption] {
        &self.speed_options
    }

    pub fn settings_button(&self) -> NodeId {
        self.settings_btn
    }

    pub fn fullscreen_button(&self) -> NodeId {
        self.fullscreen_btn
    }
}

/// Parse a `data-speed` value. Missing or unusable values mean normal speed.
pub(crate) fn parse_speed(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .unwrap_or(1.0)
}

fn element<D: HostDocument + ?Sized>(
    doc: &mut D,
    parent: NodeId,
    tag: &str,
    attributes: &[(&str, &str)],
) -> NodeId {
    let node = doc.create_element(tag);
    for (name, value) in attributes {
        doc.set_attribute(node, name, value);
    }
    doc.append_child(parent, node);
    node
}

fn time_label<D: HostDocument + ?Sized>(doc: &mut D, parent: NodeId, class: &str) -> NodeId {
    let label = element(doc, parent, "span", &[("class", class)]);
    doc.set_text_content(label, "00:00");
    label
}

fn button<D: HostDocument + ?Sized>(
    doc: &mut D,
    parent: NodeId,
    attributes: &[(&str, &str)],
    icon: Icon,
) -> NodeId {
    let node = element(doc, parent, "button", attributes);
    render_icon(doc, node, icon);
    node
}
