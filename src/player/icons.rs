//! Control icons (bootstrap-icons font classes).

use crate::host::{HostDocument, NodeId};

/// An icon shown inside a control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Play,
    Pause,
    Rewind,
    FastForward,
    VolumeUp,
    VolumeMute,
    Gear,
    Fullscreen,
}

impl Icon {
    const ALL: [Icon; 8] = [
        Icon::Play,
        Icon::Pause,
        Icon::Rewind,
        Icon::FastForward,
        Icon::VolumeUp,
        Icon::VolumeMute,
        Icon::Gear,
        Icon::Fullscreen,
    ];

    /// Class attribute of the `<i>` element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Play => "bi bi-play-fill",
            Self::Pause => "bi bi-pause-fill",
            Self::Rewind => "bi bi-rewind-fill",
            Self::FastForward => "bi bi-fast-forward-fill",
            Self::VolumeUp => "bi bi-volume-up-fill",
            Self::VolumeMute => "bi bi-volume-mute-fill",
            Self::Gear => "bi bi-gear-fill",
            Self::Fullscreen => "bi bi-fullscreen",
        }
    }

    /// Reverse of `class_name`.
    pub fn from_class_name(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.class_name() == class)
    }
}

/// Replace the contents of `button` with the `<i>` for `icon`.
pub(crate) fn render_icon<D: HostDocument + ?Sized>(doc: &mut D, button: NodeId, icon: Icon) {
    doc.clear_children(button);
    let glyph = doc.create_element("i");
    doc.set_attribute(glyph, "class", icon.class_name());
    doc.append_child(button, glyph);
}
