//! The `HostDocument` trait and its handle/event types.

use super::error::HostError;
use super::media::MediaElement;

/// Opaque handle to an element owned by a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Wrap a host-specific index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The host-specific index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Events the player listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Media duration became known
    LoadedMetadata,
    /// Media playback position changed
    TimeUpdate,
    /// Range input value changed
    Input,
    /// Single click
    Click,
    /// Double click
    DoubleClick,
}

impl EventType {
    /// DOM event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadedMetadata => "loadedmetadata",
            Self::TimeUpdate => "timeupdate",
            Self::Input => "input",
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
        }
    }

    /// Parse a DOM event name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "loadedmetadata" => Some(Self::LoadedMetadata),
            "timeupdate" => Some(Self::TimeUpdate),
            "input" => Some(Self::Input),
            "click" => Some(Self::Click),
            "dblclick" => Some(Self::DoubleClick),
            _ => None,
        }
    }
}

/// A page the player can be mounted into.
///
/// Handles are only meaningful for the document that issued them.
/// Implementations should treat unknown handles as absent elements: getters
/// return `None`/empty values and setters do nothing.
pub trait HostDocument {
    /// First connected element (in tree order) whose `id` attribute matches.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// The document head.
    fn head(&self) -> NodeId;

    /// Lowercase tag name of `node`.
    fn tag_name(&self, node: NodeId) -> Option<String>;

    /// Children of `node`, in order.
    fn child_nodes(&self, node: NodeId) -> Vec<NodeId>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Remove all children and text of `node`.
    fn clear_children(&mut self, node: NodeId);

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Concatenated text of `node` and its descendants.
    fn text_content(&self, node: NodeId) -> String;

    /// Replace the children of `node` with a single text run.
    fn set_text_content(&mut self, node: NodeId, text: &str);

    /// Toggle `class` in the element's class list, returning whether it is now present.
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let current = self.attribute(node, "class").unwrap_or_default();
        let mut classes: Vec<&str> = current.split_whitespace().collect();

        let present = if let Some(pos) = classes.iter().position(|c| *c == class) {
            classes.remove(pos);
            false
        } else {
            classes.push(class);
            true
        };

        self.set_attribute(node, "class", &classes.join(" "));
        present
    }

    /// Register interest in `event` on `node`.
    ///
    /// The host is expected to route matching events back through
    /// `PlaybackController::handle_event`.
    fn add_event_listener(&mut self, node: NodeId, event: EventType);

    /// The media element behind `node`, if it is one.
    fn media(&self, node: NodeId) -> Option<&dyn MediaElement>;

    fn media_mut(&mut self, node: NodeId) -> Option<&mut dyn MediaElement>;

    /// The element currently shown fullscreen, if any.
    fn fullscreen_element(&self) -> Option<NodeId>;

    fn request_fullscreen(&mut self, node: NodeId) -> Result<(), HostError>;

    fn exit_fullscreen(&mut self) -> Result<(), HostError>;
}
