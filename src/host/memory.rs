//! In-memory host document.

use super::document::{EventType, HostDocument, NodeId};
use super::error::HostError;
use super::media::{MediaElement, SimulatedMedia};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug)]
struct Node {
    tag: String,
    /// Attributes in insertion order
    attributes: Vec<(String, String)>,
    /// Text run rendered before the children
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listeners: Vec<EventType>,
    media: Option<SimulatedMedia>,
}

impl Node {
    fn new(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        let media = matches!(tag.as_str(), "video" | "audio").then(SimulatedMedia::new);
        Self {
            tag,
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            listeners: Vec::new(),
            media,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

/// A minimal DOM: an element tree rooted at `<html>` with a `<head>` and a
/// `<body>`.
///
/// `<video>` and `<audio>` elements get a `SimulatedMedia`. Listeners are
/// only recorded; the embedding loop dispatches events to the player.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    fullscreen: Option<NodeId>,
    fullscreen_enabled: bool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Node::new("html")],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            fullscreen: None,
            fullscreen_enabled: true,
        };
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.head);
        doc.append_child(doc.root, doc.body);
        doc
    }

    /// The `<html>` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a `<div id="{id}">` to the body and return it.
    pub fn create_mount(&mut self, id: &str) -> NodeId {
        let mount = self.create_element("div");
        self.set_attribute(mount, "id", id);
        self.append_child(self.body, mount);
        mount
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.tag.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `node` is reachable from the root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_ancestor(self.root, node)
    }

    /// Whether the element carries `class` in its class list.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).is_some_and(|n| n.has_class(class))
    }

    /// First descendant of `scope` (excluding `scope`) with the given class.
    pub fn query_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.query_class_all(scope, class).into_iter().next()
    }

    /// All descendants of `scope` with the given class, in tree order.
    pub fn query_class_all(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        found
    }

    /// Events registered on `node`.
    pub fn listeners(&self, node: NodeId) -> &[EventType] {
        self.node(node)
            .map(|n| n.listeners.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_listener(&self, node: NodeId, event: EventType) -> bool {
        self.listeners(node).contains(&event)
    }

    pub fn simulated_media(&self, node: NodeId) -> Option<&SimulatedMedia> {
        self.node(node).and_then(|n| n.media.as_ref())
    }

    pub fn simulated_media_mut(&mut self, node: NodeId) -> Option<&mut SimulatedMedia> {
        self.node_mut(node).and_then(|n| n.media.as_mut())
    }

    /// Allow or reject future fullscreen requests.
    pub fn set_fullscreen_enabled(&mut self, enabled: bool) {
        self.fullscreen_enabled = enabled;
    }

    /// Serialize `node` and its subtree on a single line.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serialize the children of `node` on a single line.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(n) = self.node(node) {
            out.push_str(&escape_text(&n.text));
            for child in &n.children {
                self.write_html(*child, &mut out);
            }
        }
        out
    }

    /// Serialize `node` one element per line, indented by two spaces per level.
    pub fn pretty_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_pretty(node, 0, &mut out);
        out
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.parent(child) {
            if let Some(p) = self.node_mut(parent) {
                p.children.retain(|c| *c != child);
            }
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = None;
        }
    }

    fn open_tag(node: &Node) -> String {
        let mut tag = format!("<{}", node.tag);
        for (name, value) in &node.attributes {
            tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        tag.push('>');
        tag
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        out.push_str(&Self::open_tag(node));
        if VOID_ELEMENTS.contains(&node.tag.as_str()) {
            return;
        }
        out.push_str(&escape_text(&node.text));
        for child in &node.children {
            self.write_html(*child, out);
        }
        out.push_str(&format!("</{}>", node.tag));
    }

    fn write_pretty(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str(&Self::open_tag(node));

        if VOID_ELEMENTS.contains(&node.tag.as_str()) {
            out.push('\n');
            return;
        }

        if node.children.is_empty() {
            out.push_str(&escape_text(&node.text));
            out.push_str(&format!("</{}>\n", node.tag));
            return;
        }

        out.push('\n');
        if !node.text.is_empty() {
            out.push_str(&format!("{}  {}\n", indent, escape_text(&node.text)));
        }
        for child in &node.children {
            self.write_pretty(*child, depth + 1, out);
        }
        out.push_str(&format!("{}</{}>\n", indent, node.tag));
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.node(node).and_then(|n| n.attribute("id")) == Some(id) {
                return Some(node);
            }
            stack.extend(self.children(node).iter().rev().copied());
        }
        None
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.tag(node).map(str::to_string)
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node).to_vec()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        // An element cannot contain itself.
        if self.is_inclusive_ancestor(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
    }

    fn clear_children(&mut self, node: NodeId) {
        let children = match self.node_mut(node) {
            Some(n) => {
                n.text.clear();
                std::mem::take(&mut n.children)
            }
            None => return,
        };
        for child in children {
            if let Some(c) = self.node_mut(child) {
                c.parent = None;
            }
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)
            .and_then(|n| n.attribute(name))
            .map(str::to_string)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(n) = self.node_mut(node) else {
            return;
        };
        match n.attributes.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => n.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.retain(|(existing, _)| existing != name);
        }
    }

    fn text_content(&self, node: NodeId) -> String {
        let Some(n) = self.node(node) else {
            return String::new();
        };
        let mut text = n.text.clone();
        for child in &n.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        if let Some(n) = self.node_mut(node) {
            n.text = text.to_string();
        }
    }

    fn add_event_listener(&mut self, node: NodeId, event: EventType) {
        if let Some(n) = self.node_mut(node) {
            if !n.listeners.contains(&event) {
                n.listeners.push(event);
            }
        }
    }

    fn media(&self, node: NodeId) -> Option<&dyn MediaElement> {
        self.simulated_media(node).map(|m| m as &dyn MediaElement)
    }

    fn media_mut(&mut self, node: NodeId) -> Option<&mut dyn MediaElement> {
        self.simulated_media_mut(node)
            .map(|m| m as &mut dyn MediaElement)
    }

    fn fullscreen_element(&self) -> Option<NodeId> {
        self.fullscreen
    }

    fn request_fullscreen(&mut self, node: NodeId) -> Result<(), HostError> {
        if !self.fullscreen_enabled {
            return Err(HostError::FullscreenNotAllowed);
        }
        if !self.is_connected(node) {
            return Err(HostError::NotConnected);
        }
        self.fullscreen = Some(node);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostError> {
        self.fullscreen = None;
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
