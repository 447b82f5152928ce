//! Stylesheet injection into the document head.
//!
//! The icon font link is shared by every player in a document and appended
//! at most once. Each mount gets one `<style>` element; mounting again on the
//! same mount rewrites it in place.

use crate::config::PlayerConfig;
use crate::host::{HostDocument, NodeId};
use crate::style::stylesheet::build_stylesheet;

/// Id of the shared icon font `<link>`.
pub const ICON_LINK_ID: &str = "vidctl-icon-font";

/// Id of the `<style>` element belonging to `mount_id`.
pub fn style_element_id(mount_id: &str) -> String {
    format!("vidctl-style-{}", mount_id)
}

/// What happened to one head element during injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// A new element was appended to the head
    Appended,
    /// An existing element was left as is
    Reused,
    /// An existing element had its contents replaced
    Replaced,
}

/// Outcome of `inject_styles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleInjection {
    pub icon_font: Injection,
    pub stylesheet: Injection,
}

/// Add the icon font link and the player stylesheet to the document head.
pub fn inject_styles<D: HostDocument + ?Sized>(doc: &mut D, config: &PlayerConfig) -> StyleInjection {
    let head = doc.head();

    let icon_font = if head_element(doc, head, "link", ICON_LINK_ID).is_some() {
        Injection::Reused
    } else {
        let link = doc.create_element("link");
        doc.set_attribute(link, "id", ICON_LINK_ID);
        doc.set_attribute(link, "href", config.icon_stylesheet());
        doc.set_attribute(link, "rel", "stylesheet");
        doc.append_child(head, link);
        Injection::Appended
    };

    let css = build_stylesheet(config);
    let style_id = style_element_id(config.mount_id());
    let stylesheet = match head_element(doc, head, "style", &style_id) {
        Some(existing) => {
            doc.set_text_content(existing, &css);
            Injection::Replaced
        }
        None => {
            let style = doc.create_element("style");
            doc.set_attribute(style, "id", &style_id);
            doc.set_text_content(style, &css);
            doc.append_child(head, style);
            Injection::Appended
        }
    };

    StyleInjection {
        icon_font,
        stylesheet,
    }
}

/// Child of `head` with the given tag and id. Elements elsewhere in the
/// page that happen to share the id are not ours.
fn head_element<D: HostDocument + ?Sized>(
    doc: &D,
    head: NodeId,
    tag: &str,
    id: &str,
) -> Option<NodeId> {
    doc.child_nodes(head).into_iter().find(|&node| {
        doc.tag_name(node).as_deref() == Some(tag)
            && doc.attribute(node, "id").as_deref() == Some(id)
    })
}
