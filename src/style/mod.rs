//! Player styling.
//!
//! Generates the player stylesheet (scoped to the mount element) and injects
//! it, together with the icon font stylesheet, into the document head.

mod inject;
mod stylesheet;

pub use inject::{inject_styles, style_element_id, Injection, StyleInjection, ICON_LINK_ID};
pub use stylesheet::{build_stylesheet, scope_selector};
