//! Stylesheet generation.

use crate::config::PlayerConfig;

/// Rules that do not depend on the configuration: (selectors, declarations).
const BASE_RULES: &[(&str, &[&str])] = &[
    ("video", &["width: 100%"]),
    (
        ".controls-container",
        &[
            "position: absolute",
            "bottom: 0",
            "left: 0",
            "right: 0",
            "width: 100%",
            "color: white",
            "align-items: center",
            "justify-content: space-between",
            "opacity: 0",
            "transition: opacity 0.3s ease",
        ],
    ),
    (".video-container:hover .controls-container", &["opacity: 1"]),
    (".playback-cont", &["display: flex", "padding: 5px 8px 5px 8px"]),
    (
        ".controls-btns",
        &[
            "display: flex",
            "justify-content: space-between",
            "align-items: center",
            "gap: 10px",
            "padding: 5px 10px 10px 10px",
        ],
    ),
    (
        ".r-btns",
        &["display: flex", "align-items: center", "gap: 15px"],
    ),
    (
        ".l-btns",
        &["display: flex", "align-items: center", "gap: 10px"],
    ),
    (
        "button",
        &[
            "background: none",
            "border: none",
            "color: white",
            "cursor: pointer",
        ],
    ),
    (
        "input[type=\"range\"]",
        &["flex: 1", "margin: 0 10px", "cursor: pointer"],
    ),
    (
        ".play-btn, .forward-btn, .backward-btn, .fullscreen-btn:not(.setting-btn), .mute-btn",
        &["font-size: 22px", "padding: 0", "border: none"],
    ),
    (".play-btn:focus-visible", &["outline: none"]),
    (
        ".volume-controls",
        &["display: flex", "align-items: center", "margin-left: 10px"],
    ),
    (
        ".volume-controls input[type=\"range\"]",
        &[
            "width: 0",
            "opacity: 0",
            "transition: width 0.3s ease, opacity 0.3s ease",
        ],
    ),
    (
        ".volume-controls:hover input[type=\"range\"]",
        &["width: 100px", "opacity: 1"],
    ),
    (
        ".settings-options",
        &[
            "position: absolute",
            "z-index: 100",
            "display: flex",
            "background-color: rgba(0, 0, 0)",
            "bottom: 40px",
            "right: 64px",
            "min-width: 50px",
            "padding: 0px 15px",
            "flex-direction: column",
            "justify-content: center",
            "align-items: center",
            "opacity: 0",
            "transform: translateY(10px)",
            "pointer-events: none",
            "transition: opacity 0.3s ease, transform 0.3s ease",
        ],
    ),
    (
        ".show-settings",
        &[
            "opacity: 1",
            "transform: translateY(0)",
            "pointer-events: auto",
        ],
    ),
    (".settings-options p", &["cursor: pointer", "margin: 10px 5px"]),
];

/// Build the stylesheet for one player.
///
/// Every selector is prefixed with the mount element's id so players with
/// different themes can share a document.
pub fn build_stylesheet(config: &PlayerConfig) -> String {
    let scope = format!("#{}", escape_ident(config.mount_id()));
    let mut css = String::new();

    let width = format!("width: {}", config.width());
    push_rule(
        &mut css,
        &scope,
        ".video-container",
        &[
            "position: relative",
            "display: flex",
            "flex-direction: column",
            width.as_str(),
        ],
    );

    for (selectors, declarations) in BASE_RULES {
        push_rule(&mut css, &scope, selectors, declarations);
    }

    let icon_color = format!("color: {}", config.icon_color());
    push_rule(&mut css, &scope, "i", &[icon_color.as_str()]);

    let font_size = format!("font-size: {}", config.font_size());
    push_rule(
        &mut css,
        &scope,
        "i, .playback-cont, .settings-options p",
        &[font_size.as_str()],
    );

    let background = format!("background: {}", config.theme());
    push_rule(
        &mut css,
        &scope,
        ".controls-container, .settings-options",
        &[background.as_str()],
    );

    css
}

/// Prefix each comma-separated selector in `selectors` with `scope`.
pub fn scope_selector(scope: &str, selectors: &str) -> String {
    selectors
        .split(',')
        .map(|selector| format!("{} {}", scope, selector.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_rule(css: &mut String, scope: &str, selectors: &str, declarations: &[&str]) {
    css.push_str(&scope_selector(scope, selectors));
    css.push_str(" {\n");
    for declaration in declarations {
        css.push_str("  ");
        css.push_str(declaration);
        css.push_str(";\n");
    }
    css.push_str("}\n");
}

/// Escape an element id for use in a CSS `#id` selector.
fn escape_ident(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for (i, c) in id.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}
