//! Player configuration.
//!
//! `PlayerOptions` is the loose, user-facing form (every field optional,
//! loadable from TOML or JSON). `PlayerOptions::resolve` validates it into an
//! immutable `PlayerConfig` with all defaults applied.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Seconds moved per skip button press.
pub const DEFAULT_SKIP_AMOUNT: f64 = 10.0;
/// Width of the player container.
pub const DEFAULT_WIDTH: &str = "800px";
/// Background of the control overlay and the speed menu.
pub const DEFAULT_THEME: &str = "rgba(0, 0, 0, 0.7)";
/// Color of the control icons.
pub const DEFAULT_ICON_COLOR: &str = "#ccc";
/// Font size of icons, time labels and speed options.
pub const DEFAULT_FONT_SIZE: &str = "20px";
/// Icon font stylesheet linked into the document head.
pub const DEFAULT_ICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

/// User-facing player options.
///
/// Only `mount_id` and `src` are required. Empty strings and a zero skip
/// amount count as unset. The camelCase names used by the browser API
/// (`parentId`, `skipAmount`, `btnColor`, `fontSize`) are accepted as
/// aliases when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
    /// Id of the element the controls are mounted into
    #[serde(alias = "parentId")]
    pub mount_id: String,
    /// Media source URI
    pub src: String,
    /// Seconds per skip (forward/backward)
    #[serde(alias = "skipAmount", skip_serializing_if = "Option::is_none")]
    pub skip_amount: Option<f64>,
    /// CSS width of the container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// CSS background of the control overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// CSS color of the icons
    #[serde(alias = "btnColor", skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    /// CSS font size of icons and labels
    #[serde(alias = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Href of the icon font stylesheet
    #[serde(alias = "iconStylesheet", skip_serializing_if = "Option::is_none")]
    pub icon_stylesheet: Option<String>,
}

impl PlayerOptions {
    /// Options with the two required fields set and everything else default.
    pub fn new(mount_id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            mount_id: mount_id.into(),
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn with_skip_amount(mut self, seconds: f64) -> Self {
        self.skip_amount = Some(seconds);
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_icon_color(mut self, color: impl Into<String>) -> Self {
        self.icon_color = Some(color.into());
        self
    }

    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn with_icon_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.icon_stylesheet = Some(href.into());
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from a JSON object.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = |path: &Path| {
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content(path)?),
            Some("json") => Self::from_json_str(&content(path)?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Validate required fields and apply defaults.
    pub fn resolve(self) -> Result<PlayerConfig, ConfigError> {
        let mount_id = required(self.mount_id, "mount_id")?;
        let src = required(self.src, "src")?;

        let skip_amount = match self.skip_amount {
            Some(seconds) if seconds.is_finite() && seconds > 0.0 => seconds,
            Some(seconds) => {
                warn!(skip_amount = seconds, "Invalid skip amount, using default");
                DEFAULT_SKIP_AMOUNT
            }
            None => DEFAULT_SKIP_AMOUNT,
        };

        Ok(PlayerConfig {
            mount_id,
            src,
            skip_amount,
            width: or_default(self.width, DEFAULT_WIDTH),
            theme: or_default(self.theme, DEFAULT_THEME),
            icon_color: or_default(self.icon_color, DEFAULT_ICON_COLOR),
            font_size: or_default(self.font_size, DEFAULT_FONT_SIZE),
            icon_stylesheet: or_default(self.icon_stylesheet, DEFAULT_ICON_STYLESHEET),
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Resolved, immutable player configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    mount_id: String,
    src: String,
    skip_amount: f64,
    width: String,
    theme: String,
    icon_color: String,
    font_size: String,
    icon_stylesheet: String,
}

impl PlayerConfig {
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Seconds moved per skip, always positive.
    pub fn skip_amount(&self) -> f64 {
        self.skip_amount
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn icon_color(&self) -> &str {
        &self.icon_color
    }

    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    pub fn icon_stylesheet(&self) -> &str {
        &self.icon_stylesheet
    }
}
