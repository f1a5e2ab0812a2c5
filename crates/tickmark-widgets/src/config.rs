//! Declarative checkbox configuration loaded from YAML or JSON.
//!
//! Colors are written as hex strings (`"#FF0000"`), icons as asset names.
//!
//! ```yaml
//! value: true
//! color: "#FF0000"
//! size: 30
//! test_id: terms
//! ```

use crate::assets::AssetRef;
use crate::checkbox::CheckboxProps;
use crate::theme::CheckboxTheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use tickmark_core::{Color, ColorParseError, ViewStyle};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// YAML parsing error
    Yaml(serde_yaml_ng::Error),
    /// JSON parsing error
    Json(serde_json::Error),
    /// A color field did not hold a valid hex color
    InvalidColor {
        /// Field name
        field: &'static str,
        /// Parse failure
        source: ColorParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::InvalidColor { field, source } => {
                write!(f, "Invalid color for '{field}': {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidColor { source, .. } => Some(source),
        }
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

fn parse_color(field: &'static str, value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|hex| Color::from_hex(hex).map_err(|source| ConfigError::InvalidColor { field, source }))
        .transpose()
}

/// Checkbox props as written in a config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckboxConfig {
    /// Whether the box is checked
    pub value: bool,
    /// Accent color as hex
    pub color: Option<String>,
    /// Edge length
    pub size: Option<f32>,
    /// Corner radius
    pub border_radius: Option<f32>,
    /// Selection icon asset name
    pub selected_icon: Option<String>,
    /// Icon tint as hex
    pub icon_color: Option<String>,
    /// Test ID
    pub test_id: Option<String>,
    /// Style override
    pub style: Option<ViewStyle>,
}

impl CheckboxConfig {
    /// Parse from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse and convert straight to props.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or a color is invalid.
    pub fn props_from_yaml(yaml: &str) -> Result<CheckboxProps, ConfigError> {
        Self::from_yaml(yaml)?.try_into()
    }
}

impl TryFrom<CheckboxConfig> for CheckboxProps {
    type Error = ConfigError;

    fn try_from(config: CheckboxConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            value: config.value,
            on_value_change: None,
            color: parse_color("color", config.color.as_deref())?,
            size: config.size,
            border_radius: config.border_radius,
            selected_icon: config.selected_icon.map(AssetRef::new),
            icon_color: parse_color("icon_color", config.icon_color.as_deref())?,
            test_id: config.test_id,
            style: config.style,
        })
    }
}

/// Checkbox theme as written in a config document.
///
/// Unset constants keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Default accent color as hex
    pub color: Option<String>,
    /// Default edge length
    pub size: Option<f32>,
    /// Default corner radius
    pub border_radius: Option<f32>,
    /// Default icon tint as hex
    pub icon_color: Option<String>,
    /// Default selection icon asset name
    pub selected_icon: Option<String>,
    /// Border color without accent, as hex
    pub border_color: Option<String>,
    /// Checked fill without accent, as hex
    pub selected_color: Option<String>,
    /// Base icon tint as hex
    pub icon_tint: Option<String>,
    /// Border stroke width
    pub border_width: Option<f32>,
}

impl ThemeConfig {
    /// Parse from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<ThemeConfig> for CheckboxTheme {
    type Error = ConfigError;

    fn try_from(config: ThemeConfig) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        Ok(Self {
            color: parse_color("color", config.color.as_deref())?,
            size: config.size,
            border_radius: config.border_radius,
            icon_color: parse_color("icon_color", config.icon_color.as_deref())?,
            selected_icon: config.selected_icon.map(AssetRef::new),
            border_color: parse_color("border_color", config.border_color.as_deref())?
                .unwrap_or(defaults.border_color),
            selected_color: parse_color("selected_color", config.selected_color.as_deref())?
                .unwrap_or(defaults.selected_color),
            icon_tint: parse_color("icon_tint", config.icon_tint.as_deref())?
                .unwrap_or(defaults.icon_tint),
            border_width: config.border_width.unwrap_or(defaults.border_width),
            check_icon: defaults.check_icon,
        })
    }
}
