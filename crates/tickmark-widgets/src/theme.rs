//! Theme context for selection controls.

use crate::assets::{icons, AssetRef};
use tickmark_core::{palette, Color};

/// Edge length of a checkbox when no size is given.
pub const DEFAULT_SIZE: f32 = 24.0;
/// Corner radius of a checkbox when none is given.
pub const DEFAULT_BORDER_RADIUS: f32 = 8.0;
/// Border stroke width of a checkbox.
pub const BORDER_WIDTH: f32 = 2.0;
/// Border color used when no color is supplied.
pub const DEFAULT_BORDER_COLOR: Color = palette::BLUE30;
/// Fill of a checked box when no color is supplied.
pub const DEFAULT_SELECTED_COLOR: Color = palette::BLUE30;
/// Tint of the selection icon.
pub const DEFAULT_ICON_COLOR: Color = palette::WHITE;

/// Theme applied to checkboxes.
///
/// The optional fields are component-level prop defaults: a caller's prop
/// wins over them, and they win over the built-in constants. A theme
/// `color` behaves exactly like a caller-supplied color.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxTheme {
    /// Default accent color
    pub color: Option<Color>,
    /// Default edge length
    pub size: Option<f32>,
    /// Default corner radius. `0.0` counts as unset.
    pub border_radius: Option<f32>,
    /// Default icon color.
    ///
    /// Only tints the icon when an accent color is also set, in the theme or
    /// in the checkbox props. Without one the icon keeps `icon_tint`.
    pub icon_color: Option<Color>,
    /// Default selection icon
    pub selected_icon: Option<AssetRef>,
    /// Border color when no accent color is set
    pub border_color: Color,
    /// Fill of a checked box when no accent color is set
    pub selected_color: Color,
    /// Tint of the icon's base style
    pub icon_tint: Color,
    /// Border stroke width
    pub border_width: f32,
    /// Icon used when no selection icon is set
    pub check_icon: AssetRef,
}

impl Default for CheckboxTheme {
    fn default() -> Self {
        Self {
            color: None,
            size: None,
            border_radius: None,
            icon_color: None,
            selected_icon: None,
            border_color: DEFAULT_BORDER_COLOR,
            selected_color: DEFAULT_SELECTED_COLOR,
            icon_tint: DEFAULT_ICON_COLOR,
            border_width: BORDER_WIDTH,
            check_icon: icons::check_small(),
        }
    }
}

impl CheckboxTheme {
    /// Set the default accent color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the default edge length.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the default corner radius.
    #[must_use]
    pub const fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set the default icon color.
    #[must_use]
    pub const fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    /// Set the default selection icon.
    #[must_use]
    pub fn selected_icon(mut self, icon: impl Into<AssetRef>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }
}
