//! Style fragments and ordered merging.
//!
//! A widget's final style is built from an ordered list of [`ViewStyle`]
//! fragments. Every field is optional; when fragments are combined, a field
//! set in a later fragment replaces the same field from an earlier one and
//! unset fields fall through.
//!
//! ```
//! use tickmark_core::{Color, ViewStyle};
//!
//! let base = ViewStyle::new().width(24.0).border_color(Color::BLACK);
//! let accent = ViewStyle::new().border_color(Color::WHITE);
//!
//! let style = ViewStyle::flatten([&base, &accent]);
//! assert_eq!(style.width, Some(24.0));
//! assert_eq!(style.border_color, Some(Color::WHITE));
//! ```

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Cross-axis/main-axis alignment of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Align to the leading edge
    #[default]
    Start,
    /// Center within the container
    Center,
    /// Align to the trailing edge
    End,
    /// Fill the container
    Stretch,
}

/// A style fragment. Unset fields inherit from earlier fragments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewStyle {
    /// Fixed width in pixels
    pub width: Option<f32>,
    /// Fixed height in pixels
    pub height: Option<f32>,
    /// Border stroke width
    pub border_width: Option<f32>,
    /// Uniform corner radius
    pub border_radius: Option<f32>,
    /// Border stroke color
    pub border_color: Option<Color>,
    /// Fill color
    pub background_color: Option<Color>,
    /// Cross-axis alignment of children
    pub align_items: Option<Alignment>,
    /// Main-axis alignment of children
    pub justify_content: Option<Alignment>,
    /// Tint applied to image content
    pub tint_color: Option<Color>,
    /// Opacity multiplier [0.0, 1.0]
    pub opacity: Option<f32>,
}

macro_rules! style_setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub const fn $name(mut self, value: $ty) -> Self {
                self.$name = Some(value);
                self
            }
        )*
    };
}

impl ViewStyle {
    /// Create an empty fragment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: None,
            height: None,
            border_width: None,
            border_radius: None,
            border_color: None,
            background_color: None,
            align_items: None,
            justify_content: None,
            tint_color: None,
            opacity: None,
        }
    }

    style_setters! {
        /// Set the width.
        width: f32,
        /// Set the height.
        height: f32,
        /// Set the border width.
        border_width: f32,
        /// Set the corner radius.
        border_radius: f32,
        /// Set the border color.
        border_color: Color,
        /// Set the fill color.
        background_color: Color,
        /// Set cross-axis alignment.
        align_items: Alignment,
        /// Set main-axis alignment.
        justify_content: Alignment,
        /// Set the image tint.
        tint_color: Color,
        /// Set the opacity.
        opacity: f32,
    }

    /// Set width and height to the same value.
    #[must_use]
    pub const fn square(self, side: f32) -> Self {
        self.width(side).height(side)
    }

    /// Check whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Layer `over` on top of `self`. Fields set in `over` win.
    #[must_use]
    pub fn merge(&self, over: &Self) -> Self {
        Self {
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            border_width: over.border_width.or(self.border_width),
            border_radius: over.border_radius.or(self.border_radius),
            border_color: over.border_color.or(self.border_color),
            background_color: over.background_color.or(self.background_color),
            align_items: over.align_items.or(self.align_items),
            justify_content: over.justify_content.or(self.justify_content),
            tint_color: over.tint_color.or(self.tint_color),
            opacity: over.opacity.or(self.opacity),
        }
    }

    /// Combine fragments in order; the last fragment setting a field wins.
    #[must_use]
    pub fn flatten<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        fragments
            .into_iter()
            .fold(Self::new(), |acc, fragment| acc.merge(fragment))
    }
}
