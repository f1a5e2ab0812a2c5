//! Draw commands produced by painting.

use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style combining fill and stroke.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color
    pub fill: Option<Color>,
    /// Stroke style
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Create a fill-only style.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a stroke-only style.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw an image asset
    Image {
        /// Asset identifier
        source: String,
        /// Destination bounds
        bounds: Rect,
        /// Tint applied to opaque pixels
        tint: Option<Color>,
    },
}

impl DrawCommand {
    /// Create a filled rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked rounded rectangle.
    #[must_use]
    pub const fn stroked_rounded_rect(bounds: Rect, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Fill color, if this is a filled rectangle.
    #[must_use]
    pub const fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Rect { style, .. } => style.fill,
            Self::Image { .. } => None,
        }
    }

    /// Stroke style, if this is a stroked rectangle.
    #[must_use]
    pub const fn stroke(&self) -> Option<StrokeStyle> {
        match self {
            Self::Rect { style, .. } => style.stroke,
            Self::Image { .. } => None,
        }
    }
}
