//! Image widget for displaying tintable assets.

use crate::assets::{icons, AssetRef};
use std::any::Any;
use tickmark_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, ViewStyle, Widget,
};

/// Image widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Asset to draw
    source: AssetRef,
    /// Resolved style
    style: ViewStyle,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Image {
    /// Create a new image with source.
    #[must_use]
    pub fn new(source: impl Into<AssetRef>) -> Self {
        Self {
            source: source.into(),
            style: ViewStyle::new(),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the style. Replaces any previous style.
    #[must_use]
    pub const fn style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the image source.
    #[must_use]
    pub const fn get_source(&self) -> &AssetRef {
        &self.source
    }

    /// Get the resolved style.
    #[must_use]
    pub const fn get_style(&self) -> &ViewStyle {
        &self.style
    }

    /// Tint applied when painting, if any.
    #[must_use]
    pub const fn tint(&self) -> Option<Color> {
        self.style.tint_color
    }

    fn intrinsic_size(&self, constraints: Constraints) -> Size {
        if self.source.is_bundled_icon() {
            Size::square(icons::SIZE)
        } else {
            constraints.biggest()
        }
    }
}

impl Widget for Image {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let natural = self.intrinsic_size(constraints);
        let size = Size::new(
            self.style.width.unwrap_or(natural.width),
            self.style.height.unwrap_or(natural.height),
        );
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let tint = match (self.tint(), self.style.opacity) {
            (Some(tint), Some(opacity)) => Some(tint.with_opacity(opacity)),
            (tint, _) => tint,
        };
        canvas.draw_image(self.source.name(), self.bounds, tint);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
