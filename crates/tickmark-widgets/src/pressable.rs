//! Pressable surface: a tappable container primitive.

use std::any::Any;
use tickmark_core::{
    widget::{AccessibleRole, LayoutResult},
    Alignment, Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TouchId, TypeId,
    ViewStyle, Widget,
};

/// Opacity applied to the surface while a press is held.
pub const DEFAULT_ACTIVE_OPACITY: f32 = 0.2;

/// Message emitted when a press completes inside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pressed;

/// Pointer that armed a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressSource {
    Mouse,
    Touch(TouchId),
}

/// Tappable container with a style, a test ID and child widgets.
///
/// A press is armed by a left mouse button or touch going down inside the
/// bounds and completes when it is released inside the bounds. Releasing
/// outside, leaving the surface or a cancelled touch disarms it. Only the
/// pointer that armed a press can complete or cancel it.
pub struct Pressable {
    /// Resolved container style
    style: ViewStyle,
    /// Opacity while pressed
    active_opacity: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible role reported for this surface
    role: AccessibleRole,
    /// Child widgets
    children: Vec<Box<dyn Widget>>,
    /// Cached bounds
    bounds: Rect,
    /// Pointer holding the current press
    press: Option<PressSource>,
}

impl std::fmt::Debug for Pressable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pressable")
            .field("style", &self.style)
            .field("active_opacity", &self.active_opacity)
            .field("test_id", &self.test_id_value)
            .field("children", &self.children.len())
            .field("press", &self.press)
            .finish()
    }
}

impl Default for Pressable {
    fn default() -> Self {
        Self::new()
    }
}

impl Pressable {
    /// Create an empty pressable surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: ViewStyle::new(),
            active_opacity: DEFAULT_ACTIVE_OPACITY,
            test_id_value: None,
            role: AccessibleRole::Button,
            children: Vec::new(),
            bounds: Rect::default(),
            press: None,
        }
    }

    /// Set the container style. Replaces any previous style.
    #[must_use]
    pub const fn style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the opacity used while pressed. `1.0` disables press dimming.
    #[must_use]
    pub fn active_opacity(mut self, opacity: f32) -> Self {
        self.active_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the accessible role.
    #[must_use]
    pub const fn role(mut self, role: AccessibleRole) -> Self {
        self.role = role;
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Get the resolved style.
    #[must_use]
    pub const fn get_style(&self) -> &ViewStyle {
        &self.style
    }

    /// Get the opacity used while pressed.
    #[must_use]
    pub const fn get_active_opacity(&self) -> f32 {
        self.active_opacity
    }

    /// Check whether a press is in progress.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    fn current_opacity(&self) -> f32 {
        let base = self.style.opacity.unwrap_or(1.0);
        if self.press.is_some() {
            base * self.active_opacity
        } else {
            base
        }
    }

    fn press_down(&mut self, source: PressSource, position: &Point) {
        if self.bounds.contains_point(position) {
            if self.press.is_none() {
                self.press = Some(source);
            }
        } else if self.press == Some(source) {
            self.press = None;
        }
    }

    fn press_up(&mut self, source: PressSource, position: &Point) -> Option<Box<dyn Any + Send>> {
        if self.press != Some(source) {
            return None;
        }
        self.press = None;
        if self.bounds.contains_point(position) {
            Some(Box::new(Pressed))
        } else {
            None
        }
    }

    fn cancel(&mut self, source: PressSource) {
        if self.press == Some(source) {
            self.press = None;
        }
    }

    fn child_rect(&self, size: Size) -> Rect {
        let bounds = self.bounds;
        let centered = bounds.centered(size);
        let x = match self.style.justify_content {
            Some(Alignment::Center) => centered.x,
            Some(Alignment::End) => bounds.x + bounds.width - size.width,
            _ => bounds.x,
        };
        let y = match self.style.align_items {
            Some(Alignment::Center) => centered.y,
            Some(Alignment::End) => bounds.y + bounds.height - size.height,
            _ => bounds.y,
        };
        Rect::new(x, y, size.width, size.height)
    }

    fn paint_color(&self, color: Color) -> Color {
        let opacity = self.current_opacity();
        if opacity < 1.0 {
            color.with_opacity(opacity)
        } else {
            color
        }
    }
}

impl Widget for Pressable {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let content = self
            .children
            .iter()
            .map(|child| child.measure(Constraints::unbounded()))
            .fold(Size::ZERO, |acc, s| {
                Size::new(acc.width.max(s.width), acc.height.max(s.height))
            });
        let size = Size::new(
            self.style.width.unwrap_or(content.width),
            self.style.height.unwrap_or(content.height),
        );
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let loose = Constraints::loose(bounds.size());
        let rects: Vec<Rect> = self
            .children
            .iter()
            .map(|child| self.child_rect(child.measure(loose)))
            .collect();
        for (child, rect) in self.children.iter_mut().zip(rects) {
            child.layout(rect);
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let radius = self.style.border_radius.unwrap_or(0.0);

        if let Some(background) = self.style.background_color {
            canvas.fill_rounded_rect(self.bounds, radius, self.paint_color(background));
        }

        let border_width = self.style.border_width.unwrap_or(0.0);
        if border_width > 0.0 {
            let border = self.style.border_color.unwrap_or(Color::BLACK);
            canvas.stroke_rounded_rect(
                self.bounds,
                radius,
                self.paint_color(border),
                border_width,
            );
        }

        canvas.push_clip(self.bounds);
        for child in &self.children {
            child.paint(canvas);
        }
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.press_down(PressSource::Mouse, position);
                None
            }
            Event::TouchStart { id, position } => {
                self.press_down(PressSource::Touch(*id), position);
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.press_up(PressSource::Mouse, position),
            Event::TouchEnd { id, position } => self.press_up(PressSource::Touch(*id), position),
            Event::MouseLeave => {
                self.cancel(PressSource::Mouse);
                None
            }
            Event::TouchCancel { id } => {
                self.cancel(PressSource::Touch(*id));
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        self.role
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
