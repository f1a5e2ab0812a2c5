//! Checkbox widget for boolean input.
//!
//! The checkbox is fully controlled: it renders whatever `value` its owner
//! passes in and, when tapped, reports `!value` through the value-change
//! handler. It never flips its own state; the owner re-renders it with the
//! new value.

use crate::assets::AssetRef;
use crate::image::Image;
use crate::pressable::{Pressable, Pressed};
use crate::theme::{CheckboxTheme, DEFAULT_BORDER_RADIUS, DEFAULT_SIZE};
use log::{debug, trace};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tickmark_core::{
    widget::{AccessibleRole, LayoutResult},
    Alignment, Canvas, Color, Constraints, Event, Rect, Size, TypeId, ViewStyle, Widget,
};

/// Suffix appended to the checkbox test ID to address its icon.
pub const SELECTED_ICON_SUFFIX: &str = ".selected";

/// Handler invoked with the value the owner should render next.
pub type ValueChangeHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Message emitted when a tap was reported to the value-change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxChanged {
    /// The value passed to the handler
    pub value: bool,
}

/// Checkbox props, immutable for one render.
#[derive(Clone, Default)]
pub struct CheckboxProps {
    /// Whether the box is checked
    pub value: bool,
    /// Called with `!value` on tap
    pub on_value_change: Option<ValueChangeHandler>,
    /// Accent color for border, fill and icon tint
    pub color: Option<Color>,
    /// Edge length in pixels
    pub size: Option<f32>,
    /// Corner radius in pixels. `0.0` counts as unset.
    pub border_radius: Option<f32>,
    /// Icon shown while checked
    pub selected_icon: Option<AssetRef>,
    /// Icon tint, only applied together with `color`
    pub icon_color: Option<Color>,
    /// Test ID for the container; the icon gets it with [`SELECTED_ICON_SUFFIX`]
    pub test_id: Option<String>,
    /// Style layered over everything computed
    pub style: Option<ViewStyle>,
}

impl fmt::Debug for CheckboxProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxProps")
            .field("value", &self.value)
            .field("on_value_change", &self.on_value_change.is_some())
            .field("color", &self.color)
            .field("size", &self.size)
            .field("border_radius", &self.border_radius)
            .field("selected_icon", &self.selected_icon)
            .field("icon_color", &self.icon_color)
            .field("test_id", &self.test_id)
            .field("style", &self.style)
            .finish()
    }
}

impl CheckboxProps {
    /// Create props with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checked value.
    #[must_use]
    pub const fn value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    /// Set the value-change handler.
    #[must_use]
    pub fn on_value_change(mut self, handler: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(Arc::new(handler));
        self
    }

    /// Set the accent color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the edge length.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub const fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set the icon shown while checked.
    #[must_use]
    pub fn selected_icon(mut self, icon: impl Into<AssetRef>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }

    /// Set the icon tint.
    #[must_use]
    pub const fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Set the caller style override.
    #[must_use]
    pub const fn style(mut self, style: ViewStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Props after merging with the theme.
///
/// `color` stays optional: whether an accent color was supplied changes
/// which style fragments apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProps {
    /// Whether the box is checked
    pub value: bool,
    /// Accent color from props or theme
    pub color: Option<Color>,
    /// Edge length
    pub size: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Icon shown while checked
    pub selected_icon: AssetRef,
    /// Icon tint used when `color` is set
    pub icon_color: Color,
    /// Container test ID
    pub test_id: Option<String>,
    /// Caller style override
    pub style: Option<ViewStyle>,
}

/// Merge caller props with theme defaults. Caller props win.
#[must_use]
pub fn resolve(props: &CheckboxProps, theme: &CheckboxTheme) -> ResolvedProps {
    ResolvedProps {
        value: props.value,
        color: props.color.or(theme.color),
        size: props.size.or(theme.size).unwrap_or(DEFAULT_SIZE),
        border_radius: props
            .border_radius
            .or(theme.border_radius)
            .filter(|r| r.abs() > 0.0)
            .unwrap_or(DEFAULT_BORDER_RADIUS),
        selected_icon: props
            .selected_icon
            .clone()
            .or_else(|| theme.selected_icon.clone())
            .unwrap_or_else(|| theme.check_icon.clone()),
        icon_color: props
            .icon_color
            .or(theme.icon_color)
            .unwrap_or(theme.icon_tint),
        test_id: props.test_id.clone(),
        style: props.style,
    }
}

/// Ordered style fragments for the container, lowest precedence first.
#[must_use]
pub fn container_style_fragments(props: &ResolvedProps, theme: &CheckboxTheme) -> Vec<ViewStyle> {
    let mut fragments = vec![ViewStyle::new()
        .square(props.size)
        .border_width(theme.border_width)
        .border_radius(props.border_radius)
        .border_color(theme.border_color)
        .align_items(Alignment::Center)
        .justify_content(Alignment::Center)];

    if props.value {
        let fill = props.color.unwrap_or(theme.selected_color);
        fragments.push(ViewStyle::new().background_color(fill));
    }

    if let Some(color) = props.color {
        fragments.push(ViewStyle::new().border_color(color));
    }

    if let Some(style) = props.style {
        fragments.push(style);
    }

    fragments
}

/// Final container style.
#[must_use]
pub fn container_style(props: &ResolvedProps, theme: &CheckboxTheme) -> ViewStyle {
    ViewStyle::flatten(&container_style_fragments(props, theme))
}

/// Icon overlay, present only while checked.
///
/// The icon's base style carries the theme tint; `icon_color` is layered on
/// top only when an accent color is set.
#[must_use]
pub fn icon(props: &ResolvedProps, theme: &CheckboxTheme) -> Option<Image> {
    if !props.value {
        return None;
    }

    let mut fragments = vec![ViewStyle::new().tint_color(theme.icon_tint)];
    if props.color.is_some() {
        fragments.push(ViewStyle::new().tint_color(props.icon_color));
    }

    let image = Image::new(props.selected_icon.clone()).style(ViewStyle::flatten(&fragments));
    Some(match &props.test_id {
        Some(id) => image.test_id(format!("{id}{SELECTED_ICON_SUFFIX}")),
        None => image,
    })
}

/// Build the visual tree: a pressable surface with an optional icon.
#[must_use]
pub fn render(props: &ResolvedProps, theme: &CheckboxTheme) -> Pressable {
    trace!(
        "rendering checkbox {:?} (value={})",
        props.test_id,
        props.value
    );

    let mut surface = Pressable::new()
        .style(container_style(props, theme))
        .active_opacity(1.0)
        .role(AccessibleRole::Checkbox);
    if let Some(id) = &props.test_id {
        surface = surface.test_id(id.clone());
    }
    match icon(props, theme) {
        Some(image) => surface.child(image),
        None => surface,
    }
}

/// Checkbox widget.
pub struct Checkbox {
    /// Caller props for the current render
    props: CheckboxProps,
    /// Theme context
    theme: CheckboxTheme,
    /// Rendered tree
    tree: Pressable,
    /// Bounds from the last layout
    bounds: Option<Rect>,
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("props", &self.props)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new(CheckboxProps::default())
    }
}

impl Checkbox {
    /// Create a checkbox with the default theme.
    #[must_use]
    pub fn new(props: CheckboxProps) -> Self {
        Self::with_theme(props, CheckboxTheme::default())
    }

    /// Create a checkbox with an explicit theme.
    #[must_use]
    pub fn with_theme(props: CheckboxProps, theme: CheckboxTheme) -> Self {
        let tree = render(&resolve(&props, &theme), &theme);
        Self {
            props,
            theme,
            tree,
            bounds: None,
        }
    }

    /// Replace the props for the next render pass.
    ///
    /// The tree is rebuilt and, if the checkbox was laid out before, laid
    /// out again in the same bounds.
    pub fn set_props(&mut self, props: CheckboxProps) {
        self.props = props;
        self.tree = render(&self.resolved(), &self.theme);
        if let Some(bounds) = self.bounds {
            self.tree.layout(bounds);
        }
    }

    /// Get the caller props.
    #[must_use]
    pub const fn props(&self) -> &CheckboxProps {
        &self.props
    }

    /// Get the theme.
    #[must_use]
    pub const fn theme(&self) -> &CheckboxTheme {
        &self.theme
    }

    /// Props merged with the theme.
    #[must_use]
    pub fn resolved(&self) -> ResolvedProps {
        resolve(&self.props, &self.theme)
    }

    /// Check if currently checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.props.value
    }

    /// Final container style.
    #[must_use]
    pub fn container_style(&self) -> ViewStyle {
        *self.tree.get_style()
    }

    /// Icon overlay, if checked.
    #[must_use]
    pub fn icon(&self) -> Option<Image> {
        icon(&self.resolved(), &self.theme)
    }

    /// Build a fresh visual tree from the current props.
    #[must_use]
    pub fn render(&self) -> Pressable {
        render(&self.resolved(), &self.theme)
    }

    /// Report a tap to the owner.
    ///
    /// Calls the value-change handler with `!value` and returns that value.
    /// Without a handler this does nothing and returns `None`.
    pub fn on_press(&self) -> Option<bool> {
        let Some(handler) = &self.props.on_value_change else {
            trace!("checkbox {:?} pressed without a handler", self.props.test_id);
            return None;
        };
        let next = !self.props.value;
        debug!(
            "checkbox {:?} pressed, reporting value {next}",
            self.props.test_id
        );
        handler(next);
        Some(next)
    }
}

impl Widget for Checkbox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.tree.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = Some(bounds);
        self.tree.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.tree.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let message = self.tree.event(event)?;
        if !message.is::<Pressed>() {
            return None;
        }
        self.on_press()
            .map(|value| Box::new(CheckboxChanged { value }) as Box<dyn Any + Send>)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        self.tree.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        self.tree.children_mut()
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Checkbox
    }

    fn test_id(&self) -> Option<&str> {
        self.props.test_id.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.tree.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::icons;
    use crate::theme::{DEFAULT_BORDER_COLOR, DEFAULT_ICON_COLOR, DEFAULT_SELECTED_COLOR};
    use std::sync::Mutex;
    use tickmark_core::{find_by_test_id, palette, Point, RecordingCanvas};

    fn red() -> Color {
        Color::from_hex("#FF0000").unwrap()
    }

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Clone + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |v| sink.lock().unwrap().push(v))
    }

    fn laid_out(props: CheckboxProps) -> Checkbox {
        let mut cb = Checkbox::new(props);
        let size = cb.measure(Constraints::unbounded());
        cb.layout(Rect::new(10.0, 10.0, size.width, size.height));
        cb
    }

    fn tap(cb: &mut Checkbox) -> Option<Box<dyn Any + Send>> {
        let center = cb.bounds().center();
        assert!(cb.event(&Event::left_down(center)).is_none());
        cb.event(&Event::left_up(center))
    }

    // =========================================================================
    // Resolve Tests
    // =========================================================================

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve(&CheckboxProps::new(), &CheckboxTheme::default());
        assert!(!resolved.value);
        assert_eq!(resolved.color, None);
        assert_eq!(resolved.size, 24.0);
        assert_eq!(resolved.border_radius, 8.0);
        assert_eq!(resolved.selected_icon, icons::check_small());
        assert_eq!(resolved.icon_color, Color::WHITE);
        assert_eq!(resolved.test_id, None);
        assert_eq!(resolved.style, None);
    }

    #[test]
    fn test_resolve_props_win_over_theme() {
        let theme = CheckboxTheme::default().color(Color::BLACK).size(40.0);
        let props = CheckboxProps::new().color(red());
        let resolved = resolve(&props, &theme);
        assert_eq!(resolved.color, Some(red()));
        assert_eq!(resolved.size, 40.0);
    }

    #[test]
    fn test_resolve_zero_radius_falls_back() {
        let resolved = resolve(&CheckboxProps::new().border_radius(0.0), &CheckboxTheme::default());
        assert_eq!(resolved.border_radius, 8.0);

        let theme = CheckboxTheme::default().border_radius(0.0);
        assert_eq!(resolve(&CheckboxProps::new(), &theme).border_radius, 8.0);

        let cb = Checkbox::new(CheckboxProps::new().border_radius(0.0));
        assert_eq!(cb.container_style().border_radius, Some(8.0));
    }

    #[test]
    fn test_resolve_theme_icon_defaults() {
        let theme = CheckboxTheme::default()
            .selected_icon("icons/dot")
            .icon_color(Color::BLACK);
        let resolved = resolve(&CheckboxProps::new(), &theme);
        assert_eq!(resolved.selected_icon, AssetRef::new("icons/dot"));
        assert_eq!(resolved.icon_color, Color::BLACK);
    }

    // =========================================================================
    // Container Style Tests
    // =========================================================================

    #[test]
    fn test_unchecked_defaults_style() {
        let cb = Checkbox::new(CheckboxProps::new().value(false));
        let style = cb.container_style();
        assert_eq!(style.width, Some(24.0));
        assert_eq!(style.height, Some(24.0));
        assert_eq!(style.border_radius, Some(8.0));
        assert_eq!(style.border_width, Some(2.0));
        assert_eq!(style.border_color, Some(DEFAULT_BORDER_COLOR));
        assert_eq!(style.background_color, None);
        assert_eq!(style.align_items, Some(Alignment::Center));
        assert_eq!(style.justify_content, Some(Alignment::Center));
        assert!(cb.icon().is_none());
    }

    #[test]
    fn test_checked_with_color_scenario() {
        let cb = Checkbox::new(CheckboxProps::new().value(true).color(red()).size(30.0));
        let style = cb.container_style();
        assert_eq!(style.width, Some(30.0));
        assert_eq!(style.height, Some(30.0));
        assert_eq!(style.border_radius, Some(8.0));
        assert_eq!(style.background_color, Some(red()));
        assert_eq!(style.border_color, Some(red()));

        let icon = cb.icon().unwrap();
        assert_eq!(icon.get_source(), &icons::check_small());
    }

    #[test]
    fn test_checked_without_color_uses_theme_constants() {
        let cb = Checkbox::new(CheckboxProps::new().value(true));
        let style = cb.container_style();
        assert_eq!(style.background_color, Some(DEFAULT_SELECTED_COLOR));
        assert_eq!(style.border_color, Some(DEFAULT_BORDER_COLOR));
        assert_eq!(DEFAULT_SELECTED_COLOR, palette::BLUE30);
    }

    #[test]
    fn test_unchecked_with_color_only_tints_border() {
        let cb = Checkbox::new(CheckboxProps::new().color(red()));
        let style = cb.container_style();
        assert_eq!(style.border_color, Some(red()));
        assert_eq!(style.background_color, None);
    }

    #[test]
    fn test_caller_style_has_highest_precedence() {
        let cb = Checkbox::new(
            CheckboxProps::new()
                .value(true)
                .color(red())
                .style(ViewStyle::new().background_color(Color::BLACK).width(50.0)),
        );
        let style = cb.container_style();
        assert_eq!(style.background_color, Some(Color::BLACK));
        assert_eq!(style.width, Some(50.0));
        assert_eq!(style.height, Some(24.0));
        assert_eq!(style.border_color, Some(red()));
    }

    #[test]
    fn test_custom_border_radius() {
        let cb = Checkbox::new(CheckboxProps::new().border_radius(2.0));
        assert_eq!(cb.container_style().border_radius, Some(2.0));
    }

    #[test]
    fn test_style_fragment_order() {
        let theme = CheckboxTheme::default();
        let props = resolve(
            &CheckboxProps::new()
                .value(true)
                .color(red())
                .style(ViewStyle::new().opacity(0.5)),
            &theme,
        );
        let fragments = container_style_fragments(&props, &theme);
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[1].background_color, Some(red()));
        assert_eq!(fragments[2].border_color, Some(red()));
        assert_eq!(fragments[3].opacity, Some(0.5));
    }

    #[test]
    fn test_style_derivation_is_pure() {
        let props = CheckboxProps::new().value(true).color(red()).size(18.0);
        let a = Checkbox::new(props.clone());
        let b = Checkbox::new(props);
        assert_eq!(a.container_style(), b.container_style());
        assert_eq!(a.icon(), b.icon());
    }

    #[test]
    fn test_negative_size_passed_through() {
        let cb = Checkbox::new(CheckboxProps::new().size(-5.0));
        assert_eq!(cb.container_style().width, Some(-5.0));
    }

    // =========================================================================
    // Icon Tests
    // =========================================================================

    #[test]
    fn test_icon_only_when_checked() {
        assert!(Checkbox::new(CheckboxProps::new()).icon().is_none());
        assert!(Checkbox::new(CheckboxProps::new().value(true)).icon().is_some());
    }

    #[test]
    fn test_icon_custom_source() {
        let cb = Checkbox::new(CheckboxProps::new().value(true).selected_icon("icons/dot"));
        assert_eq!(cb.icon().unwrap().get_source().name(), "icons/dot");
    }

    #[test]
    fn test_icon_tint_applied_with_color() {
        let cb = Checkbox::new(
            CheckboxProps::new()
                .value(true)
                .color(red())
                .icon_color(Color::BLACK),
        );
        assert_eq!(cb.icon().unwrap().tint(), Some(Color::BLACK));
    }

    #[test]
    fn test_icon_color_ignored_without_color() {
        let cb = Checkbox::new(CheckboxProps::new().value(true).icon_color(Color::BLACK));
        assert_eq!(cb.icon().unwrap().tint(), Some(DEFAULT_ICON_COLOR));

        let themed = Checkbox::with_theme(
            CheckboxProps::new().value(true),
            CheckboxTheme::default().icon_color(Color::BLACK),
        );
        assert_eq!(themed.icon().unwrap().tint(), Some(DEFAULT_ICON_COLOR));
    }

    #[test]
    fn test_icon_default_tint_with_color() {
        let cb = Checkbox::new(CheckboxProps::new().value(true).color(red()));
        assert_eq!(cb.icon().unwrap().tint(), Some(Color::WHITE));
    }

    #[test]
    fn test_icon_test_id_suffixed() {
        let cb = Checkbox::new(CheckboxProps::new().value(true).test_id("terms"));
        assert_eq!(Widget::test_id(&cb), Some("terms"));
        let icon = cb.icon().unwrap();
        assert_eq!(Widget::test_id(&icon), Some("terms.selected"));
        assert!(find_by_test_id(&cb, "terms.selected").is_some());
    }

    #[test]
    fn test_icon_without_test_id() {
        let cb = Checkbox::new(CheckboxProps::new().value(true));
        assert_eq!(Widget::test_id(&cb.icon().unwrap()), None);
    }

    // =========================================================================
    // Render Tests
    // =========================================================================

    #[test]
    fn test_render_tree_shape() {
        let surface = Checkbox::new(CheckboxProps::new().value(true).test_id("cb")).render();
        assert_eq!(Widget::test_id(&surface), Some("cb"));
        assert_eq!(surface.get_active_opacity(), 1.0);
        assert_eq!(surface.accessible_role(), AccessibleRole::Checkbox);
        assert_eq!(surface.children().len(), 1);
        assert_eq!(surface.children()[0].test_id(), Some("cb.selected"));
    }

    #[test]
    fn test_render_unchecked_has_no_children() {
        let surface = Checkbox::new(CheckboxProps::new()).render();
        assert!(surface.children().is_empty());
    }

    #[test]
    fn test_paint_checked() {
        let cb = laid_out(CheckboxProps::new().value(true).color(red()).size(30.0));
        let mut canvas = RecordingCanvas::new();
        cb.paint(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].fill_color(), Some(red()));
        assert_eq!(commands[1].stroke().map(|s| s.color), Some(red()));
        assert_eq!(commands[1].stroke().map(|s| s.width), Some(2.0));

        let images: Vec<_> = canvas.images().collect();
        assert_eq!(images.len(), 1);
        let (source, bounds, tint) = images[0];
        assert_eq!(source, "icons/check_small");
        assert_eq!(bounds, Rect::new(17.0, 17.0, 16.0, 16.0));
        assert_eq!(tint, Some(Color::WHITE));
    }

    #[test]
    fn test_paint_unchecked_border_only() {
        let cb = laid_out(CheckboxProps::new());
        let mut canvas = RecordingCanvas::new();
        cb.paint(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0].stroke().map(|s| s.color),
            Some(DEFAULT_BORDER_COLOR)
        );
        assert_eq!(canvas.images().count(), 0);
    }

    #[test]
    fn test_measure_uses_size() {
        let cb = Checkbox::new(CheckboxProps::new().size(30.0));
        assert_eq!(cb.measure(Constraints::unbounded()), Size::square(30.0));
    }

    // =========================================================================
    // Press Tests
    // =========================================================================

    #[test]
    fn test_on_press_unchecked_reports_true() {
        let (calls, handler) = recorder();
        let cb = Checkbox::new(CheckboxProps::new().on_value_change(handler));
        assert_eq!(cb.on_press(), Some(true));
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_on_press_checked_reports_false() {
        let (calls, handler) = recorder();
        let cb = Checkbox::new(CheckboxProps::new().value(true).on_value_change(handler));
        assert_eq!(cb.on_press(), Some(false));
        assert_eq!(*calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_on_press_without_handler_is_noop() {
        let cb = Checkbox::new(CheckboxProps::new().value(true));
        assert_eq!(cb.on_press(), None);
        assert!(cb.is_checked());
    }

    #[test]
    fn test_on_press_does_not_mutate_value() {
        let (calls, handler) = recorder();
        let cb = Checkbox::new(CheckboxProps::new().on_value_change(handler));
        cb.on_press();
        cb.on_press();
        assert!(!cb.is_checked());
        assert_eq!(*calls.lock().unwrap(), vec![true, true]);
    }

    #[test]
    fn test_tap_emits_checkbox_changed() {
        let (calls, handler) = recorder();
        let mut cb = laid_out(CheckboxProps::new().on_value_change(handler));
        let msg = tap(&mut cb).unwrap();
        assert_eq!(
            msg.downcast_ref::<CheckboxChanged>(),
            Some(&CheckboxChanged { value: true })
        );
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_tap_without_handler_emits_nothing() {
        let mut cb = laid_out(CheckboxProps::new());
        assert!(tap(&mut cb).is_none());
    }

    #[test]
    fn test_tap_outside_bounds_ignored() {
        let (calls, handler) = recorder();
        let mut cb = laid_out(CheckboxProps::new().on_value_change(handler));
        let outside = Point::new(500.0, 500.0);
        cb.event(&Event::left_down(outside));
        assert!(cb.event(&Event::left_up(outside)).is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_controlled_round_trip_through_owner() {
        let (calls, handler) = recorder();
        let mut cb = laid_out(CheckboxProps::new().on_value_change(handler.clone()));
        tap(&mut cb);
        let next = *calls.lock().unwrap().last().unwrap();

        cb.set_props(CheckboxProps::new().value(next).on_value_change(handler));
        assert!(cb.is_checked());
        assert!(cb.icon().is_some());
        assert_eq!(cb.children().len(), 1);
        assert_eq!(cb.children()[0].bounds(), Rect::new(14.0, 14.0, 16.0, 16.0));

        tap(&mut cb);
        assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_checkbox_widget_traits() {
        let cb = Checkbox::default();
        assert!(cb.is_interactive());
        assert_eq!(cb.accessible_role(), AccessibleRole::Checkbox);
        assert_eq!(Widget::type_id(&cb), TypeId::of::<Checkbox>());
    }

    #[test]
    fn test_props_debug_hides_handler() {
        let props = CheckboxProps::new().on_value_change(|_| {});
        let debug = format!("{props:?}");
        assert!(debug.contains("on_value_change: true"));
    }
}
