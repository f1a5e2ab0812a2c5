//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::Canvas;
use crate::{Color, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Used in tests to verify what was painted.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Iterate over recorded image commands as `(source, bounds, tint)`.
    pub fn images(&self) -> impl Iterator<Item = (&str, Rect, Option<Color>)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Image {
                source,
                bounds,
                tint,
            } => Some((source.as_str(), *bounds, *tint)),
            DrawCommand::Rect { .. } => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::stroked_rounded_rect(
            rect,
            radius,
            StrokeStyle { color, width },
        ));
    }

    fn draw_image(&mut self, source: &str, rect: Rect, tint: Option<Color>) {
        self.commands.push(DrawCommand::Image {
            source: source.to_string(),
            bounds: rect,
            tint,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}
