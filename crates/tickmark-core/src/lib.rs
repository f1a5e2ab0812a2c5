//! Core types and traits for the tickmark widget library.
//!
//! This crate provides the host surface widgets are built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] and the named [`palette`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Style fragments with ordered last-wins merging: [`ViewStyle`]
//! - The [`Widget`] and [`Canvas`] traits, plus a [`RecordingCanvas`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod palette;
mod style;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use style::{Alignment, ViewStyle};
pub use widget::{find_by_test_id, AccessibleRole, Canvas, LayoutResult, TypeId, Widget};
