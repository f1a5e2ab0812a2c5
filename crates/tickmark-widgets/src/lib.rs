//! Widget implementations for the tickmark widget library.
//!
//! ```
//! use tickmark_widgets::{Checkbox, CheckboxProps};
//! use tickmark_core::Color;
//!
//! let checkbox = Checkbox::new(
//!     CheckboxProps::new()
//!         .value(true)
//!         .color(Color::from_hex("#FF0000").expect("valid hex"))
//!         .size(30.0),
//! );
//! assert_eq!(checkbox.container_style().width, Some(30.0));
//! assert!(checkbox.icon().is_some());
//! ```

pub mod assets;
pub mod checkbox;
pub mod config;
pub mod image;
pub mod pressable;
pub mod theme;

pub use assets::AssetRef;
pub use checkbox::{Checkbox, CheckboxChanged, CheckboxProps, ResolvedProps, ValueChangeHandler};
pub use config::{CheckboxConfig, ConfigError, ThemeConfig};
pub use image::Image;
pub use pressable::{Pressable, Pressed};
pub use theme::CheckboxTheme;
