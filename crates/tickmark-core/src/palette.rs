//! Named design-system colors.
//!
//! Shades are numbered from dark to light.

use crate::Color;

const fn opaque(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

/// Dark blue, `#2052C1`.
pub const BLUE10: Color = opaque(32.0 / 255.0, 82.0 / 255.0, 193.0 / 255.0);
/// Primary interactive blue, `#459FED`.
pub const BLUE30: Color = opaque(69.0 / 255.0, 159.0 / 255.0, 237.0 / 255.0);
/// `#20303C`.
pub const DARK10: Color = opaque(32.0 / 255.0, 48.0 / 255.0, 60.0 / 255.0);
/// `#FFFFFF`.
pub const WHITE: Color = Color::WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_hex() {
        assert_eq!(Color::from_hex("#2052C1").unwrap(), BLUE10);
        assert_eq!(Color::from_hex("#459FED").unwrap(), BLUE30);
        assert_eq!(Color::from_hex("#20303C").unwrap(), DARK10);
        assert_eq!(Color::from_hex("#ffffff").unwrap(), WHITE);
    }

    #[test]
    fn test_palette_to_hex() {
        assert_eq!(BLUE30.to_hex(), "#459fed");
        assert_eq!(DARK10.to_hex(), "#20303c");
    }
}
