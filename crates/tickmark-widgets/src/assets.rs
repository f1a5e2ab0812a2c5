//! Bundled image assets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a local image asset by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    /// Reference an asset by name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Asset name as passed to the canvas.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check whether this points at one of the bundled icons.
    #[must_use]
    pub fn is_bundled_icon(&self) -> bool {
        self.0.starts_with(icons::PREFIX)
    }
}

impl From<&str> for AssetRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bundled icon set. Icons are drawn at [`icons::SIZE`] unless styled.
pub mod icons {
    use super::AssetRef;

    pub(crate) const PREFIX: &str = "icons/";

    /// Intrinsic edge length of bundled icons, in pixels.
    pub const SIZE: f32 = 16.0;

    /// Small check mark used by selection controls.
    #[must_use]
    pub fn check_small() -> AssetRef {
        AssetRef::new("icons/check_small")
    }
}
