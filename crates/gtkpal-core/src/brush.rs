#![forbid(unsafe_code)]

//! Brushes: the materialized output of rule resolution.
//!
//! A brush is a color plus an optional texture. Native pixmap assets are not
//! retrievable through the adapter boundary, so textures are carried as a
//! size-only placeholder. An *empty* brush is modelled as `Option<Brush>::None`
//! by callers; a `Brush` value always has a color.

use crate::color::Color;

/// Width and height of a texture placeholder, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    /// Build a texture size from signed dimensions.
    ///
    /// Returns `None` unless both dimensions are positive, so the `-1`
    /// "unset" convention of stored rule documents maps to no texture.
    #[must_use]
    pub fn from_signed(width: i64, height: i64) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(Self {
                width: u32::try_from(width).ok()?,
                height: u32::try_from(height).ok()?,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Option<Self> {
        if width > 0 && height > 0 {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

/// A solid color with an optional texture placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brush {
    pub color: Color,
    pub texture: Option<TextureSize>,
}

impl Brush {
    /// A solid brush without texture.
    #[inline]
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            texture: None,
        }
    }

    /// Same brush with the texture replaced.
    #[must_use]
    pub const fn with_texture(self, texture: Option<TextureSize>) -> Self {
        Self { texture, ..self }
    }

    /// Same brush with the color replaced.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_requires_positive_dimensions() {
        assert_eq!(TextureSize::from_signed(-1, -1), None);
        assert_eq!(TextureSize::from_signed(10, 0), None);
        assert_eq!(
            TextureSize::from_signed(10, 20),
            Some(TextureSize {
                width: 10,
                height: 20
            })
        );
        assert_eq!(TextureSize::new(0, 4), None);
    }

    #[test]
    fn with_texture_keeps_color() {
        let brush = Brush::solid(Color::WHITE).with_texture(TextureSize::new(4, 4));
        assert_eq!(brush.color, Color::WHITE);
        assert_eq!(brush.texture, TextureSize::new(4, 4));
    }
}
