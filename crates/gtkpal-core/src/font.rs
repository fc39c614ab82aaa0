#![forbid(unsafe_code)]

//! Font descriptions produced by the native adapter.

/// Font weight on the toolkit's 1..=1000 scale (400 = normal, 700 = bold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeight(u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const EXTRA_LIGHT: Self = Self(200);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const DEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const EXTRA_BOLD: Self = Self(800);
    pub const BLACK: Self = Self(900);

    /// Weight from a raw value, clamped into `1..=1000`.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(1, 1000) as u16)
    }

    /// Map a native (Pango-scale) weight onto this scale.
    ///
    /// Named native stops snap to the nearest named weight here; the
    /// semilight/book stops collapse onto `LIGHT` and ultraheavy onto
    /// `BLACK`. Anything else is clamped into `THIN..=BLACK`.
    #[must_use]
    pub fn from_native(weight: i32) -> Self {
        match weight {
            100 => Self::THIN,
            200 => Self::EXTRA_LIGHT,
            300 | 350 | 380 => Self::LIGHT,
            400 => Self::NORMAL,
            500 => Self::MEDIUM,
            600 => Self::DEMI_BOLD,
            700 => Self::BOLD,
            800 => Self::EXTRA_BOLD,
            900 | 1000 => Self::BLACK,
            other => Self::new(other.clamp(100, 900)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Slant of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// A resolved font.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Size in points.
    pub point_size: f64,
    /// Whether the face is known to be fixed-pitch.
    pub fixed_pitch: bool,
}

impl Font {
    /// A regular-weight, upright font of the given family and size.
    #[must_use]
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            point_size,
            fixed_pitch: false,
        }
    }
}
