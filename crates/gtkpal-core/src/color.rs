#![forbid(unsafe_code)]

//! RGBA color with the arithmetic the rule engine needs.
//!
//! Lightness scaling works in HSV space the way classic toolkit palettes do:
//! `lighter(150)` multiplies the value channel by 1.5 and spills any overflow
//! into reduced saturation; factors below 100 darken instead.

use core::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// The classic toolkit "gray" (`#a0a0a4`).
    pub const GRAY: Self = Self::rgb(160, 160, 164);
    pub const DARK_BLUE: Self = Self::rgb(0, 0, 128);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Return a lighter (or darker) color.
    ///
    /// `factor` is a percentage: 100 returns the color unchanged, 150 is 50%
    /// brighter, values below 100 darken via [`darker`](Self::darker) with
    /// the reciprocal factor. Non-positive factors are a no-op.
    #[must_use]
    pub fn lighter(self, factor: i32) -> Self {
        if factor <= 0 || factor == 100 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }

        let (h, mut s, v) = self.to_hsv();
        let mut v = v * f64::from(factor) / 100.0;
        if v > 255.0 {
            s = (s - (v - 255.0)).max(0.0);
            v = 255.0;
        }
        Self::from_hsv(h, s, v, self.a)
    }

    /// Return a darker (or lighter) color.
    ///
    /// `darker(200)` halves the value channel. Factors below 100 lighten via
    /// [`lighter`](Self::lighter) with the reciprocal factor.
    #[must_use]
    pub fn darker(self, factor: i32) -> Self {
        if factor <= 0 || factor == 100 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }

        let (h, s, v) = self.to_hsv();
        let v = v * 100.0 / f64::from(factor);
        Self::from_hsv(h, s, v, self.a)
    }

    /// Add signed offsets to the RGB channels, clamping to `0..=255`.
    #[must_use]
    pub fn offset(self, red: i32, green: i32, blue: i32) -> Self {
        fn add(channel: u8, delta: i32) -> u8 {
            (i32::from(channel) + delta).clamp(0, 255) as u8
        }
        Self {
            r: add(self.r, red),
            g: add(self.g, green),
            b: add(self.b, blue),
            a: self.a,
        }
    }

    /// Channel-wise average of two colors, alpha included.
    #[must_use]
    pub fn mix(self, other: Self) -> Self {
        fn avg(a: u8, b: u8) -> u8 {
            ((u16::from(a) + u16::from(b)) / 2) as u8
        }
        Self {
            r: avg(self.r, other.r),
            g: avg(self.g, other.g),
            b: avg(self.b, other.b),
            a: avg(self.a, other.a),
        }
    }

    /// HSL lightness in `0..=255`.
    #[must_use]
    pub fn lightness(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        ((u16::from(max) + u16::from(min)) / 2) as u8
    }

    /// Hex name: `#rrggbb` for opaque colors, `#aarrggbb` otherwise.
    #[must_use]
    pub fn name(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#aarrggbb` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let hex = name.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => None,
        }
    }

    /// Hue in degrees (`0..360`), saturation and value in `0..=255`.
    fn to_hsv(self) -> (f64, f64, f64) {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        if delta == 0.0 {
            return (0.0, 0.0, v);
        }
        let s = delta / max * 255.0;
        let h = if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (h.rem_euclid(360.0), s, v)
    }

    fn from_hsv(h: f64, s: f64, v: f64, a: u8) -> Self {
        let s = s.clamp(0.0, 255.0) / 255.0;
        let v = v.clamp(0.0, 255.0);
        if s == 0.0 {
            let c = v.round() as u8;
            return Self::rgba(c, c, c, a);
        }

        let h = h.rem_euclid(360.0) / 60.0;
        let sector = h.floor();
        let frac = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * frac);
        let t = v * (1.0 - s * (1.0 - frac));
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgba(r.round() as u8, g.round() as u8, b.round() as u8, a)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.name())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighter_100_is_identity() {
        let c = Color::rgb(12, 200, 99);
        assert_eq!(c.lighter(100), c);
        assert_eq!(c.darker(100), c);
    }

    #[test]
    fn lighter_scales_gray_value() {
        let gray = Color::rgb(128, 128, 128);
        assert_eq!(gray.lighter(150), Color::rgb(192, 192, 192));
        assert_eq!(gray.darker(200), Color::rgb(64, 64, 64));
    }

    #[test]
    fn lighter_below_100_darkens() {
        let gray = Color::rgb(200, 200, 200);
        assert_eq!(gray.lighter(50), Color::rgb(100, 100, 100));
    }

    #[test]
    fn lighter_overflow_desaturates() {
        let red = Color::rgb(255, 0, 0);
        let lighter = red.lighter(150);
        assert_eq!(lighter.r, 255);
        assert!(lighter.g > 0, "saturation should drop: {lighter:?}");
        assert_eq!(lighter.g, lighter.b);
    }

    #[test]
    fn lighter_preserves_alpha() {
        let c = Color::rgba(100, 100, 100, 40);
        assert_eq!(c.lighter(120).a, 40);
    }

    #[test]
    fn offset_clamps() {
        let c = Color::rgb(250, 5, 100);
        assert_eq!(c.offset(100, -100, 0), Color::rgb(255, 0, 100));
    }

    #[test]
    fn mix_averages_channels() {
        assert_eq!(
            Color::rgb(0, 100, 200).mix(Color::rgb(100, 200, 0)),
            Color::rgb(50, 150, 100)
        );
    }

    #[test]
    fn name_round_trips_opaque_and_alpha() {
        let c = Color::rgb(0x11, 0x22, 0x33);
        assert_eq!(c.name(), "#112233");
        assert_eq!(Color::from_name("#112233"), Some(c));

        let t = Color::rgba(0x11, 0x22, 0x33, 0x80);
        assert_eq!(t.name(), "#80112233");
        assert_eq!(Color::from_name(&t.name()), Some(t));
    }

    #[test]
    fn from_name_short_form_and_case() {
        assert_eq!(Color::from_name("#fA0"), Some(Color::rgb(255, 170, 0)));
        assert_eq!(Color::from_name("#ABCDEF"), Some(Color::rgb(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn from_name_rejects_garbage() {
        assert_eq!(Color::from_name("112233"), None);
        assert_eq!(Color::from_name("#12345"), None);
        assert_eq!(Color::from_name("#gg0000"), None);
        assert_eq!(Color::from_name(""), None);
    }

    #[test]
    fn lightness_orders_black_and_white() {
        assert_eq!(Color::BLACK.lightness(), 0);
        assert_eq!(Color::WHITE.lightness(), 255);
    }
}
