#![forbid(unsafe_code)]

//! Image and icon types returned by pixmap and file-icon queries.

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// An RGBA raster image.
pub type Pixmap = RgbaImage;

/// Scale a pixmap to `width`×`height`.
///
/// Returns a clone when the size already matches; zero-sized targets yield
/// an empty image.
#[must_use]
pub fn scaled(pixmap: &Pixmap, width: u32, height: u32) -> Pixmap {
    if width == 0 || height == 0 {
        return Pixmap::new(0, 0);
    }
    if pixmap.dimensions() == (width, height) {
        return pixmap.clone();
    }
    imageops::resize(pixmap, width, height, FilterType::Triangle)
}

/// A named desktop icon with its rendered image.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Icon-theme name the native side resolved (e.g. `text-x-generic`).
    pub name: String,
    pub image: Pixmap,
}

impl Icon {
    #[must_use]
    pub fn new(name: impl Into<String>, image: Pixmap) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}
