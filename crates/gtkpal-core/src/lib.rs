#![forbid(unsafe_code)]

//! Shared vocabulary for gtkpal: colors, brushes, palettes and rule sources.
//!
//! # Role in gtkpal
//! `gtkpal-core` defines the value types every other crate speaks. The native
//! adapter returns [`Color`]s and [`Font`]s, the storage crate resolves
//! [`ColorSource`] rules held in [`RuleTable`]s into [`Palette`]s, and the
//! JSON codec serializes enums through [`NamedEnum`] names.
//!
//! # This crate provides
//! - [`Color`] with lightness scaling and per-channel offsets.
//! - [`Brush`], a color plus an optional texture size.
//! - [`Palette`], brushes indexed by [`ColorGroup`] and [`ColorRole`].
//! - The closed enumerations of the theme model ([`PaletteKind`],
//!   [`Appearance`], [`WidgetKind`], [`ColorChannel`], [`NativeState`],
//!   [`FontKind`], [`StandardPixmap`]).
//! - [`TargetBrush`], [`ColorSource`] and the [`RuleTable`] /
//!   [`RuleTables`] containers.
//!
//! Nothing here touches a native toolkit; every type is plain data.

#[macro_use]
mod named;

/// Brush type: color plus optional texture.
pub mod brush;
/// RGBA color type and color arithmetic.
pub mod color;
/// Font description types.
pub mod font;
/// Closed enumerations of the theme model.
pub mod kinds;
/// Palette type indexed by color group and role.
pub mod palette;
/// Image and icon types.
pub mod pixmap;
/// Rule sources, targets and rule tables.
pub mod source;

pub use brush::{Brush, TextureSize};
pub use color::Color;
pub use font::{Font, FontStyle, FontWeight};
pub use kinds::{
    Appearance, ColorChannel, FontKind, NativeState, PaletteKind, StandardPixmap, WidgetKind,
};
pub use named::NamedEnum;
pub use palette::{ColorGroup, ColorRole, Palette};
pub use pixmap::{Icon, Pixmap};
pub use source::{
    ColorSource, DerivedSource, MixSource, NativeSource, RuleTable, RuleTables, TargetBrush,
};
