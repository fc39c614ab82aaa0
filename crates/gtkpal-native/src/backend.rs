#![forbid(unsafe_code)]

//! Raw toolkit surface.
//!
//! A [`StyleBackend`] wraps the live GUI toolkit: it instantiates synthetic
//! widgets, reads style-context colors and fonts, renders stock icons and
//! reports settings changes. Everything above this trait is toolkit-agnostic.

use std::path::Path;

use gtkpal_core::{Color, Icon, NativeState, Pixmap, WidgetKind};

/// Opaque handle to a widget created by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetHandle(u64);

impl WidgetHandle {
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Color getters every style context provides, independent of theme-defined
/// named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericChannel {
    Foreground,
    Background,
    Border,
}

/// Font slant as reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NativeSlant {
    #[default]
    Normal,
    Oblique,
    Italic,
}

/// A font description in the toolkit's own units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFont {
    pub family: String,
    /// Weight on the native 100..=1000 scale.
    pub weight: i32,
    pub slant: NativeSlant,
    /// Size in 1/1024 points.
    pub size: i32,
    /// The face the toolkit picked is fixed-pitch.
    pub monospace: bool,
}

impl NativeFont {
    /// Scale factor between native size units and points.
    pub const SCALE: i32 = 1024;
}

/// The live toolkit.
///
/// `widget = None` addresses the toolkit's default style context.
pub trait StyleBackend {
    /// Name of the active native theme.
    fn theme_name(&self) -> String;

    /// Instantiate a synthetic widget of `kind`. `None` when the toolkit
    /// cannot build one.
    fn create_widget(&self, kind: WidgetKind) -> Option<WidgetHandle>;

    /// Look up a theme-defined named color on a widget's style context.
    fn lookup_color(&self, widget: Option<WidgetHandle>, name: &str) -> Option<Color>;

    /// Read a generic style-context color at `state`.
    fn generic_color(
        &self,
        widget: Option<WidgetHandle>,
        channel: GenericChannel,
        state: NativeState,
    ) -> Option<Color>;

    /// Font of a widget's style context, optionally after adding a style
    /// class (e.g. `monospace`).
    fn font(&self, widget: Option<WidgetHandle>, style_class: Option<&str>) -> Option<NativeFont>;

    /// Render a stock icon by its toolkit identifier.
    fn stock_icon(&self, name: &str) -> Option<Pixmap>;

    /// Desktop icon for the content type of an existing filesystem entry.
    fn content_type_icon(&self, path: &Path) -> Option<Icon>;

    /// Register a settings-changed callback. Returns `false` when the
    /// toolkit refused the registration.
    fn connect_settings_changed(&self, callback: Box<dyn Fn()>) -> bool;
}
