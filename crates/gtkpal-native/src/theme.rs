#![forbid(unsafe_code)]

//! The boundary the palette storage consumes.

use std::path::Path;

use gtkpal_core::{
    Color, ColorChannel, Font, FontKind, Icon, NativeState, Pixmap, StandardPixmap, WidgetKind,
};

use crate::notify::ChangeNotifier;

/// A live source of native theme data.
///
/// Every query may fail; failures are `None` and callers degrade to empty
/// brushes, default fonts or empty images.
pub trait NativeTheme {
    /// Color of `channel` on a synthetic widget of `widget` kind in `state`.
    fn color(&self, widget: WidgetKind, channel: ColorChannel, state: NativeState)
    -> Option<Color>;

    fn font(&self, kind: FontKind) -> Option<Font>;

    /// Unscaled standard icon. `None` for kinds with no native counterpart.
    fn standard_pixmap(&self, kind: StandardPixmap) -> Option<Pixmap>;

    fn file_icon(&self, path: &Path) -> Option<Icon>;

    fn theme_name(&self) -> String;

    /// Notifier bumped on native theme changes, if registration succeeded.
    fn change_notifier(&self) -> Option<ChangeNotifier> {
        None
    }
}

/// A theme with no native data at all.
///
/// Stands in when no toolkit is available; palettes then come entirely from
/// fixed rules and the baseline palette.
#[derive(Debug, Clone, Default)]
pub struct NullTheme {
    name: String,
}

impl NullTheme {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NativeTheme for NullTheme {
    fn color(&self, _: WidgetKind, _: ColorChannel, _: NativeState) -> Option<Color> {
        None
    }

    fn font(&self, _: FontKind) -> Option<Font> {
        None
    }

    fn standard_pixmap(&self, _: StandardPixmap) -> Option<Pixmap> {
        None
    }

    fn file_icon(&self, _: &Path) -> Option<Icon> {
        None
    }

    fn theme_name(&self) -> String {
        self.name.clone()
    }
}

impl<T: NativeTheme + ?Sized> NativeTheme for Box<T> {
    fn color(
        &self,
        widget: WidgetKind,
        channel: ColorChannel,
        state: NativeState,
    ) -> Option<Color> {
        (**self).color(widget, channel, state)
    }

    fn font(&self, kind: FontKind) -> Option<Font> {
        (**self).font(kind)
    }

    fn standard_pixmap(&self, kind: StandardPixmap) -> Option<Pixmap> {
        (**self).standard_pixmap(kind)
    }

    fn file_icon(&self, path: &Path) -> Option<Icon> {
        (**self).file_icon(path)
    }

    fn theme_name(&self) -> String {
        (**self).theme_name()
    }

    fn change_notifier(&self) -> Option<ChangeNotifier> {
        (**self).change_notifier()
    }
}
