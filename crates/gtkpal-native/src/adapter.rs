#![forbid(unsafe_code)]

//! [`NativeTheme`] over a [`StyleBackend`].
//!
//! # Widget handles
//!
//! Synthetic widgets are created on first use and cached for the adapter's
//! lifetime, one per [`WidgetKind`]. A failed creation is cached as well.
//! `WidgetKind::Default` never creates a widget; it and any widget that
//! could not be built read from the entry widget's style context, falling
//! back to the toolkit default context when even that is unavailable.
//!
//! # Change notification
//!
//! The adapter registers a settings-changed callback at construction that
//! bumps its [`ChangeNotifier`]. If the toolkit refuses the registration the
//! adapter keeps working but reports no notifier.

use std::cell::RefCell;
use std::path::Path;

use ahash::AHashMap;
use gtkpal_core::{
    Color, ColorChannel, Font, FontKind, Icon, NativeState, Pixmap, StandardPixmap, WidgetKind,
};

use crate::backend::{StyleBackend, WidgetHandle};
use crate::fonts::{self, MONOSPACE_CLASS};
use crate::icons::stock_icon_name;
use crate::notify::ChangeNotifier;
use crate::properties::property_for;
use crate::theme::NativeTheme;

/// Adapter from a raw toolkit to the [`NativeTheme`] boundary.
#[derive(Debug)]
pub struct NativeAdapter<B: StyleBackend> {
    backend: B,
    widgets: RefCell<AHashMap<WidgetKind, Option<WidgetHandle>>>,
    notifier: Option<ChangeNotifier>,
}

impl<B: StyleBackend> NativeAdapter<B> {
    pub fn new(backend: B) -> Self {
        let notifier = ChangeNotifier::new();
        let hook = notifier.clone();
        let connected = backend.connect_settings_changed(Box::new(move || hook.notify()));
        if !connected {
            tracing::warn!(
                target: "gtkpal.native",
                "settings-changed registration refused; live theme changes will not be observed"
            );
        }
        Self {
            backend,
            widgets: RefCell::new(AHashMap::new()),
            notifier: connected.then_some(notifier),
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Cached widget handle for `kind`, creating it on first request.
    ///
    /// `WidgetKind::Default` is never instantiated.
    pub fn widget(&self, kind: WidgetKind) -> Option<WidgetHandle> {
        if kind == WidgetKind::Default {
            return None;
        }
        if let Some(handle) = self.widgets.borrow().get(&kind) {
            return *handle;
        }
        let handle = self.backend.create_widget(kind);
        if handle.is_none() {
            tracing::debug!(target: "gtkpal.native", widget = %kind, "widget creation failed");
        }
        self.widgets.borrow_mut().insert(kind, handle);
        handle
    }

    /// Widget whose style context answers queries for `kind`.
    fn context(&self, kind: WidgetKind) -> Option<WidgetHandle> {
        self.widget(kind).or_else(|| self.widget(WidgetKind::Entry))
    }
}

impl<B: StyleBackend> NativeTheme for NativeAdapter<B> {
    fn color(
        &self,
        widget: WidgetKind,
        channel: ColorChannel,
        state: NativeState,
    ) -> Option<Color> {
        let context = self.context(widget);
        let property = property_for(channel, state);
        if let Some(name) = property.name {
            if let Some(color) = self.backend.lookup_color(context, name) {
                return Some(color);
            }
            tracing::trace!(
                target: "gtkpal.native",
                property = name,
                fallback = ?property.fallback,
                "named color not defined by theme"
            );
        }
        self.backend
            .generic_color(context, property.fallback, state)
    }

    fn font(&self, kind: FontKind) -> Option<Font> {
        let fixed = kind == FontKind::FixedFont;
        let context = self.context(fonts::widget_for_font(kind));
        let class = fixed.then_some(MONOSPACE_CLASS);
        let native = self.backend.font(context, class)?;
        Some(fonts::convert(&native, fixed))
    }

    fn standard_pixmap(&self, kind: StandardPixmap) -> Option<Pixmap> {
        let name = stock_icon_name(kind)?;
        self.backend.stock_icon(name)
    }

    fn file_icon(&self, path: &Path) -> Option<Icon> {
        if !path.exists() {
            return None;
        }
        self.backend.content_type_icon(path)
    }

    fn theme_name(&self) -> String {
        self.backend.theme_name()
    }

    fn change_notifier(&self) -> Option<ChangeNotifier> {
        self.notifier.clone()
    }
}
