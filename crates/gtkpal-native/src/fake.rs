#![forbid(unsafe_code)]

//! In-memory [`StyleBackend`] for tests.
//!
//! Clones share state, so a test can keep one handle to retheme the toolkit
//! while the adapter under test owns another.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ahash::AHashMap;
use gtkpal_core::{Color, Icon, NativeState, Pixmap, WidgetKind};

use crate::backend::{GenericChannel, NativeFont, NativeSlant, StyleBackend, WidgetHandle};
use crate::fonts::MONOSPACE_CLASS;

type Callback = Box<dyn Fn()>;

#[derive(Default)]
struct State {
    theme_name: String,
    named: AHashMap<String, Color>,
    widget_named: AHashMap<(WidgetKind, String), Color>,
    generic: AHashMap<(GenericChannel, NativeState), Color>,
    font: Option<NativeFont>,
    monospace_font: Option<NativeFont>,
    stock_icons: AHashMap<String, Pixmap>,
    file_icons: AHashMap<PathBuf, Icon>,
    widgets: AHashMap<WidgetHandle, WidgetKind>,
    unbuildable: Vec<WidgetKind>,
    callbacks: Vec<Callback>,
    refuse_connect: bool,
    widgets_created: usize,
    color_reads: usize,
    font_reads: usize,
    icon_reads: usize,
}

/// Deterministic toolkit stand-in with call counters.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<State>>,
}

impl std::fmt::Debug for FakeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FakeBackend")
            .field("theme_name", &state.theme_name)
            .field("widgets_created", &state.widgets_created)
            .field("color_reads", &state.color_reads)
            .finish_non_exhaustive()
    }
}

impl FakeBackend {
    #[must_use]
    pub fn new(theme_name: &str) -> Self {
        let backend = Self::default();
        backend.set_theme_name(theme_name);
        backend
    }

    pub fn set_theme_name(&self, name: &str) {
        self.state.borrow_mut().theme_name = name.to_owned();
    }

    /// Define a named color on every style context.
    pub fn set_named_color(&self, name: &str, color: Color) {
        self.state.borrow_mut().named.insert(name.to_owned(), color);
    }

    /// Define a named color on one widget kind only, shadowing the global one.
    pub fn set_widget_color(&self, kind: WidgetKind, name: &str, color: Color) {
        self.state
            .borrow_mut()
            .widget_named
            .insert((kind, name.to_owned()), color);
    }

    pub fn remove_named_color(&self, name: &str) {
        self.state.borrow_mut().named.remove(name);
    }

    pub fn set_generic_color(&self, channel: GenericChannel, state: NativeState, color: Color) {
        self.state
            .borrow_mut()
            .generic
            .insert((channel, state), color);
    }

    pub fn set_font(&self, font: NativeFont) {
        self.state.borrow_mut().font = Some(font);
    }

    /// Font returned when the `monospace` style class is requested.
    pub fn set_monospace_font(&self, font: NativeFont) {
        self.state.borrow_mut().monospace_font = Some(font);
    }

    pub fn set_stock_icon(&self, name: &str, pixmap: Pixmap) {
        self.state
            .borrow_mut()
            .stock_icons
            .insert(name.to_owned(), pixmap);
    }

    pub fn set_file_icon(&self, path: &Path, icon: Icon) {
        self.state
            .borrow_mut()
            .file_icons
            .insert(path.to_path_buf(), icon);
    }

    /// Make `create_widget` fail for `kind`.
    pub fn refuse_widget(&self, kind: WidgetKind) {
        self.state.borrow_mut().unbuildable.push(kind);
    }

    /// Make `connect_settings_changed` fail.
    pub fn refuse_settings_connection(&self) {
        self.state.borrow_mut().refuse_connect = true;
    }

    /// Invoke every registered settings-changed callback.
    pub fn fire_settings_changed(&self) {
        let callbacks = std::mem::take(&mut self.state.borrow_mut().callbacks);
        for callback in &callbacks {
            callback();
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.callbacks);
        state.callbacks = callbacks;
        state.callbacks.extend(added);
    }

    #[must_use]
    pub fn widgets_created(&self) -> usize {
        self.state.borrow().widgets_created
    }

    /// Named plus generic color reads.
    #[must_use]
    pub fn color_reads(&self) -> usize {
        self.state.borrow().color_reads
    }

    #[must_use]
    pub fn font_reads(&self) -> usize {
        self.state.borrow().font_reads
    }

    /// Stock-icon plus file-icon reads.
    #[must_use]
    pub fn icon_reads(&self) -> usize {
        self.state.borrow().icon_reads
    }

    /// Kind of the widget behind `handle`.
    #[must_use]
    pub fn widget_kind(&self, handle: WidgetHandle) -> Option<WidgetKind> {
        self.state.borrow().widgets.get(&handle).copied()
    }

    #[must_use]
    pub fn default_font() -> NativeFont {
        NativeFont {
            family: "Cantarell".to_owned(),
            weight: 400,
            slant: NativeSlant::Normal,
            size: 11 * NativeFont::SCALE,
            monospace: false,
        }
    }
}

impl StyleBackend for FakeBackend {
    fn theme_name(&self) -> String {
        self.state.borrow().theme_name.clone()
    }

    fn create_widget(&self, kind: WidgetKind) -> Option<WidgetHandle> {
        let mut state = self.state.borrow_mut();
        if state.unbuildable.contains(&kind) {
            return None;
        }
        state.widgets_created += 1;
        let handle = WidgetHandle::new(state.widgets_created as u64);
        state.widgets.insert(handle, kind);
        Some(handle)
    }

    fn lookup_color(&self, widget: Option<WidgetHandle>, name: &str) -> Option<Color> {
        let mut state = self.state.borrow_mut();
        state.color_reads += 1;
        let kind = widget.and_then(|w| state.widgets.get(&w).copied());
        kind.and_then(|k| state.widget_named.get(&(k, name.to_owned())).copied())
            .or_else(|| state.named.get(name).copied())
    }

    fn generic_color(
        &self,
        _widget: Option<WidgetHandle>,
        channel: GenericChannel,
        native: NativeState,
    ) -> Option<Color> {
        let mut state = self.state.borrow_mut();
        state.color_reads += 1;
        state.generic.get(&(channel, native)).copied()
    }

    fn font(&self, _widget: Option<WidgetHandle>, style_class: Option<&str>) -> Option<NativeFont> {
        let mut state = self.state.borrow_mut();
        state.font_reads += 1;
        if style_class == Some(MONOSPACE_CLASS) && state.monospace_font.is_some() {
            return state.monospace_font.clone();
        }
        state.font.clone()
    }

    fn stock_icon(&self, name: &str) -> Option<Pixmap> {
        let mut state = self.state.borrow_mut();
        state.icon_reads += 1;
        state.stock_icons.get(name).cloned()
    }

    fn content_type_icon(&self, path: &Path) -> Option<Icon> {
        let mut state = self.state.borrow_mut();
        state.icon_reads += 1;
        state.file_icons.get(path).cloned()
    }

    fn connect_settings_changed(&self, callback: Box<dyn Fn()>) -> bool {
        let mut state = self.state.borrow_mut();
        if state.refuse_connect {
            return false;
        }
        state.callbacks.push(callback);
        true
    }
}
