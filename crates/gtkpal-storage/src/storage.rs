#![forbid(unsafe_code)]

//! Palette, font and pixmap caches over a native theme.
//!
//! # Lifecycle
//!
//! Construction populates the rule tables for the current theme name.
//! Queries then fill the caches lazily. A theme change (native notification,
//! [`PaletteStorage::handle_theme_change`], or a changed desktop appearance
//! preference) clears rule tables, palettes, fonts, pixmaps and the derived
//! appearance, then rebuilds the tables before the triggering call returns.
//!
//! Native notifications are counted by the adapter and drained at the start
//! of every storage call: each pending notification performs its own full
//! clear and rebuild, in arrival order, before the call proceeds.
//!
//! # Appearance
//!
//! A Light/Dark desktop preference wins. Without one, a theme whose name
//! contains "dark" (any case) is dark and everything else light.

use std::path::Path;
use std::rc::Rc;

use ahash::AHashMap;
use gtkpal_core::pixmap::scaled;
use gtkpal_core::{
    Appearance, Font, FontKind, Icon, Palette, PaletteKind, Pixmap, RuleTable, RuleTables,
    StandardPixmap,
};
use gtkpal_native::{ChangeNotifier, NativeTheme};

use crate::builder::default_tables;
use crate::codec;
use crate::config::StorageConfig;
use crate::resolve::{Resolver, hardcode};

/// Caching palette resolver for one native theme.
#[derive(Debug)]
pub struct PaletteStorage<N: NativeTheme> {
    native: N,
    config: StorageConfig,
    notifier: Option<ChangeNotifier>,
    seen_generation: u64,

    /// `None` until the first population and transiently during a rebuild.
    theme_name: Option<String>,
    appearance: Appearance,
    preference: Appearance,
    tables: RuleTables,

    palettes: AHashMap<PaletteKind, Rc<Palette>>,
    fonts: AHashMap<FontKind, Option<Font>>,
    pixmaps: AHashMap<StandardPixmap, Option<Pixmap>>,
    rebuilds: u64,
}

impl<N: NativeTheme> PaletteStorage<N> {
    /// Storage with overrides read from the environment.
    pub fn new(native: N) -> Self {
        Self::with_config(native, StorageConfig::from_env())
    }

    pub fn with_config(native: N, config: StorageConfig) -> Self {
        let notifier = native.change_notifier();
        let seen_generation = notifier.as_ref().map_or(0, ChangeNotifier::generation);
        let mut storage = Self {
            native,
            config,
            notifier,
            seen_generation,
            theme_name: None,
            appearance: Appearance::Unknown,
            preference: Appearance::Unknown,
            tables: RuleTables::new(),
            palettes: AHashMap::new(),
            fonts: AHashMap::new(),
            pixmaps: AHashMap::new(),
            rebuilds: 0,
        };
        storage.populate();
        storage
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Resolved palette for `kind`.
    ///
    /// Kinds without rules share the system palette itself.
    pub fn palette(&mut self, kind: PaletteKind) -> Option<Rc<Palette>> {
        self.sync();
        Some(self.resolved(kind))
    }

    /// Resolved palette for a raw palette index; `None` when out of range.
    pub fn palette_at(&mut self, index: usize) -> Option<Rc<Palette>> {
        let kind = PaletteKind::from_index(index)?;
        self.palette(kind)
    }

    /// Native font for `kind`; `None` when the native side has none.
    pub fn font(&mut self, kind: FontKind) -> Option<Font> {
        self.sync();
        if let Some(font) = self.fonts.get(&kind) {
            return font.clone();
        }
        let font = self.native.font(kind);
        tracing::debug!(
            target: "gtkpal.storage",
            font = %kind,
            found = font.is_some(),
            "font cached"
        );
        self.fonts.insert(kind, font.clone());
        font
    }

    /// Standard pixmap scaled to `width`×`height`.
    ///
    /// The unscaled native image is cached per kind.
    pub fn standard_pixmap(
        &mut self,
        kind: StandardPixmap,
        width: u32,
        height: u32,
    ) -> Option<Pixmap> {
        self.sync();
        let native = &self.native;
        let image = self
            .pixmaps
            .entry(kind)
            .or_insert_with(|| native.standard_pixmap(kind))
            .as_ref()?;
        Some(scaled(image, width, height))
    }

    /// Desktop icon for a filesystem entry. Not cached.
    pub fn file_icon(&self, path: &Path) -> Option<Icon> {
        self.native.file_icon(path)
    }

    /// Appearance of the current theme.
    pub fn appearance(&mut self) -> Appearance {
        self.sync();
        self.appearance
    }

    /// Name of the theme the tables were built for.
    pub fn theme_name(&mut self) -> String {
        self.sync();
        self.theme_name.clone().unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Invalidation
    // -----------------------------------------------------------------------

    /// Drop every cache and rebuild the rule tables.
    ///
    /// Always rebuilds, even when the theme name did not change.
    pub fn handle_theme_change(&mut self) {
        self.clear();
        self.populate();
    }

    /// Rebuild only if the native theme name differs from the cached one.
    ///
    /// Returns whether a rebuild happened.
    pub fn refresh(&mut self) -> bool {
        self.sync();
        self.populate()
    }

    /// Apply a desktop Light/Dark preference. A changed preference triggers
    /// a full theme change.
    pub fn handle_appearance_preference(&mut self, preference: Appearance) {
        self.sync();
        if preference == self.preference {
            return;
        }
        tracing::info!(
            target: "gtkpal.storage",
            from = %self.preference,
            to = %preference,
            "appearance preference changed"
        );
        self.preference = preference;
        self.handle_theme_change();
    }

    /// Apply a raw settings-portal `color-scheme` value.
    pub fn handle_color_scheme(&mut self, value: u32) {
        self.handle_appearance_preference(Appearance::from_portal_value(value));
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Replace the rule tables with the document at `path`.
    ///
    /// On failure the current tables stay in place and `false` is returned.
    pub fn load(&mut self, path: &Path) -> bool {
        self.sync();
        match codec::load(path) {
            Ok(tables) => {
                self.tables = tables;
                self.palettes.clear();
                true
            }
            Err(error) => {
                tracing::warn!(
                    target: "gtkpal.storage",
                    path = %path.display(),
                    %error,
                    "rule tables not loaded"
                );
                false
            }
        }
    }

    /// Write the rule tables to `path`, optionally with native sources
    /// replaced by the colors they currently resolve to.
    pub fn save(&mut self, path: &Path, hardcoded: bool) -> bool {
        self.sync();
        self.write_tables(path, hardcoded)
    }

    fn write_tables(&self, path: &Path, hardcoded: bool) -> bool {
        let result = if hardcoded {
            codec::save(&hardcode(&self.tables, &self.native), path)
        } else {
            codec::save(&self.tables, path)
        };
        match result {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(
                    target: "gtkpal.storage",
                    path = %path.display(),
                    %error,
                    "rule tables not saved"
                );
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Active rule tables, after any pending native change is applied.
    pub fn tables(&mut self) -> &RuleTables {
        self.sync();
        &self.tables
    }

    /// Number of times the rule tables were rebuilt.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    #[must_use]
    pub fn native(&self) -> &N {
        &self.native
    }

    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Handle every native change notification that arrived since the last
    /// call, one full theme change per notification.
    fn sync(&mut self) {
        let Some(generation) = self.notifier.as_ref().map(ChangeNotifier::generation) else {
            return;
        };
        let pending = generation.wrapping_sub(self.seen_generation);
        if pending == 0 {
            return;
        }
        tracing::debug!(target: "gtkpal.storage", pending, "native theme changes observed");
        self.seen_generation = generation;
        for _ in 0..pending {
            self.handle_theme_change();
        }
    }

    fn clear(&mut self) {
        self.theme_name = None;
        self.appearance = Appearance::Unknown;
        self.tables.clear();
        self.palettes.clear();
        self.fonts.clear();
        self.pixmaps.clear();
    }

    /// Build the rule tables for the native theme unless they are already
    /// built for its current name. Returns whether a rebuild happened.
    fn populate(&mut self) -> bool {
        let name = self.native.theme_name();
        if self.theme_name.as_deref() == Some(name.as_str()) {
            return false;
        }
        let first = self.rebuilds == 0;
        self.clear();

        self.appearance = match self.preference {
            Appearance::Unknown => Appearance::from_theme_name(&name),
            preferred => preferred,
        };
        self.tables = self.initial_tables();
        self.rebuilds += 1;

        tracing::info!(
            target: "gtkpal.storage",
            theme = %name,
            appearance = %self.appearance,
            rules = self.tables.rule_count(),
            "{}",
            if first { "theme initialized" } else { "theme changed" }
        );
        self.theme_name = Some(name);

        if let Some(path) = &self.config.save_path {
            if !self.write_tables(path, self.config.hardcoded) {
                tracing::warn!(
                    target: "gtkpal.storage",
                    path = %path.display(),
                    "configured rule-table dump failed"
                );
            }
        }
        true
    }

    fn initial_tables(&self) -> RuleTables {
        if let Some(path) = &self.config.load_path {
            match codec::load(path) {
                Ok(tables) => return tables,
                Err(error) => tracing::warn!(
                    target: "gtkpal.storage",
                    path = %path.display(),
                    %error,
                    "falling back to built-in rule tables"
                ),
            }
        }
        default_tables()
    }

    /// Resolve `kind`, resolving the system palette first when needed.
    fn resolved(&mut self, kind: PaletteKind) -> Rc<Palette> {
        if let Some(palette) = self.palettes.get(&kind) {
            return Rc::clone(palette);
        }

        let seed = if kind == PaletteKind::SystemPalette {
            Palette::baseline()
        } else {
            let system = self.resolved(PaletteKind::SystemPalette);
            if self.tables.get(kind).is_none_or(RuleTable::is_empty) {
                return system;
            }
            (*system).clone()
        };

        let mut palette = seed;
        if let Some(table) = self.tables.get(kind) {
            Resolver::new(&self.native, table).overlay(&mut palette, self.appearance);
        }
        tracing::debug!(target: "gtkpal.storage", palette = %kind, "palette resolved");

        let palette = Rc::new(palette);
        self.palettes.insert(kind, Rc::clone(&palette));
        palette
    }
}
