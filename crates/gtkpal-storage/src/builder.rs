#![forbid(unsafe_code)]

//! Declarative rule-table construction.
//!
//! The builder keeps a working table. A source constructor ([`native`],
//! [`lighter`], [`modify`], [`fixed`], [`mix`]) opens a [`Pending`] scope;
//! each `add` in that scope registers the source for one target. [`save`]
//! snapshots the working table under a palette kind without clearing it, so
//! consecutive kinds can share rules; [`clear`] starts over.
//!
//! Re-adding an exact target silently replaces the earlier rule.
//!
//! [`native`]: RuleTableBuilder::native
//! [`lighter`]: RuleTableBuilder::lighter
//! [`modify`]: RuleTableBuilder::modify
//! [`fixed`]: RuleTableBuilder::fixed
//! [`mix`]: RuleTableBuilder::mix
//! [`save`]: RuleTableBuilder::save
//! [`clear`]: RuleTableBuilder::clear

use gtkpal_core::{
    Appearance, Brush, ColorChannel, ColorGroup, ColorRole, ColorSource, NativeState,
    PaletteKind, RuleTable, RuleTables, TargetBrush, WidgetKind,
};

/// Fluent builder for a full [`RuleTables`] set.
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    working: RuleTable,
    tables: RuleTables,
}

/// A source waiting to be registered under one or more targets.
#[derive(Debug)]
pub struct Pending<'a> {
    builder: &'a mut RuleTableBuilder,
    source: ColorSource,
}

impl Pending<'_> {
    /// Register for `(group, role)` in any appearance.
    pub fn add(self, group: ColorGroup, role: ColorRole) -> Self {
        self.add_for(group, role, Appearance::Unknown)
    }

    /// Register for `(group, role)` in one appearance only.
    pub fn add_for(self, group: ColorGroup, role: ColorRole, appearance: Appearance) -> Self {
        self.builder
            .working
            .insert(TargetBrush::new(group, role, appearance), self.source);
        self
    }
}

impl RuleTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&mut self, source: ColorSource) -> Pending<'_> {
        Pending {
            builder: self,
            source,
        }
    }

    pub fn native(
        &mut self,
        widget: WidgetKind,
        channel: ColorChannel,
        state: NativeState,
    ) -> Pending<'_> {
        self.source(ColorSource::native(widget, channel, state))
    }

    pub fn lighter(&mut self, group: ColorGroup, role: ColorRole, lighter: i32) -> Pending<'_> {
        self.source(ColorSource::lighter(group, role, lighter))
    }

    pub fn modify(
        &mut self,
        group: ColorGroup,
        role: ColorRole,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Pending<'_> {
        self.source(ColorSource::modify(group, role, red, green, blue))
    }

    pub fn fixed(&mut self, brush: impl Into<Brush>) -> Pending<'_> {
        self.source(ColorSource::fixed(brush.into()))
    }

    pub fn mix(&mut self, first: TargetBrush, second: TargetBrush) -> Pending<'_> {
        self.source(ColorSource::mix(first, second))
    }

    /// Store a copy of the working table as the table for `kind`.
    pub fn save(&mut self, kind: PaletteKind) -> &mut Self {
        self.tables.insert(kind, self.working.clone());
        self
    }

    /// Empty the working table.
    pub fn clear(&mut self) -> &mut Self {
        self.working = RuleTable::new();
        self
    }

    /// Rules added since the last [`clear`](Self::clear).
    #[must_use]
    pub fn working(&self) -> &RuleTable {
        &self.working
    }

    #[must_use]
    pub fn build(self) -> RuleTables {
        self.tables
    }
}

/// The built-in rule tables.
///
/// Defines the system palette plus check box, radio button, combo box,
/// group box, menu, menu bar and line edit. Every other kind is left to fall
/// back onto the system palette.
#[must_use]
pub fn default_tables() -> RuleTables {
    use Appearance::{Dark, Light};
    use ColorChannel as C;
    use ColorGroup::{All, Disabled, Inactive, Normal};
    use ColorRole as R;
    use NativeState as S;
    use WidgetKind as W;

    let mut b = RuleTableBuilder::new();

    // System palette: window background and the frame shades derived from it.
    b.native(W::Default, C::Background, S::Insensitive)
        .add(Normal, R::Window)
        .add(Normal, R::Button)
        .add(Normal, R::Base)
        .add(Inactive, R::Base)
        .add(Inactive, R::Window)
        .add(Disabled, R::Base);
    b.lighter(Normal, R::Window, 125)
        .add(Normal, R::Light)
        .add(Inactive, R::Light);
    b.lighter(Normal, R::Window, 70).add(Normal, R::Shadow);
    b.lighter(Normal, R::Window, 80).add(Normal, R::Dark);
    b.lighter(Normal, R::Window, 90).add(Normal, R::Mid);
    b.lighter(Normal, R::Window, 110).add(Normal, R::Midlight);

    b.native(W::Button, C::Foreground, S::Active)
        .add(Inactive, R::WindowText);
    b.native(W::Button, C::Text, S::Normal)
        .add(Inactive, R::ButtonText);
    b.native(W::Button, C::Text, S::Insensitive)
        .add(Disabled, R::ButtonText);

    // Selection.
    b.native(W::Default, C::Background, S::Selected)
        .add(Normal, R::Highlight)
        .add(Disabled, R::Highlight)
        .add(All, R::Accent);
    b.native(W::Default, C::Background, S::Backdrop)
        .add(Inactive, R::Highlight);
    b.native(W::Entry, C::Foreground, S::Selected)
        .add(Normal, R::HighlightedText);
    b.native(W::Entry, C::Background, S::Active)
        .add(Inactive, R::HighlightedText);

    // Text and friends.
    b.native(W::Entry, C::Text, S::Normal)
        .add(Normal, R::ButtonText)
        .add(Normal, R::WindowText)
        .add(Normal, R::Text)
        .add(Inactive, R::Text);
    b.native(W::Default, C::Text, S::Insensitive)
        .add(Disabled, R::WindowText)
        .add(Disabled, R::Text)
        .add(Disabled, R::HighlightedText);
    b.lighter(Normal, R::Text, 150)
        .add_for(All, R::PlaceholderText, Dark);
    b.lighter(Normal, R::Text, 60)
        .add_for(All, R::PlaceholderText, Light);
    b.native(W::Default, C::Text, S::Link).add(Normal, R::Link);
    b.native(W::Default, C::Text, S::Visited).add(Normal, R::LinkVisited);
    b.native(W::Default, C::Base, S::Normal).add(All, R::BrightText);

    // Tool tips.
    b.native(W::Popup, C::Background, S::Normal).add(All, R::ToolTipBase);
    b.native(W::Popup, C::Text, S::Normal).add(All, R::ToolTipText);

    // Alternate rows lean away from the base color.
    b.modify(Normal, R::Base, -15, -15, -15)
        .add_for(All, R::AlternateBase, Light);
    b.modify(Normal, R::Base, 15, 15, 15)
        .add_for(All, R::AlternateBase, Dark);

    b.save(PaletteKind::SystemPalette).clear();

    // Check box and radio button.
    b.native(W::Button, C::Text, S::Active).add_for(Normal, R::Base, Dark);
    b.native(W::Default, C::Background, S::Normal).add_for(All, R::Base, Light);
    b.native(W::Button, C::Text, S::Normal)
        .add_for(Normal, R::Text, Light)
        .add_for(Inactive, R::Text, Light);
    b.native(W::Button, C::Text, S::Active).add_for(Normal, R::Text, Dark);
    b.save(PaletteKind::CheckBoxPalette)
        .save(PaletteKind::RadioButtonPalette)
        .clear();

    // Combo box and group box.
    b.native(W::ComboBox, C::Text, S::Normal)
        .add_for(Normal, R::ButtonText, Dark)
        .add_for(Normal, R::Text, Dark);
    b.native(W::ComboBox, C::Text, S::Active)
        .add_for(Normal, R::ButtonText, Light)
        .add_for(Normal, R::Text, Light);
    b.save(PaletteKind::ComboBoxPalette)
        .save(PaletteKind::GroupBoxPalette)
        .clear();

    // Menus.
    b.native(W::Default, C::Text, S::Active).add(Normal, R::ButtonText);
    b.native(W::Menu, C::Background, S::Normal).add(All, R::Window);
    b.save(PaletteKind::MenuPalette)
        .save(PaletteKind::MenuBarPalette)
        .clear();

    // Line edit.
    b.native(W::Default, C::Background, S::Normal).add(All, R::Base);
    b.save(PaletteKind::TextLineEditPalette).clear();

    b.build()
}
