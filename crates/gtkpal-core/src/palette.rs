#![forbid(unsafe_code)]

//! Palettes: one brush slot per (color group, color role).
//!
//! Slots start empty. Writing to [`ColorGroup::All`] writes every concrete
//! group; reading from it reads [`ColorGroup::Normal`].

use crate::brush::Brush;
use crate::color::Color;

named_enum! {
    /// Selection axis of a palette.
    ///
    /// `All` is a wildcard: rules registered under it apply to every
    /// concrete group, and lookups fall back to it.
    pub enum ColorGroup: "color group" {
        Normal,
        Disabled,
        Inactive,
        All,
    }
}

impl ColorGroup {
    /// The concrete groups, excluding the `All` wildcard.
    pub const CONCRETE: [ColorGroup; 3] = [Self::Normal, Self::Disabled, Self::Inactive];

    fn slots(self) -> &'static [ColorGroup] {
        match self {
            Self::Normal => &[Self::Normal],
            Self::Disabled => &[Self::Disabled],
            Self::Inactive => &[Self::Inactive],
            Self::All => &[Self::Normal, Self::Disabled, Self::Inactive],
        }
    }
}

named_enum! {
    /// Semantic slot within a palette.
    pub enum ColorRole: "color role" {
        WindowText,
        Button,
        Light,
        Midlight,
        Dark,
        Mid,
        Text,
        BrightText,
        ButtonText,
        Base,
        Window,
        Shadow,
        Highlight,
        HighlightedText,
        Link,
        LinkVisited,
        AlternateBase,
        ToolTipBase,
        ToolTipText,
        PlaceholderText,
        Accent,
    }
}

const GROUPS: usize = 3;

/// A complete set of brush slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    slots: [[Option<Brush>; ColorRole::COUNT]; GROUPS],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// A palette with every slot empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [[None; ColorRole::COUNT]; GROUPS],
        }
    }

    /// Build a palette from the seven basic colors, deriving the rest.
    ///
    /// Derived slots: button follows window, button text follows window
    /// text, midlight is `button.lighter(115)`, alternate base is
    /// `base.darker(110)`, placeholder text is `text` at half alpha.
    #[must_use]
    pub fn from_basic_colors(
        window_text: Color,
        window: Color,
        light: Color,
        dark: Color,
        mid: Color,
        text: Color,
        base: Color,
    ) -> Self {
        use ColorRole as R;

        let mut palette = Self::new();
        let g = ColorGroup::All;
        palette.set_color(g, R::WindowText, window_text);
        palette.set_color(g, R::Window, window);
        palette.set_color(g, R::Button, window);
        palette.set_color(g, R::ButtonText, window_text);
        palette.set_color(g, R::Light, light);
        palette.set_color(g, R::Midlight, window.lighter(115));
        palette.set_color(g, R::Dark, dark);
        palette.set_color(g, R::Mid, mid);
        palette.set_color(g, R::Shadow, Color::BLACK);
        palette.set_color(g, R::Text, text);
        palette.set_color(g, R::BrightText, Color::WHITE);
        palette.set_color(g, R::Base, base);
        palette.set_color(g, R::AlternateBase, base.darker(110));
        palette.set_color(g, R::Highlight, Color::DARK_BLUE);
        palette.set_color(g, R::HighlightedText, Color::WHITE);
        palette.set_color(g, R::Accent, Color::DARK_BLUE);
        palette.set_color(g, R::Link, Color::BLUE);
        palette.set_color(g, R::LinkVisited, Color::MAGENTA);
        palette.set_color(g, R::ToolTipBase, Color::rgb(255, 255, 220));
        palette.set_color(g, R::ToolTipText, Color::BLACK);
        palette.set_color(g, R::PlaceholderText, text.with_alpha(128));
        palette
    }

    /// The fixed light 3-D palette used to seed the system palette.
    ///
    /// Independent of any native theme, so the system palette is never empty
    /// even when every native read fails.
    #[must_use]
    pub fn baseline() -> Self {
        let background = Color::rgb(0xd4, 0xd0, 0xc8);
        let light = background.lighter(150);
        let dark = background.darker(200);

        let mut palette = Self::from_basic_colors(
            Color::BLACK,
            background,
            light,
            dark,
            Color::GRAY,
            Color::BLACK,
            Color::WHITE,
        );
        palette.set_color(ColorGroup::Disabled, ColorRole::WindowText, dark);
        palette.set_color(ColorGroup::Disabled, ColorRole::Text, dark);
        palette.set_color(ColorGroup::Disabled, ColorRole::ButtonText, dark);
        palette.set_color(ColorGroup::Disabled, ColorRole::Base, background);
        palette
    }

    /// Brush in a slot, `None` when unset.
    #[must_use]
    pub fn brush(&self, group: ColorGroup, role: ColorRole) -> Option<&Brush> {
        let group = group.slots()[0];
        self.slots[group.index()][role.index()].as_ref()
    }

    /// Color of a slot, `None` when unset.
    #[must_use]
    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Option<Color> {
        self.brush(group, role).map(|b| b.color)
    }

    /// Set a slot. `ColorGroup::All` writes every concrete group.
    pub fn set_brush(&mut self, group: ColorGroup, role: ColorRole, brush: Brush) {
        for g in group.slots() {
            self.slots[g.index()][role.index()] = Some(brush);
        }
    }

    pub fn set_color(&mut self, group: ColorGroup, role: ColorRole, color: Color) {
        self.set_brush(group, role, Brush::solid(color));
    }

    /// Iterate every set slot as `(group, role, brush)`.
    pub fn iter(&self) -> impl Iterator<Item = (ColorGroup, ColorRole, &Brush)> + '_ {
        ColorGroup::CONCRETE.into_iter().flat_map(move |group| {
            ColorRole::ALL.iter().filter_map(move |role| {
                self.slots[group.index()][role.index()]
                    .as_ref()
                    .map(|brush| (group, *role, brush))
            })
        })
    }
}
