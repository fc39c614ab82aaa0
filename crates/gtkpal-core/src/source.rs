#![forbid(unsafe_code)]

//! Rule sources and rule tables.
//!
//! A [`RuleTable`] maps a [`TargetBrush`] (group, role, appearance) to the
//! [`ColorSource`] describing how to obtain that brush. Tables are sparse and
//! keyed by the exact triple; wildcard matching happens at lookup time in the
//! resolution engine, not here.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::brush::{Brush, TextureSize};
use crate::kinds::{Appearance, ColorChannel, NativeState, PaletteKind, WidgetKind};
use crate::palette::{ColorGroup, ColorRole};

// ---------------------------------------------------------------------------
// TargetBrush
// ---------------------------------------------------------------------------

/// Identity of one brush slot in one appearance.
///
/// Ordering is lexicographic over (group, role, appearance) and only serves
/// map storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetBrush {
    pub group: ColorGroup,
    pub role: ColorRole,
    pub appearance: Appearance,
}

impl TargetBrush {
    #[inline]
    #[must_use]
    pub const fn new(group: ColorGroup, role: ColorRole, appearance: Appearance) -> Self {
        Self {
            group,
            role,
            appearance,
        }
    }

    /// Target valid in any appearance.
    #[inline]
    #[must_use]
    pub const fn any(group: ColorGroup, role: ColorRole) -> Self {
        Self::new(group, role, Appearance::Unknown)
    }

    #[inline]
    #[must_use]
    pub const fn with_group(self, group: ColorGroup) -> Self {
        Self { group, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_appearance(self, appearance: Appearance) -> Self {
        Self { appearance, ..self }
    }
}

// ---------------------------------------------------------------------------
// ColorSource
// ---------------------------------------------------------------------------

/// Read a color from the native theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeSource {
    pub widget: WidgetKind,
    pub channel: ColorChannel,
    pub state: NativeState,
    pub texture: Option<TextureSize>,
}

/// Derive a brush from another target of the same table.
///
/// The color of the resolved target is scaled by `lighter` (100 = unchanged)
/// and then offset per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedSource {
    pub source: TargetBrush,
    pub lighter: i32,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub texture: Option<TextureSize>,
}

impl DerivedSource {
    /// A derivation that leaves the source color unchanged.
    #[must_use]
    pub const fn identity(source: TargetBrush) -> Self {
        Self {
            source,
            lighter: 100,
            red: 0,
            green: 0,
            blue: 0,
            texture: None,
        }
    }
}

/// Average the colors of two targets of the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MixSource {
    pub first: TargetBrush,
    pub second: TargetBrush,
}

/// How to obtain one brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSource {
    /// Read from the native theme.
    Native(NativeSource),
    /// Copy and modify another target's resolved brush.
    Derived(DerivedSource),
    /// Average two other targets' resolved colors.
    Mixed(MixSource),
    /// A literal brush.
    Fixed(Brush),
}

impl ColorSource {
    #[must_use]
    pub const fn native(widget: WidgetKind, channel: ColorChannel, state: NativeState) -> Self {
        Self::Native(NativeSource {
            widget,
            channel,
            state,
            texture: None,
        })
    }

    /// Scale the lightness of another target of the same table.
    #[must_use]
    pub const fn lighter(group: ColorGroup, role: ColorRole, lighter: i32) -> Self {
        Self::Derived(DerivedSource {
            lighter,
            ..DerivedSource::identity(TargetBrush::any(group, role))
        })
    }

    /// Offset the channels of another target of the same table.
    #[must_use]
    pub const fn modify(
        group: ColorGroup,
        role: ColorRole,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Self {
        Self::Derived(DerivedSource {
            red,
            green,
            blue,
            ..DerivedSource::identity(TargetBrush::any(group, role))
        })
    }

    #[must_use]
    pub const fn mix(first: TargetBrush, second: TargetBrush) -> Self {
        Self::Mixed(MixSource { first, second })
    }

    #[must_use]
    pub const fn fixed(brush: Brush) -> Self {
        Self::Fixed(brush)
    }

    /// Whether resolving this source reads other table entries.
    #[must_use]
    pub const fn is_referencing(&self) -> bool {
        matches!(self, Self::Derived(_) | Self::Mixed(_))
    }
}

// ---------------------------------------------------------------------------
// RuleTable
// ---------------------------------------------------------------------------

/// Sparse, ordered mapping from target to source for one palette kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<TargetBrush, ColorSource>,
}

impl RuleTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule. An existing rule for the exact same target is replaced
    /// and returned.
    pub fn insert(&mut self, target: TargetBrush, source: ColorSource) -> Option<ColorSource> {
        self.rules.insert(target, source)
    }

    /// Exact-key lookup, no wildcard handling.
    #[must_use]
    pub fn get(&self, target: &TargetBrush) -> Option<&ColorSource> {
        self.rules.get(target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, TargetBrush, ColorSource> {
        self.rules.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, TargetBrush, ColorSource> {
        self.rules.iter_mut()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a TargetBrush, &'a ColorSource);
    type IntoIter = btree_map::Iter<'a, TargetBrush, ColorSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(TargetBrush, ColorSource)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (TargetBrush, ColorSource)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// The rule tables of every palette kind that defines any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTables {
    tables: BTreeMap<PaletteKind, RuleTable>,
}

impl RuleTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the table for `kind`, replacing any previous one.
    pub fn insert(&mut self, kind: PaletteKind, table: RuleTable) -> Option<RuleTable> {
        self.tables.insert(kind, table)
    }

    #[must_use]
    pub fn get(&self, kind: PaletteKind) -> Option<&RuleTable> {
        self.tables.get(&kind)
    }

    pub fn get_mut(&mut self, kind: PaletteKind) -> Option<&mut RuleTable> {
        self.tables.get_mut(&kind)
    }

    /// Number of palette kinds with a table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PaletteKind, RuleTable> {
        self.tables.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, PaletteKind, RuleTable> {
        self.tables.iter_mut()
    }

    /// Total number of rules across all tables.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.tables.values().map(RuleTable::len).sum()
    }
}

impl<'a> IntoIterator for &'a RuleTables {
    type Item = (&'a PaletteKind, &'a RuleTable);
    type IntoIter = btree_map::Iter<'a, PaletteKind, RuleTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
