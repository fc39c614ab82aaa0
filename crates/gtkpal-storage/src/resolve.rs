#![forbid(unsafe_code)]

//! Rule lookup and brush materialization.
//!
//! # Lookup
//!
//! [`find_source`] tries, for the requested group and then for
//! `ColorGroup::All`:
//!
//! - a concrete appearance: the exact key, then the same key under
//!   `Appearance::Unknown`;
//! - `Appearance::Unknown`: the exact key, then `Dark`, then `Light`.
//!
//! That bounds a lookup at [`MAX_PROBES`] map probes.
//!
//! # Materialization
//!
//! Derived and mixed sources may only reference terminal sources (native or
//! fixed). A reference that misses, or that lands on another derived or
//! mixed source, makes the whole request resolve to nothing.

use gtkpal_core::{
    Appearance, Brush, ColorGroup, ColorSource, Palette, RuleTable, RuleTables, TargetBrush,
};
use gtkpal_native::NativeTheme;

/// Upper bound on map probes for one [`find_source`] call.
pub const MAX_PROBES: usize = 6;

/// Keys [`find_source`] probes for `target`, in order.
#[must_use]
pub fn probe_targets(target: TargetBrush) -> Vec<TargetBrush> {
    let groups: &[ColorGroup] = if target.group == ColorGroup::All {
        &[ColorGroup::All]
    } else {
        &[target.group, ColorGroup::All]
    };
    let appearances: &[Appearance] = match target.appearance {
        Appearance::Unknown => &[Appearance::Unknown, Appearance::Dark, Appearance::Light],
        Appearance::Dark => &[Appearance::Dark, Appearance::Unknown],
        Appearance::Light => &[Appearance::Light, Appearance::Unknown],
    };

    let mut probes = Vec::with_capacity(groups.len() * appearances.len());
    for group in groups {
        for appearance in appearances {
            probes.push(target.with_group(*group).with_appearance(*appearance));
        }
    }
    probes
}

/// Find the rule that answers `target` in `table`.
#[must_use]
pub fn find_source(target: TargetBrush, table: &RuleTable) -> Option<&ColorSource> {
    for probe in probe_targets(target) {
        if let Some(source) = table.get(&probe) {
            tracing::trace!(target: "gtkpal.resolve", query = ?target, ?probe, "rule found");
            return Some(source);
        }
    }
    tracing::trace!(target: "gtkpal.resolve", query = ?target, "no rule");
    None
}

/// Materializes sources of one rule table.
#[derive(Debug)]
pub struct Resolver<'a, N: ?Sized> {
    native: &'a N,
    table: &'a RuleTable,
}

impl<'a, N: NativeTheme + ?Sized> Resolver<'a, N> {
    pub fn new(native: &'a N, table: &'a RuleTable) -> Self {
        Self { native, table }
    }

    /// Brush for `target`, looked up with wildcard fallback.
    #[must_use]
    pub fn resolve_target(&self, target: TargetBrush) -> Option<Brush> {
        self.resolve(find_source(target, self.table)?)
    }

    /// Materialize `source`. `None` is the empty brush.
    #[must_use]
    pub fn resolve(&self, source: &ColorSource) -> Option<Brush> {
        match source {
            ColorSource::Native(_) | ColorSource::Fixed(_) => self.resolve_terminal(source),
            ColorSource::Derived(derived) => {
                let base = self.resolve_terminal(self.terminal(derived.source)?)?;
                let mut color = base.color;
                if derived.lighter != 100 {
                    color = color.lighter(derived.lighter);
                }
                color = color.offset(derived.red, derived.green, derived.blue);
                let texture = derived.texture.or(base.texture);
                Some(Brush { color, texture })
            }
            ColorSource::Mixed(mix) => {
                let first = self.resolve_terminal(self.terminal(mix.first)?)?;
                let second = self.resolve_terminal(self.terminal(mix.second)?)?;
                Some(first.with_color(first.color.mix(second.color)))
            }
        }
    }

    fn resolve_terminal(&self, source: &ColorSource) -> Option<Brush> {
        match source {
            ColorSource::Native(n) => {
                let color = self.native.color(n.widget, n.channel, n.state);
                if color.is_none() {
                    tracing::debug!(
                        target: "gtkpal.resolve",
                        widget = %n.widget,
                        channel = %n.channel,
                        state = %n.state,
                        "native color unavailable"
                    );
                }
                color.map(|c| Brush::solid(c).with_texture(n.texture))
            }
            ColorSource::Fixed(brush) => Some(*brush),
            ColorSource::Derived(_) | ColorSource::Mixed(_) => None,
        }
    }

    /// The terminal source a reference points at.
    fn terminal(&self, reference: TargetBrush) -> Option<&'a ColorSource> {
        let table: &'a RuleTable = self.table;
        let Some(found) = find_source(reference, table) else {
            tracing::debug!(target: "gtkpal.resolve", ?reference, "referenced rule missing");
            return None;
        };
        if found.is_referencing() {
            tracing::warn!(
                target: "gtkpal.resolve",
                ?reference,
                "chained derivation rejected"
            );
            return None;
        }
        Some(found)
    }

    /// Overlay every rule matching `appearance` onto `palette`.
    ///
    /// Rules for `ColorGroup::All` are applied before concrete groups and
    /// appearance-agnostic rules before appearance-specific ones, so the
    /// most specific rule wins a slot. Rules that resolve to nothing leave
    /// the slot untouched.
    pub fn overlay(&self, palette: &mut Palette, appearance: Appearance) {
        let mut rules: Vec<_> = self
            .table
            .iter()
            .filter(|(target, _)| target.appearance.matches(appearance))
            .collect();
        rules.sort_by_key(|(target, _)| {
            (
                target.group != ColorGroup::All,
                target.appearance != Appearance::Unknown,
            )
        });

        for (target, source) in rules {
            match self.resolve(source) {
                Some(brush) => palette.set_brush(target.group, target.role, brush),
                None => tracing::trace!(target: "gtkpal.resolve", slot = ?target, "rule left unset"),
            }
        }
    }
}

/// Copy of `tables` with every native source replaced by the fixed brush it
/// resolves to right now.
///
/// Native sources that resolve to nothing are kept as they are.
#[must_use]
pub fn hardcode<N: NativeTheme + ?Sized>(tables: &RuleTables, native: &N) -> RuleTables {
    let mut out = tables.clone();
    let mut unresolved = 0usize;
    for (_, table) in out.iter_mut() {
        for (_, source) in table.iter_mut() {
            let ColorSource::Native(n) = *source else {
                continue;
            };
            match native.color(n.widget, n.channel, n.state) {
                Some(color) => {
                    *source = ColorSource::fixed(Brush::solid(color).with_texture(n.texture));
                }
                None => unresolved += 1,
            }
        }
    }
    if unresolved > 0 {
        tracing::warn!(
            target: "gtkpal.resolve",
            unresolved,
            "native sources left in hardcoded tables"
        );
    }
    out
}
