#![forbid(unsafe_code)]

//! Font-kind anchoring and native font conversion.

use gtkpal_core::{Font, FontKind, FontStyle, FontWeight, WidgetKind};

use crate::backend::{NativeFont, NativeSlant};

/// Style class forced before reading the fixed-pitch font.
pub const MONOSPACE_CLASS: &str = "monospace";

/// Family used when the toolkit hands back a proportional face for the
/// fixed font.
pub const MONOSPACE_FAMILY: &str = "monospace";

/// Synthetic widget whose style context carries the font for `kind`.
#[must_use]
pub const fn widget_for_font(kind: FontKind) -> WidgetKind {
    use FontKind as F;
    use WidgetKind as W;

    match kind {
        F::MenuFont | F::MenuItemFont => W::Menu,
        F::MenuBarFont => W::MenuBar,
        F::MessageBoxFont | F::TipLabelFont => W::Popup,
        F::StatusBarFont => W::Statusbar,
        F::PushButtonFont => W::Button,
        F::CheckBoxFont => W::CheckButton,
        F::RadioButtonFont => W::RadioButton,
        F::ToolButtonFont => W::Toolbar,
        F::ItemViewFont | F::ListViewFont | F::HeaderViewFont | F::ListBoxFont => W::TreeView,
        F::ComboMenuItemFont | F::ComboLineEditFont => W::ComboBox,
        F::FixedFont => W::Fixed,
        F::GroupBoxTitleFont => W::Frame,
        F::TabButtonFont => W::Notebook,
        F::EditorFont => W::Entry,
        F::SystemFont
        | F::LabelFont
        | F::TitleBarFont
        | F::MdiSubWindowTitleFont
        | F::DockWidgetTitleFont
        | F::SmallFont
        | F::MiniFont => W::Default,
    }
}

/// Convert a native font description.
///
/// With `fixed`, a proportional result is replaced by the generic monospace
/// family and the font is marked fixed-pitch either way.
#[must_use]
pub fn convert(native: &NativeFont, fixed: bool) -> Font {
    let family = if fixed && !native.monospace {
        MONOSPACE_FAMILY.to_owned()
    } else {
        native.family.clone()
    };
    Font {
        family,
        weight: FontWeight::from_native(native.weight),
        style: match native.slant {
            NativeSlant::Normal => FontStyle::Normal,
            NativeSlant::Oblique => FontStyle::Oblique,
            NativeSlant::Italic => FontStyle::Italic,
        },
        point_size: f64::from(native.size) / f64::from(NativeFont::SCALE),
        fixed_pitch: fixed || native.monospace,
    }
}
