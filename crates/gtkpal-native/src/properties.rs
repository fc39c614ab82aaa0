#![forbid(unsafe_code)]

//! Channel/state to style-property table.
//!
//! Themes publish their palette as named colors (`theme_fg_color`,
//! `theme_selected_bg_color`, ...). For the (channel, state) pairs listed
//! here the adapter asks for the named color first and falls back to the
//! generic style-context getter when the theme does not define it. Every
//! other pair goes straight to the generic getter.

use gtkpal_core::{ColorChannel, NativeState};

use crate::backend::GenericChannel;

/// How to read one (channel, state) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProperty {
    /// Theme-defined named color to try first, if any.
    pub name: Option<&'static str>,
    /// Generic getter used when `name` is absent or undefined.
    pub fallback: GenericChannel,
}

impl StyleProperty {
    const fn named(name: &'static str, fallback: GenericChannel) -> Self {
        Self {
            name: Some(name),
            fallback,
        }
    }

    const fn generic(fallback: GenericChannel) -> Self {
        Self {
            name: None,
            fallback,
        }
    }
}

/// Look up the style property for a channel in a state.
#[must_use]
pub const fn property_for(channel: ColorChannel, state: NativeState) -> StyleProperty {
    use ColorChannel as C;
    use GenericChannel as G;
    use NativeState as S;

    match (channel, state) {
        (C::Foreground, S::Normal) => StyleProperty::named("theme_fg_color", G::Foreground),
        (C::Foreground, S::Backdrop) => {
            StyleProperty::named("theme_unfocused_fg_color", G::Foreground)
        }
        (C::Foreground, S::Insensitive) => {
            StyleProperty::named("insensitive_fg_color", G::Foreground)
        }
        (C::Foreground, S::Selected) => {
            StyleProperty::named("theme_selected_fg_color", G::Foreground)
        }

        (C::Background, S::Normal) => StyleProperty::named("theme_bg_color", G::Background),
        (C::Background, S::Backdrop) => {
            StyleProperty::named("theme_unfocused_bg_color", G::Background)
        }
        (C::Background, S::Insensitive) => {
            StyleProperty::named("insensitive_bg_color", G::Background)
        }
        (C::Background, S::Selected) => {
            StyleProperty::named("theme_selected_bg_color", G::Background)
        }

        (C::Text, S::Normal) => StyleProperty::named("theme_text_color", G::Foreground),
        (C::Text, S::Backdrop) => {
            StyleProperty::named("theme_unfocused_text_color", G::Foreground)
        }
        (C::Text, S::Insensitive) => StyleProperty::named("insensitive_fg_color", G::Foreground),
        (C::Text, S::Selected) => StyleProperty::named("theme_selected_fg_color", G::Foreground),

        (C::Base, S::Normal) => StyleProperty::named("theme_base_color", G::Background),
        (C::Base, S::Backdrop) => {
            StyleProperty::named("theme_unfocused_base_color", G::Background)
        }
        (C::Base, S::Insensitive) => StyleProperty::named("insensitive_base_color", G::Background),
        (C::Base, S::Selected) => StyleProperty::named("theme_selected_bg_color", G::Background),

        (C::Foreground | C::Text, _) => StyleProperty::generic(G::Foreground),
        (C::Background | C::Base, _) => StyleProperty::generic(G::Background),
        (C::Border, _) => StyleProperty::generic(G::Border),
    }
}
