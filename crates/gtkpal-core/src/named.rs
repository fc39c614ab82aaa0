#![forbid(unsafe_code)]

//! Name tables for the closed enumerations.
//!
//! Every enum that crosses the JSON boundary is written by name, never by
//! discriminant, so reordering variants does not break stored documents.

/// A closed enumeration whose variants round-trip through stable names.
pub trait NamedEnum: Copy + Eq + 'static {
    /// Human-readable name of the enumeration, used in diagnostics.
    const KIND: &'static str;

    /// All variants in declaration order.
    fn all() -> &'static [Self];

    /// Stable name of this variant.
    fn name(self) -> &'static str;

    /// Parse a variant from its stable name (case-sensitive).
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.name() == name)
    }
}

/// Declares a fieldless enum plus its [`NamedEnum`] table.
///
/// Variant names are the stringified identifiers. Discriminants follow
/// declaration order, so `index()` and `from_index()` are stable within
/// one build.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Number of variants.
            pub const COUNT: usize = $name::ALL.len();

            /// Position of this variant in [`Self::ALL`].
            #[inline]
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Variant at `index`, or `None` when out of range.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Stable name of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl $crate::named::NamedEnum for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn name(self) -> &'static str {
                self.as_str()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::named::NamedEnum>::from_name(s).ok_or(())
            }
        }
    };
}
