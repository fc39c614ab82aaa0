#![forbid(unsafe_code)]
#![doc = "Native theme boundary for gtkpal."]
#![doc = ""]
#![doc = "Two seams live here. [`NativeTheme`] is what the palette storage consumes:"]
#![doc = "colors by (widget kind, channel, state), fonts, standard pixmaps, file icons,"]
#![doc = "the theme name and a change notifier. [`StyleBackend`] is the raw toolkit"]
#![doc = "surface underneath it; [`NativeAdapter`] turns one into the other by way of the"]
#![doc = "style-property table, a lazily populated widget-handle cache, font conversion"]
#![doc = "and the stock-icon mapping."]

pub mod adapter;
pub mod backend;
pub mod fonts;
pub mod icons;
pub mod notify;
pub mod properties;
pub mod theme;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fake;

pub use adapter::NativeAdapter;
pub use backend::{GenericChannel, NativeFont, NativeSlant, StyleBackend, WidgetHandle};
pub use notify::ChangeNotifier;
pub use properties::{StyleProperty, property_for};
pub use theme::{NativeTheme, NullTheme};

#[cfg(any(test, feature = "test-helpers"))]
pub use fake::FakeBackend;
