#![forbid(unsafe_code)]

//! Rule tables, palette resolution and caching for gtkpal.
//!
//! # Role in gtkpal
//! This crate turns declarative rules ("the normal window color is the
//! insensitive background of a plain widget", "light shades are 125% of the
//! window color") into concrete [`Palette`](gtkpal_core::Palette)s, reading
//! native colors through a [`NativeTheme`](gtkpal_native::NativeTheme).
//!
//! # Primary responsibilities
//! - **Rule construction**: [`RuleTableBuilder`] and the built-in
//!   [`default_tables`].
//! - **Resolution**: [`Resolver`] looks rules up with appearance and group
//!   fallback and applies derivations and mixes.
//! - **Caching**: [`PaletteStorage`] owns the rule tables and per-kind
//!   palette, font and pixmap caches, and rebuilds them on theme changes.
//! - **Persistence**: [`codec`] reads and writes the JSON rule document.
//!
//! # Environment
//! [`StorageConfig::from_env`] reads `GTKPAL_JSON`, `GTKPAL_JSON_SAVEPATH`
//! and `GTKPAL_JSON_HARDCODED`.

pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod resolve;
pub mod storage;

pub use builder::{Pending, RuleTableBuilder, default_tables};
pub use config::StorageConfig;
pub use error::{CodecError, Result};
pub use resolve::{MAX_PROBES, Resolver, find_source, hardcode, probe_targets};
pub use storage::PaletteStorage;
