#![forbid(unsafe_code)]

//! JSON codec for rule tables.
//!
//! The document stores unresolved rules, never resolved colors:
//!
//! ```json
//! { "QtGtk3Palettes": {
//!     "SystemPalette": {
//!       "Window": [
//!         { "ColorGroup": "Normal", "ColorScheme": "Unknown",
//!           "SourceType": "Gtk",
//!           "SourceData": { "GtkWidgetType": "Default", "GdkSource": "Background",
//!                           "GtkStateType": "Insensitive", "Width": -1, "Height": -1 } }
//!       ] } } }
//! ```
//!
//! Every enum is written by name. `SourceType` is one of `Gtk`, `Fixed`,
//! `Modified` or `Mixed`:
//!
//! - `Fixed`: `{"FixedBrush": {"Color": "#rrggbb", "Width": w, "Height": h}}`,
//!   size keys only present for textured brushes;
//! - `Modified`: `ColorGroup`, `ColorRole`, `ColorScheme`, `Lighter`,
//!   `DeltaRed`, `DeltaGreen`, `DeltaBlue`, `Width`, `Height`, all always
//!   written. A reader cannot tell an explicit `Lighter: 100` from a
//!   lighten-free modification; both mean "unchanged";
//! - `Mixed`: `{"MixSources": [target, target]}` with each target carrying
//!   `ColorGroup`, `ColorRole` and `ColorScheme`.
//!
//! Sizes of `-1` (or any non-positive value) mean "no texture".
//!
//! Loading is all-or-nothing: the first unknown name, missing key or
//! mistyped value fails the whole document.

use std::collections::BTreeMap;
use std::path::Path;

use gtkpal_core::{
    Appearance, Brush, Color, ColorChannel, ColorRole, ColorSource, DerivedSource, MixSource,
    NamedEnum, NativeSource, NativeState, PaletteKind, RuleTable, RuleTables, TargetBrush,
    TextureSize, WidgetKind,
};
use serde_json::{Map, Value, json};

use crate::error::{CodecError, Result};

/// Root key of a rule-table document.
pub const ROOT_KEY: &str = "QtGtk3Palettes";

mod key {
    pub const COLOR_GROUP: &str = "ColorGroup";
    pub const COLOR_ROLE: &str = "ColorRole";
    pub const COLOR_SCHEME: &str = "ColorScheme";
    pub const SOURCE_TYPE: &str = "SourceType";
    pub const SOURCE_DATA: &str = "SourceData";

    pub const WIDGET: &str = "GtkWidgetType";
    pub const CHANNEL: &str = "GdkSource";
    pub const STATE: &str = "GtkStateType";
    pub const WIDTH: &str = "Width";
    pub const HEIGHT: &str = "Height";

    pub const LIGHTER: &str = "Lighter";
    pub const RED: &str = "DeltaRed";
    pub const GREEN: &str = "DeltaGreen";
    pub const BLUE: &str = "DeltaBlue";

    pub const FIXED_BRUSH: &str = "FixedBrush";
    pub const COLOR: &str = "Color";

    pub const MIX_SOURCES: &str = "MixSources";
}

mod tag {
    pub const NATIVE: &str = "Gtk";
    pub const FIXED: &str = "Fixed";
    pub const DERIVED: &str = "Modified";
    pub const MIXED: &str = "Mixed";
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Serialize a table set to a JSON document.
#[must_use]
pub fn to_document(tables: &RuleTables) -> Value {
    let mut palettes = Map::new();
    for (kind, table) in tables {
        let mut roles: BTreeMap<ColorRole, Vec<Value>> = BTreeMap::new();
        for (target, source) in table {
            roles.entry(target.role).or_default().push(json!({
                (key::COLOR_GROUP): target.group.name(),
                (key::COLOR_SCHEME): target.appearance.name(),
                (key::SOURCE_TYPE): source_tag(source),
                (key::SOURCE_DATA): source_data(source),
            }));
        }
        let roles: Map<String, Value> = roles
            .into_iter()
            .map(|(role, entries)| (role.name().to_owned(), Value::Array(entries)))
            .collect();
        palettes.insert(kind.name().to_owned(), Value::Object(roles));
    }
    json!({ ROOT_KEY: palettes })
}

/// Serialize a table set to indented JSON text.
pub fn to_string(tables: &RuleTables) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_document(tables))?)
}

/// Write a table set to `path`.
pub fn save(tables: &RuleTables, path: &Path) -> Result<()> {
    std::fs::write(path, to_string(tables)?)?;
    tracing::debug!(
        target: "gtkpal.codec",
        path = %path.display(),
        palettes = tables.len(),
        rules = tables.rule_count(),
        "rule tables saved"
    );
    Ok(())
}

fn source_tag(source: &ColorSource) -> &'static str {
    match source {
        ColorSource::Native(_) => tag::NATIVE,
        ColorSource::Derived(_) => tag::DERIVED,
        ColorSource::Mixed(_) => tag::MIXED,
        ColorSource::Fixed(_) => tag::FIXED,
    }
}

fn source_data(source: &ColorSource) -> Value {
    match source {
        ColorSource::Native(n) => {
            let (width, height) = size_fields(n.texture);
            json!({
                (key::WIDGET): n.widget.name(),
                (key::CHANNEL): n.channel.name(),
                (key::STATE): n.state.name(),
                (key::WIDTH): width,
                (key::HEIGHT): height,
            })
        }
        ColorSource::Derived(d) => {
            let (width, height) = size_fields(d.texture);
            json!({
                (key::COLOR_GROUP): d.source.group.name(),
                (key::COLOR_ROLE): d.source.role.name(),
                (key::COLOR_SCHEME): d.source.appearance.name(),
                (key::LIGHTER): d.lighter,
                (key::RED): d.red,
                (key::GREEN): d.green,
                (key::BLUE): d.blue,
                (key::WIDTH): width,
                (key::HEIGHT): height,
            })
        }
        ColorSource::Mixed(m) => json!({
            (key::MIX_SOURCES): [target_fields(m.first), target_fields(m.second)],
        }),
        ColorSource::Fixed(brush) => {
            let mut fixed = Map::new();
            fixed.insert(key::COLOR.to_owned(), Value::from(brush.color.name()));
            if let Some(texture) = brush.texture {
                fixed.insert(key::WIDTH.to_owned(), Value::from(texture.width));
                fixed.insert(key::HEIGHT.to_owned(), Value::from(texture.height));
            }
            json!({ (key::FIXED_BRUSH): fixed })
        }
    }
}

fn target_fields(target: TargetBrush) -> Value {
    json!({
        (key::COLOR_GROUP): target.group.name(),
        (key::COLOR_ROLE): target.role.name(),
        (key::COLOR_SCHEME): target.appearance.name(),
    })
}

fn size_fields(texture: Option<TextureSize>) -> (i64, i64) {
    texture.map_or((-1, -1), |t| (i64::from(t.width), i64::from(t.height)))
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Parse a table set from a JSON document.
pub fn from_document(document: &Value) -> Result<RuleTables> {
    let root = as_object(document, "$")?;
    let palettes = as_object(field(root, "$", ROOT_KEY)?, ROOT_KEY)?;
    if palettes.is_empty() {
        return Err(CodecError::Empty {
            path: ROOT_KEY.to_owned(),
        });
    }

    let mut tables = RuleTables::new();
    for (kind_name, roles) in palettes {
        let kind: PaletteKind = parse_name(kind_name, ROOT_KEY)?;
        let path = format!("{ROOT_KEY}.{kind_name}");
        let mut table = RuleTable::new();
        for (role_name, entries) in as_object(roles, &path)? {
            let role: ColorRole = parse_name(role_name, &path)?;
            let role_path = format!("{path}.{role_name}");
            let Value::Array(entries) = entries else {
                return Err(CodecError::wrong_type(&role_path, "an array"));
            };
            for (i, entry) in entries.iter().enumerate() {
                let entry_path = format!("{role_path}[{i}]");
                let (target, source) = read_entry(entry, role, &entry_path)?;
                table.insert(target, source);
            }
        }
        tables.insert(kind, table);
    }
    Ok(tables)
}

/// Parse a table set from JSON text.
pub fn from_str(text: &str) -> Result<RuleTables> {
    from_document(&serde_json::from_str(text)?)
}

/// Read a table set from `path`.
pub fn load(path: &Path) -> Result<RuleTables> {
    let text = std::fs::read_to_string(path)?;
    let tables = from_str(&text)?;
    tracing::debug!(
        target: "gtkpal.codec",
        path = %path.display(),
        palettes = tables.len(),
        rules = tables.rule_count(),
        "rule tables loaded"
    );
    Ok(tables)
}

fn read_entry(entry: &Value, role: ColorRole, path: &str) -> Result<(TargetBrush, ColorSource)> {
    let entry = as_object(entry, path)?;
    let group = named(entry, path, key::COLOR_GROUP)?;
    let appearance = named(entry, path, key::COLOR_SCHEME)?;
    let source_type = string(entry, path, key::SOURCE_TYPE)?;
    let data_path = format!("{path}.{}", key::SOURCE_DATA);
    let data = as_object(field(entry, path, key::SOURCE_DATA)?, &data_path)?;

    let source = match source_type {
        tag::NATIVE => read_native(data, &data_path)?,
        tag::DERIVED => read_derived(data, &data_path)?,
        tag::MIXED => read_mixed(data, &data_path)?,
        tag::FIXED => read_fixed(data, &data_path)?,
        other => {
            return Err(CodecError::UnknownName {
                path: format!("{path}.{}", key::SOURCE_TYPE),
                kind: "source type",
                name: other.to_owned(),
            });
        }
    };
    Ok((TargetBrush::new(group, role, appearance), source))
}

fn read_native(data: &Map<String, Value>, path: &str) -> Result<ColorSource> {
    Ok(ColorSource::Native(NativeSource {
        widget: named::<WidgetKind>(data, path, key::WIDGET)?,
        channel: named::<ColorChannel>(data, path, key::CHANNEL)?,
        state: named::<NativeState>(data, path, key::STATE)?,
        texture: texture(data, path, true)?,
    }))
}

fn read_derived(data: &Map<String, Value>, path: &str) -> Result<ColorSource> {
    Ok(ColorSource::Derived(DerivedSource {
        source: read_target(data, path)?,
        lighter: int32(data, path, key::LIGHTER)?,
        red: int32(data, path, key::RED)?,
        green: int32(data, path, key::GREEN)?,
        blue: int32(data, path, key::BLUE)?,
        texture: texture(data, path, true)?,
    }))
}

fn read_mixed(data: &Map<String, Value>, path: &str) -> Result<ColorSource> {
    let list_path = format!("{path}.{}", key::MIX_SOURCES);
    let targets = match field(data, path, key::MIX_SOURCES)? {
        Value::Array(items) if items.len() == 2 => items,
        _ => return Err(CodecError::wrong_type(&list_path, "an array of two targets")),
    };
    let first_path = format!("{list_path}[0]");
    let second_path = format!("{list_path}[1]");
    Ok(ColorSource::Mixed(MixSource {
        first: read_target(as_object(&targets[0], &first_path)?, &first_path)?,
        second: read_target(as_object(&targets[1], &second_path)?, &second_path)?,
    }))
}

fn read_fixed(data: &Map<String, Value>, path: &str) -> Result<ColorSource> {
    let brush_path = format!("{path}.{}", key::FIXED_BRUSH);
    let brush = as_object(field(data, path, key::FIXED_BRUSH)?, &brush_path)?;
    let name = string(brush, &brush_path, key::COLOR)?;
    let color = Color::from_name(name).ok_or_else(|| CodecError::InvalidColor {
        path: format!("{brush_path}.{}", key::COLOR),
        value: name.to_owned(),
    })?;
    Ok(ColorSource::fixed(
        Brush::solid(color).with_texture(texture(brush, &brush_path, false)?),
    ))
}

fn read_target(data: &Map<String, Value>, path: &str) -> Result<TargetBrush> {
    Ok(TargetBrush::new(
        named(data, path, key::COLOR_GROUP)?,
        named(data, path, key::COLOR_ROLE)?,
        named::<Appearance>(data, path, key::COLOR_SCHEME)?,
    ))
}

/// Width/height pair; `required` makes both keys mandatory.
fn texture(data: &Map<String, Value>, path: &str, required: bool) -> Result<Option<TextureSize>> {
    if !required && !data.contains_key(key::WIDTH) && !data.contains_key(key::HEIGHT) {
        return Ok(None);
    }
    let width = int(data, path, key::WIDTH)?;
    let height = int(data, path, key::HEIGHT)?;
    for (k, value) in [(key::WIDTH, width), (key::HEIGHT, height)] {
        if value > i64::from(u32::MAX) {
            return Err(CodecError::OutOfRange {
                path: format!("{path}.{k}"),
                value,
            });
        }
    }
    Ok(TextureSize::from_signed(width, height))
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CodecError::wrong_type(path, "an object"))
}

fn field<'a>(object: &'a Map<String, Value>, path: &str, key: &str) -> Result<&'a Value> {
    object.get(key).ok_or_else(|| CodecError::missing(path, key))
}

fn string<'a>(object: &'a Map<String, Value>, path: &str, key: &str) -> Result<&'a str> {
    field(object, path, key)?
        .as_str()
        .ok_or_else(|| CodecError::wrong_type(&format!("{path}.{key}"), "a string"))
}

fn int(object: &Map<String, Value>, path: &str, key: &str) -> Result<i64> {
    field(object, path, key)?
        .as_i64()
        .ok_or_else(|| CodecError::wrong_type(&format!("{path}.{key}"), "an integer"))
}

fn int32(object: &Map<String, Value>, path: &str, key: &str) -> Result<i32> {
    let value = int(object, path, key)?;
    i32::try_from(value).map_err(|_| CodecError::OutOfRange {
        path: format!("{path}.{key}"),
        value,
    })
}

fn named<E: NamedEnum>(object: &Map<String, Value>, path: &str, key: &str) -> Result<E> {
    parse_name(string(object, path, key)?, &format!("{path}.{key}"))
}

fn parse_name<E: NamedEnum>(name: &str, path: &str) -> Result<E> {
    E::from_name(name).ok_or_else(|| CodecError::UnknownName {
        path: path.to_owned(),
        kind: E::KIND,
        name: name.to_owned(),
    })
}
