//! End-to-end behavior of `PaletteStorage` over the fake toolkit.

use std::path::Path;
use std::rc::Rc;

use gtkpal_core::{
    Appearance, Brush, Color, ColorGroup, ColorRole, ColorSource, FontKind, Icon, Palette,
    PaletteKind, Pixmap, RuleTable, RuleTables, StandardPixmap, TargetBrush,
};
use gtkpal_native::{FakeBackend, NativeAdapter, NativeTheme};
use gtkpal_storage::{PaletteStorage, RuleTableBuilder, StorageConfig, codec, default_tables};
use tracing_test::traced_test;

const LIGHT_BG: Color = Color::rgb(0xf6, 0xf5, 0xf4);
const DARK_BG: Color = Color::rgb(0x35, 0x35, 0x35);

type Storage = PaletteStorage<NativeAdapter<FakeBackend>>;

fn backend(theme: &str, window: Color) -> FakeBackend {
    let backend = FakeBackend::new(theme);
    backend.set_named_color("insensitive_bg_color", window);
    backend
}

fn storage(backend: &FakeBackend) -> Storage {
    storage_with(backend, StorageConfig::default())
}

fn storage_with(backend: &FakeBackend, config: StorageConfig) -> Storage {
    PaletteStorage::with_config(NativeAdapter::new(backend.clone()), config)
}

fn system_only(table: RuleTable) -> RuleTables {
    let mut tables = RuleTables::new();
    tables.insert(PaletteKind::SystemPalette, table);
    tables
}

/// Storage whose tables come from a document written to `dir`.
fn storage_loading(backend: &FakeBackend, tables: &RuleTables, dir: &Path) -> Storage {
    let path = dir.join("rules.json");
    codec::save(tables, &path).expect("write rules");
    storage_with(
        backend,
        StorageConfig {
            load_path: Some(path),
            ..StorageConfig::default()
        },
    )
}

fn window(palette: &Palette) -> Option<Color> {
    palette.color(ColorGroup::Normal, ColorRole::Window)
}

// ---------------------------------------------------------------------------
// Resolution through the storage
// ---------------------------------------------------------------------------

#[test]
fn unknown_rule_answers_dark_theme() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut b = RuleTableBuilder::new();
    b.fixed(Color::GRAY).add(ColorGroup::Normal, ColorRole::Window);
    b.save(PaletteKind::SystemPalette);

    let mut storage = storage_loading(&backend("Adwaita-dark", DARK_BG), &b.build(), dir.path());
    assert_eq!(storage.appearance(), Appearance::Dark);
    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    assert_eq!(window(&system), Some(Color::GRAY));
}

#[test]
fn derived_rule_lightens_its_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut b = RuleTableBuilder::new();
    b.fixed(Color::GRAY).add(ColorGroup::Normal, ColorRole::Window);
    b.lighter(ColorGroup::Normal, ColorRole::Window, 150)
        .add(ColorGroup::Normal, ColorRole::Light);
    b.save(PaletteKind::SystemPalette);

    let mut storage = storage_loading(&backend("Adwaita", LIGHT_BG), &b.build(), dir.path());
    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    assert_eq!(
        system.color(ColorGroup::Normal, ColorRole::Light),
        Some(Color::GRAY.lighter(150))
    );
}

#[test]
#[traced_test]
fn chained_derivation_leaves_baseline_in_place() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut b = RuleTableBuilder::new();
    b.fixed(Color::GRAY).add(ColorGroup::Normal, ColorRole::Window);
    b.lighter(ColorGroup::Normal, ColorRole::Window, 150)
        .add(ColorGroup::Normal, ColorRole::Light);
    b.lighter(ColorGroup::Normal, ColorRole::Light, 50)
        .add(ColorGroup::Normal, ColorRole::Dark);
    b.save(PaletteKind::SystemPalette);

    let mut storage = storage_loading(&backend("Adwaita", LIGHT_BG), &b.build(), dir.path());
    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    assert_eq!(
        system.color(ColorGroup::Normal, ColorRole::Dark),
        Palette::baseline().color(ColorGroup::Normal, ColorRole::Dark)
    );
    assert!(logs_contain("chained derivation rejected"));
}

#[test]
fn default_tables_read_native_window_color() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    assert_eq!(window(&system), Some(LIGHT_BG));
    assert_eq!(
        system.color(ColorGroup::Normal, ColorRole::Light),
        Some(LIGHT_BG.lighter(125))
    );
}

#[test]
fn widget_palette_overlays_the_system_palette() {
    let backend = backend("Adwaita", LIGHT_BG);
    backend.set_named_color("theme_bg_color", Color::WHITE);
    let mut storage = storage(&backend);

    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    let line_edit = storage
        .palette(PaletteKind::TextLineEditPalette)
        .expect("line edit");
    assert_eq!(
        line_edit.color(ColorGroup::Disabled, ColorRole::Base),
        Some(Color::WHITE)
    );
    assert_eq!(window(&line_edit), window(&system));
}

// ---------------------------------------------------------------------------
// Caching and fallback
// ---------------------------------------------------------------------------

#[test]
fn repeated_queries_return_the_cached_palette() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    for kind in [PaletteKind::SystemPalette, PaletteKind::CheckBoxPalette] {
        let first = storage.palette(kind).expect("first");
        let reads = backend.color_reads();
        let second = storage.palette(kind).expect("second");
        assert!(Rc::ptr_eq(&first, &second), "{kind} was resolved twice");
        assert_eq!(backend.color_reads(), reads);
    }
}

#[test]
fn kind_without_rules_is_the_system_palette() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    let header = storage.palette(PaletteKind::HeaderPalette).expect("header");
    assert!(Rc::ptr_eq(&system, &header));
}

#[test]
fn kind_with_empty_table_is_the_system_palette() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut b = RuleTableBuilder::new();
    b.fixed(Color::GRAY).add(ColorGroup::All, ColorRole::Window);
    b.save(PaletteKind::SystemPalette).clear();
    b.save(PaletteKind::ComboBoxPalette);
    let tables = b.build();
    assert_eq!(tables.get(PaletteKind::ComboBoxPalette).map(RuleTable::len), Some(0));

    let mut storage = storage_loading(&backend("Adwaita", LIGHT_BG), &tables, dir.path());
    let system = storage.palette(PaletteKind::SystemPalette).expect("system");
    let combo = storage.palette(PaletteKind::ComboBoxPalette).expect("combo");
    assert_eq!(*combo, *system);
    for (group, role, brush) in system.iter() {
        assert_eq!(combo.brush(group, role), Some(brush));
    }
}

#[test]
fn palette_index_beyond_the_enumeration_is_none() {
    let mut storage = storage(&backend("Adwaita", LIGHT_BG));
    assert!(storage.palette_at(PaletteKind::COUNT + 3).is_none());
    let by_index = storage
        .palette_at(PaletteKind::SystemPalette.index())
        .expect("system by index");
    let by_kind = storage.palette(PaletteKind::SystemPalette).expect("system");
    assert!(Rc::ptr_eq(&by_index, &by_kind));
}

// ---------------------------------------------------------------------------
// Invalidation
// ---------------------------------------------------------------------------

#[test]
#[traced_test]
fn settings_change_rebuilds_before_next_query() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    let before = storage.palette(PaletteKind::SystemPalette).expect("before");
    assert_eq!(storage.appearance(), Appearance::Light);

    backend.set_theme_name("Adwaita-dark");
    backend.set_named_color("insensitive_bg_color", DARK_BG);
    backend.fire_settings_changed();

    let after = storage.palette(PaletteKind::SystemPalette).expect("after");
    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(window(&after), Some(DARK_BG));
    assert_eq!(storage.appearance(), Appearance::Dark);
    assert_eq!(storage.theme_name(), "Adwaita-dark");
    assert_eq!(storage.rebuild_count(), 2);
    assert!(logs_contain("theme changed"));
}

#[test]
fn each_notification_triggers_a_full_rebuild() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    storage.palette(PaletteKind::SystemPalette);
    backend.fire_settings_changed();
    backend.fire_settings_changed();
    storage.palette(PaletteKind::SystemPalette);
    assert_eq!(storage.rebuild_count(), 3);

    backend.fire_settings_changed();
    storage.palette(PaletteKind::SystemPalette);
    assert_eq!(storage.rebuild_count(), 4);
}

#[test]
fn pending_notification_rebuilds_before_tables_are_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut table = RuleTable::new();
    table.insert(
        TargetBrush::any(ColorGroup::All, ColorRole::Window),
        ColorSource::fixed(Brush::solid(Color::MAGENTA)),
    );
    let custom = system_only(table);
    let path = dir.path().join("rules.json");
    codec::save(&custom, &path).expect("save");

    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    assert!(storage.load(&path));
    assert_eq!(storage.tables(), &custom);

    backend.fire_settings_changed();
    assert_eq!(storage.tables(), &default_tables());
    assert_eq!(storage.rebuild_count(), 2);
}

#[test]
fn pending_notification_rebuilds_before_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut table = RuleTable::new();
    table.insert(
        TargetBrush::any(ColorGroup::All, ColorRole::Window),
        ColorSource::fixed(Brush::solid(Color::MAGENTA)),
    );
    let path = dir.path().join("rules.json");
    codec::save(&system_only(table), &path).expect("save");

    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    assert!(storage.load(&path));

    backend.fire_settings_changed();
    let out = dir.path().join("out.json");
    assert!(storage.save(&out, false));
    assert_eq!(codec::load(&out).expect("load"), default_tables());
    assert_eq!(storage.rebuild_count(), 2);
}

#[test]
fn theme_change_with_same_name_still_rebuilds() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    let first = storage.palette(PaletteKind::SystemPalette).expect("first");

    storage.handle_theme_change();
    storage.handle_theme_change();
    assert_eq!(storage.rebuild_count(), 3);

    let second = storage.palette(PaletteKind::SystemPalette).expect("second");
    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn refresh_only_rebuilds_on_a_new_name() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    assert!(!storage.refresh());
    assert_eq!(storage.rebuild_count(), 1);

    backend.set_theme_name("Yaru-dark");
    assert!(storage.refresh());
    assert_eq!(storage.rebuild_count(), 2);
    assert_eq!(storage.appearance(), Appearance::Dark);
}

#[test]
#[traced_test]
fn refused_registration_disables_live_updates() {
    let backend = backend("Adwaita", LIGHT_BG);
    backend.refuse_settings_connection();
    let adapter = NativeAdapter::new(backend.clone());
    assert!(adapter.change_notifier().is_none());
    assert!(logs_contain("registration refused"));

    let mut storage = PaletteStorage::with_config(adapter, StorageConfig::default());
    backend.fire_settings_changed();
    storage.palette(PaletteKind::SystemPalette);
    assert_eq!(storage.rebuild_count(), 1);
}

#[test]
fn appearance_preference_overrides_theme_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut b = RuleTableBuilder::new();
    b.fixed(Color::BLACK)
        .add_for(ColorGroup::Normal, ColorRole::Base, Appearance::Dark);
    b.fixed(Color::WHITE)
        .add_for(ColorGroup::Normal, ColorRole::Base, Appearance::Light);
    b.save(PaletteKind::SystemPalette);
    let mut storage = storage_loading(&backend("Adwaita", LIGHT_BG), &b.build(), dir.path());

    let base = |storage: &mut Storage| {
        storage
            .palette(PaletteKind::SystemPalette)
            .and_then(|p| p.color(ColorGroup::Normal, ColorRole::Base))
    };
    assert_eq!(base(&mut storage), Some(Color::WHITE));

    storage.handle_color_scheme(1);
    assert_eq!(storage.appearance(), Appearance::Dark);
    assert_eq!(base(&mut storage), Some(Color::BLACK));
    assert_eq!(storage.rebuild_count(), 2);

    storage.handle_appearance_preference(Appearance::Dark);
    assert_eq!(storage.rebuild_count(), 2);

    storage.handle_color_scheme(0);
    assert_eq!(storage.appearance(), Appearance::Light);
    assert_eq!(storage.rebuild_count(), 3);
}

// ---------------------------------------------------------------------------
// Fonts, pixmaps, icons
// ---------------------------------------------------------------------------

#[test]
fn fonts_are_cached_until_theme_change() {
    let backend = backend("Adwaita", LIGHT_BG);
    backend.set_font(FakeBackend::default_font());
    let mut storage = storage(&backend);

    let font = storage.font(FontKind::SystemFont).expect("system font");
    assert_eq!(font.family, "Cantarell");
    assert!((font.point_size - 11.0).abs() < f64::EPSILON);
    assert_eq!(storage.font(FontKind::SystemFont), Some(font));
    assert_eq!(backend.font_reads(), 1);

    backend.fire_settings_changed();
    storage.font(FontKind::SystemFont);
    assert_eq!(backend.font_reads(), 2);
}

#[test]
fn missing_font_is_cached_as_absent() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    assert_eq!(storage.font(FontKind::MenuFont), None);
    assert_eq!(storage.font(FontKind::MenuFont), None);
    assert_eq!(backend.font_reads(), 1);
}

#[test]
fn standard_pixmaps_scale_from_one_native_read() {
    let backend = backend("Adwaita", LIGHT_BG);
    backend.set_stock_icon("gtk-ok", Pixmap::new(16, 16));
    let mut storage = storage(&backend);

    let large = storage
        .standard_pixmap(StandardPixmap::DialogOkButton, 32, 32)
        .expect("ok icon");
    assert_eq!(large.dimensions(), (32, 32));
    let small = storage
        .standard_pixmap(StandardPixmap::DialogOkButton, 8, 8)
        .expect("ok icon");
    assert_eq!(small.dimensions(), (8, 8));
    assert_eq!(backend.icon_reads(), 1);
}

#[test]
fn unmapped_standard_pixmap_is_none() {
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    assert!(storage.standard_pixmap(StandardPixmap::ArrowUp, 16, 16).is_none());
    assert_eq!(backend.icon_reads(), 0);
}

#[test]
fn file_icons_pass_through() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let backend = backend("Adwaita", LIGHT_BG);
    backend.set_file_icon(file.path(), Icon::new("text-x-generic", Pixmap::new(4, 4)));
    let storage = storage(&backend);

    let icon = storage.file_icon(file.path()).expect("icon");
    assert_eq!(icon.name, "text-x-generic");
    assert!(storage.file_icon(Path::new("/nonexistent/gtkpal/file")).is_none());
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn saved_fixed_rule_reloads_with_color_and_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fixed.json");
    let mut b = RuleTableBuilder::new();
    b.fixed(Brush::solid(Color::rgb(0x11, 0x22, 0x33)).with_texture(
        gtkpal_core::TextureSize::new(10, 20),
    ))
    .add(ColorGroup::Normal, ColorRole::Window);
    b.save(PaletteKind::SystemPalette);
    let tables = b.build();
    codec::save(&tables, &path).expect("save");

    let text = std::fs::read_to_string(&path).expect("read back");
    let document: serde_json::Value = serde_json::from_str(&text).expect("json");
    let fixed = &document[codec::ROOT_KEY]["SystemPalette"]["Window"][0]["SourceData"]["FixedBrush"];
    assert_eq!(fixed["Color"], "#112233");
    assert_eq!(fixed["Width"], 10);
    assert_eq!(fixed["Height"], 20);

    assert_eq!(codec::load(&path).expect("load"), tables);
}

#[test]
#[traced_test]
fn failed_load_keeps_current_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{ "SomethingElse": {} }"#).expect("write");

    let mut storage = storage(&backend("Adwaita", LIGHT_BG));
    let before = storage.tables().clone();
    assert!(!storage.load(&path));
    assert_eq!(storage.tables(), &before);
    assert!(logs_contain("rule tables not loaded"));
}

#[test]
fn successful_load_replaces_tables_and_palettes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rules.json");
    let mut table = RuleTable::new();
    table.insert(
        TargetBrush::any(ColorGroup::All, ColorRole::Window),
        ColorSource::fixed(Brush::solid(Color::MAGENTA)),
    );
    codec::save(&system_only(table), &path).expect("save");

    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    let before = storage.palette(PaletteKind::SystemPalette).expect("before");
    assert_eq!(window(&before), Some(LIGHT_BG));

    assert!(storage.load(&path));
    let after = storage.palette(PaletteKind::SystemPalette).expect("after");
    assert_eq!(window(&after), Some(Color::MAGENTA));
    assert_eq!(storage.rebuild_count(), 1);
}

#[test]
fn hardcoded_save_replaces_native_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = backend("Adwaita", LIGHT_BG);
    let mut storage = storage(&backend);
    let window_rule = TargetBrush::any(ColorGroup::Normal, ColorRole::Window);

    let live = dir.path().join("live.json");
    assert!(storage.save(&live, false));
    let tables = codec::load(&live).expect("load live");
    let system = tables.get(PaletteKind::SystemPalette).expect("system");
    assert!(matches!(system.get(&window_rule), Some(ColorSource::Native(_))));

    let fixed = dir.path().join("fixed.json");
    assert!(storage.save(&fixed, true));
    let tables = codec::load(&fixed).expect("load fixed");
    let system = tables.get(PaletteKind::SystemPalette).expect("system");
    assert_eq!(
        system.get(&window_rule),
        Some(&ColorSource::fixed(Brush::solid(LIGHT_BG)))
    );
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = storage(&backend("Adwaita", LIGHT_BG));
    assert!(!storage.save(&dir.path().join("missing").join("out.json"), false));
}

// ---------------------------------------------------------------------------
// Environment configuration
// ---------------------------------------------------------------------------

#[test]
fn configured_save_path_receives_the_built_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dump.json");
    let _storage = storage_with(
        &backend("Adwaita", LIGHT_BG),
        StorageConfig {
            save_path: Some(path.clone()),
            ..StorageConfig::default()
        },
    );
    assert_eq!(codec::load(&path).expect("dump"), default_tables());
}

#[test]
#[traced_test]
fn unreadable_load_path_falls_back_to_built_in_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "not json").expect("write");

    let mut storage = storage_with(
        &backend("Adwaita", LIGHT_BG),
        StorageConfig {
            load_path: Some(path),
            ..StorageConfig::default()
        },
    );
    assert_eq!(storage.tables(), &default_tables());
    assert!(logs_contain("falling back to built-in rule tables"));
}

#[test]
fn config_from_environment_lookup() {
    let config = StorageConfig::from_env_with(|key| match key {
        "GTKPAL_JSON_SAVEPATH" => Some("/tmp/gtkpal.json".to_owned()),
        "GTKPAL_JSON_HARDCODED" => Some("1".to_owned()),
        _ => None,
    });
    assert_eq!(config.load_path, None);
    assert_eq!(
        config.save_path.as_deref(),
        Some(Path::new("/tmp/gtkpal.json"))
    );
    assert!(config.hardcoded);
}
