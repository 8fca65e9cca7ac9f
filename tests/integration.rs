// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config};
use iced_folio::app::storage::{FileStore, KeyValueStore, STORAGE_FILE};
use iced_folio::app::Route;
use iced_folio::content::Content;
use iced_folio::domain::catalog::{self, SkillSelection, SortOrder};
use iced_folio::domain::navigation::{active_index, TABS};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::theming::{ThemeController, ThemePreference, ThemeSource};
use std::num::NonZeroUsize;
use tempfile::tempdir;

fn content() -> Content {
    Content::load(NonZeroUsize::new(4).expect("non-zero")).expect("embedded content loads")
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn theme_toggle_survives_store_reopen() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join(STORAGE_FILE);

    let store = FileStore::open_at(path.clone()).expect("fresh store opens");
    let mut controller =
        ThemeController::init_with(Some(Box::new(store)), None, ThemePreference::Dark);
    assert_eq!(controller.source(), ThemeSource::Default);
    controller.toggle();
    assert_eq!(controller.preference(), ThemePreference::Light);

    let reopened = FileStore::open_at(path.clone()).expect("store reopens");
    assert_eq!(reopened.get("theme").as_deref(), Some("light"));

    // System preference must not override an explicit choice.
    let controller = ThemeController::init_with(
        Some(Box::new(reopened)),
        Some(ThemePreference::Dark),
        ThemePreference::Dark,
    );
    assert_eq!(controller.preference(), ThemePreference::Light);
    assert_eq!(controller.source(), ThemeSource::Stored);
}

#[test]
fn corrupt_store_is_repaired_by_next_toggle() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join(STORAGE_FILE);
    std::fs::write(&path, b"\xff\x00not cbor").expect("write garbage");

    let store = FileStore::open_at(path.clone()).expect("corrupt store still opens");
    assert!(store.was_reset());

    let mut controller =
        ThemeController::init_with(Some(Box::new(store)), None, ThemePreference::Dark);
    assert!(controller.is_persistent());
    controller.toggle();
    assert_eq!(controller.preference(), ThemePreference::Light);

    let reopened = FileStore::open_at(path).expect("repaired store reopens");
    assert!(!reopened.was_reset());
    let controller =
        ThemeController::init_with(Some(Box::new(reopened)), None, ThemePreference::Dark);
    assert_eq!(controller.preference(), ThemePreference::Light);
    assert_eq!(controller.source(), ThemeSource::Stored);
}

#[test]
fn missing_store_keeps_theme_in_memory() {
    let mut controller = ThemeController::init_with(None, None, ThemePreference::Dark);
    assert!(!controller.is_persistent());
    controller.toggle();
    assert_eq!(controller.preference(), ThemePreference::Light);
}

#[test]
fn embedded_catalog_lists_newest_first() {
    let content = content();
    let visible = catalog::apply_filter(
        content.projects(),
        "",
        &SkillSelection::new(),
        SortOrder::Newest,
    );
    let slugs: Vec<&str> = visible.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        [
            "Cypress-lawn",
            "Capitol-Companies",
            "market-neutral-price-compression-portfolio",
            "cadenlund-portfolio",
        ]
    );
}

#[test]
fn embedded_catalog_search_is_case_insensitive() {
    let content = content();
    let visible = catalog::apply_filter(
        content.projects(),
        "MARKET NEUTRAL",
        &SkillSelection::new(),
        SortOrder::Oldest,
    );
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].slug, "market-neutral-price-compression-portfolio");

    let none = catalog::apply_filter(
        content.projects(),
        "no such project anywhere",
        &SkillSelection::new(),
        SortOrder::Newest,
    );
    assert!(none.is_empty());
}

#[test]
fn featured_projects_are_newest_first() {
    let content = content();
    let slugs: Vec<&str> = catalog::featured(content.projects())
        .iter()
        .map(|p| p.slug.as_str())
        .collect();
    assert_eq!(
        slugs,
        ["Cypress-lawn", "market-neutral-price-compression-portfolio"]
    );
}

#[test]
fn every_catalog_record_has_a_reachable_route() {
    let content = content();
    for project in content.projects() {
        let route = Route::parse(&format!("/projects/{}", project.slug));
        assert_eq!(route, Route::Project(project.slug.clone()));
        assert!(!route.shows_header());
        assert_eq!(active_index(&TABS, &route.path()), None);
    }
}

#[test]
fn tab_routes_activate_their_tab() {
    for (index, tab) in TABS.iter().enumerate() {
        let route = Route::parse(tab.route);
        assert_eq!(active_index(&TABS, &route.path()), Some(index));
    }
    assert_eq!(active_index(&TABS, "/contact"), None);
}

#[test]
fn header_settings_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.header.fade_distance = 250.0;
    config.header.hide_delay_ms = 400;
    config.gallery.default_sort = SortOrder::Oldest;
    config::save_to_path(&config, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    let fade = loaded.header.fade_config();
    assert_eq!(fade.fade_distance, 250.0);
    assert_eq!(fade.hide_delay.as_millis(), 400);
    assert_eq!(loaded.gallery.default_sort, SortOrder::Oldest);
}
