// SPDX-License-Identifier: PMPL-1.0-or-later

//! Behaviour of the locale service over the built-in dashboard catalog

use dashboard_locale::i18n::{Lang, LocaleService, TranslationTable, STORAGE_KEY};
use dashboard_locale::storage::{FileStore, KeyValueStore, MemoryStore};
use tempfile::TempDir;

fn fresh_service() -> LocaleService<MemoryStore> {
    LocaleService::new(TranslationTable::builtin(), MemoryStore::new())
}

#[test]
fn test_every_key_resolves_in_both_languages() {
    let table = TranslationTable::builtin();
    let mut service = fresh_service();

    for lang in Lang::supported() {
        service.set_language(lang.clone());
        for key in table.keys() {
            let configured = table.entry(key).and_then(|e| e.get(&lang)).unwrap();
            let expected = if configured.is_empty() { key } else { configured };
            assert_eq!(
                service.translate(key),
                expected,
                "{} in {} should be the configured text",
                key,
                lang
            );
        }
    }
}

#[test]
fn test_unknown_keys_echo_in_both_languages() {
    let mut service = fresh_service();
    for _ in 0..2 {
        assert_eq!(service.translate("unknown_key"), "unknown_key");
        assert_eq!(service.translate(""), "");
        assert_eq!(service.translate("NAV_DASHBOARD"), "NAV_DASHBOARD");
        service.toggle_language();
    }
}

#[test]
fn test_dashboard_label_switches_with_toggle() {
    let mut service = fresh_service();
    assert_eq!(service.translate("nav_dashboard"), "概览仪表盘");
    service.toggle_language();
    assert_eq!(service.translate("nav_dashboard"), "Dashboard");
}

#[test]
fn test_blank_english_suffix_falls_back_to_key() {
    let mut service = fresh_service();
    assert_eq!(service.translate("unit_items"), "条");
    service.set_language(Lang::En);
    assert_eq!(service.translate("unit_items"), "unit_items");
    assert_eq!(service.translate("unit_count"), "unit_count");
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut service = fresh_service();
    for start in [Lang::Zh, Lang::En] {
        service.set_language(start.clone());
        let was_primary = service.is_primary();

        service.toggle_language();
        assert_ne!(service.current(), &start);
        assert_eq!(service.is_primary(), !was_primary);

        service.toggle_language();
        assert_eq!(service.current(), &start);
        assert_eq!(service.is_primary(), was_primary);
    }
}

#[test]
fn test_first_run_starts_in_primary() {
    let service = fresh_service();
    assert_eq!(service.current(), &Lang::PRIMARY);
    assert!(service.is_primary());
}

#[test]
fn test_language_survives_reload() {
    let mut store = MemoryStore::new();
    for lang in [Lang::En, Lang::Zh, Lang::from_code("ja")] {
        {
            let mut service = LocaleService::new(TranslationTable::builtin(), &mut store);
            service.set_language(lang.clone());
        }
        let reloaded = LocaleService::new(TranslationTable::builtin(), &mut store);
        assert_eq!(reloaded.current(), &lang);
    }
}

#[test]
fn test_language_survives_reload_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let mut service =
        LocaleService::new(TranslationTable::builtin(), FileStore::open(&path).unwrap());
    service.toggle_language();
    drop(service);

    let reloaded =
        LocaleService::new(TranslationTable::builtin(), FileStore::open(&path).unwrap());
    assert_eq!(reloaded.current(), &Lang::En);
    assert_eq!(reloaded.translate("crypto_title"), "CRYPTOCURRENCY");
}

#[test]
fn test_truncated_store_starts_in_primary_and_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"locale": "e"#).unwrap();

    let mut service =
        LocaleService::new(TranslationTable::builtin(), FileStore::open(&path).unwrap());
    assert!(service.is_primary());
    service.toggle_language();
    drop(service);

    let reloaded =
        LocaleService::new(TranslationTable::builtin(), FileStore::open(&path).unwrap());
    assert_eq!(reloaded.current(), &Lang::En);
}

#[test]
fn test_unsupported_language_is_accepted_and_falls_back_to_keys() {
    let mut service = fresh_service();
    service.set_language(Lang::from_code("fr"));

    assert_eq!(service.current().code(), "fr");
    assert!(!service.is_primary());
    assert_eq!(service.translate("nav_dashboard"), "nav_dashboard");
    assert_eq!(service.store().get(STORAGE_KEY).as_deref(), Some("fr"));

    service.toggle_language();
    assert_eq!(service.current(), &Lang::Zh);
    assert_eq!(service.translate("nav_dashboard"), "概览仪表盘");
}

#[test]
fn test_persisted_unsupported_language_is_restored_verbatim() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "de").unwrap();
    let service = LocaleService::new(TranslationTable::builtin(), store);
    assert_eq!(service.current(), &Lang::from_code("de"));
    assert_eq!(service.translate("volume"), "volume");
}

#[test]
fn test_supported_tag_built_as_other_survives_reload() {
    let mut store = MemoryStore::new();
    {
        let mut service = LocaleService::new(TranslationTable::builtin(), &mut store);
        service.set_language(Lang::Other("zh".to_string()));
        assert!(service.is_primary());
    }
    let reloaded = LocaleService::new(TranslationTable::builtin(), &mut store);
    assert_eq!(reloaded.current(), &Lang::Zh);
    assert_eq!(reloaded.translate("nav_dashboard"), "概览仪表盘");
}

#[test]
fn test_sessions_do_not_share_state() {
    let mut first = fresh_service();
    let second = fresh_service();
    first.toggle_language();
    assert_eq!(first.current(), &Lang::En);
    assert_eq!(second.current(), &Lang::Zh);
}

#[test]
fn test_custom_catalog_drives_lookups() {
    let table = TranslationTable::from_json_str(
        r#"{"nav_dashboard": {"zh": "仪表盘", "en": "Board"}, "only_zh": {"zh": "仅中文"}}"#,
    )
    .unwrap();
    let mut service = LocaleService::new(table, MemoryStore::new());

    assert_eq!(service.translate("nav_dashboard"), "仪表盘");
    assert_eq!(service.translate("only_zh"), "仅中文");
    service.toggle_language();
    assert_eq!(service.translate("nav_dashboard"), "Board");
    assert_eq!(service.translate("only_zh"), "only_zh");
    assert_eq!(service.translate("nav_watchlist"), "nav_watchlist");
}
