use fuellog::config::migrate::{migrate_missing_fields, missing_fields};
use fuellog::config::{Config, DEFAULT_FLEET, StoreKind};
use fuellog::core::log::LogLogic;
use std::fs;

#[test]
fn test_absent_file_gives_defaults() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("fuellog.conf");

    let cfg = Config::load(&path).expect("load");

    assert_eq!(cfg.path, path);
    assert_eq!(cfg.store.kind, StoreKind::Http);
    assert_eq!(cfg.fill_up_dataset, "cargasCombustible.csv");
    assert_eq!(cfg.deduction_dataset, "stock_combustible_colectivos.csv");
    assert_eq!(cfg.fleet, DEFAULT_FLEET.to_vec());
    assert_eq!(cfg.utc_offset_hours, -3);
    assert_eq!(cfg.log_file(), tmp.path().join("fuellog.log"));
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_keys() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("fuellog.conf");
    fs::write(&path, "store:\n  kind: fs\n  bucket: flota\nfleet: [1, 2, 3]\n").expect("write");

    let cfg = Config::load(&path).expect("load");

    assert_eq!(cfg.store.kind, StoreKind::Fs);
    assert_eq!(cfg.store.bucket, "flota");
    assert_eq!(cfg.fleet, vec![1, 2, 3]);
    assert_eq!(cfg.date_format, "%d/%m/%Y");
    assert_eq!(cfg.operator, None);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("fuellog.conf");
    fs::write(&path, "fleet: [not, numbers]\n").expect("write");

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_overrides_switch_to_local_store() {
    let cfg = Config::default().with_overrides(Some("/tmp/b"), Some("/tmp/m"), Some("Ana"));

    assert_eq!(cfg.store.kind, StoreKind::Fs);
    assert_eq!(cfg.store.root, "/tmp/b");
    assert_eq!(cfg.mirror_dir, "/tmp/m");
    assert_eq!(cfg.operator.as_deref(), Some("Ana"));
}

#[test]
fn test_init_writes_file_once() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("nested").join("fuellog.conf");

    assert!(Config::init_all(&path).expect("init"));
    assert!(path.exists());
    assert!(!Config::init_all(&path).expect("second init"));

    let cfg = Config::load(&path).expect("load");
    assert_eq!(cfg.fleet, DEFAULT_FLEET.to_vec());
}

#[test]
fn test_missing_fields_and_migration() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("fuellog.conf");
    fs::write(&path, "store:\n  kind: fs\nmirror_dir: /data\n").expect("write");

    let missing = missing_fields(&path).expect("check");
    assert!(missing.contains(&"fleet".to_string()));
    assert!(missing.contains(&"store.bucket".to_string()));
    assert!(!missing.contains(&"mirror_dir".to_string()));
    assert!(!missing.contains(&"store.kind".to_string()));

    let added = migrate_missing_fields(&path).expect("migrate");
    assert_eq!(added, missing);
    assert!(missing_fields(&path).expect("recheck").is_empty());

    let cfg = Config::load(&path).expect("load");
    assert_eq!(cfg.mirror_dir, "/data");
    assert_eq!(cfg.store.kind, StoreKind::Fs);
}

#[test]
fn test_activity_log_appends_entries() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("logs").join("fuellog.log");

    assert!(LogLogic::read(&path).expect("read empty").is_empty());

    LogLogic::write(&path, "fill_pump", "cargasCombustible.csv", "row 0 appended").expect("write");
    LogLogic::write(&path, "deduct", "stock.csv", "row 0, with comma").expect("write");

    let entries = LogLogic::read(&path).expect("read");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "fill_pump");
    assert_eq!(entries[1].message, "row 0, with comma");
}
