use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use magshelf_core::storage::{NewRecord, RecordStore, SqliteStore};
use magshelf_core::{Catalog, CatalogError, RecordFilter, SortState};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.db", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

const CSV: &str = "Magazine,Month,Year,YearInput,Special,isSpecial,Created\n\
                   Playboy,jan,75,75,,false,2024-01-01T00:00:00.000Z\n\
                   Playboy,\"Holiday\",74,74,\"Holiday, Deluxe\",true,2024-01-02T00:00:00.000Z\n\
                   ,feb,76,76,,false,\n\
                   Oui,SEPT,,82,,false,2024-01-03T00:00:00.000Z\n";

#[test]
fn test_records_persist_across_reopen() {
    let temp = TempFile::new("magshelf_persist");

    let id = {
        let mut catalog = Catalog::init(&temp.path).expect("open catalog");
        catalog
            .create_record(&NewRecord::from_input("Playboy", "mar", "75"))
            .expect("create record")
    };

    let catalog = Catalog::init(&temp.path).expect("reopen catalog");
    let record = catalog.require_record(id).expect("record persisted");
    assert_eq!(record.month_full, "March");
    assert_eq!(record.month_abbr, "mar");
    assert_eq!(record.year, Some(1975));
    catalog.check_integrity().expect("integrity ok");
}

#[test]
fn test_delimited_import_then_backup_restore() {
    let temp = TempFile::new("magshelf_import");
    let mut catalog = Catalog::init(&temp.path).expect("open catalog");

    assert_eq!(catalog.import_text(CSV).expect("import"), 3);
    let specials = catalog
        .filter(&RecordFilter::new().special_only())
        .expect("filter");
    assert_eq!(specials.len(), 1);
    assert_eq!(specials[0].special, "Holiday, Deluxe");
    assert_eq!(specials[0].month_full, "Holiday");

    let backup = catalog
        .export_backup()
        .expect("export")
        .to_json_pretty()
        .expect("serialize");

    catalog.clear().expect("clear");
    assert_eq!(catalog.count().expect("count"), 0);

    assert_eq!(catalog.import_backup(&backup).expect("restore"), 3);
    let ordered = catalog
        .view(&RecordFilter::new(), SortState::Chronological)
        .expect("view");
    let labels: Vec<String> = ordered
        .iter()
        .map(|r| format!("{} {}", r.display_year(), r.display_month()))
        .collect();
    assert_eq!(labels, vec!["1974 Holiday", "1975 January", "1982 September"]);
}

#[test]
fn test_header_only_import_keeps_contents() {
    let temp = TempFile::new("magshelf_header_only");
    let mut catalog = Catalog::init(&temp.path).expect("open catalog");
    catalog.import_text(CSV).expect("import");

    assert_eq!(catalog.import_text("Magazine,Month,Year\n").expect("import"), 0);
    assert_eq!(catalog.count().expect("count"), 3);
}

#[test]
fn test_invalid_backup_leaves_store_untouched() {
    let temp = TempFile::new("magshelf_bad_backup");
    let mut catalog = Catalog::init(&temp.path).expect("open catalog");
    catalog.import_text(CSV).expect("import");

    let err = catalog
        .import_backup(r#"{"records": []}"#)
        .expect_err("wrong shape should fail");
    assert!(matches!(err, CatalogError::Format(_)));
    assert_eq!(catalog.count().expect("count"), 3);
}

#[test]
fn test_rejects_foreign_schema_version() {
    let temp = TempFile::new("magshelf_schema");
    {
        let store = SqliteStore::open(&temp.path).expect("create store");
        assert_eq!(store.metadata().expect("metadata").schema_version, 1);
    }

    let conn = rusqlite::Connection::open(&temp.path).expect("raw open");
    conn.execute("UPDATE meta SET value = '2' WHERE key = 'schema_version'", [])
        .expect("bump version");
    drop(conn);

    let err = SqliteStore::open(&temp.path)
        .err()
        .expect("version mismatch should fail");
    assert!(matches!(err, CatalogError::Storage(ref msg) if msg.contains("schema version")));
}

#[test]
fn test_ids_survive_clear_and_reopen() {
    let temp = TempFile::new("magshelf_ids");
    let first = {
        let mut store = SqliteStore::open(&temp.path).expect("open");
        let id = store
            .create_record(&NewRecord::new("A", "May"))
            .expect("create");
        store.clear().expect("clear");
        id
    };

    let mut store = SqliteStore::open(&temp.path).expect("reopen");
    let second = store
        .create_record(&NewRecord::new("B", "June"))
        .expect("create");
    assert!(second > first);
}

#[test]
fn test_older_backup_month_abbr_round_trips() {
    let temp = TempFile::new("magshelf_legacy_abbr");
    let mut catalog = Catalog::init(&temp.path).expect("open catalog");

    let text = r#"[{"magazine":"Oui","monthFull":"","monthAbbr":"jun","year":1980}]"#;
    assert_eq!(catalog.import_backup(text).expect("restore"), 1);
    catalog.check_integrity().expect("legacy abbreviation is consistent");

    let exported = catalog
        .export_backup()
        .expect("export")
        .to_json_pretty()
        .expect("serialize");
    let mut copy = Catalog::in_memory();
    copy.import_backup(&exported).expect("restore copy");

    let record = &copy.list_all().expect("list")[0];
    assert_eq!(record.month_full, "");
    assert_eq!(record.month_abbr, "jun");
    assert_eq!(record.display_month(), "June");
}

#[test]
fn test_import_ignores_byte_order_mark() {
    let temp = TempFile::new("magshelf_bom");
    let mut catalog = Catalog::init(&temp.path).expect("open catalog");

    let text = "\u{feff}Magazine,Month,Year\nPlayboy,mar,75\n";
    assert_eq!(catalog.import_text(text).expect("import"), 1);
    let record = &catalog.list_all().expect("list")[0];
    assert_eq!(record.magazine, "Playboy");
    assert_eq!(record.month_full, "March");
}
