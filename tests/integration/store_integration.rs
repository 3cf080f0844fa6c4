use std::fs;
use std::sync::Arc;

use teashelf::store::file::DEFAULT_DATA_FILE;
use teashelf::tea::{find_by_name, SequenceIdGenerator};
use teashelf::{JsonFileTeaStore, StorageError, Tea, TeaCatalog, TeaDraft, TeaStore, TeaWriter};
use tempfile::TempDir;

fn file_store(temp_dir: &TempDir) -> Arc<JsonFileTeaStore> {
    Arc::new(JsonFileTeaStore::new(temp_dir.path().join(DEFAULT_DATA_FILE)))
}

#[test]
fn first_run_reads_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    assert_eq!(store.load_all().unwrap(), Vec::<Tea>::new());
}

#[test]
fn fresh_insert_into_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    let writer = TeaWriter::new(store.clone());

    writer.upsert(Tea::new(42, "Z", "d")).unwrap();

    assert_eq!(store.load_all().unwrap(), vec![Tea::new(42, "Z", "d")]);
}

#[test]
fn writer_reads_changes_made_behind_its_back() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    let writer = TeaWriter::new(store.clone());
    writer.upsert(Tea::new(1, "A", "")).unwrap();

    // Another process rewrites the file between calls.
    let other = JsonFileTeaStore::new(store.path());
    other.replace_all(&[Tea::new(9, "B", "")]).unwrap();

    let err = writer.upsert(Tea::new(10, "B", "")).unwrap_err();
    assert!(matches!(err, StorageError::NameConflict { existing_id: 9, .. }));
}

#[test]
fn corrupt_store_blocks_writes_and_is_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    fs::write(store.path(), "[{\"id\": 1, \"name\": \"A\"").unwrap();
    let writer = TeaWriter::new(store.clone());

    let err = writer.upsert(Tea::new(2, "B", "")).unwrap_err();

    assert!(matches!(err, StorageError::CorruptStore { .. }));
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "[{\"id\": 1, \"name\": \"A\""
    );
}

#[test]
fn catalog_over_file_store_updates_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);
    let catalog = TeaCatalog::new(store.clone(), Arc::new(SequenceIdGenerator::starting_at(1)));

    assert!(catalog.add_tea(TeaDraft::new("404 Tea Not Found", "v1")).success);
    assert!(catalog.add_tea(TeaDraft::new("Merge Conflict Mint", "")).success);
    assert!(catalog.add_tea(TeaDraft::new("404 Tea Not Found", "v2")).success);

    let teas = store.load_all().unwrap();
    let names: Vec<_> = teas.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Merge Conflict Mint", "404 Tea Not Found"]);
    let tea = find_by_name(&teas, "404 Tea Not Found").unwrap();
    assert_eq!(tea.id, 1);
    assert_eq!(tea.description, "v2");
}
