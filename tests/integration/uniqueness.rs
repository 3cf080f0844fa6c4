use std::sync::Arc;

use teashelf::tea::find_by_name;
use teashelf::{InMemoryTeaStore, StorageError, Tea, TeaStore, TeaWriter};

fn seeded(teas: Vec<Tea>) -> (TeaWriter, InMemoryTeaStore) {
    let store = InMemoryTeaStore::with_teas(teas);
    (TeaWriter::new(Arc::new(store.clone())), store)
}

#[test]
fn name_taken_by_other_id_is_rejected() {
    let (writer, store) = seeded(vec![Tea::new(1, "A", "x")]);

    let err = writer.upsert(Tea::new(2, "A", "x")).unwrap_err();

    assert!(matches!(err, StorageError::NameConflict { .. }));
    assert_eq!(store.load_all().unwrap(), vec![Tea::new(1, "A", "x")]);
    assert_eq!(store.version(), 0);
}

#[test]
fn id_taken_by_other_name_is_rejected() {
    let (writer, store) = seeded(vec![Tea::new(1, "A", "x")]);

    let err = writer.upsert(Tea::new(1, "B", "x")).unwrap_err();

    assert!(matches!(err, StorageError::IdConflict { .. }));
    assert_eq!(store.load_all().unwrap(), vec![Tea::new(1, "A", "x")]);
    assert_eq!(store.version(), 0);
}

#[test]
fn matching_id_and_name_updates_description() {
    let (writer, store) = seeded(vec![Tea::new(1, "A", "x")]);

    writer.upsert(Tea::new(1, "A", "y")).unwrap();

    let teas = store.load_all().unwrap();
    assert_eq!(find_by_name(&teas, "A").map(|t| t.description.as_str()), Some("y"));
    assert_eq!(teas.iter().filter(|t| t.id == 1).count(), 1);
}

#[test]
fn same_record_twice_leaves_one_copy() {
    let (writer, store) = seeded(Vec::new());
    let tea = Tea::new(7, "Sencha", "grassy");

    writer.upsert(tea.clone()).unwrap();
    writer.upsert(tea.clone()).unwrap();

    assert_eq!(store.load_all().unwrap(), vec![tea]);
}

#[test]
fn untouched_records_keep_their_order() {
    let (writer, store) = seeded(vec![
        Tea::new(1, "A", ""),
        Tea::new(2, "B", ""),
        Tea::new(3, "C", ""),
    ]);

    writer.upsert(Tea::new(2, "B", "changed")).unwrap();
    writer.upsert(Tea::new(4, "D", "")).unwrap();

    let ids: Vec<_> = store.load_all().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 2, 4]);
}

#[test]
fn unique_ids_and_names_hold_after_mixed_writes() {
    let (writer, store) = seeded(Vec::new());
    let attempts = [
        Tea::new(1, "A", ""),
        Tea::new(2, "B", ""),
        Tea::new(2, "A", ""),
        Tea::new(1, "C", ""),
        Tea::new(3, "C", ""),
        Tea::new(3, "C", "again"),
    ];
    for tea in attempts {
        let _ = writer.upsert(tea);
    }

    let teas = store.load_all().unwrap();
    let mut ids: Vec<_> = teas.iter().map(|t| t.id).collect();
    let mut names: Vec<_> = teas.iter().map(|t| t.name.clone()).collect();
    ids.sort_unstable();
    ids.dedup();
    names.sort();
    names.dedup();
    assert_eq!(ids.len(), teas.len());
    assert_eq!(names.len(), teas.len());
    assert_eq!(teas.len(), 3);
}
