use proptest::prelude::*;
use teashelf::{JsonFileTeaStore, Tea, TeaStore};
use tempfile::TempDir;

fn tea_strategy() -> impl Strategy<Value = Tea> {
    (any::<u64>(), any::<String>(), any::<String>())
        .prop_map(|(id, name, description)| Tea::new(id, name, description))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn written_collection_reads_back_equal(teas in prop::collection::vec(tea_strategy(), 0..8)) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileTeaStore::new(temp_dir.path().join("data.json"));

        store.replace_all(&teas).unwrap();

        prop_assert_eq!(store.load_all().unwrap(), teas);
    }
}

#[test]
fn multi_byte_descriptions_survive() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileTeaStore::new(temp_dir.path().join("data.json"));
    let teas = vec![
        Tea::new(
            1,
            "Clearly not a Matcha",
            "A Japanese green tea that swipes you right into a zen state… 🧘🍵",
        ),
        Tea::new(u64::MAX, "抹茶 \"quoted\" \\ tab\t", "rue des Fossés 💥\n"),
    ];

    store.replace_all(&teas).unwrap();

    assert_eq!(store.load_all().unwrap(), teas);
}
