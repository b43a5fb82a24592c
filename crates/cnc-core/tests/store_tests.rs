//! Tests for ToolStore CRUD, query and import/export

use cnc_core::{
    Error, MemoryAdapter, StoreOptions, ToolFields, ToolRecord, ToolStore, ToolType, TypeFilter,
    codec,
};
use cnc_test_utils::fixtures::{drill, mill, thread_mill};
use cnc_test_utils::store::{create_all, empty_memory_store};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn names<'a>(records: impl IntoIterator<Item = &'a ToolRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.name()).collect()
}

#[test]
fn test_create_then_find_returns_equal_record() {
    let mut store = empty_memory_store();

    let created = store.create(thread_mill()).unwrap().into_inner();

    assert_eq!(store.find_by_id(created.id().as_str()), Some(&created));
    assert_eq!(created.tool_type(), ToolType::ThreadMill);
    assert_eq!(created.diameter(), Some("4.8"));
}

#[test]
fn test_create_assigns_distinct_ids_in_same_instant() {
    let mut store = empty_memory_store();
    let fields = mill("Endmill 6", "Haas VF-2", "T05");

    let records = create_all(&mut store, vec![fields; 50]);

    let mut ids: Vec<&str> = records.iter().map(|r| r.id().as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
    assert_eq!(store.len(), 50);
}

#[test]
fn test_create_rejects_blank_required_fields() {
    let mut store = empty_memory_store();

    let err = store
        .create(ToolFields::new("   ", ToolType::Mill, "Haas VF-2"))
        .unwrap_err();

    assert!(matches!(err, Error::ValidationFailed { ref field, .. } if field == "name"));
    assert!(store.is_empty());
    assert_eq!(store.close().write_count(), 0);
}

#[test]
fn test_create_persists_collection() {
    let mut store = empty_memory_store();
    store.create(mill("Endmill 6", "Haas VF-2", "T05")).unwrap().into_result().unwrap();

    let adapter = store.close();
    let stored = codec::decode(adapter.payload().unwrap()).unwrap();
    assert_eq!(names(&stored), vec!["Endmill 6"]);
}

#[test]
fn test_update_replaces_fields_and_keeps_identity() {
    let mut store = empty_memory_store();
    let original = store
        .create(mill("Endmill 6", "Haas VF-2", "T05").with_notes("roughing"))
        .unwrap()
        .into_inner();

    let replacement = ToolFields::new("Endmill 8", ToolType::Other, "DMG Mori").with_length("90");
    let updated = store
        .update(original.id().as_str(), replacement.clone())
        .unwrap()
        .into_inner();

    let found = store.find_by_id(original.id().as_str()).unwrap();
    assert_eq!(found, &updated);
    assert_eq!(found.id(), original.id());
    assert_eq!(found.date_added(), original.date_added());
    assert_eq!(found.to_fields(), replacement);
    // Fields absent from the replacement are cleared, not merged
    assert_eq!(found.notes(), None);
    assert_eq!(found.position(), None);
}

#[test]
fn test_update_unknown_id_leaves_collection_unchanged() {
    let mut store = empty_memory_store();
    create_all(&mut store, [mill("Endmill 6", "Haas VF-2", "T05")]);
    let before = store.serialize().unwrap();

    let err = store
        .update("nonexistent-id", mill("X", "Y", "Z"))
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { ref id } if id == "nonexistent-id"));
    assert_eq!(store.serialize().unwrap(), before);
}

#[test]
fn test_update_rejects_blank_machine_without_changes() {
    let mut store = empty_memory_store();
    let record = store.create(mill("Endmill 6", "Haas VF-2", "T05")).unwrap().into_inner();

    let err = store
        .update(record.id().as_str(), ToolFields::new("Endmill 6", ToolType::Mill, ""))
        .unwrap_err();

    assert!(matches!(err, Error::ValidationFailed { ref field, .. } if field == "machine"));
    assert_eq!(store.find_by_id(record.id().as_str()), Some(&record));
}

#[test]
fn test_delete_removes_and_returns_record() {
    let mut store = empty_memory_store();
    let record = store.create(drill("Drill 8", "Haas VF-2", "T02")).unwrap().into_inner();

    let removed = store.delete(record.id().as_str()).unwrap().into_inner();

    assert_eq!(removed, record);
    assert!(store.find_by_id(record.id().as_str()).is_none());
    assert!(matches!(
        store.delete(record.id().as_str()),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_query_all_sorts_by_machine_then_position() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("A", "Haas VF-2", "T02"),
            mill("B", "Haas VF-2", "T01"),
            mill("C", "DMG Mori", "T15"),
        ],
    );

    assert_eq!(names(store.query("", TypeFilter::All)), vec!["C", "B", "A"]);
}

#[test]
fn test_query_sorts_accented_machines_alphabetically() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("A", "Fanuc", "T01"),
            mill("B", "Émco", "T01"),
            mill("C", "Жуковский", "T01"),
            mill("D", "Ёлка", "T01"),
        ],
    );

    assert_eq!(names(store.query("", TypeFilter::All)), vec!["B", "A", "D", "C"]);
}

#[test]
fn test_query_missing_position_sorts_first() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("slotted", "Haas VF-2", "T01"),
            ToolFields::new("loose", ToolType::Other, "Haas VF-2"),
        ],
    );

    assert_eq!(names(store.query("", TypeFilter::All)), vec!["loose", "slotted"]);
}

#[test]
fn test_query_ties_keep_insertion_order() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("first", "Haas VF-2", "T01"),
            drill("second", "Haas VF-2", "T01"),
            mill("third", "Haas VF-2", "T01"),
        ],
    );

    assert_eq!(
        names(store.query("", TypeFilter::All)),
        vec!["first", "second", "third"]
    );
}

#[test]
fn test_query_machine_comparison_ignores_case() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("upper", "HAAS", "T01"),
            mill("lower", "doosan", "T01"),
        ],
    );

    assert_eq!(names(store.query("", TypeFilter::All)), vec!["lower", "upper"]);
}

#[test]
fn test_query_cyrillic_search() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [ToolFields::new("Концевая фреза Ø10", ToolType::Mill, "Haas VF-2")],
    );

    assert_eq!(store.query("фреза", TypeFilter::All).len(), 1);
    assert_eq!(store.query("ФРЕЗА", TypeFilter::All).len(), 1);
    assert!(store.query("сверло", TypeFilter::All).is_empty());
}

#[rstest]
#[case("haas", 2)]
#[case("t15", 1)]
#[case("aluminium", 1)]
#[case("сверло", 1)]
#[case("drill", 1)]
#[case("mill", 2)]
#[case("lathe", 0)]
#[case("", 3)]
fn test_query_search_fields(#[case] needle: &str, #[case] expected: usize) {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("Endmill 10", "Haas VF-2", "T01").with_notes("for aluminium"),
            drill("Twist 8", "Haas VF-2", "T02"),
            ToolFields::new("Thread M8", ToolType::ThreadMill, "DMG Mori").with_position("T15"),
        ],
    );

    assert_eq!(store.query(needle, TypeFilter::All).len(), expected);
}

#[test]
fn test_query_combines_search_and_type_filter() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            mill("Endmill 10", "Haas VF-2", "T01"),
            drill("Twist 8", "Haas VF-2", "T02"),
            drill("Spot 6", "DMG Mori", "T03"),
        ],
    );

    let drills = store.query("", TypeFilter::Only(ToolType::Drill));
    assert_eq!(names(drills), vec!["Spot 6", "Twist 8"]);

    let haas_drills = store.query("haas", ToolType::Drill.into());
    assert_eq!(names(haas_drills), vec!["Twist 8"]);

    assert!(store.query("", ToolType::Other.into()).is_empty());
}

#[test]
fn test_query_reflects_later_mutations() {
    let mut store = empty_memory_store();
    let record = store.create(mill("Endmill", "Haas", "T01")).unwrap().into_inner();
    assert_eq!(store.query("", TypeFilter::All).len(), 1);

    store.delete(record.id().as_str()).unwrap().into_inner();
    assert!(store.query("", TypeFilter::All).is_empty());
}

#[test]
fn test_serialize_round_trips() {
    let mut store = empty_memory_store();
    create_all(
        &mut store,
        [
            thread_mill(),
            mill("Endmill", "Haas", "T01"),
            ToolFields::new("Bare", ToolType::Other, "Okuma"),
        ],
    );

    let bytes = store.serialize().unwrap();
    let decoded = codec::decode(&bytes).unwrap();

    assert_eq!(decoded, store.records().to_vec());
}

#[test]
fn test_serialized_layout_uses_wire_names() {
    let mut store = empty_memory_store();
    create_all(&mut store, [ToolFields::new("Bare", ToolType::Drill, "Okuma")]);

    let value: serde_json::Value = serde_json::from_slice(&store.serialize().unwrap()).unwrap();
    let entry = &value[0];

    assert_eq!(entry["type"], "сверло");
    assert!(entry["dateAdded"].is_string());
    assert!(entry.get("diameter").is_none());
    assert!(entry.get("position").is_none());
}

#[test]
fn test_export_matches_serialize() {
    let mut store = empty_memory_store();
    create_all(&mut store, [thread_mill()]);

    assert_eq!(store.export_all().unwrap(), store.serialize().unwrap());
}

#[test]
fn test_import_replaces_collection() {
    let mut store = empty_memory_store();
    create_all(&mut store, [mill("Old", "Haas", "T01")]);

    let saved = store
        .import_all(cnc_test_utils::fixtures::legacy_backup().as_bytes())
        .unwrap();

    assert!(saved.is_durable());
    assert_eq!(saved.value, 2);
    assert!(store.query("old", TypeFilter::All).is_empty());
    let imported = store.find_by_id("1700000000001").unwrap();
    assert_eq!(imported.machine(), "Okuma LB3000");
    assert_eq!(imported.tool_type(), ToolType::Drill);
    // Blank strings from older exports load as absent
    assert_eq!(store.find_by_id("1700000000000").unwrap().notes(), None);
}

#[test]
fn test_import_non_array_is_malformed_and_keeps_collection() {
    let mut store = empty_memory_store();
    create_all(&mut store, [mill("Keep", "Haas", "T01")]);
    let before = store.serialize().unwrap();

    let err = store.import_all(br#"{"foo": 1}"#).unwrap_err();

    assert!(matches!(err, Error::MalformedData { .. }));
    assert_eq!(store.serialize().unwrap(), before);
    assert_eq!(store.close().write_count(), 1);
}

#[test]
fn test_import_unreadable_json_keeps_collection() {
    let mut store = empty_memory_store();
    create_all(&mut store, [mill("Keep", "Haas", "T01")]);

    assert!(store.import_all(b"not json").is_err());
    assert_eq!(names(store.records()), vec!["Keep"]);
}

#[test]
fn test_import_duplicate_ids_last_write_wins() {
    let mut store = empty_memory_store();

    let saved = store
        .import_all(
            br#"[
                {"id": "7", "name": "old", "type": "mill", "machine": "Haas"},
                {"id": "7", "name": "new", "type": "mill", "machine": "Haas"}
            ]"#,
        )
        .unwrap();

    assert_eq!(saved.value, 1);
    assert_eq!(store.find_by_id("7").unwrap().name(), "new");
}

#[test]
fn test_write_failure_keeps_change_in_memory() {
    let mut adapter = MemoryAdapter::with_payload("[]");
    adapter.fail_writes(true);
    let (mut store, _) = ToolStore::open(adapter, &StoreOptions::default());

    let saved = store.create(mill("Endmill", "Haas", "T01")).unwrap();

    assert!(!saved.is_durable());
    assert!(matches!(
        saved.durability.error(),
        Some(Error::WriteFailed { .. })
    ));
    assert!(store.find_by_id(saved.value.id().as_str()).is_some());
    assert_eq!(store.close().payload(), Some(&b"[]"[..]));
}
