use dishbook_core::db::{open_db, open_db_in_memory, DbError, SlotStore, SqliteSlotStore};
use dishbook_core::{Category, Dish, DishStore, DISHES_SLOT_KEY};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn load_on_empty_slot_yields_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let mut store = DishStore::new(SqliteSlotStore::new(&conn));

    store.load();
    assert!(store.dishes().is_empty());
}

#[test]
fn add_then_fresh_store_load_keeps_all_fields() {
    let conn = open_db_in_memory().unwrap();

    let dish = Dish::new(
        "Bruschetta",
        vec![0xFF, 0xD8, 0x01, 0x02],
        "",
        "",
        Category::Antipasto,
        "",
        "",
    );
    let expected_id = dish.id;

    let mut store = DishStore::new(SqliteSlotStore::new(&conn));
    store.load();
    store.add(dish);
    assert_eq!(store.dishes().len(), 1);

    let mut fresh = DishStore::new(SqliteSlotStore::new(&conn));
    fresh.load();

    assert_eq!(fresh.dishes().len(), 1);
    let loaded = &fresh.dishes()[0];
    assert_eq!(loaded.id, expected_id);
    assert_eq!(loaded.name, "Bruschetta");
    assert_eq!(loaded.photo, vec![0xFF, 0xD8, 0x01, 0x02]);
    assert_eq!(loaded.description, "");
    assert_eq!(loaded.recipe, "");
    assert_eq!(loaded.category, Category::Antipasto);
    assert_eq!(loaded.duration, "");
    assert_eq!(loaded.difficulty, "");
}

#[test]
fn reload_preserves_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = DishStore::new(SqliteSlotStore::new(&conn));

    store.add(Dish::new("a", vec![1], "", "", Category::Primo, "", ""));
    store.add(Dish::new("b", vec![2], "", "", Category::Antipasto, "", ""));
    store.add(Dish::new("c", vec![3], "", "", Category::Primo, "", ""));

    let mut fresh = DishStore::new(SqliteSlotStore::new(&conn));
    fresh.load();

    let names: Vec<&str> = fresh.dishes().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn load_replaces_collection_wholesale() {
    let conn = open_db_in_memory().unwrap();

    let mut writer = DishStore::new(SqliteSlotStore::new(&conn));
    writer.add(Dish::new("persisted", vec![1], "", "", Category::Secondo, "", ""));

    // A second add from another store instance rewrites the slot; loading
    // again must drop the stale view, not merge it.
    let mut reader = DishStore::new(SqliteSlotStore::new(&conn));
    reader.load();
    assert_eq!(reader.dishes().len(), 1);

    writer.add(Dish::new("second", vec![2], "", "", Category::Primo, "", ""));
    reader.load();
    assert_eq!(reader.dishes().len(), 2);
}

#[test]
fn undecodable_blob_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();

    let mut slot = SqliteSlotStore::new(&conn);
    slot.write_slot(DISHES_SLOT_KEY, b"not json at all").unwrap();

    let mut store = DishStore::new(SqliteSlotStore::new(&conn));
    store.load();
    assert!(store.dishes().is_empty());
}

#[test]
fn persist_failure_is_swallowed_and_append_still_applies() {
    let mut store = DishStore::new(FailingSlotStore);

    store.add(Dish::new("lost", vec![1], "", "", Category::Primo, "", ""));

    // The write failed, but the contract surfaces nothing and the
    // in-memory collection keeps the record.
    assert_eq!(store.dishes().len(), 1);
    assert_eq!(store.dishes()[0].name, "lost");
}

#[test]
fn read_failure_loads_as_empty_collection() {
    let mut store = DishStore::new(FailingSlotStore);
    store.load();
    assert!(store.dishes().is_empty());
}

#[test]
fn on_disk_reload_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dishbook.db");

    let dish = Dish::new(
        "Ossobuco",
        vec![10, 20, 30],
        "braised veal shank",
        "brown, braise, gremolata",
        Category::Secondo,
        "3 h",
        "hard",
    );
    let expected = dish.clone();

    {
        let conn = open_db(&path).unwrap();
        let mut store = DishStore::new(SqliteSlotStore::new(&conn));
        store.load();
        store.add(dish);
    }

    let conn = open_db(&path).unwrap();
    let mut store = DishStore::new(SqliteSlotStore::new(&conn));
    store.load();

    assert_eq!(store.dishes(), std::slice::from_ref(&expected));
}

#[test]
fn listeners_fire_on_add_and_load_until_unsubscribed() {
    let conn = open_db_in_memory().unwrap();
    let mut store = DishStore::new(SqliteSlotStore::new(&conn));

    let notifications = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&notifications);
    let id = store.subscribe(move || seen.set(seen.get() + 1));

    store.load();
    assert_eq!(notifications.get(), 1);

    store.add(Dish::new("x", vec![1], "", "", Category::Primo, "", ""));
    assert_eq!(notifications.get(), 2);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));

    store.add(Dish::new("y", vec![2], "", "", Category::Primo, "", ""));
    assert_eq!(notifications.get(), 2);
}

/// Slot double whose reads and writes always fail.
struct FailingSlotStore;

impl SlotStore for FailingSlotStore {
    fn read_slot(&self, _key: &str) -> Result<Option<Vec<u8>>, DbError> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn write_slot(&mut self, _key: &str, _value: &[u8]) -> Result<(), DbError> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}
