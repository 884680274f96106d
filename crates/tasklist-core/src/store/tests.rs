//! List Store behaviour tests

use crate::domain::{ItemId, NotFoundError, ValidationError};
use crate::store::{IdSource, ListStore};
use crate::view::{synchronize, Mutation};

fn texts(store: &ListStore) -> Vec<String> {
    store.snapshot().into_iter().map(|item| item.text).collect()
}

#[test]
fn test_adds_preserve_call_order() {
    let mut store = ListStore::new();
    for text in ["first", "second", "third"] {
        store.add(text).expect("add failed");
    }

    assert_eq!(store.len(), 3);
    assert_eq!(texts(&store), vec!["first", "second", "third"]);
    assert!(store.snapshot().iter().all(|item| !item.completed));
}

#[test]
fn test_add_trims_text() {
    let mut store = ListStore::new();
    let item = store.add("  Buy milk \n").unwrap();
    assert_eq!(item.text, "Buy milk");
    assert_eq!(store.get(item.id).unwrap().text, "Buy milk");
}

#[test]
fn test_add_rejects_blank_text() {
    let mut store = ListStore::new();
    store.add("keep").unwrap();

    assert_eq!(store.add(""), Err(ValidationError::EmptyInput));
    assert_eq!(store.add("   "), Err(ValidationError::EmptyInput));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_rejected_add_does_not_consume_id() {
    let mut store = ListStore::new();
    let a = store.add("A").unwrap();
    let _ = store.add("\t");
    let b = store.add("B").unwrap();
    assert_eq!(b.id.get(), a.id.get() + 1);
}

#[test]
fn test_ids_unique_after_remove() {
    let mut store = ListStore::new();
    let a = store.add("A").unwrap();
    let b = store.add("B").unwrap();
    store.remove(b.id).unwrap();
    let c = store.add("C").unwrap();

    assert_ne!(c.id, a.id);
    assert_ne!(c.id, b.id);
}

#[test]
fn test_toggle_twice_restores() {
    let mut store = ListStore::new();
    let item = store.add("Task").unwrap();

    assert!(store.toggle(item.id).unwrap().completed);
    assert!(store.get(item.id).unwrap().completed);
    assert!(!store.toggle(item.id).unwrap().completed);
    assert!(!store.get(item.id).unwrap().completed);
    assert_eq!(store.completed_count(), 0);
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut store = ListStore::new();
    store.add("A").unwrap();
    let before = store.snapshot();
    let missing = ItemId::new(1000);

    assert_eq!(store.toggle(missing), Err(NotFoundError { id: missing }));
    assert_eq!(store.remove(missing), Err(NotFoundError { id: missing }));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut store = ListStore::new();
    let ids: Vec<ItemId> = ["a", "b", "c", "d"]
        .iter()
        .map(|text| store.add(text).unwrap().id)
        .collect();

    let removed = store.remove(ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    assert_eq!(removed.text, "b");
    assert_eq!(store.len(), 3);
    assert_eq!(texts(&store), vec!["a", "c", "d"]);
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut store = ListStore::new();
    let item = store.add("A").unwrap();
    let snapshot = store.snapshot();
    store.toggle(item.id).unwrap();

    assert!(!snapshot[0].completed);
    assert!(store.snapshot()[0].completed);
}

#[test]
fn test_buy_milk_round_trip() {
    let mut store = ListStore::new();
    let item = store.add("Buy milk").unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].text, "Buy milk");
    assert!(!snapshot[0].completed);

    store.toggle(item.id).unwrap();
    assert!(store.snapshot()[0].completed);

    let removed = store.remove(item.id).unwrap();
    assert!(store.snapshot().is_empty());
    let payload = synchronize(&store.snapshot(), &Mutation::Removed(removed));
    assert!(payload.is_empty);
}

#[test]
fn test_two_item_scenario() {
    let mut store = ListStore::new();
    let a = store.add("A").unwrap();
    let b = store.add("B").unwrap();

    let flags: Vec<(String, bool)> = store
        .snapshot()
        .into_iter()
        .map(|item| (item.text, item.completed))
        .collect();
    assert_eq!(flags, vec![("A".into(), false), ("B".into(), false)]);

    store.toggle(a.id).unwrap();
    let flags: Vec<bool> = store.snapshot().iter().map(|item| item.completed).collect();
    assert_eq!(flags, vec![true, false]);

    let removed = store.remove(b.id).unwrap();
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].text, "A");
    assert!(snapshot[0].completed);

    let payload = synchronize(&snapshot, &Mutation::Removed(removed));
    assert_eq!(payload.notification.unwrap().message, "B deleted.");
}

struct EvenIds(u64);

impl IdSource for EvenIds {
    fn next_id(&mut self) -> ItemId {
        self.0 += 2;
        ItemId::new(self.0)
    }
}

#[test]
fn test_custom_id_source() {
    let mut store = ListStore::with_ids(EvenIds(0));
    let a = store.add("A").unwrap();
    let b = store.add("B").unwrap();
    assert_eq!((a.id.get(), b.id.get()), (2, 4));
    assert!(store.toggle(b.id).unwrap().completed);
}
