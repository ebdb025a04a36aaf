use super::*;

#[test]
fn new_set_is_empty() {
    let set = PendingSet::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(!set.contains(1));
}

#[test]
fn insert_marks_id_pending() {
    let mut set = PendingSet::default();
    assert!(set.insert(1));
    assert!(set.contains(1));
    assert_eq!(set.len(), 1);
}

#[test]
fn insert_twice_reports_already_pending() {
    let mut set = PendingSet::default();
    assert!(set.insert(1));
    assert!(!set.insert(1));
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_clears_only_that_id() {
    let mut set = PendingSet::default();
    set.insert(1);
    set.insert(2);
    assert!(set.remove(1));
    assert!(!set.contains(1));
    assert!(set.contains(2));
}

#[test]
fn remove_missing_id_is_noop() {
    let mut set = PendingSet::default();
    assert!(!set.remove(99));
    assert!(set.is_empty());
}

#[test]
fn distinct_ids_can_be_pending_simultaneously() {
    let mut set = PendingSet::default();
    for id in [1, 2, 3] {
        set.insert(id);
    }
    assert_eq!(set.len(), 3);
}
