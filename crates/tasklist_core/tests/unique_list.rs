use std::cell::RefCell;
use std::rc::Rc;
use tasklist_core::{ListChange, ListError, Record, Task, UniqueList};

fn task(name: &str) -> Task {
    Task::new(name).unwrap()
}

fn names(list: &UniqueList<Task>) -> Vec<String> {
    list.iter().map(|task| task.name.clone()).collect()
}

fn assert_pairwise_unique(list: &UniqueList<Task>) {
    let items: Vec<&Task> = list.iter().collect();
    for (i, left) in items.iter().enumerate() {
        for right in &items[i + 1..] {
            assert!(!left.is_equivalent(right), "{left} and {right} are equivalent");
        }
    }
}

fn record_changes(list: &UniqueList<Task>) -> Rc<RefCell<Vec<ListChange<Task>>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    list.subscribe(move |change: &ListChange<Task>| sink.borrow_mut().push(change.clone()));
    events
}

#[test]
fn concrete_add_remove_scenario() {
    let mut list = UniqueList::new();

    list.add(task("Buy milk")).unwrap();
    assert_eq!(list.len(), 1);

    let err = list.add(task("Buy milk")).unwrap_err();
    assert_eq!(err, ListError::DuplicateEntity);
    assert_eq!(list.len(), 1);

    list.add(task("Walk dog")).unwrap();
    assert_eq!(list.len(), 2);

    list.remove(&task("Buy milk")).unwrap();
    assert_eq!(list.len(), 1);
    assert!(!list.contains(&task("Buy milk")));
    assert_eq!(names(&list), vec!["Walk dog"]);

    let err = list.remove(&task("Buy milk")).unwrap_err();
    assert_eq!(err, ListError::EntityNotFound);
    assert_pairwise_unique(&list);
}

#[test]
fn add_makes_candidate_contained() {
    let mut list = UniqueList::new();
    let candidate = task("Water plants");
    assert!(!list.contains(&candidate));

    list.add(candidate.clone()).unwrap();
    assert!(list.contains(&candidate));
    assert!(list.contains(&task("Water plants")));
}

#[test]
fn insertion_order_is_preserved() {
    let mut list = UniqueList::new();
    list.add(task("a")).unwrap();
    list.add(task("b")).unwrap();
    list.add(task("c")).unwrap();

    assert_eq!(names(&list), vec!["a", "b", "c"]);
    let via_into_iter: Vec<&str> = (&list).into_iter().map(|t| t.name.as_str()).collect();
    assert_eq!(via_into_iter, vec!["a", "b", "c"]);
}

#[test]
fn remove_of_missing_entry_leaves_state_unchanged() {
    let mut list = UniqueList::try_from_items([task("a"), task("b")]).unwrap();
    let events = record_changes(&list);

    assert_eq!(list.remove(&task("z")).unwrap_err(), ListError::EntityNotFound);
    assert_eq!(names(&list), vec!["a", "b"]);
    assert!(events.borrow().is_empty());
}

#[test]
fn self_equivalent_update_succeeds_and_keeps_identity() {
    let mut list = UniqueList::try_from_items([task("Report"), task("Email")]).unwrap();
    let original_id = list.get(0).unwrap().uuid;

    let mut edited = task("Report");
    edited.mark_done();
    list.update_at(0, &edited).unwrap();

    let stored = list.get(0).unwrap();
    assert!(stored.is_done());
    assert_eq!(stored.uuid, original_id);
    assert_eq!(names(&list), vec!["Report", "Email"]);
}

#[test]
fn update_colliding_with_other_index_fails_unchanged() {
    let mut list = UniqueList::try_from_items([task("Report"), task("Email")]).unwrap();
    let before = list.get(0).unwrap().clone();
    let events = record_changes(&list);

    let err = list.update_at(0, &task("Email")).unwrap_err();
    assert_eq!(err, ListError::DuplicateEntity);
    assert_eq!(list.get(0), Some(&before));
    assert!(events.borrow().is_empty());
    assert_pairwise_unique(&list);
}

#[test]
fn update_renaming_to_fresh_name_succeeds() {
    let mut list = UniqueList::try_from_items([task("Report")]).unwrap();
    list.update_at(0, &task("Quarterly report")).unwrap();
    assert_eq!(names(&list), vec!["Quarterly report"]);
    assert!(!list.contains(&task("Report")));
}

#[test]
fn update_out_of_range_reports_bounds() {
    let mut list: UniqueList<Task> = UniqueList::new();
    let err = list.update_at(0, &task("x")).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfRange { index: 0, len: 0 });
}

#[test]
fn validating_replace_is_all_or_nothing() {
    let mut list = UniqueList::try_from_items([task("keep me")]).unwrap();
    let before = list.clone();

    let err = list
        .replace_all_validating(vec![task("a"), task("b"), task("a")])
        .unwrap_err();
    assert_eq!(err, ListError::DuplicateEntity);
    assert_eq!(list, before);
    assert_eq!(names(&list), vec!["keep me"]);
}

#[test]
fn validating_replace_swaps_contents_and_emits_reset() {
    let mut list = UniqueList::try_from_items([task("old")]).unwrap();
    let events = record_changes(&list);

    list.replace_all_validating(vec![task("x"), task("y")]).unwrap();

    assert_eq!(names(&list), vec!["x", "y"]);
    let events = events.borrow();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ListChange::Reset { items } => assert_eq!(items.len(), 2),
        other => panic!("unexpected change: {other:?}"),
    }
}

#[test]
fn trusted_replace_copies_source_without_sharing_it() {
    let source = UniqueList::try_from_items([task("x"), task("y")]).unwrap();
    let mut target = UniqueList::try_from_items([task("old")]).unwrap();
    let events = record_changes(&target);

    target.replace_all_trusted(&source);
    assert_eq!(target, source);

    target.add(task("z")).unwrap();
    assert_eq!(source.len(), 2);
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn observers_see_each_mutation_in_order() {
    let mut list = UniqueList::new();
    let events = record_changes(&list);

    list.add(task("a")).unwrap();
    list.add(task("b")).unwrap();
    list.update_at(1, &task("b")).unwrap();
    list.remove(&task("a")).unwrap();

    let events = events.borrow();
    let kinds: Vec<&str> = events.iter().map(|change| change.kind()).collect();
    assert_eq!(kinds, vec!["added", "added", "updated", "removed"]);
    match &events[3] {
        ListChange::Removed { index, item } => {
            assert_eq!(*index, 0);
            assert_eq!(item.name, "a");
        }
        other => panic!("unexpected change: {other:?}"),
    }
}

#[test]
fn unsubscribed_observer_stops_receiving() {
    let mut list = UniqueList::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = list.subscribe(move |_: &ListChange<Task>| *sink.borrow_mut() += 1);

    list.add(task("a")).unwrap();
    assert!(list.unsubscribe(id));
    list.add(task("b")).unwrap();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn observer_runs_before_mutation_returns() {
    let mut list = UniqueList::new();
    let seen_len = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen_len);
    list.subscribe(move |change: &ListChange<Task>| {
        if let ListChange::Added { index, .. } = change {
            *sink.borrow_mut() = Some(*index);
        }
    });

    list.add(task("a")).unwrap();
    assert_eq!(*seen_len.borrow(), Some(0));
}

#[test]
fn try_from_items_rejects_duplicates() {
    let err = UniqueList::try_from_items([task("a"), task(" a ")]).unwrap_err();
    assert_eq!(err, ListError::DuplicateEntity);
}
