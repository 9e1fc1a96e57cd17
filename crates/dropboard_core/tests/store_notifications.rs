use dropboard_core::{Project, ProjectStatus, ProjectStore, TransitionOutcome};
use std::cell::RefCell;
use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use uuid::Uuid;

#[test]
fn created_ids_are_unique() {
    let mut store = ProjectStore::new();

    let mut seen = HashSet::new();
    for n in 0..100 {
        let id = store.create(format!("Project {n}"), "generated in a loop", 1);
        assert!(seen.insert(id), "id {id} was produced twice");
    }
    assert_eq!(store.len(), 100);
}

#[test]
fn create_notifies_every_subscriber_exactly_once() {
    let mut store = ProjectStore::new();

    let first_calls: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
    let second_calls: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first_calls);
    store.subscribe(move |projects| sink.borrow_mut().push(projects));
    let sink = Rc::clone(&second_calls);
    store.subscribe(move |projects| sink.borrow_mut().push(projects));

    let id = store.create("Build API", "REST service", 3);

    for calls in [&first_calls, &second_calls] {
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let snapshot = &calls[0];
        assert_eq!(snapshot.len(), 1);
        let created = snapshot.last().unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.title, "Build API");
        assert_eq!(created.description, "REST service");
        assert_eq!(created.people, 3);
        assert_eq!(created.status, ProjectStatus::Active);
    }
}

#[test]
fn subscribers_run_in_registration_order() {
    let mut store = ProjectStore::new();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        store.subscribe(move |_| sink.borrow_mut().push(label));
    }
    store.create("Ordered", "notification order", 1);

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn subscribe_does_not_replay_current_state() {
    let mut store = ProjectStore::new();
    store.create("Before", "created before subscribing", 1);

    let calls = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&calls);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    assert_eq!(*calls.borrow(), 0);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn unchanged_status_is_a_reported_no_op() {
    let mut store = ProjectStore::new();
    let id = store.create("Build API", "REST service", 3);

    let calls = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&calls);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    let outcome = store.set_status(id, ProjectStatus::Active);

    assert_eq!(outcome, TransitionOutcome::StatusUnchanged);
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(store.project(id).unwrap().status, ProjectStatus::Active);
}

#[test]
fn unknown_id_is_a_reported_no_op() {
    let mut store = ProjectStore::new();
    store.create("Build API", "REST service", 3);

    let calls = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&calls);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    let before = store.snapshot();
    let outcome = store.set_status(Uuid::new_v4(), ProjectStatus::Finished);

    assert_eq!(outcome, TransitionOutcome::UnknownId);
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn moved_status_notifies_and_keeps_sequence_position() {
    let mut store = ProjectStore::new();
    let first = store.create("First", "created first", 1);
    let second = store.create("Second", "created second", 2);

    let snapshots: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    store.subscribe(move |projects| sink.borrow_mut().push(projects));

    let outcome = store.set_status(first, ProjectStatus::Finished);

    assert_eq!(outcome, TransitionOutcome::Moved);
    let snapshots = snapshots.borrow();
    assert_eq!(snapshots.len(), 1);
    // Master sequence keeps insertion order even after a transition.
    let ids: Vec<_> = snapshots[0].iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(snapshots[0][0].status, ProjectStatus::Finished);
    assert_eq!(snapshots[0][1].status, ProjectStatus::Active);
}

#[test]
fn snapshot_mutation_does_not_leak_into_the_store() {
    let mut store = ProjectStore::new();

    let tampered: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&tampered);
    store.subscribe(move |mut projects| {
        for project in &mut projects {
            project.title = "tampered".to_string();
            project.status = ProjectStatus::Finished;
        }
        projects.clear();
        sink.borrow_mut().push(projects);
    });

    let id = store.create("Untouched", "snapshot isolation", 2);

    let stored = store.project(id).unwrap();
    assert_eq!(stored.title, "Untouched");
    assert_eq!(stored.status, ProjectStatus::Active);
    assert_eq!(store.len(), 1);

    // A later notification still reflects true store data.
    let later: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&later);
    store.subscribe(move |projects| sink.borrow_mut().push(projects));
    store.create("Second", "after tampering", 1);

    let later = later.borrow();
    assert_eq!(later[0].len(), 2);
    assert_eq!(later[0][0].title, "Untouched");
}

#[test]
fn transitioning_one_project_leaves_the_other_untouched() {
    let mut store = ProjectStore::new();
    let first = store.create("First", "to be finished", 1);
    let second = store.create("Second", "stays active", 2);

    store.set_status(first, ProjectStatus::Finished);

    assert_eq!(store.project(first).unwrap().status, ProjectStatus::Finished);
    assert_eq!(store.project(second).unwrap().status, ProjectStatus::Active);
    assert_eq!(store.len(), 2);
}

#[test]
fn panicking_subscriber_aborts_remaining_notifications() {
    let mut store = ProjectStore::new();

    let reached = Rc::new(RefCell::new(0usize));
    store.subscribe(|_| panic!("listener failure"));
    let sink = Rc::clone(&reached);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    let result = catch_unwind(AssertUnwindSafe(|| {
        store.create("Panics", "first listener panics", 1);
    }));

    assert!(result.is_err());
    // No isolation between listeners: later registrations never ran.
    assert_eq!(*reached.borrow(), 0);
    // The mutation itself happened before notification started.
    assert_eq!(store.len(), 1);
}
