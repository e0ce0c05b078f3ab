mod common;
use common::setup_test_file;

use rworkout::core::notify::StoreChange;
use rworkout::core::session::{PendingConfirmation, ResetOutcome, Session};
use rworkout::errors::AppError;
use rworkout::models::kind::WorkoutKind;
use rworkout::store::RecordStore;
use rworkout::ui::selection::{Selection, status_from_flags};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

fn session_at(path: &Path) -> Session {
    Session::new(RecordStore::new(path), WorkoutKind::defaults())
}

fn selected(tag: &str) -> Selection<String> {
    Selection::Selected(tag.to_string())
}

/// Collect every broadcast into a shared vector.
fn record_changes(session: &mut Session) -> Rc<RefCell<Vec<StoreChange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session
        .notifier_mut()
        .subscribe(move |change| sink.borrow_mut().push(change.clone()));
    seen
}

#[test]
fn test_add_requires_kind_and_status() {
    let (_dir, path) = setup_test_file("session_missing");
    let mut session = session_at(&path);
    let seen = record_changes(&mut session);

    let err = session
        .add(Selection::Unselected, Selection::Selected(true), "")
        .unwrap_err();
    assert!(matches!(err, AppError::MissingKind));

    let err = session
        .add(selected("push_ups"), status_from_flags(false, false), "")
        .unwrap_err();
    assert!(matches!(err, AppError::MissingStatus));

    assert!(!path.exists());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_add_rejects_untracked_kind() {
    let (_dir, path) = setup_test_file("session_invalid");
    let mut session = session_at(&path);

    let err = session
        .add(selected("straight_set"), Selection::Selected(true), "")
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidKind(ref k) if k == "straight_set"));
    assert!(session.records().is_empty());
}

#[test]
fn test_add_stores_canonical_tag_and_trimmed_comment() {
    let (_dir, path) = setup_test_file("session_add");
    let mut session = session_at(&path);
    let seen = record_changes(&mut session);

    let rec = session
        .add(selected("Push_Ups"), status_from_flags(true, false), "  felt great  ")
        .expect("add");

    assert_eq!(rec.id, 1);
    assert_eq!(rec.kind, "push_ups");
    assert_eq!(rec.comment, "felt great");
    assert!(rec.completed);

    assert_eq!(seen.borrow().as_slice(), &[StoreChange::Appended(rec)]);
    assert_eq!(session.stats().count("push_ups"), 1);
}

#[test]
fn test_listener_sees_the_saved_record() {
    let (_dir, path) = setup_test_file("session_refresh");
    let mut session = session_at(&path);

    let reader = RecordStore::new(&path);
    let totals = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&totals);
    session
        .notifier_mut()
        .subscribe(move |_| sink.borrow_mut().push(reader.load().len()));

    session
        .add(selected("push_ups"), Selection::Selected(true), "")
        .expect("add");
    session
        .add(selected("strength_set"), Selection::Selected(false), "")
        .expect("add");

    assert_eq!(*totals.borrow(), vec![1, 2]);
}

#[test]
fn test_reset_needs_two_requests() {
    let (_dir, path) = setup_test_file("session_reset");
    let mut session = session_at(&path);
    session
        .add(selected("push_ups"), Selection::Selected(true), "")
        .expect("add");
    let seen = record_changes(&mut session);

    assert_eq!(
        session.request_reset().expect("arm"),
        ResetOutcome::NeedsConfirmation
    );
    assert_eq!(session.reset_gate(), PendingConfirmation::Armed);
    assert_eq!(session.records().len(), 1);

    assert_eq!(session.request_reset().expect("confirm"), ResetOutcome::Done);
    assert_eq!(session.reset_gate(), PendingConfirmation::Idle);
    assert!(session.records().is_empty());
    assert_eq!(seen.borrow().as_slice(), &[StoreChange::Reset]);

    let rec = session
        .add(selected("push_ups"), Selection::Selected(true), "")
        .expect("add after reset");
    assert_eq!(rec.id, 1);
}

#[test]
fn test_cancel_reset_disarms_gate() {
    let (_dir, path) = setup_test_file("session_cancel");
    let mut session = session_at(&path);
    session
        .add(selected("push_ups"), Selection::Selected(true), "")
        .expect("add");

    session.request_reset().expect("arm");
    session.cancel_reset();

    assert_eq!(
        session.request_reset().expect("arm again"),
        ResetOutcome::NeedsConfirmation
    );
    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_failed_write_does_not_notify() {
    let (dir, _) = setup_test_file("session_fail");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").expect("write blocker");

    let mut session = session_at(&blocker.join("workouts.json"));
    let seen = record_changes(&mut session);

    let err = session
        .add(selected("push_ups"), Selection::Selected(true), "")
        .unwrap_err();
    assert!(matches!(err, AppError::StorageWrite { .. }));

    session.request_reset().expect("arm");
    assert!(session.request_reset().is_err());
    assert_eq!(session.reset_gate(), PendingConfirmation::Armed);

    assert!(seen.borrow().is_empty());
}
