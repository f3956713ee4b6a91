//! Tests for the exclusivity watcher.

use rotavox_core::{MemoryOptionStore, OptionCode, OptionStore, QuestionId, RenderedOption};

use super::{ExclusivityGroups, ExclusivityWatcher, WatcherState};

const Q: QuestionId = QuestionId(7);

fn mounted(codes: &[i32]) -> MemoryOptionStore {
    let mut store = MemoryOptionStore::new();
    store.mount_question(
        Q,
        codes.iter().map(|c| RenderedOption::normal(*c)).collect(),
    );
    store
}

fn flags(store: &MemoryOptionStore, code: i32) -> (bool, bool, bool) {
    let option = store.option(Q, OptionCode(code)).unwrap();
    (option.selected, option.read_only, option.visually_disabled)
}

#[test]
fn conflicting_exclusive_selections_are_reset() {
    let mut store = mounted(&[10, 11, 12]);
    let groups = ExclusivityGroups::new().exclusive("either", [10, 11]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    // Both members end up checked at once (e.g. a checkbox race).
    store.set_selected(Q, OptionCode(10), true).unwrap();
    store.set_selected(Q, OptionCode(11), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    assert_eq!(watcher.state(), WatcherState::Conflict);
    assert_eq!(flags(&store, 10), (false, false, false));
    assert_eq!(flags(&store, 11), (false, false, false));
    // Codes outside the group are untouched.
    assert_eq!(flags(&store, 12), (false, false, false));
}

#[test]
fn exclusive_selection_disables_the_rest_of_the_group() {
    let mut store = mounted(&[10, 11, 12]);
    let groups = ExclusivityGroups::new().exclusive("either", [10, 11]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    store.set_selected(Q, OptionCode(10), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    assert_eq!(watcher.state(), WatcherState::Idle);
    assert_eq!(flags(&store, 10), (true, false, false));
    assert_eq!(flags(&store, 11), (false, true, true));
    assert_eq!(flags(&store, 12), (false, false, false));
}

#[test]
fn deselection_re_enables_previous_disables() {
    let mut store = mounted(&[10, 11]);
    let groups = ExclusivityGroups::new().exclusive("either", [10, 11]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    store.set_selected(Q, OptionCode(10), true).unwrap();
    watcher.evaluate(&mut store).unwrap();
    assert_eq!(flags(&store, 11), (false, true, true));

    store.set_selected(Q, OptionCode(10), false).unwrap();
    watcher.evaluate(&mut store).unwrap();
    assert_eq!(flags(&store, 11), (false, false, false));
}

#[test]
fn paired_selection_disables_the_opposite_role_only() {
    let mut store = mounted(&[1, 2, 3, 4, 5]);
    let groups = ExclusivityGroups::new().paired("sides", [1, 2], [3, 4]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    store.set_selected(Q, OptionCode(1), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    assert_eq!(flags(&store, 3), (false, true, true));
    assert_eq!(flags(&store, 4), (false, true, true));
    // Same role stays selectable.
    assert_eq!(flags(&store, 2), (false, false, false));
    assert_eq!(flags(&store, 5), (false, false, false));
}

#[test]
fn switching_within_a_role_raises_no_conflict() {
    let mut store = mounted(&[1, 2, 3, 4]);
    let groups = ExclusivityGroups::new().paired("sides", [1, 2], [3, 4]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    store.set_selected(Q, OptionCode(1), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    // The host's radio group flips 1 off when 2 goes on, one change event.
    store.set_selected(Q, OptionCode(1), false).unwrap();
    store.set_selected(Q, OptionCode(2), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    assert_eq!(watcher.state(), WatcherState::Idle);
    assert_eq!(flags(&store, 2), (true, false, false));
    assert_eq!(flags(&store, 3), (false, true, true));
    assert_eq!(flags(&store, 4), (false, true, true));
}

#[test]
fn simultaneous_same_role_selections_are_a_conflict() {
    let mut store = mounted(&[1, 2, 3, 4]);
    let groups = ExclusivityGroups::new().paired("sides", [1, 2], [3, 4]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    // Checkbox inputs let both of role 0 end up checked at once; each side
    // is independently exclusive, so the group resets.
    store.set_selected(Q, OptionCode(1), true).unwrap();
    store.set_selected(Q, OptionCode(2), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    assert_eq!(watcher.state(), WatcherState::Conflict);
    assert_eq!(flags(&store, 1), (false, false, false));
    assert_eq!(flags(&store, 2), (false, false, false));
}

#[test]
fn selections_across_roles_never_conflict() {
    let mut store = mounted(&[1, 2, 3, 4]);
    let groups = ExclusivityGroups::new().paired("sides", [1, 2], [3, 4]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    // Cross-role double selection disables, it does not reset: roles are
    // compared, not cross-role.
    store.set_selected(Q, OptionCode(1), true).unwrap();
    store.set_selected(Q, OptionCode(3), true).unwrap();
    watcher.evaluate(&mut store).unwrap();

    assert_eq!(watcher.state(), WatcherState::Idle);
}

#[test]
fn initial_pass_runs_at_attach() {
    let mut store = mounted(&[10, 11]);
    store.set_selected(Q, OptionCode(10), true).unwrap();

    let groups = ExclusivityGroups::new().exclusive("either", [10, 11]);
    let watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    assert_eq!(watcher.state(), WatcherState::Idle);
    assert_eq!(flags(&store, 11), (false, true, true));
}

#[test]
fn conflict_pass_recovers_on_the_next_event() {
    let mut store = mounted(&[10, 11]);
    let groups = ExclusivityGroups::new().exclusive("either", [10, 11]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    store.set_selected(Q, OptionCode(10), true).unwrap();
    store.set_selected(Q, OptionCode(11), true).unwrap();
    watcher.evaluate(&mut store).unwrap();
    assert_eq!(watcher.state(), WatcherState::Conflict);

    // Clean slate: the user re-selects one option.
    store.set_selected(Q, OptionCode(11), true).unwrap();
    watcher.evaluate(&mut store).unwrap();
    assert_eq!(watcher.state(), WatcherState::Idle);
    assert_eq!(flags(&store, 10), (false, true, true));
    assert_eq!(flags(&store, 11), (true, false, false));
}

#[test]
fn codes_missing_from_the_question_are_ignored() {
    let mut store = mounted(&[10]);
    let groups = ExclusivityGroups::new().exclusive("either", [10, 99]);
    let mut watcher = ExclusivityWatcher::attach(&mut store, Q, groups).unwrap();

    store.set_selected(Q, OptionCode(10), true).unwrap();
    watcher.evaluate(&mut store).unwrap();
    assert_eq!(watcher.state(), WatcherState::Idle);
    assert_eq!(flags(&store, 10), (true, false, false));
}

#[test]
fn membership_index_covers_both_roles() {
    let groups = ExclusivityGroups::new()
        .exclusive("none", [-1])
        .paired("sides", [1], [2]);
    let watcher = ExclusivityWatcher::new(Q, groups);
    assert_eq!(watcher.question(), Q);
    assert_eq!(watcher.state(), WatcherState::Idle);
}
