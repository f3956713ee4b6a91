//! Tests for the caller-facing session.

use rotavox_config::ArrangementConfig;
use rotavox_core::{
    MemoryDirectory, MemoryOptionStore, OptionCode, OptionStore, QuestionId, RotavoxError,
};
use rotavox_engine::{EngineRandom, ExclusivityGroups, RotationConfig};
use rotavox_test::{brand_tracker, SurveyFixture};

use super::Session;

fn session(fixture: SurveyFixture) -> Session<MemoryOptionStore, MemoryDirectory> {
    // Errors masked by the session still reach the log output.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Session::with_random(fixture.store, fixture.directory, EngineRandom::with_seed(42))
}

fn rendered(session: &Session<MemoryOptionStore, MemoryDirectory>, question: u32) -> Vec<i32> {
    session
        .store()
        .codes(QuestionId(question))
        .unwrap()
        .iter()
        .map(|c| c.value())
        .collect()
}

#[test]
fn rotation_preserves_the_set_and_pins_fixed_last() {
    let mut session = session(brand_tracker());
    session.enter(10);
    session.rotate(
        &[rotavox_core::code_range(1, 6)],
        &RotationConfig::default(),
    );

    let after = rendered(&session, 10);
    assert_eq!(&after[6..], &[97, -1]);
    let mut sorted = after;
    sorted.sort_unstable();
    assert_eq!(sorted, vec![-1, 1, 2, 3, 4, 5, 6, 97]);
}

#[test]
fn failures_are_masked_and_leave_the_order_alone() {
    let mut session = session(brand_tracker());
    session.enter(999);
    // Unknown question: logged, not raised, nothing reordered.
    session.rotate(
        &[rotavox_core::code_range(1, 6)],
        &RotationConfig::default(),
    );
    session.place_at_top(&[OptionCode(1)]);
    assert_eq!(rendered(&session, 10), vec![1, 2, 3, 4, 5, 6, 97, -1]);
}

#[test]
fn operations_without_a_current_question_are_masked() {
    let mut session = session(brand_tracker());
    session.rotate(&[vec![OptionCode(1)]], &RotationConfig::default());
    session.select(1);
    assert_eq!(session.current(), None);
}

#[test]
fn strict_sync_raises_and_descendant_sync_does_not() {
    let mut fixture = brand_tracker();
    // Give Q20 a code Q10 never had.
    fixture
        .store
        .mount_question(QuestionId(20), rotavox_test::question(&[1, 2, 7], &[]));
    let mut session = session(fixture);

    session.enter(20);
    let err = session.sync_one_to_one(10).unwrap_err();
    assert!(matches!(err, RotavoxError::MismatchedCodes { .. }));
    assert_eq!(rendered(&session, 20), vec![1, 2, 7]);

    // The masked variant swallows even an unknown base.
    session.sync_descendants(999, &[]);
}

#[test]
fn sync_one_to_one_follows_the_base() {
    let mut session = session(brand_tracker());
    session
        .store_mut()
        .reorder(
            QuestionId(10),
            &[4, 6, 5, 1, 3, 2, 97, -1].map(OptionCode).to_vec(),
        )
        .unwrap();

    session.enter(11);
    session.sync_one_to_one(10).unwrap();
    assert_eq!(rendered(&session, 11), vec![4, 6, 5, 1, 3, 2, -1]);
}

#[test]
fn exclusivity_conflicts_reset_through_the_session() {
    let mut session = session(brand_tracker());
    session.enter(20);
    session.set_exclusivity(ExclusivityGroups::new().exclusive("either", [3, 4]));

    session.select(3);
    assert!(session
        .store()
        .option(QuestionId(20), OptionCode(4))
        .unwrap()
        .read_only);

    // Force the second selection behind the watcher's back, then notify.
    session
        .store_mut()
        .set_selected(QuestionId(20), OptionCode(4), true)
        .unwrap();
    session.selection_changed();

    let store = session.store();
    for code in [3, 4] {
        let option = store.option(QuestionId(20), OptionCode(code)).unwrap();
        assert!(!option.selected);
        assert!(!option.read_only);
        assert!(!option.visually_disabled);
    }
}

#[test]
fn navigation_discards_watcher_state() {
    let mut session = session(brand_tracker());
    session.enter(20);
    session.set_exclusivity(ExclusivityGroups::new().exclusive("either", [3, 4]));
    session.select(3);
    assert!(session
        .store()
        .option(QuestionId(20), OptionCode(4))
        .unwrap()
        .read_only);

    // Leaving the question drops the watcher: later selections no longer
    // recompute disables.
    session.enter(10);
    session.enter(20);
    session.deselect(3);
    assert!(session
        .store()
        .option(QuestionId(20), OptionCode(4))
        .unwrap()
        .read_only);
}

#[test]
fn hide_show_and_disable_wrappers() {
    let mut session = session(brand_tracker());
    session.enter(20);

    session.hide(&[OptionCode(1)], true);
    assert!(session
        .store()
        .option(QuestionId(20), OptionCode(1))
        .unwrap()
        .hidden);

    session.show(&[OptionCode(1)], true);
    assert!(!session
        .store()
        .option(QuestionId(20), OptionCode(1))
        .unwrap()
        .hidden);

    session.disable(&[OptionCode(2)], true);
    let option = session.store().option(QuestionId(20), OptionCode(2)).unwrap();
    assert!(option.read_only && option.visually_disabled);

    session.disable(&[OptionCode(2)], false);
    let option = session.store().option(QuestionId(20), OptionCode(2)).unwrap();
    assert!(!option.read_only && !option.visually_disabled);
}

#[test]
fn seeded_sessions_arrange_identically() {
    let arrange = || {
        let mut session = Session::with_random(
            brand_tracker().store,
            brand_tracker().directory,
            EngineRandom::with_seed(77),
        );
        session.enter(10);
        session.rotate(
            &[rotavox_core::code_range(1, 3), rotavox_core::code_range(4, 6)],
            &RotationConfig::default(),
        );
        rendered(&session, 10)
    };
    assert_eq!(arrange(), arrange());
}

#[test]
fn applies_a_declarative_plan() {
    let mut session = session(brand_tracker());
    let config = ArrangementConfig::from_toml_str(
        r#"
        [[questions]]
        id = 10

        [questions.rotation]
        groups = [[1, 2, 3, 4, 5, 6]]
        group = false
        option = false
        bot = [6]
        bot_shuffle = false

        [questions.sync]
        mode = "descendants"
    "#,
    )
    .unwrap();

    session.apply_plan(&config).unwrap();

    assert_eq!(rendered(&session, 10), vec![1, 2, 3, 4, 5, 6, 97, -1]);
    assert_eq!(rendered(&session, 11), vec![1, 2, 3, 4, 5, 6, -1]);
}
