use med_prep::checklist::{Checklist, Progress};
use med_prep::data::read_content_embedded;
use med_prep::game::{SequencingGame, Selection};
use med_prep::model::{Content, OptionStatus};
use med_prep::store::{KeyValueStore, MemoryStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;

const KEY: &str = "colonoscopy_checklist";

fn content() -> Arc<Content> {
    Arc::new(read_content_embedded().expect("embedded content"))
}

#[test]
fn scenario_a_canonical_taps_complete_the_game() {
    let mut game = SequencingGame::new_game(content(), &mut StdRng::seed_from_u64(42));
    let steps = game.canonical().to_vec();

    for step in &steps {
        assert_ne!(game.select_option(step, Duration::ZERO), Selection::Ignored);
    }

    assert!(game.is_complete());
    assert_eq!(game.score(), steps.len());
    assert!(game
        .shuffled_options()
        .iter()
        .all(|o| game.status(o) == OptionStatus::Used));
}

#[test]
fn scenario_b_wrong_first_tap_reverts_after_delay() {
    let mut game = SequencingGame::new_game(content(), &mut StdRng::seed_from_u64(7));
    let wrong = game.canonical()[3].clone();
    let t0 = Duration::from_millis(1_000);

    assert_eq!(game.select_option(&wrong, t0), Selection::Incorrect);
    assert_eq!(game.status(&wrong), OptionStatus::Incorrect);
    assert!(game.selected_order().is_empty());
    assert_eq!(game.score(), 0);

    game.tick(t0 + Duration::from_millis(800));
    assert_eq!(game.status(&wrong), OptionStatus::Idle);
}

#[test]
fn scenario_c_toggle_persists_and_flips_back() {
    let mut store = MemoryStore::new();
    let mut checklist = Checklist::load(content(), &store);

    assert_eq!(checklist.toggle_task("d1"), Some(true));
    checklist.flush(&mut store);
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some(r#"{"d1":true}"#));

    assert_eq!(checklist.toggle_task("d1"), Some(false));
    checklist.flush(&mut store);
    assert!(!checklist.is_checked("d1"));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some(r#"{"d1":false}"#));
}

#[test]
fn scenario_d_phase_progress() {
    let mut checklist = Checklist::empty(content());
    checklist.toggle_task("d2");
    checklist.toggle_task("d5");

    let content = content();
    let dietary = content.phase("dietary").expect("dietary phase");
    assert_eq!(checklist.progress(dietary), Progress { completed: 2, total: 5 });
}

#[test]
fn scenario_e_reset_clears_everything() {
    let mut store = MemoryStore::with_value(KEY, r#"{"d1":true,"m4":true,"p2":true}"#);
    let mut checklist = Checklist::load(content(), &store);
    assert_eq!(checklist.overall_progress().completed, 3);

    checklist.reset();
    assert!(checklist.checked_tasks().is_empty());
    assert_eq!(checklist.overall_progress(), Progress { completed: 0, total: 16 });

    checklist.flush(&mut store);
    let reloaded = Checklist::load(content(), &store);
    assert!(reloaded.checked_tasks().is_empty());
}

#[test]
fn saved_marks_survive_a_new_session() {
    let mut store = MemoryStore::new();
    {
        let mut checklist = Checklist::load(content(), &store);
        checklist.toggle_task("m3");
        checklist.toggle_task("p1");
        checklist.toggle_phase("medication");
        checklist.flush(&mut store);
    }

    let checklist = Checklist::load(content(), &store);
    assert!(checklist.is_checked("m3"));
    assert!(checklist.is_checked("p1"));
    assert!(checklist.is_expanded("medication"));
}
