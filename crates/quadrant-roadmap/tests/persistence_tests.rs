//! Persistence is best-effort: store failures are absorbed, logged, and
//! never undo in-memory state or block further editing.

use pretty_assertions::assert_eq;
use quadrant_roadmap::{ControllerConfig, RoadmapController, RoadmapPhase, RoadmapStore};
use quadrant_test_utils::{
    alternate_analysis, init_tracing, sample_ideas, two_phase_analysis, web_project,
    InMemoryStore, ScriptedGenerator,
};
use std::sync::Arc;
use std::time::Duration;

fn fast_config() -> ControllerConfig {
    ControllerConfig::new()
        .with_debounce_delay(Duration::from_millis(100))
        .with_author_id("user-1")
}

#[tokio::test]
async fn failed_save_leaves_the_roadmap_usable_in_memory() {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    store.fail_saves(true);
    let generator = ScriptedGenerator::new().then_analysis(two_phase_analysis());
    let store_dyn: Arc<dyn RoadmapStore> = store.clone();
    let mut controller =
        RoadmapController::new(fast_config(), Arc::new(generator), store_dyn);
    controller.select_project(web_project());
    controller.set_ideas(sample_ideas());

    // Generation succeeds even though the save did not.
    controller.generate(false).await.unwrap();
    assert_eq!(controller.phase(), RoadmapPhase::Loaded);
    assert!(controller.roadmap_id().is_none());
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.snapshot_count(), 0);

    // Edits still work; with no stored id there is nothing to write back.
    let mut features = controller.timeline().unwrap();
    features[0].start_month = 3;
    controller.apply_edits(&features).unwrap();
    assert!(!controller.has_pending_write());
    assert_eq!(controller.timeline().unwrap()[0].start_month, 3);
}

#[tokio::test(start_paused = true)]
async fn failed_update_does_not_roll_back_the_edit() {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    let generator = ScriptedGenerator::new().then_analysis(two_phase_analysis());
    let store_dyn: Arc<dyn RoadmapStore> = store.clone();
    let mut controller =
        RoadmapController::new(fast_config(), Arc::new(generator), store_dyn);
    controller.select_project(web_project());
    controller.set_ideas(sample_ideas());

    controller.generate(false).await.unwrap();
    store.fail_updates(true);

    let mut features = controller.timeline().unwrap();
    features[2].start_month = 6;
    controller.apply_edits(&features).unwrap();

    tokio::time::sleep(Duration::from_millis(300)).await;

    // The write was attempted and failed; the in-memory edit survives.
    assert_eq!(store.update_count(), 1);
    assert_eq!(controller.timeline().unwrap()[2].start_month, 6);
    assert_eq!(controller.phase(), RoadmapPhase::Loaded);

    // The stored document still has the pre-edit value.
    let stored = store.find(controller.roadmap_id().unwrap()).unwrap();
    assert_eq!(stored.analysis.phases[1].epics[0].start_month, None);
}

#[tokio::test]
async fn history_lists_snapshots_newest_first() {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    let generator = ScriptedGenerator::new()
        .then_analysis(two_phase_analysis())
        .then_analysis(alternate_analysis())
        .then_analysis(two_phase_analysis());
    let store_dyn: Arc<dyn RoadmapStore> = store.clone();
    let mut controller =
        RoadmapController::new(fast_config(), Arc::new(generator), store_dyn);
    controller.select_project(web_project());
    controller.set_ideas(sample_ideas());

    controller.generate(false).await.unwrap();
    controller.generate(true).await.unwrap();
    controller.generate(true).await.unwrap();

    let history = controller.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].id, controller.roadmap_id().unwrap());
    assert_eq!(history[1].analysis, alternate_analysis());
    assert_eq!(history[2].analysis, two_phase_analysis());
    assert!(history.iter().all(|s| s.idea_count == 3));
}

#[tokio::test]
async fn switching_projects_drops_roadmap_and_history() {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    let generator = ScriptedGenerator::new().then_analysis(two_phase_analysis());
    let store_dyn: Arc<dyn RoadmapStore> = store.clone();
    let mut controller =
        RoadmapController::new(fast_config(), Arc::new(generator), store_dyn);
    controller.select_project(web_project());
    controller.set_ideas(sample_ideas());

    controller.generate(false).await.unwrap();
    assert_eq!(controller.history().len(), 1);

    let other = quadrant_model::Project::new("Beacon", "mobile app");
    controller.select_project(other);

    assert_eq!(controller.phase(), RoadmapPhase::Empty);
    assert!(controller.analysis().is_none());
    assert!(controller.history().is_empty());
    assert!(controller.ideas().is_empty());

    // The other project has no snapshots of its own.
    controller.refresh_history().await.unwrap();
    assert!(controller.history().is_empty());
}
