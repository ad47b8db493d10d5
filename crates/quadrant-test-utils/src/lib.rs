//! Testing utilities for the Quadrant workspace
//!
//! Shared fixtures plus hand-written fakes for the controller's
//! collaborator traits: an in-memory store with call counters and failure
//! injection, and a scripted generator that replays queued outcomes.

#![allow(missing_docs)]

use async_trait::async_trait;
use quadrant_model::{
    Epic, Idea, Phase, Project, ProjectId, RoadmapAnalysis, RoadmapId, RoadmapSnapshot,
};
use quadrant_roadmap::{GenerateError, RoadmapGenerator, RoadmapStore, StoreError};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

static TRACING: Once = Once::new();

/// Install a fmt subscriber honoring `RUST_LOG`, once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Canonical web project fixture
pub fn web_project() -> Project {
    Project::new("Atlas", "web application")
}

/// A project whose type carries no classification signal
pub fn neutral_project() -> Project {
    Project::new("Atlas", "internal tooling")
}

/// A handful of ideas spread across the matrix
pub fn sample_ideas() -> Vec<Idea> {
    vec![
        Idea::new("Dark mode", 4, 2).with_description("Requested constantly"),
        Idea::new("SSO integration", 5, 4),
        Idea::new("Onboarding tour", 2, 2),
    ]
}

/// Two phases, three epics: the canonical analysis used across tests
pub fn two_phase_analysis() -> RoadmapAnalysis {
    RoadmapAnalysis::new("2 months")
        .with_phase(
            Phase::new("Foundation", "4 weeks")
                .with_epic(Epic::new("Auth", "login and sessions").with_original_id("feat-1"))
                .with_epic(Epic::new("Schema", "core tables")),
        )
        .with_phase(
            Phase::new("Polish", "1 month")
                .with_risk("scope creep")
                .with_epic(Epic::new("Design pass", "visual cleanup")),
        )
}

/// A second, distinguishable analysis for overwrite/history tests
pub fn alternate_analysis() -> RoadmapAnalysis {
    RoadmapAnalysis::new("1 month")
        .with_phase(Phase::new("Reboot", "1 month").with_epic(Epic::new("Rewrite", "start over")))
}

/// In-memory persistence fake
///
/// Keeps snapshots in insertion order, lists them newest first, counts
/// calls, and can be told to fail saves or updates.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshots: Mutex<Vec<RoadmapSnapshot>>,
    save_calls: AtomicUsize,
    update_calls: AtomicUsize,
    fail_saves: AtomicBool,
    fail_updates: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent updates fail
    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    /// The most recently saved or updated snapshot
    pub fn latest(&self) -> Option<RoadmapSnapshot> {
        self.snapshots.lock().unwrap().last().cloned()
    }

    pub fn find(&self, id: RoadmapId) -> Option<RoadmapSnapshot> {
        self.snapshots.lock().unwrap().iter().find(|s| s.id == id).cloned()
    }
}

#[async_trait]
impl RoadmapStore for InMemoryStore {
    async fn save(
        &self,
        project_id: ProjectId,
        _author_id: &str,
        analysis: &RoadmapAnalysis,
        idea_count: usize,
    ) -> Result<RoadmapId, StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected save failure".to_string()));
        }
        let snapshot = RoadmapSnapshot::new(project_id, analysis.clone(), idea_count);
        let id = snapshot.id;
        self.snapshots.lock().unwrap().push(snapshot);
        Ok(id)
    }

    async fn update(
        &self,
        roadmap_id: RoadmapId,
        analysis: &RoadmapAnalysis,
    ) -> Result<(), StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected update failure".to_string()));
        }
        let mut snapshots = self.snapshots.lock().unwrap();
        match snapshots.iter_mut().find(|s| s.id == roadmap_id) {
            Some(snapshot) => {
                snapshot.analysis = analysis.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(roadmap_id)),
        }
    }

    async fn list(&self, project_id: ProjectId) -> Result<Vec<RoadmapSnapshot>, StoreError> {
        let snapshots = self.snapshots.lock().unwrap();
        let mut matching: Vec<_> = snapshots
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect();
        matching.reverse();
        Ok(matching)
    }
}

/// One scripted generation outcome
#[derive(Debug, Clone)]
enum Script {
    Analysis(RoadmapAnalysis),
    Empty,
    Fail(String),
}

/// Generation fake replaying queued outcomes in order
///
/// An exhausted script answers `Ok(None)`.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Script>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful generation
    #[must_use]
    pub fn then_analysis(self, analysis: RoadmapAnalysis) -> Self {
        self.script.lock().unwrap().push_back(Script::Analysis(analysis));
        self
    }

    /// Queue a provider "nothing usable" response
    #[must_use]
    pub fn then_empty(self) -> Self {
        self.script.lock().unwrap().push_back(Script::Empty);
        self
    }

    /// Queue a provider rejection
    #[must_use]
    pub fn then_failure(self, message: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Script::Fail(message.into()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoadmapGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        _ideas: &[Idea],
        _project_name: &str,
        _project_type: &str,
    ) -> Result<Option<RoadmapAnalysis>, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Script::Analysis(analysis)) => Ok(Some(analysis)),
            Some(Script::Fail(message)) => Err(GenerateError::Rejected(message)),
            Some(Script::Empty) | None => Ok(None),
        }
    }
}

/// Generation fake that never completes; pairs with paused-time tests
/// to exercise the controller's timeout path
#[derive(Debug, Default)]
pub struct StalledGenerator;

#[async_trait]
impl RoadmapGenerator for StalledGenerator {
    async fn generate(
        &self,
        _ideas: &[Idea],
        _project_name: &str,
        _project_type: &str,
    ) -> Result<Option<RoadmapAnalysis>, GenerateError> {
        std::future::pending::<()>().await;
        unreachable!("pending future never resolves")
    }
}
