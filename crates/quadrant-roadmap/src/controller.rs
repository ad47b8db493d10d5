//! Roadmap controller
//!
//! The one stateful piece of the engine. Owns the active-roadmap slot and
//! coordinates:
//! - generation (guarded, timed out, overwrite-gated)
//! - history selection (wholesale replace from immutable snapshots)
//! - timeline edits (synchronous in-memory reconcile, debounced write-back)
//! - export through the injected exporter
//!
//! The controller is single-owner: nothing else mutates the active
//! roadmap. Interleaved async completions are fenced with an epoch — any
//! operation that replaces the slot bumps it, and completions carrying a
//! stale epoch are discarded instead of applied.

use crate::collaborators::{RoadmapGenerator, RoadmapStore, TimelineExporter};
use crate::config::ControllerConfig;
use crate::debounce::WriteDebounce;
use crate::error::RoadmapError;
use crate::export::ExportMeta;
use crate::state::{self, RoadmapPhase};
use quadrant_model::{
    Idea, Project, RoadmapAnalysis, RoadmapId, RoadmapSnapshot, TimelineFeature,
};
use quadrant_schedule::{build_timeline, reconcile, ReconcileOutcome};
use std::sync::Arc;

/// Orthogonal display mode; not part of the roadmap state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Flat timeline view
    #[default]
    Timeline,
    /// Nested phase/epic view
    Detailed,
}

impl ViewMode {
    /// The other mode
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Timeline => ViewMode::Detailed,
            ViewMode::Detailed => ViewMode::Timeline,
        }
    }
}

/// The active roadmap and, when persisted, its stored id
#[derive(Debug)]
struct ActiveRoadmap {
    /// Stored id; `None` when the initial save failed and the roadmap
    /// lives in memory only
    id: Option<RoadmapId>,
    analysis: RoadmapAnalysis,
}

/// The roadmap view controller
pub struct RoadmapController {
    config: ControllerConfig,
    generator: Arc<dyn RoadmapGenerator>,
    store: Arc<dyn RoadmapStore>,
    project: Option<Project>,
    ideas: Vec<Idea>,
    phase: RoadmapPhase,
    active: Option<ActiveRoadmap>,
    history: Vec<RoadmapSnapshot>,
    view: ViewMode,
    epoch: u64,
    write_debounce: WriteDebounce,
}

impl RoadmapController {
    /// Create new controller
    #[must_use]
    pub fn new(
        config: ControllerConfig,
        generator: Arc<dyn RoadmapGenerator>,
        store: Arc<dyn RoadmapStore>,
    ) -> Self {
        let write_debounce = WriteDebounce::new(config.debounce_delay);
        Self {
            config,
            generator,
            store,
            project: None,
            ideas: Vec::new(),
            phase: RoadmapPhase::Empty,
            active: None,
            history: Vec::new(),
            view: ViewMode::default(),
            epoch: 0,
            write_debounce,
        }
    }

    /// Select the project being planned
    ///
    /// Clears ideas, history, and any active roadmap; a different
    /// project's roadmap never bleeds into the new one.
    pub fn select_project(&mut self, project: Project) {
        tracing::info!(project = %project.name, "project selected");
        self.project = Some(project);
        self.ideas.clear();
        self.history.clear();
        self.clear();
    }

    /// Replace the idea pool
    pub fn set_ideas(&mut self, ideas: Vec<Idea>) {
        self.ideas = ideas;
    }

    /// Add one idea
    pub fn add_idea(&mut self, idea: Idea) {
        self.ideas.push(idea);
    }

    /// Generate a roadmap from the current ideas
    ///
    /// Guarded: a project must be selected and at least one idea must
    /// exist. When a roadmap is already active, `confirm_overwrite` must
    /// be true — the confirmation gate, not a state. Runs the generation
    /// collaborator under the configured timeout. Starting a generation
    /// cancels any pending debounced write.
    ///
    /// # Errors
    /// Guard violations, collaborator failure, or timeout. A failure never
    /// clears a previously active roadmap.
    pub async fn generate(&mut self, confirm_overwrite: bool) -> Result<(), RoadmapError> {
        let project = self.project.clone().ok_or(RoadmapError::NoProjectSelected)?;
        if self.ideas.is_empty() {
            return Err(RoadmapError::NoIdeas);
        }
        if self.active.is_some() && !confirm_overwrite {
            return Err(RoadmapError::OverwriteNotConfirmed);
        }

        // Pending edits belong to the roadmap being replaced.
        self.write_debounce.cancel();
        self.set_phase(RoadmapPhase::Loading);
        let epoch = self.bump_epoch();

        tracing::info!(
            project = %project.name,
            ideas = self.ideas.len(),
            "generating roadmap"
        );

        let generation =
            self.generator
                .generate(&self.ideas, &project.name, &project.project_type);
        match tokio::time::timeout(self.config.generation_timeout, generation).await {
            Err(_elapsed) => {
                let secs = self.config.generation_timeout.as_secs();
                tracing::warn!(secs, "roadmap generation timed out");
                self.set_phase(RoadmapPhase::Failed);
                Err(RoadmapError::GenerationTimedOut { secs })
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "roadmap generation failed");
                self.set_phase(RoadmapPhase::Failed);
                Err(RoadmapError::GenerationFailed(e.to_string()))
            }
            Ok(Ok(None)) => {
                tracing::warn!("provider returned no roadmap");
                self.set_phase(RoadmapPhase::Failed);
                Err(RoadmapError::GenerationFailed(
                    "provider returned no roadmap".to_string(),
                ))
            }
            Ok(Ok(Some(analysis))) => self.install_generated(epoch, &project, analysis).await,
        }
    }

    /// Install a completed generation, unless the slot has moved on
    async fn install_generated(
        &mut self,
        epoch: u64,
        project: &Project,
        analysis: RoadmapAnalysis,
    ) -> Result<(), RoadmapError> {
        if epoch != self.epoch {
            tracing::debug!("discarding superseded generation result");
            return Err(RoadmapError::GenerationSuperseded);
        }

        // Persistence is best-effort; a failed save leaves the roadmap
        // usable in memory with no stored id.
        let roadmap_id = match self
            .store
            .save(
                project.id,
                &self.config.author_id,
                &analysis,
                self.ideas.len(),
            )
            .await
        {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "saving generated roadmap failed");
                None
            }
        };

        self.active = Some(ActiveRoadmap {
            id: roadmap_id,
            analysis,
        });
        self.set_phase(RoadmapPhase::Loaded);

        if let Err(e) = self.refresh_history().await {
            tracing::warn!(error = %e, "history refresh failed");
        }

        tracing::info!(roadmap = ?roadmap_id.map(|id| id.to_string()), "roadmap loaded");
        Ok(())
    }

    /// Reload the snapshot history, newest first
    ///
    /// # Errors
    /// `NoProjectSelected` or a store failure; the cached history is left
    /// untouched on failure.
    pub async fn refresh_history(&mut self) -> Result<(), RoadmapError> {
        let project = self.project.as_ref().ok_or(RoadmapError::NoProjectSelected)?;
        self.history = self.store.list(project.id).await?;
        Ok(())
    }

    /// Replace the active roadmap with a historical snapshot
    ///
    /// A full replace, never a merge. Cancels any pending debounced write
    /// and supersedes any in-flight generation.
    ///
    /// # Errors
    /// `UnknownSnapshot` when the id is not in the cached history.
    pub fn select_history(&mut self, id: RoadmapId) -> Result<(), RoadmapError> {
        let snapshot = self
            .history
            .iter()
            .find(|s| s.id == id)
            .ok_or(RoadmapError::UnknownSnapshot(id))?;
        let analysis = snapshot.analysis.clone();

        self.write_debounce.cancel();
        self.bump_epoch();
        self.active = Some(ActiveRoadmap {
            id: Some(id),
            analysis,
        });
        self.set_phase(RoadmapPhase::Loaded);
        tracing::info!(roadmap = %id, "historical roadmap selected");
        Ok(())
    }

    /// Apply timeline edits to the active roadmap
    ///
    /// Reconciles synchronously in memory for immediate feedback, then
    /// arms the debounced write-back. Rapid successive edits coalesce into
    /// one write. Epics with no matching feature are skipped silently and
    /// counted in the outcome.
    ///
    /// # Errors
    /// `NoActiveRoadmap` when nothing is loaded.
    pub fn apply_edits(
        &mut self,
        features: &[TimelineFeature],
    ) -> Result<ReconcileOutcome, RoadmapError> {
        let active = self.active.as_mut().ok_or(RoadmapError::NoActiveRoadmap)?;

        let outcome = reconcile(&mut active.analysis, features);
        if outcome.missed > 0 {
            tracing::debug!(missed = outcome.missed, "edits skipped unmatched epics");
        }

        match active.id {
            Some(id) => {
                let analysis = active.analysis.clone();
                let store = Arc::clone(&self.store);
                self.write_debounce.arm(async move {
                    if let Err(e) = store.update(id, &analysis).await {
                        tracing::warn!(error = %e, "debounced roadmap update failed");
                    }
                });
            }
            None => tracing::debug!("no stored roadmap id; edit kept in memory only"),
        }

        Ok(outcome)
    }

    /// Build the flat timeline for the active roadmap
    ///
    /// # Errors
    /// `NoProjectSelected` or `NoActiveRoadmap`.
    pub fn timeline(&self) -> Result<Vec<TimelineFeature>, RoadmapError> {
        let project = self.project.as_ref().ok_or(RoadmapError::NoProjectSelected)?;
        let active = self.active.as_ref().ok_or(RoadmapError::NoActiveRoadmap)?;
        Ok(build_timeline(&active.analysis, project))
    }

    /// Export the current timeline through the given exporter
    ///
    /// # Errors
    /// Timeline guards or an exporter failure.
    pub fn export_timeline(
        &self,
        exporter: &dyn TimelineExporter,
        meta: &ExportMeta,
    ) -> Result<Vec<u8>, RoadmapError> {
        let features = self.timeline()?;
        Ok(exporter.export(&features, meta)?)
    }

    /// Drop the active roadmap and pending writes
    pub fn clear(&mut self) {
        self.write_debounce.cancel();
        self.bump_epoch();
        self.active = None;
        if self.phase != RoadmapPhase::Empty {
            self.set_phase(RoadmapPhase::Empty);
        }
    }

    /// Current slot state
    #[inline]
    #[must_use]
    pub fn phase(&self) -> RoadmapPhase {
        self.phase
    }

    /// The active analysis, if any
    #[inline]
    #[must_use]
    pub fn analysis(&self) -> Option<&RoadmapAnalysis> {
        self.active.as_ref().map(|a| &a.analysis)
    }

    /// Stored id of the active roadmap, if it was persisted
    #[inline]
    #[must_use]
    pub fn roadmap_id(&self) -> Option<RoadmapId> {
        self.active.as_ref().and_then(|a| a.id)
    }

    /// Cached snapshot history, newest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[RoadmapSnapshot] {
        &self.history
    }

    /// Selected project, if any
    #[inline]
    #[must_use]
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Current idea pool
    #[inline]
    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Current display mode
    #[inline]
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Set display mode
    pub fn set_view_mode(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Flip between timeline and detailed view
    pub fn toggle_view_mode(&mut self) {
        self.view = self.view.toggled();
    }

    /// Whether an edit is waiting for its debounced write
    #[inline]
    #[must_use]
    pub fn has_pending_write(&self) -> bool {
        self.write_debounce.is_armed()
    }

    fn set_phase(&mut self, to: RoadmapPhase) {
        debug_assert!(
            state::validate_transition(self.phase, to).is_ok(),
            "illegal roadmap state transition {:?} -> {:?}",
            self.phase,
            to
        );
        tracing::debug!(from = ?self.phase, to = ?to, "roadmap state transition");
        self.phase = to;
    }

    fn bump_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

impl std::fmt::Debug for RoadmapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadmapController")
            .field("phase", &self.phase)
            .field("project", &self.project.as_ref().map(|p| &p.name))
            .field("ideas", &self.ideas.len())
            .field("history", &self.history.len())
            .field("view", &self.view)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}
