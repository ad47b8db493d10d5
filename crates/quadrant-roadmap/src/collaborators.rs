//! Collaborator boundaries
//!
//! The controller does no I/O of its own. Generation, persistence, and
//! export are injected behind these traits; implementations (hosted AI
//! provider, managed Postgres, file download) live outside this workspace.

use crate::error::{ExportError, GenerateError, StoreError};
use crate::export::ExportMeta;
use async_trait::async_trait;
use quadrant_model::{Idea, ProjectId, RoadmapAnalysis, RoadmapId, RoadmapSnapshot, TimelineFeature};

/// Roadmap generation collaborator
///
/// `Ok(None)` means the provider produced nothing usable; that is a
/// user-visible "generation failed" outcome, not a transport error.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    /// Generate a roadmap analysis from the project's ideas
    async fn generate(
        &self,
        ideas: &[Idea],
        project_name: &str,
        project_type: &str,
    ) -> Result<Option<RoadmapAnalysis>, GenerateError>;
}

/// Persistence collaborator
///
/// All writes are best-effort from the user's perspective; the controller
/// never rolls back in-memory state on a store failure.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Persist a freshly generated roadmap, returning its id
    async fn save(
        &self,
        project_id: ProjectId,
        author_id: &str,
        analysis: &RoadmapAnalysis,
        idea_count: usize,
    ) -> Result<RoadmapId, StoreError>;

    /// Replace the stored document for an existing roadmap
    async fn update(
        &self,
        roadmap_id: RoadmapId,
        analysis: &RoadmapAnalysis,
    ) -> Result<(), StoreError>;

    /// List stored snapshots for a project, newest first
    async fn list(&self, project_id: ProjectId) -> Result<Vec<RoadmapSnapshot>, StoreError>;
}

/// Export collaborator
///
/// Consumes the flat timeline plus presentation metadata and produces a
/// downloadable artifact.
pub trait TimelineExporter: Send + Sync {
    /// Render the timeline into an artifact
    fn export(
        &self,
        features: &[TimelineFeature],
        meta: &ExportMeta,
    ) -> Result<Vec<u8>, ExportError>;
}
