//! Stored roadmap snapshots
//!
//! Every persisted roadmap is an immutable snapshot of a full analysis.
//! Selecting one from history replaces the active roadmap wholesale; there
//! is no merging of snapshots.

use crate::ids::{ProjectId, RoadmapId};
use crate::roadmap::RoadmapAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable stored roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSnapshot {
    /// Snapshot identifier
    pub id: RoadmapId,
    /// Owning project
    pub project_id: ProjectId,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Number of ideas that fed the generation
    pub idea_count: usize,
    /// The full analysis document
    pub analysis: RoadmapAnalysis,
}

impl RoadmapSnapshot {
    /// Create new snapshot stamped with the current time
    #[inline]
    #[must_use]
    pub fn new(project_id: ProjectId, analysis: RoadmapAnalysis, idea_count: usize) -> Self {
        Self {
            id: RoadmapId::new(),
            project_id,
            created_at: Utc::now(),
            idea_count,
            analysis,
        }
    }
}
