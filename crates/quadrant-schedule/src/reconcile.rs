//! Bidirectional reconciliation
//!
//! Writes scheduling edits made on the flat timeline back into the nested
//! analysis. Identifiers are not guaranteed stable end to end, so matching
//! is best-effort and multi-strategy: original id, then synthetic
//! composite id, then position, then title. An epic with no matching
//! feature is skipped, never an error; callers decide whether a miss is
//! worth logging.

use quadrant_model::{Epic, FeatureId, RoadmapAnalysis, TimelineFeature};

/// Result of a reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOutcome {
    /// Epics updated from a matching feature
    pub matched: usize,
    /// Epics with no matching feature, left untouched
    pub missed: usize,
}

impl ReconcileOutcome {
    /// Whether every epic found a matching feature
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missed == 0
    }
}

/// Write edited feature scheduling back into the nested analysis
///
/// For each epic, the first feature found by the strategy chain overwrites
/// the epic's start month, duration, team, and status. Idempotent for a
/// fixed feature list. Duplicate titles can cause an incorrect title-based
/// match; accepted, given the absence of stable identifiers end to end.
pub fn reconcile(
    analysis: &mut RoadmapAnalysis,
    features: &[TimelineFeature],
) -> ReconcileOutcome {
    let mut outcome = ReconcileOutcome::default();

    for (phase_index, phase) in analysis.phases.iter_mut().enumerate() {
        for (epic_index, epic) in phase.epics.iter_mut().enumerate() {
            match find_feature(features, phase_index, epic_index, epic) {
                Some(feature) => {
                    epic.start_month = Some(feature.start_month);
                    epic.duration_months = Some(feature.duration_months);
                    epic.team = Some(feature.team.clone());
                    epic.status = Some(feature.status);
                    outcome.matched += 1;
                }
                None => outcome.missed += 1,
            }
        }
    }

    outcome
}

/// Locate the feature for an epic, strongest join key first
fn find_feature<'a>(
    features: &'a [TimelineFeature],
    phase_index: usize,
    epic_index: usize,
    epic: &Epic,
) -> Option<&'a TimelineFeature> {
    if let Some(original) = epic.original_feature_id.as_deref() {
        if !original.is_empty() {
            if let Some(feature) = features.iter().find(|f| f.id.as_str() == original) {
                return Some(feature);
            }
        }
    }

    let synthetic = FeatureId::synthetic(phase_index, epic_index);
    if let Some(feature) = features.iter().find(|f| f.id == synthetic) {
        return Some(feature);
    }

    if let Some(feature) = features
        .iter()
        .find(|f| f.phase_index == phase_index && f.epic_index == epic_index)
    {
        return Some(feature);
    }

    features.iter().find(|f| f.title == epic.title)
}
