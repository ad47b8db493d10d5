//! Timeline building
//!
//! Flattens a nested roadmap analysis into an ordered list of
//! schedule-resolved timeline features. All defaulting happens here, at one
//! boundary: downstream consumers never see an unresolved field.
//!
//! Months are 0-based. The month cursor starts at 0 and advances by the
//! parsed phase duration once per phase, so defaulted start months never
//! decrease across phases.

use crate::duration::parse_duration;
use crate::team::classify_team;
use quadrant_model::{
    Complexity, FeatureId, FeatureStatus, Priority, Project, RoadmapAnalysis, TimelineFeature,
};

/// Flatten an analysis into schedule-resolved timeline features
///
/// Produces exactly one feature per epic, in phase-then-epic order.
/// Deterministic: the same analysis and project always yield the same
/// features.
#[must_use]
pub fn build_timeline(analysis: &RoadmapAnalysis, project: &Project) -> Vec<TimelineFeature> {
    let mut features = Vec::with_capacity(analysis.epic_count());
    let mut month_cursor: u32 = 0;

    for (phase_index, phase) in analysis.phases.iter().enumerate() {
        let phase_months = parse_duration(&phase.duration);

        for (epic_index, epic) in phase.epics.iter().enumerate() {
            let id = match epic.original_feature_id.as_deref() {
                Some(original) if !original.is_empty() => FeatureId::from(original),
                _ => FeatureId::synthetic(phase_index, epic_index),
            };

            let default_duration = default_epic_duration(phase_months, phase.epics.len());
            let status = epic.status.unwrap_or(if phase_index == 0 {
                FeatureStatus::InProgress
            } else {
                FeatureStatus::Planned
            });

            features.push(TimelineFeature {
                id,
                title: epic.title.clone(),
                description: epic.description.clone(),
                start_month: epic.start_month.unwrap_or(month_cursor),
                duration_months: epic.duration_months.unwrap_or(default_duration),
                team: classify_team(epic, project),
                priority: Priority::resolve(&epic.priority),
                complexity: Complexity::resolve(&epic.complexity),
                status,
                user_stories: epic.user_stories.clone(),
                deliverables: epic.deliverables.clone(),
                related_ideas: epic.related_ideas.clone(),
                risks: phase.risks.clone(),
                success_criteria: phase.success_criteria.clone(),
                phase_index,
                epic_index,
            });
        }

        // Advance once per phase, not per epic.
        month_cursor += phase_months;
    }

    features
}

/// Default duration when an epic carries none: the phase duration split
/// evenly across its epics, floored, never below one month.
fn default_epic_duration(phase_months: u32, epic_count: usize) -> u32 {
    let count = u32::try_from(epic_count.max(1)).unwrap_or(u32::MAX);
    (phase_months / count).max(1)
}
