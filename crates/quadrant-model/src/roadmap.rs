//! Roadmap structure
//!
//! The nested analysis produced by the generation collaborator:
//! an ordered list of phases, each owning an ordered list of epics.
//! Phase order is execution order. This structure is the single source of
//! truth; flattened timeline features are always derived from it.
//!
//! Field names follow the provider payloads (camelCase), and collection
//! fields default to empty so a sparse generated document still parses.

use crate::feature::FeatureStatus;
use crate::team::Team;
use serde::{Deserialize, Serialize};

/// A unit of planned work within a phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    /// Epic title
    #[serde(default)]
    pub title: String,
    /// Epic description (may be empty)
    #[serde(default)]
    pub description: String,
    /// User stories, in display order
    #[serde(default)]
    pub user_stories: Vec<String>,
    /// Deliverables, in display order
    #[serde(default)]
    pub deliverables: Vec<String>,
    /// References to the ideas this epic came from
    #[serde(default)]
    pub related_ideas: Vec<String>,
    /// Free-text priority, conventionally one of high/medium/low
    #[serde(default)]
    pub priority: String,
    /// Free-text complexity, conventionally one of high/medium/low
    #[serde(default)]
    pub complexity: String,
    /// Explicit start month (0-based); defaulted by the builder when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<u32>,
    /// Explicit duration in months (≥ 1); defaulted by the builder when absent
    #[serde(default, rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
    /// Explicit team assignment; always wins over classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    /// Explicit delivery status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FeatureStatus>,
    /// Opaque id carried from an earlier feature-to-epic mapping;
    /// primary join key for reconciliation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_feature_id: Option<String>,
}

impl Epic {
    /// Create new epic
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            user_stories: Vec::new(),
            deliverables: Vec::new(),
            related_ideas: Vec::new(),
            priority: String::new(),
            complexity: String::new(),
            start_month: None,
            duration_months: None,
            team: None,
            status: None,
            original_feature_id: None,
        }
    }

    /// With free-text priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// With free-text complexity
    #[inline]
    #[must_use]
    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = complexity.into();
        self
    }

    /// With explicit schedule
    #[inline]
    #[must_use]
    pub fn with_schedule(mut self, start_month: u32, duration_months: u32) -> Self {
        self.start_month = Some(start_month);
        self.duration_months = Some(duration_months);
        self
    }

    /// With explicit team assignment
    #[inline]
    #[must_use]
    pub fn with_team(mut self, team: impl Into<Team>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// With explicit status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: FeatureStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// With original feature id
    #[inline]
    #[must_use]
    pub fn with_original_id(mut self, id: impl Into<String>) -> Self {
        self.original_feature_id = Some(id.into());
        self
    }

    /// With a user story appended
    #[inline]
    #[must_use]
    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.user_stories.push(story.into());
        self
    }

    /// With a deliverable appended
    #[inline]
    #[must_use]
    pub fn with_deliverable(mut self, deliverable: impl Into<String>) -> Self {
        self.deliverables.push(deliverable.into());
        self
    }
}

/// An ordered stage of the roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Display name
    #[serde(default)]
    pub phase: String,
    /// Free-text duration ("4 weeks", "2 months"); source of truth for
    /// month-cursor advancement
    #[serde(default)]
    pub duration: String,
    /// Phase description
    #[serde(default)]
    pub description: String,
    /// Phase-level risks
    #[serde(default)]
    pub risks: Vec<String>,
    /// Phase-level success criteria
    #[serde(default)]
    pub success_criteria: Vec<String>,
    /// Epics in execution order
    #[serde(default)]
    pub epics: Vec<Epic>,
}

impl Phase {
    /// Create new phase
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            phase: name.into(),
            duration: duration.into(),
            description: String::new(),
            risks: Vec::new(),
            success_criteria: Vec::new(),
            epics: Vec::new(),
        }
    }

    /// With an epic appended
    #[inline]
    #[must_use]
    pub fn with_epic(mut self, epic: Epic) -> Self {
        self.epics.push(epic);
        self
    }

    /// With a risk appended
    #[inline]
    #[must_use]
    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risks.push(risk.into());
        self
    }

    /// Number of epics in this phase
    #[inline]
    #[must_use]
    pub fn epic_count(&self) -> usize {
        self.epics.len()
    }
}

/// Top-level generated roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapAnalysis {
    /// Display string for the overall duration, e.g. "6 months"
    #[serde(default)]
    pub total_duration: String,
    /// Phases in execution order
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl RoadmapAnalysis {
    /// Create new analysis
    #[inline]
    #[must_use]
    pub fn new(total_duration: impl Into<String>) -> Self {
        Self {
            total_duration: total_duration.into(),
            phases: Vec::new(),
        }
    }

    /// With a phase appended
    #[inline]
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Total number of epics across all phases
    #[inline]
    #[must_use]
    pub fn epic_count(&self) -> usize {
        self.phases.iter().map(Phase::epic_count).sum()
    }

    /// Whether the analysis has no epics at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epic_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_chain() {
        let analysis = RoadmapAnalysis::new("2 months")
            .with_phase(
                Phase::new("Foundation", "4 weeks")
                    .with_epic(Epic::new("Auth", "Login flows").with_priority("high"))
                    .with_epic(Epic::new("Schema", "Core tables")),
            )
            .with_phase(Phase::new("Polish", "1 month").with_epic(Epic::new("Design pass", "")));

        assert_eq!(analysis.phases.len(), 2);
        assert_eq!(analysis.epic_count(), 3);
        assert!(!analysis.is_empty());
    }

    #[test]
    fn parses_sparse_provider_payload() {
        // Generated documents routinely omit optional fields entirely.
        let json = r#"{
            "totalDuration": "3 months",
            "phases": [
                {
                    "phase": "MVP",
                    "duration": "6 weeks",
                    "epics": [
                        {"title": "API skeleton", "description": "", "priority": "High"}
                    ]
                }
            ]
        }"#;

        let analysis: RoadmapAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.total_duration, "3 months");
        assert_eq!(analysis.phases[0].epics[0].title, "API skeleton");
        assert!(analysis.phases[0].epics[0].user_stories.is_empty());
        assert!(analysis.phases[0].epics[0].start_month.is_none());
    }

    #[test]
    fn epic_wire_names_are_camel_case() {
        let epic = Epic::new("Sync", "")
            .with_schedule(2, 3)
            .with_original_id("feat-9");

        let value = serde_json::to_value(&epic).unwrap();
        assert_eq!(value["startMonth"], 2);
        assert_eq!(value["duration"], 3);
        assert_eq!(value["originalFeatureId"], "feat-9");
    }
}
