//! Timeline features
//!
//! A `TimelineFeature` is a flattened, schedule-resolved projection of one
//! epic. It is derived and disposable: the nested [`RoadmapAnalysis`] owns
//! the data, features are rebuilt from it at any time and carry only weak
//! index back-references.
//!
//! [`RoadmapAnalysis`]: crate::roadmap::RoadmapAnalysis

use crate::team::Team;
use serde::{Deserialize, Serialize};

/// Identifier of a timeline feature
///
/// Either the opaque id carried through from an earlier feature-to-epic
/// mapping, or a synthetic `{phase}-{epic}` composite when no original id
/// exists. Indices in the synthetic form are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Synthetic id from the feature's position in the nested structure
    #[inline]
    #[must_use]
    pub fn synthetic(phase_index: usize, epic_index: usize) -> Self {
        Self(format!("{phase_index}-{epic_index}"))
    }

    /// Get the id as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved priority of a feature
///
/// Source priorities are free text; anything outside {high, medium, low}
/// degrades to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// High priority
    High,
    /// Medium priority
    Medium,
    /// Low priority
    Low,
    /// Unrecognized source value
    Unknown,
}

impl Priority {
    /// Resolve free-text priority at the build boundary
    ///
    /// Case-insensitive. Empty input defaults to `Medium`; any other
    /// unrecognized value degrades to `Unknown`.
    #[must_use]
    pub fn resolve(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Priority::Medium;
        }
        match text.to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    /// String form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved complexity of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// High complexity
    High,
    /// Medium complexity
    Medium,
    /// Low complexity
    Low,
    /// Unrecognized or missing source value
    Unknown,
}

impl Complexity {
    /// Resolve free-text complexity at the build boundary
    ///
    /// Case-insensitive; empty or unrecognized input degrades to `Unknown`.
    #[must_use]
    pub fn resolve(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "high" => Complexity::High,
            "medium" => Complexity::Medium,
            "low" => Complexity::Low,
            _ => Complexity::Unknown,
        }
    }

    /// String form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::High => "high",
            Complexity::Medium => "medium",
            Complexity::Low => "low",
            Complexity::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery status of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureStatus {
    /// Scheduled, not started
    Planned,
    /// Currently being delivered
    InProgress,
    /// Done
    Completed,
}

impl FeatureStatus {
    /// String form (`planned`, `in-progress`, `completed`)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureStatus::Planned => "planned",
            FeatureStatus::InProgress => "in-progress",
            FeatureStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattened, schedule-resolved projection of one epic
///
/// Scheduling fields are always concrete here; defaulting happens once,
/// in the timeline builder, never downstream. `phase_index`/`epic_index`
/// are lookup indices into the owning analysis, not ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFeature {
    /// Feature identifier (original id or synthetic composite)
    pub id: FeatureId,
    /// Epic title
    pub title: String,
    /// Epic description
    pub description: String,
    /// Month the feature starts, 0-based
    pub start_month: u32,
    /// Duration in months, always ≥ 1
    #[serde(rename = "duration")]
    pub duration_months: u32,
    /// Owning team
    pub team: Team,
    /// Resolved priority
    pub priority: Priority,
    /// Resolved complexity
    pub complexity: Complexity,
    /// Delivery status
    pub status: FeatureStatus,
    /// Carried-through user stories
    #[serde(default)]
    pub user_stories: Vec<String>,
    /// Carried-through deliverables
    #[serde(default)]
    pub deliverables: Vec<String>,
    /// Carried-through related idea references
    #[serde(default)]
    pub related_ideas: Vec<String>,
    /// Risks of the owning phase
    #[serde(default)]
    pub risks: Vec<String>,
    /// Success criteria of the owning phase
    #[serde(default)]
    pub success_criteria: Vec<String>,
    /// Index of the owning phase (weak back-reference)
    pub phase_index: usize,
    /// Index of the epic within its phase (weak back-reference)
    pub epic_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_id_is_zero_based_composite() {
        assert_eq!(FeatureId::synthetic(0, 2).as_str(), "0-2");
        assert_eq!(FeatureId::synthetic(3, 0).as_str(), "3-0");
    }

    #[test]
    fn priority_resolution() {
        assert_eq!(Priority::resolve("High"), Priority::High);
        assert_eq!(Priority::resolve("MEDIUM"), Priority::Medium);
        assert_eq!(Priority::resolve("low"), Priority::Low);
        assert_eq!(Priority::resolve(""), Priority::Medium);
        assert_eq!(Priority::resolve("urgent"), Priority::Unknown);
    }

    #[test]
    fn complexity_degrades_to_unknown() {
        assert_eq!(Complexity::resolve("high"), Complexity::High);
        assert_eq!(Complexity::resolve(""), Complexity::Unknown);
        assert_eq!(Complexity::resolve("gnarly"), Complexity::Unknown);
    }

    #[test]
    fn status_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&FeatureStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
