//! Projects and ideas
//!
//! A project owns a pool of ideas placed on the 2x2 impact/effort matrix.
//! Ideas feed roadmap generation; their matrix quadrant drives display
//! grouping only, never scheduling.

use crate::ids::{IdeaId, ProjectId};
use serde::{Deserialize, Serialize};

/// A project being planned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier
    pub id: ProjectId,
    /// Display name
    pub name: String,
    /// Free-text project type, e.g. "Web Application";
    /// a classification signal for team inference
    #[serde(default)]
    pub project_type: String,
}

impl Project {
    /// Create new project
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            project_type: project_type.into(),
        }
    }
}

/// Quadrant of the impact/effort matrix
///
/// Ratings run 1–5; 3 and above counts as high on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// High impact, low effort
    QuickWin,
    /// High impact, high effort
    BigBet,
    /// Low impact, low effort
    FillIn,
    /// Low impact, high effort
    TimeSink,
}

impl Quadrant {
    /// Classify an impact/effort pair
    #[must_use]
    pub fn from_scores(impact: u8, effort: u8) -> Self {
        let high_impact = impact >= 3;
        let high_effort = effort >= 3;
        match (high_impact, high_effort) {
            (true, false) => Quadrant::QuickWin,
            (true, true) => Quadrant::BigBet,
            (false, false) => Quadrant::FillIn,
            (false, true) => Quadrant::TimeSink,
        }
    }

    /// String form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::QuickWin => "quick-win",
            Quadrant::BigBet => "big-bet",
            Quadrant::FillIn => "fill-in",
            Quadrant::TimeSink => "time-sink",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An idea captured on the priority matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Idea identifier
    pub id: IdeaId,
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Impact rating, 1–5
    pub impact: u8,
    /// Effort rating, 1–5
    pub effort: u8,
}

impl Idea {
    /// Create new idea
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, impact: u8, effort: u8) -> Self {
        Self {
            id: IdeaId::new(),
            title: title.into(),
            description: String::new(),
            impact,
            effort,
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Matrix quadrant this idea falls in
    #[inline]
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_scores(self.impact, self.effort)
    }
}
