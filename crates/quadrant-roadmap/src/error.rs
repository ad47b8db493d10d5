//! Error types for the roadmap controller
//!
//! Collaborator failures are converted into [`RoadmapError`] at the
//! controller boundary, and [`RoadmapError::user_message`] maps every
//! variant onto a small fixed set of user-facing strings. Raw collaborator
//! detail never crosses that boundary.

use quadrant_model::RoadmapId;

/// Main controller error type
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    /// No project is selected
    #[error("no project selected")]
    NoProjectSelected,

    /// The selected project has no ideas to plan from
    #[error("no ideas to plan from")]
    NoIdeas,

    /// A roadmap exists and the caller did not confirm replacing it
    #[error("overwrite not confirmed")]
    OverwriteNotConfirmed,

    /// No roadmap is currently loaded
    #[error("no active roadmap")]
    NoActiveRoadmap,

    /// The generation collaborator failed or produced nothing usable
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// The generation collaborator exceeded the configured timeout
    #[error("generation timed out after {secs}s")]
    GenerationTimedOut {
        /// Configured timeout that elapsed
        secs: u64,
    },

    /// A generation completed after its roadmap slot moved on
    #[error("generation result superseded")]
    GenerationSuperseded,

    /// The requested history entry does not exist
    #[error("unknown roadmap snapshot: {0}")]
    UnknownSnapshot(RoadmapId),

    /// Persistence collaborator failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Export collaborator failure
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

impl RoadmapError {
    /// Check if retrying the same operation can succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailed(_)
                | Self::GenerationTimedOut { .. }
                | Self::Store(StoreError::Unavailable(_))
        )
    }

    /// Fixed user-facing message for this error
    ///
    /// This is the only text shown to users; variants never leak
    /// collaborator detail here.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoProjectSelected => "Select a project first.",
            Self::NoIdeas => "Add at least one idea before generating a roadmap.",
            Self::OverwriteNotConfirmed => "Confirm replacing the existing roadmap.",
            Self::NoActiveRoadmap => "No roadmap is loaded.",
            Self::GenerationFailed(_) => "Roadmap generation failed. Please try again.",
            Self::GenerationTimedOut { .. } => "Roadmap generation timed out. Please try again.",
            Self::GenerationSuperseded => "A newer roadmap replaced this result.",
            Self::UnknownSnapshot(_) => "That roadmap version is no longer available.",
            Self::Store(_) => "Your changes could not be saved. You can keep working.",
            Self::Export(_) => "Export failed. Please try again.",
        }
    }
}

/// Generation collaborator errors
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The provider rejected the request
    #[error("provider rejected request: {0}")]
    Rejected(String),

    /// The provider answered with an unusable document
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Persistence collaborator errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write
    #[error("write rejected: {0}")]
    Rejected(String),

    /// No stored roadmap with this id
    #[error("roadmap not found: {0}")]
    NotFound(RoadmapId),
}

/// Export collaborator errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Serializing the export document failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Roadmap slot state transition errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    /// The requested transition is not allowed
    #[error("illegal roadmap state transition")]
    IllegalTransition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(RoadmapError::GenerationFailed("x".to_string()).is_retryable());
        assert!(RoadmapError::GenerationTimedOut { secs: 30 }.is_retryable());
        assert!(RoadmapError::Store(StoreError::Unavailable("down".to_string())).is_retryable());
        assert!(!RoadmapError::NoProjectSelected.is_retryable());
        assert!(!RoadmapError::Store(StoreError::Rejected("rls".to_string())).is_retryable());
    }

    #[test]
    fn user_messages_hide_collaborator_detail() {
        let err = RoadmapError::GenerationFailed("HTTP 500 from provider".to_string());
        assert!(!err.user_message().contains("500"));

        let err = RoadmapError::Store(StoreError::Unavailable("connection refused".to_string()));
        assert!(!err.user_message().contains("connection"));
    }

    #[test]
    fn display_is_lowercase_and_terse() {
        let err = RoadmapError::NoIdeas;
        assert_eq!(err.to_string(), "no ideas to plan from");
    }
}
