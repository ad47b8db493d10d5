//! Roadmap slot state machine
//!
//! One active-roadmap slot moves between four states. Generation enters
//! `Loading`; a failure lands in `Failed` without clearing whatever was
//! loaded before; history selection jumps straight to `Loaded`.

use crate::error::StateError;

/// State of the active-roadmap slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadmapPhase {
    /// No roadmap loaded
    Empty,
    /// Generation in flight
    Loading,
    /// A roadmap is active (generated or selected from history)
    Loaded,
    /// The last generation failed; retryable
    Failed,
}

/// Validate a state transition
pub fn validate_transition(from: RoadmapPhase, to: RoadmapPhase) -> Result<(), StateError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(StateError::IllegalTransition)
    }
}

/// All states reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: RoadmapPhase) -> Vec<RoadmapPhase> {
    use RoadmapPhase::*;
    match from {
        Empty => vec![Loading, Loaded],
        Loading => vec![Loaded, Failed],
        Loaded => vec![Loading, Loaded, Empty],
        Failed => vec![Loading, Loaded, Empty],
    }
}
