//! Quadrant scheduling logic
//!
//! The pure core of the roadmap engine:
//! - [`parse_duration`]: free-text phase durations → whole months
//! - [`classify_team`]: keyword-driven team inference with a fixed
//!   tie-break policy
//! - [`build_timeline`]: nested analysis → flat, schedule-resolved features
//! - [`reconcile`]: flat edits → nested analysis, multi-strategy matching
//!
//! Everything here is total: malformed input is absorbed by defaulting
//! rules, never surfaced as an error. Nothing here logs or performs I/O;
//! the controller in `quadrant-roadmap` owns both.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod builder;
pub mod duration;
pub mod reconcile;
pub mod team;

// Re-exports for convenience
pub use builder::build_timeline;
pub use duration::parse_duration;
pub use reconcile::{reconcile, ReconcileOutcome};
pub use team::classify_team;
