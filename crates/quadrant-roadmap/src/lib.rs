//! Quadrant roadmap controller
//!
//! The stateful layer of the roadmap engine:
//! - Orchestrates generation, history selection, timeline edits, and
//!   export over one active-roadmap slot
//! - Persists edits on a debounced, coalescing schedule
//! - Converts collaborator failures into a fixed user-facing error set
//!
//! # Example
//!
//! ```rust,ignore
//! use quadrant_roadmap::{ControllerConfig, RoadmapController};
//!
//! # async fn example(generator: std::sync::Arc<dyn quadrant_roadmap::RoadmapGenerator>,
//! #                  store: std::sync::Arc<dyn quadrant_roadmap::RoadmapStore>) {
//! let mut controller = RoadmapController::new(ControllerConfig::new(), generator, store);
//! controller.select_project(quadrant_model::Project::new("Atlas", "web application"));
//! controller.add_idea(quadrant_model::Idea::new("Dark mode", 4, 2));
//!
//! controller.generate(false).await.unwrap();
//! let features = controller.timeline().unwrap();
//! println!("{} features scheduled", features.len());
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod collaborators;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod export;
pub mod state;

// Re-exports for convenience
pub use collaborators::{RoadmapGenerator, RoadmapStore, TimelineExporter};
pub use config::ControllerConfig;
pub use controller::{RoadmapController, ViewMode};
pub use debounce::WriteDebounce;
pub use error::{ExportError, GenerateError, RoadmapError, StateError, StoreError};
pub use export::{ExportMeta, JsonTimelineExporter};
pub use state::{allowed_transitions, validate_transition, RoadmapPhase};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the roadmap controller
    pub use crate::{
        ControllerConfig, ExportMeta, JsonTimelineExporter, RoadmapController, RoadmapError,
        RoadmapGenerator, RoadmapPhase, RoadmapStore, TimelineExporter, ViewMode,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
