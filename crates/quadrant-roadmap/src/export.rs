//! Timeline export
//!
//! The export boundary consumes the flat feature list plus presentation
//! metadata. One implementation ships here: a JSON document export.

use crate::collaborators::TimelineExporter;
use crate::error::ExportError;
use chrono::NaiveDate;
use quadrant_model::TimelineFeature;
use serde::Serialize;

/// Presentation metadata attached to an export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    /// Document title
    pub title: String,
    /// Document subtitle
    pub subtitle: String,
    /// Calendar date month 0 maps to
    pub start_date: NaiveDate,
    /// Free-text project type
    pub project_type: String,
}

impl ExportMeta {
    /// Create new export metadata
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            start_date,
            project_type: String::new(),
        }
    }

    /// With subtitle
    #[inline]
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// With project type
    #[inline]
    #[must_use]
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = project_type.into();
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    #[serde(flatten)]
    meta: &'a ExportMeta,
    features: &'a [TimelineFeature],
}

/// JSON document exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTimelineExporter;

impl JsonTimelineExporter {
    /// Create new JSON exporter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TimelineExporter for JsonTimelineExporter {
    fn export(
        &self,
        features: &[TimelineFeature],
        meta: &ExportMeta,
    ) -> Result<Vec<u8>, ExportError> {
        let document = ExportDocument { meta, features };
        Ok(serde_json::to_vec_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_model::{Epic, Phase, Project, RoadmapAnalysis};
    use quadrant_schedule::build_timeline;

    fn sample_features() -> Vec<TimelineFeature> {
        let analysis = RoadmapAnalysis::new("1 month").with_phase(
            Phase::new("Only", "1 month")
                .with_epic(Epic::new("Auth", "login"))
                .with_epic(Epic::new("Schema", "tables")),
        );
        build_timeline(&analysis, &Project::new("Atlas", "web application"))
    }

    #[test]
    fn exports_every_feature() {
        let features = sample_features();
        let meta = ExportMeta::new("Atlas roadmap", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .with_subtitle("Q1 plan")
            .with_project_type("web application");

        let bytes = JsonTimelineExporter::new().export(&features, &meta).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["title"], "Atlas roadmap");
        assert_eq!(value["features"].as_array().unwrap().len(), features.len());
        assert_eq!(value["features"][0]["team"], "web");
        assert_eq!(value["features"][0]["startMonth"], 0);
    }

    #[test]
    fn empty_timeline_exports_cleanly() {
        let meta = ExportMeta::new("Empty", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let bytes = JsonTimelineExporter::new().export(&[], &meta).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["features"].as_array().unwrap().len(), 0);
    }
}
