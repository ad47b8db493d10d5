//! Team classification
//!
//! Maps an epic to the team that should own it. The tie-break policy is
//! fixed: explicit epic-level assignment > project-level signal > content
//! keyword inference > generic fallback. Keyword checks are substring
//! matches over case-folded text, not whole-word matches.

use quadrant_model::{Epic, Project, Team};

const BACKEND_KEYWORDS: &[&str] = &[
    "backend",
    "api",
    "server",
    "database",
    "auth",
    "integration",
    "microservice",
];

const WEB_KEYWORDS: &[&str] = &[
    "frontend",
    "ui",
    "user interface",
    "react",
    "vue",
    "angular",
    "design",
    "css",
    "html",
    "web",
];

const MOBILE_KEYWORDS: &[&str] = &[
    "mobile",
    "app",
    "ios",
    "android",
    "smartphone",
    "tablet",
];

const TESTING_KEYWORDS: &[&str] = &[
    "test",
    "testing",
    "qa",
    "quality",
    "automation",
    "validation",
];

/// Classify the team owning an epic
///
/// First match wins:
/// 1. a non-empty explicit `epic.team` is returned unchanged;
/// 2. the project type signals web / mobile / backend;
/// 3. the epic's title and description are matched against ordered
///    keyword sets (backend, then web, then mobile, then testing);
/// 4. fallback: platform.
#[must_use]
pub fn classify_team(epic: &Epic, project: &Project) -> Team {
    if let Some(team) = &epic.team {
        if !team.as_str().trim().is_empty() {
            return team.clone();
        }
    }

    let project_type = project.project_type.to_ascii_lowercase();
    if project_type.contains("web") || project_type.contains("frontend") {
        return Team::Web;
    }
    if project_type.contains("mobile") || project_type.contains("app") {
        return Team::Mobile;
    }
    if project_type.contains("backend") || project_type.contains("api") {
        return Team::Backend;
    }

    let content = format!("{} {}", epic.title, epic.description).to_ascii_lowercase();
    if contains_any(&content, BACKEND_KEYWORDS) {
        return Team::Backend;
    }
    if contains_any(&content, WEB_KEYWORDS) {
        return Team::Web;
    }
    if contains_any(&content, MOBILE_KEYWORDS) {
        return Team::Mobile;
    }
    if contains_any(&content, TESTING_KEYWORDS) {
        return Team::Testing;
    }

    Team::Platform
}

fn contains_any(content: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| content.contains(k))
}
