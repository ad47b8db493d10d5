//! Team labels
//!
//! A team is either one of the canonical delivery teams or an explicit
//! free-form assignment. Explicit assignments are preserved verbatim; the
//! classifier in `quadrant-schedule` never rewrites them.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Delivery team owning a timeline feature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Team {
    /// Web frontend team
    Web,
    /// Mobile team
    Mobile,
    /// Backend/services team
    Backend,
    /// QA/testing team
    Testing,
    /// Platform team (generic fallback)
    Platform,
    /// Explicit free-form assignment, kept verbatim
    Custom(String),
}

impl Team {
    /// String form used on the wire and in exports
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Team::Web => "web",
            Team::Mobile => "mobile",
            Team::Backend => "backend",
            Team::Testing => "testing",
            Team::Platform => "platform",
            Team::Custom(label) => label,
        }
    }

    /// Whether this is one of the canonical labels
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Team::Custom(_))
    }
}

impl From<&str> for Team {
    fn from(label: &str) -> Self {
        match label {
            "web" => Team::Web,
            "mobile" => Team::Mobile,
            "backend" => Team::Backend,
            "testing" => Team::Testing,
            "platform" => Team::Platform,
            other => Team::Custom(other.to_string()),
        }
    }
}

impl From<String> for Team {
    fn from(label: String) -> Self {
        Team::from(label.as_str())
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Team {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Team::from(label))
    }
}
