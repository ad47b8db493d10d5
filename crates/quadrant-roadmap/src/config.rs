//! Controller configuration

use std::time::Duration;

/// Roadmap controller configuration
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Quiet period before an edit is persisted; rapid edits coalesce
    pub debounce_delay: Duration,
    /// Upper bound on a single generation call
    pub generation_timeout: Duration,
    /// Author recorded on saved roadmaps
    pub author_id: String,
}

impl ControllerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With debounce delay
    #[inline]
    #[must_use]
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// With generation timeout
    #[inline]
    #[must_use]
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    /// With author id
    #[inline]
    #[must_use]
    pub fn with_author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_secs(2),
            generation_timeout: Duration::from_secs(60),
            author_id: "anonymous".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let config = ControllerConfig::new()
            .with_debounce_delay(Duration::from_millis(250))
            .with_generation_timeout(Duration::from_secs(10))
            .with_author_id("user-7");

        assert_eq!(config.debounce_delay, Duration::from_millis(250));
        assert_eq!(config.generation_timeout, Duration::from_secs(10));
        assert_eq!(config.author_id, "user-7");
    }
}
