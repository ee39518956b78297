//! Page Configuration
//!
//! Endpoints, storage key and timing used by the widgets. Every field has a
//! default, so a partial JSON override only replaces what it names.

use serde::{Deserialize, Serialize};

use crate::error::GlueResult;

pub const DEFAULT_STATUS_ENDPOINT: &str = "/api/event/current/get/status";
pub const DEFAULT_AUTOFILL_ENDPOINT: &str = "/project/autofill";
pub const DEFAULT_STATUS_STORAGE_KEY: &str = "eventstatus";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30 * 1000;
pub const DEFAULT_DIMMED_OPACITY: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Endpoint returning `{ "status": ... }` for the current event
    pub status_endpoint: String,
    /// Endpoint returning project metadata for a repository URL
    pub autofill_endpoint: String,
    /// Local storage key holding the last seen event status
    pub status_storage_key: String,
    pub poll_interval_ms: u32,
    /// Opacity of project tiles outside the selected category
    pub dimmed_opacity: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            autofill_endpoint: DEFAULT_AUTOFILL_ENDPOINT.to_string(),
            status_storage_key: DEFAULT_STATUS_STORAGE_KEY.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            dimmed_opacity: DEFAULT_DIMMED_OPACITY,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override on top of the defaults
    pub fn from_json(raw: &str) -> GlueResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.status_endpoint, "/api/event/current/get/status");
        assert_eq!(config.status_storage_key, "eventstatus");
        assert_eq!(config.poll_interval_ms, 30_000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"poll_interval_ms": 5000}"#).unwrap();
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.autofill_endpoint, DEFAULT_AUTOFILL_ENDPOINT);
    }

    #[test]
    fn test_malformed_override() {
        assert!(PageConfig::from_json("{poll").is_err());
    }
}
