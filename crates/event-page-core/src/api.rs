//! Server API
//!
//! Response shapes of the two endpoints the page consumes and the async
//! trait the UI implements over HTTP.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GlueResult;

/// Body of the current event status endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self { status: Some(status.to_string()) }
    }

    /// The status if present and non-empty
    pub fn current(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body of the project autofill endpoint. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutofillData {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub homepage_url: Option<String>,
    pub source_url: Option<String>,
    pub image_url: Option<String>,
}

/// Requests the page makes against the server
///
/// Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait PageApi {
    /// GET the current event status
    async fn event_status(&self) -> GlueResult<StatusResponse>;

    /// GET autofill data for a repository URL
    async fn autofill(&self, url: &str) -> GlueResult<AutofillData>;
}
