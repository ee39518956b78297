//! Event Commands
//!
//! Frontend binding for the current event status endpoint.

use event_page_core::{GlueResult, StatusResponse};

use super::get_json;

pub async fn fetch_event_status(endpoint: &str) -> GlueResult<StatusResponse> {
    get_json(endpoint).await
}
