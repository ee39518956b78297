//! Project Commands
//!
//! Frontend binding for the project autofill endpoint.

use event_page_core::autofill::autofill_request_url;
use event_page_core::{AutofillData, GlueResult};

use super::get_json;

/// Fetch project metadata for a repository URL
pub async fn fetch_autofill(endpoint: &str, url: &str) -> GlueResult<AutofillData> {
    let request_url = autofill_request_url(endpoint, url);
    log::debug!("[autofill] GET {}", request_url);
    get_json(&request_url).await
}
