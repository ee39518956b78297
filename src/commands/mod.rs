//! Server API Wrappers
//!
//! Frontend bindings to the server endpoints, organized by resource.

mod event;
mod project;

use async_trait::async_trait;
use event_page_core::{AutofillData, GlueError, GlueResult, PageApi, PageConfig, StatusResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub use event::fetch_event_status;
pub use project::fetch_autofill;

/// GET `url` and decode its JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> GlueResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| GlueError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(GlueError::Network(format!("{} returned {}", url, response.status())));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| GlueError::Decode(format!("Failed to parse response: {}", e)))
}

/// `PageApi` over same-origin HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    status_endpoint: String,
    autofill_endpoint: String,
}

impl HttpApi {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            status_endpoint: config.status_endpoint.clone(),
            autofill_endpoint: config.autofill_endpoint.clone(),
        }
    }
}

#[async_trait(?Send)]
impl PageApi for HttpApi {
    async fn event_status(&self) -> GlueResult<StatusResponse> {
        fetch_event_status(&self.status_endpoint).await
    }

    async fn autofill(&self, url: &str) -> GlueResult<AutofillData> {
        fetch_autofill(&self.autofill_endpoint, url).await
    }
}
