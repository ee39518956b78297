//! Page Context
//!
//! Configuration shared with the mounted widgets via Leptos Context API.

use event_page_core::PageConfig;
use leptos::prelude::*;

use crate::commands::HttpApi;

/// Page-wide settings provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    config: StoredValue<PageConfig>,
}

impl PageContext {
    pub fn new(config: PageConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    /// HTTP client for the configured endpoints
    pub fn api(&self) -> HttpApi {
        self.config.with_value(HttpApi::new)
    }
}

pub fn provide_page_context(config: PageConfig) {
    provide_context(PageContext::new(config));
}

/// Context from the enclosing mount, or defaults when none was provided
pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().unwrap_or_else(|| PageContext::new(PageConfig::default()))
}
