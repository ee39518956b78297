//! Autotext Binder
//!
//! Appends an autotext indicator after every `#autotext_url` field.

use event_page_core::PageConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::components::AutotextIndicator;
use crate::context::provide_page_context;
use crate::dom;

const URL_FIELD_SELECTOR: &str = "#autotext_url";

pub fn attach(config: &PageConfig) {
    for el in dom::query_all(URL_FIELD_SELECTOR) {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            log::debug!("[autotext] {} is not an input, skipped", URL_FIELD_SELECTOR);
            continue;
        };
        let Some(parent) = input.parent_element().and_then(|p| p.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let config = config.clone();
        mount_to(parent, move || {
            provide_page_context(config);
            view! { <AutotextIndicator input=input /> }
        })
        .forget();
    }
}
