//! Countdown Binder
//!
//! Mounts a countdown clock into every `.event-countdown` element whose
//! `data-start` attribute parses.

use chrono::{Local, Utc};
use event_page_core::countdown::Countdown;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::CountdownClock;
use crate::dom;

const COUNTDOWN_SELECTOR: &str = ".event-countdown";
const START_ATTRIBUTE: &str = "data-start";

pub fn attach() {
    let now = Utc::now();
    for el in dom::query_all(COUNTDOWN_SELECTOR) {
        let Some(raw) = el.get_attribute(START_ATTRIBUTE) else {
            log::debug!("[countdown] element without {}, skipped", START_ATTRIBUTE);
            continue;
        };
        let Some(countdown) = Countdown::from_attribute(&raw, now, &Local) else {
            log::debug!("[countdown] unparseable start {:?}, skipped", raw);
            continue;
        };
        let Ok(host) = el.dyn_into::<HtmlElement>() else {
            continue;
        };
        let seconds = countdown.seconds();
        mount_to(host, move || view! { <CountdownClock seconds=seconds /> }).forget();
    }
}
