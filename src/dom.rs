//! DOM Helpers
//!
//! Thin wrappers over web-sys for querying the server-rendered page and
//! applying the outcomes computed by the core crate.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use event_page_core::autofill::FieldUpdate;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Value of `input#<id>`, if present
pub fn input_value(id: &str) -> Option<String> {
    document()?
        .query_selector(&format!("input#{}", id))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// Blocking confirm dialog; a missing window counts as cancel
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking alert dialog
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Bind an event handler for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

/// Write autofill values into the project form
pub fn apply_field_updates(updates: &[FieldUpdate]) {
    let Some(doc) = document() else {
        return;
    };
    for update in updates {
        let id = update.field.element_id();
        if update.field.is_textarea() {
            let textarea = doc
                .query_selector(&format!("textarea#{}", id))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());
            if let Some(textarea) = textarea {
                textarea.set_value(&update.value);
            }
        } else {
            let input = doc
                .query_selector(&format!("input#{}", id))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
            if let Some(input) = input {
                input.set_value(&update.value);
            }
        }
    }
}
