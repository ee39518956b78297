//! Autotext Indicator Component
//!
//! Icon + "Update now" button appended next to the project URL field.
//! Validates the URL on load and on every key release; the button fetches
//! autofill data and writes it into the project form.

use event_page_core::autofill::{needs_overwrite_confirmation, OVERWRITE_PROMPT};
use event_page_core::PageApi;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::context::use_page_context;
use crate::dom;
use crate::store::{new_autotext_store, store_begin_fetch, store_check, store_finish_fetch, AutotextStateStoreFields};

#[component]
pub fn AutotextIndicator(
    /// The URL field this indicator validates
    input: HtmlInputElement,
) -> impl IntoView {
    let api = use_page_context().api();
    let store = new_autotext_store();

    // On load
    store_check(&store, Some(input.value()));

    // On key release
    let field = input.clone();
    dom::listen(&input, "keyup", move |_| store_check(&store, Some(field.value())));

    let on_update = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let url = input.value();

        if needs_overwrite_confirmation(dom::input_value("name").as_deref()) && !dom::confirm(OVERWRITE_PROMPT) {
            return;
        }

        store_begin_fetch(&store);
        let api = api.clone();
        spawn_local(async move {
            let result = api.autofill(&url).await;
            let updates = store_finish_fetch(&store, result);
            dom::apply_field_updates(&updates);
        });
    };

    let indicator = move || store.indicator().get();

    view! {
        <span class="autotext-indicator">
            <i
                class=move || format!("fa {}", indicator().icon.css_class())
                style=move || format!("color:{}", indicator().color.as_str())
            ></i>
            "\u{a0}"
            <button
                type="button"
                style=move || if indicator().button_visible { "" } else { "visibility:hidden" }
                prop:disabled=move || indicator().button.disabled()
                on:click=on_update
            >
                {move || indicator().button.label()}
            </button>
        </span>
    }
}
