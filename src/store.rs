//! Autotext Indicator Store
//!
//! Uses Leptos reactive_stores so the icon and button re-render only on
//! the fields that change.

use event_page_core::autofill::{FieldUpdate, Indicator};
use event_page_core::{AutofillData, GlueResult};
use leptos::prelude::*;
use reactive_stores::Store;

/// State behind one autotext indicator
#[derive(Clone, Debug, Default, Store)]
pub struct AutotextState {
    pub indicator: Indicator,
}

pub type AutotextStore = Store<AutotextState>;

pub fn new_autotext_store() -> AutotextStore {
    Store::new(AutotextState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Re-validate the indicator against the field value
pub fn store_check(store: &AutotextStore, value: Option<String>) {
    let applied = store.indicator().write().check(value.as_deref());
    if !applied {
        log::debug!("[autotext] field value unavailable, indicator left as is");
    }
}

pub fn store_begin_fetch(store: &AutotextStore) {
    store.indicator().write().begin_fetch();
}

/// Apply the fetch result; returns the form writes
pub fn store_finish_fetch(store: &AutotextStore, result: GlueResult<AutofillData>) -> Vec<FieldUpdate> {
    store.indicator().write().finish_fetch(result)
}
