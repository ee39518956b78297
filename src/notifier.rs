//! Event Status Notifier
//!
//! Polls the current event status and alerts when it changes.
//! Each tick starts its own request, whether or not the previous one has
//! finished.

use event_page_core::notifier::{poll_status, should_poll};
use event_page_core::PageConfig;
use gloo_timers::callback::Interval;
use leptos::task::spawn_local;

use crate::commands::HttpApi;
use crate::dom;
use crate::storage::LocalStore;

/// Start polling unless the current path rules it out
pub fn start(config: &PageConfig) {
    let path = web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default();
    if !should_poll(&path) {
        log::debug!("[notify] polling disabled for {}", path);
        return;
    }

    let api = HttpApi::new(config);
    let key = config.status_storage_key.clone();
    log::info!("[notify] polling every {} ms", config.poll_interval_ms);

    check_status(api.clone(), key.clone());
    Interval::new(config.poll_interval_ms, move || check_status(api.clone(), key.clone())).forget();
}

fn check_status(api: HttpApi, key: String) {
    spawn_local(async move {
        let mut store = match LocalStore::open() {
            Ok(store) => store,
            Err(e) => {
                log::warn!("[notify] {}", e);
                return;
            }
        };
        match poll_status(&api, &mut store, &key).await {
            Ok(change) => {
                if let Some(message) = change.alert_message() {
                    dom::alert(message);
                }
            }
            Err(e) => log::warn!("[notify] status check dropped: {}", e),
        }
    });
}
