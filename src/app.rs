//! Event Page Frontend App
//!
//! Attaches the notifier and the page widgets to the server-rendered page.

use event_page_core::PageConfig;

use crate::{dom, notifier, widgets};

/// `<body>` attribute holding an optional JSON config override
const CONFIG_ATTRIBUTE: &str = "data-page-config";

pub fn start() {
    let config = load_config();

    // The notifier does not wait for the document
    notifier::start(&config);

    dom::on_ready(move || {
        widgets::countdown::attach();
        widgets::autotext::attach(&config);
        widgets::categories::attach(config.dimmed_opacity);
        log::info!("[app] page widgets attached");
    });
}

fn load_config() -> PageConfig {
    let raw = dom::document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    match raw {
        Some(raw) => PageConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("[app] ignoring {}: {}", CONFIG_ATTRIBUTE, e);
            PageConfig::default()
        }),
        None => PageConfig::default(),
    }
}
