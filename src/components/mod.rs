//! UI Components
//!
//! Leptos widgets mounted into the server-rendered page.

mod autotext_indicator;
mod countdown_clock;

pub use autotext_indicator::AutotextIndicator;
pub use countdown_clock::CountdownClock;
