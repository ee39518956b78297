//! Countdown Clock Component
//!
//! Daily counter face (days, hours, minutes, seconds) ticking down once a
//! second and stopping at zero.

use event_page_core::countdown::{tick, ClockFace};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

const TICK_MS: u32 = 1000;

#[component]
pub fn CountdownClock(
    /// Initial time left in seconds
    seconds: f64,
) -> impl IntoView {
    let (remaining, set_remaining) = signal(seconds);

    // Lives as long as the page; the mount is never torn down
    Interval::new(TICK_MS, move || {
        set_remaining.update(|s| *s = tick(*s, f64::from(TICK_MS) / 1000.0));
    })
    .forget();

    let face = Memo::new(move |_| ClockFace::from_seconds(remaining.get()));

    view! {
        <div class=move || {
            if face.get().is_zero() { "countdown-clock countdown-done" } else { "countdown-clock" }
        }>
            {move || {
                face.get()
                    .groups()
                    .into_iter()
                    .map(|(digits, label)| {
                        view! {
                            <span class="countdown-group">
                                <span class="countdown-digits">{digits}</span>
                                <span class="countdown-label">{label}</span>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
