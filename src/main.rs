//! Event Page Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod dom;
mod notifier;
mod storage;
mod store;
mod widgets;

use any_spawner::Executor;

fn main() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    _ = Executor::init_wasm_bindgen();
    app::start();
}
