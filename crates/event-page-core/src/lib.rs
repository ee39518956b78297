//! Event Page Core
//!
//! Decision logic behind the event page widgets, kept free of any browser
//! dependency so it can be tested on the host:
//! - notifier: status polling and change detection
//! - countdown: start-date parsing and clock face arithmetic
//! - autofill: URL allow-list, indicator state, form field mapping
//! - categories: project tile filtering

mod error;
mod config;
mod storage;
mod api;
pub mod notifier;
pub mod countdown;
pub mod autofill;
pub mod categories;


pub use error::{GlueError, GlueResult};
pub use config::PageConfig;
pub use storage::{KeyValueStore, MemoryStore};
pub use api::{AutofillData, PageApi, StatusResponse};
