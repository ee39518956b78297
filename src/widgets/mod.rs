//! Page Widgets
//!
//! Binders that find their elements in the server-rendered page and attach
//! behavior to them. Each one is independent of the others.

pub mod autotext;
pub mod categories;
pub mod countdown;
