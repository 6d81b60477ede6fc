//! ExcelAtas browser front end.
//!
//! `ui` turns the core view model into DOM commands and `outcome` turns
//! submission results into core messages; both build everywhere.
//! `platform` binds those commands and the page's events to the browser and
//! only exists on `wasm32`.
pub mod outcome;
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod platform;
