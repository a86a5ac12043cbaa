//! revtrack - terminal product revenue tracker
//!
//! Fetches sales records from the three branch endpoints, merges duplicate
//! products by summing revenue, and renders a filterable, totaled table.

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;
