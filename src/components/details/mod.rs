//! Country detail panel.
//!
//! - [`DetailsPanel`] - Header with thumbnail and dismiss button, plus tabs
//! - [`use_country_details`] - Per-selection summary / statistics fetches

mod data_item;
mod hook;
mod panel;

pub use hook::{DetailsData, use_country_details};
pub use panel::DetailsPanel;
