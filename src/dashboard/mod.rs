//! Dashboard module
//!
//! Provides an overview page showing the current balance, the income and
//! expense totals and a chart of the balance over time.

mod cards;
mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
