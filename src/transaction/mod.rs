//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated types it is made of
//! - The `TransactionBook` that owns the list, the current page and the filter
//! - Totals and the balance series shown on the dashboard
//! - View handlers for the transaction pages and endpoints

mod aggregation;
mod book;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod filter;
mod form;
mod transactions_page;
mod view;

pub use aggregation::{BalancePoint, format_day_label};
pub use book::{Outcome, TransactionBook};
pub use core::{Amount, Description, Transaction, TransactionId, TransactionKind};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use filter::{KindFilter, TransactionFilter};
pub use transactions_page::get_transactions_page;
