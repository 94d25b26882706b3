//! Totals and the running balance series derived from a list of transactions.
//!
//! Everything here is recomputed from the full list on each call.

use std::collections::BTreeMap;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::transaction::core::{Transaction, TransactionKind};

/// The balance after all transactions up to and including `date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePoint {
    pub date: Date,
    pub balance: f64,
}

/// Income minus expenses over all `transactions`.
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(Transaction::signed_amount)
        .sum()
}

/// The sum of all income amounts.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    sum_kind(transactions, TransactionKind::Income)
}

/// The sum of all expense amounts.
pub fn total_expense(transactions: &[Transaction]) -> f64 {
    sum_kind(transactions, TransactionKind::Expense)
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount.value())
        .sum()
}

/// Calculates the cumulative balance at the end of each day that has transactions.
///
/// # Returns
/// One point per distinct date in ascending order. The input order does not matter.
pub fn balance_series(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut daily_totals: BTreeMap<Date, f64> = BTreeMap::new();

    for transaction in transactions {
        *daily_totals.entry(transaction.date).or_insert(0.0) += transaction.signed_amount();
    }

    let mut running_balance = 0.0;

    daily_totals
        .into_iter()
        .map(|(date, net)| {
            running_balance += net;
            BalancePoint {
                date,
                balance: running_balance,
            }
        })
        .collect()
}

const DAY_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:zero] [month repr:short]");

/// Formats a date as a two digit day and short month name, e.g. "05 Mar".
pub fn format_day_label(date: Date) -> String {
    date.format(DAY_LABEL_FORMAT).unwrap_or_else(|error| {
        tracing::warn!("Could not format day label for {date}: {error}");
        date.to_string()
    })
}
