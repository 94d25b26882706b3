//! Summary cards for the balance and the income and expense totals.

use maud::{Markup, html};

use crate::html::format_currency;

/// The totals shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Summary {
    pub balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
}

/// Renders the balance, income and expense cards in a row.
pub(super) fn summary_cards_view(summary: Summary) -> Markup {
    // Compare whole cents so leftovers like -2.8e-17 count as zero.
    let balance_color = if (summary.balance * 100.0).round() >= 0.0 {
        "text-blue-600 dark:text-blue-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    html! {
        section class="w-full grid grid-cols-1 md:grid-cols-3 gap-4 mb-8"
        {
            (summary_card("balance", "Current Balance", summary.balance, balance_color))
            (summary_card(
                "income",
                "Total Income",
                summary.total_income,
                "text-green-600 dark:text-green-400",
            ))
            (summary_card(
                "expense",
                "Total Expense",
                summary.total_expense,
                "text-red-600 dark:text-red-400",
            ))
        }
    }
}

fn summary_card(id: &str, title: &str, amount: f64, amount_color: &str) -> Markup {
    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-6 shadow-md"
            data-summary-card=(id)
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }

            p class={ "mt-2 text-2xl font-bold " (amount_color) } { (format_currency(amount)) }
        }
    }
}
