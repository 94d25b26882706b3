//! HTML rendering for the transactions page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, EXPENSE_BADGE_STYLE, FORM_TEXT_INPUT_STYLE, INCOME_BADGE_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, edit_delete_action_links, format_currency, link,
    },
    navigation::NavBar,
    pagination::{Page, PageStatus, PaginationIndicator},
    transaction::{
        core::{Transaction, TransactionKind},
        filter::{KindFilter, TransactionFilter},
    },
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// Everything the transactions page needs to render.
pub(crate) struct TransactionsViewModel<'a> {
    pub page: Page<&'a Transaction>,
    pub filter: &'a TransactionFilter,
    pub has_any_transactions: bool,
    pub pagination: Vec<PaginationIndicator>,
}

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

pub(crate) fn transactions_view(view_model: TransactionsViewModel<'_>) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let TransactionsViewModel {
        page,
        filter,
        has_any_transactions,
        pagination,
    } = view_model;

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    (link(endpoints::NEW_TRANSACTION_VIEW, "Add Transaction"))
                }

                (search_form(filter))

                div class="relative overflow-x-auto shadow-md rounded-lg"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for transaction in &page.items {
                                (transaction_row_view(transaction))
                            }

                            @if page.items.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td
                                        colspan="5"
                                        class="px-6 py-8 text-center"
                                        data-empty-state="true"
                                    {
                                        (empty_state_message(page.status, has_any_transactions))
                                    }
                                }
                            }
                        }
                    }
                }

                @if page.total_pages > 1 || page.status == PageStatus::OutOfRange {
                    (pagination_view(&pagination, filter))
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

fn empty_state_message(status: PageStatus, has_any_transactions: bool) -> &'static str {
    match status {
        PageStatus::OutOfRange => "There are no transactions on this page.",
        _ if !has_any_transactions => {
            "No transactions yet. Add your first transaction to get started!"
        }
        _ => "No transactions match your search or filter criteria.",
    }
}

fn search_form(filter: &TransactionFilter) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            role="search"
            class="flex flex-col gap-3 sm:flex-row sm:items-center"
        {
            input
                type="search"
                name="search"
                aria-label="Search transactions"
                placeholder="Search transactions..."
                value=(filter.search())
                class=(FORM_TEXT_INPUT_STYLE);

            select
                name="kind"
                aria-label="Transaction type"
                class={ (FORM_TEXT_INPUT_STYLE) " sm:w-48" }
            {
                @for (kind, label) in [
                    (KindFilter::All, "All Types"),
                    (KindFilter::Income, "Income"),
                    (KindFilter::Expense, "Expense"),
                ] {
                    option value=(kind.as_str()) selected[kind == filter.kind()] { (label) }
                }
            }

            button type="submit" class={ (BUTTON_PRIMARY_STYLE) " sm:w-auto" } { "Search" }

            @if filter.is_active() {
                a
                    href=(page_url(1, &TransactionFilter::default()))
                    class={ (LINK_STYLE) " whitespace-nowrap" }
                    data-clear-filter="true"
                {
                    "Clear filter"
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let signed_amount = transaction.signed_amount();
    let (description, tooltip) = format_description(transaction.description.as_ref());
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, &transaction.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, &transaction.id);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        transaction.description
    );
    let badge_style = match transaction.kind {
        TransactionKind::Income => INCOME_BADGE_STYLE,
        TransactionKind::Expense => EXPENSE_BADGE_STYLE,
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(transaction.date) { (transaction.date) }
            }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(badge_style) { (transaction.kind.label()) }
            }
            td class={ "px-6 py-4 text-right whitespace-nowrap " (amount_class(signed_amount)) }
            {
                (format_currency(signed_amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    (edit_delete_action_links(
                        &edit_url,
                        &delete_url,
                        &confirm_message,
                        "closest tr",
                    ))
                }
            }
        }
    }
}

/// The URL of the transactions page showing `page` with `filter` applied.
pub(crate) fn page_url(page: u64, filter: &TransactionFilter) -> String {
    let params = [
        ("page", page.to_string()),
        ("search", filter.search().to_owned()),
        ("kind", filter.kind().as_str().to_owned()),
    ];

    match serde_urlencoded::to_string(params) {
        Ok(query) => format!("{}?{query}", endpoints::TRANSACTIONS_VIEW),
        Err(error) => {
            tracing::error!("Could not encode page query: {error}");
            format!("{}?page={page}", endpoints::TRANSACTIONS_VIEW)
        }
    }
}

fn pagination_view(indicators: &[PaginationIndicator], filter: &TransactionFilter) -> Markup {
    html! {
        nav class="pagination flex justify-center"
        {
            ul class="pagination flex items-center gap-2 p-0 m-0"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::Page(page) => {
                                a href=(page_url(*page, filter)) class=(LINK_STYLE) { (page) }
                            }
                            PaginationIndicator::CurrPage(page) => {
                                p aria-current="page" class="font-bold" { (page) }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class="text-gray-500" { "..." }
                            }
                            PaginationIndicator::BackButton(page) => {
                                a href=(page_url(*page, filter)) class=(LINK_STYLE) { "Back" }
                            }
                            PaginationIndicator::NextButton(page) => {
                                a href=(page_url(*page, filter)) class=(LINK_STYLE) { "Next" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}
