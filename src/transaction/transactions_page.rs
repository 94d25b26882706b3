//! Defines the route handler for the paginated, searchable transactions table.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    pagination::{PaginationConfig, create_pagination_indicators},
    transaction::{
        book::TransactionBook,
        filter::{KindFilter, TransactionFilter},
        view::{TransactionsViewModel, transactions_view},
    },
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The user's transactions.
    pub ledger: Arc<Mutex<TransactionBook>>,
    /// Configuration for pagination controls.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Controls which transactions are shown.
///
/// Omitted fields keep their previous values.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// The page number to display. Starts from 1.
    pub page: Option<u64>,
    /// Text to look for in transaction descriptions.
    pub search: Option<String>,
    /// The kind of transactions to show.
    pub kind: Option<KindFilter>,
}

/// Render a page of the user's transactions.
///
/// A new search or kind sends the user back to the first page and any
/// requested page is ignored.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let mut ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction book lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let filter = TransactionFilter::new(
        query
            .search
            .as_deref()
            .unwrap_or_else(|| ledger.filter().search()),
        query.kind.unwrap_or_else(|| ledger.filter().kind()),
    );
    let filter_changed = ledger.set_filter(filter);

    if let Some(page) = query.page
        && !filter_changed
    {
        ledger.set_current_page(page);
    }

    tracing::debug!(
        "Showing page {} of {} with {} transactions per page",
        ledger.current_page(),
        ledger.total_pages(),
        ledger.page_size()
    );

    let page = ledger.paginated_transactions();
    let pagination = create_pagination_indicators(
        page.page,
        page.total_pages,
        state.pagination_config.max_pages,
    );

    let view = transactions_view(TransactionsViewModel {
        page,
        filter: ledger.filter(),
        has_any_transactions: !ledger.transactions().is_empty(),
        pagination,
    });

    Ok(view.into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::{Query, State};
    use scraper::{ElementRef, Html, Selector};
    use time::{Date, macros::date};

    use crate::{
        endpoints,
        pagination::PaginationConfig,
        test_utils::{
            assert_status_ok, assert_valid_html, get_test_ledger, must_add_transaction,
            parse_html_document,
        },
        transaction::{TransactionKind, filter::KindFilter},
    };

    use super::{TransactionsQuery, TransactionsViewState, get_transactions_page};

    const TEST_DATE: Date = date!(2024 - 01 - 15);

    fn get_test_state() -> TransactionsViewState {
        TransactionsViewState {
            ledger: get_test_ledger(),
            pagination_config: PaginationConfig::default(),
        }
    }

    async fn get_page(state: &TransactionsViewState, query: TransactionsQuery) -> Html {
        let response = get_transactions_page(State(state.clone()), Query(query))
            .await
            .unwrap();
        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    fn rows(html: &Html) -> Vec<ElementRef<'_>> {
        html.select(&Selector::parse("tr[data-transaction-row='true']").unwrap())
            .collect()
    }

    fn empty_state_text(html: &Html) -> Option<String> {
        html.select(&Selector::parse("td[data-empty-state='true']").unwrap())
            .next()
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
    }

    #[tokio::test]
    async fn shows_prompt_when_there_are_no_transactions() {
        let state = get_test_state();

        let html = get_page(&state, TransactionsQuery::default()).await;

        assert!(rows(&html).is_empty());
        assert_eq!(
            empty_state_text(&html).as_deref(),
            Some("No transactions yet. Add your first transaction to get started!")
        );
        assert!(
            html.select(&Selector::parse("nav.pagination").unwrap())
                .next()
                .is_none(),
            "pagination should be hidden with a single page"
        );
        assert!(
            html.select(&Selector::parse("a[data-clear-filter]").unwrap())
                .next()
                .is_none(),
            "clear filter link should be hidden without a filter"
        );
    }

    #[tokio::test]
    async fn shows_newest_transactions_first() {
        let state = get_test_state();
        must_add_transaction(&state.ledger, 10.0, TransactionKind::Income, "First", TEST_DATE);
        must_add_transaction(&state.ledger, 2.5, TransactionKind::Expense, "Second", TEST_DATE);

        let html = get_page(&state, TransactionsQuery::default()).await;

        let rows = rows(&html);
        assert_eq!(rows.len(), 2);
        let first_row = rows[0].text().collect::<String>();
        assert!(first_row.contains("Second"), "got {first_row}");
        assert!(first_row.contains("-2.50 DZD"), "got {first_row}");
        assert!(rows[1].text().collect::<String>().contains("10.00 DZD"));
    }

    #[tokio::test]
    async fn paginates_sixteen_transactions() {
        let state = get_test_state();
        for i in 1..=16 {
            must_add_transaction(
                &state.ledger,
                i as f64,
                TransactionKind::Income,
                &format!("Transaction {i}"),
                TEST_DATE,
            );
        }

        let first = get_page(&state, TransactionsQuery::default()).await;
        assert_eq!(rows(&first).len(), 15);
        let current = first
            .select(&Selector::parse("nav.pagination > ul.pagination p[aria-current='page']").unwrap())
            .next()
            .expect("No current page indicator found");
        assert_eq!(current.text().collect::<String>().trim(), "1");

        let second = get_page(
            &state,
            TransactionsQuery {
                page: Some(2),
                ..Default::default()
            },
        )
        .await;
        let second_rows = rows(&second);
        assert_eq!(second_rows.len(), 1);
        assert!(
            second_rows[0]
                .text()
                .collect::<String>()
                .contains("Transaction 1")
        );
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let state = get_test_state();
        must_add_transaction(&state.ledger, 1.0, TransactionKind::Income, "Only", TEST_DATE);

        let html = get_page(
            &state,
            TransactionsQuery {
                page: Some(5),
                ..Default::default()
            },
        )
        .await;

        assert!(rows(&html).is_empty());
        assert_eq!(
            empty_state_text(&html).as_deref(),
            Some("There are no transactions on this page.")
        );
        let back_link = html
            .select(&Selector::parse("nav.pagination > ul.pagination li a").unwrap())
            .find(|link| link.text().collect::<String>().trim() == "Back")
            .expect("No link back to the last page found");
        assert_eq!(
            back_link.value().attr("href"),
            Some(format!("{}?page=1&search=&kind=all", endpoints::TRANSACTIONS_VIEW).as_str())
        );
    }

    #[tokio::test]
    async fn deleting_the_only_row_on_the_last_page_shows_previous_page() {
        let state = get_test_state();
        for i in 1..=16 {
            must_add_transaction(
                &state.ledger,
                1.0,
                TransactionKind::Income,
                &format!("Row {i}"),
                TEST_DATE,
            );
        }
        get_page(
            &state,
            TransactionsQuery {
                page: Some(2),
                ..Default::default()
            },
        )
        .await;
        {
            let mut ledger = state.ledger.lock().unwrap();
            let oldest = ledger.transactions()[15].id.clone();
            ledger.delete_transaction(&oldest);
        }

        let html = get_page(&state, TransactionsQuery::default()).await;

        assert_eq!(rows(&html).len(), 15);
        assert_eq!(empty_state_text(&html), None);
        assert_eq!(state.ledger.lock().unwrap().current_page(), 1);
    }

    #[tokio::test]
    async fn filters_by_search_and_kind() {
        let state = get_test_state();
        must_add_transaction(&state.ledger, 5.0, TransactionKind::Expense, "Coffee", TEST_DATE);
        must_add_transaction(&state.ledger, 50.0, TransactionKind::Income, "Coffee refund", TEST_DATE);
        must_add_transaction(&state.ledger, 9.0, TransactionKind::Expense, "Bread", TEST_DATE);

        let html = get_page(
            &state,
            TransactionsQuery {
                page: None,
                search: Some("COFFEE".to_owned()),
                kind: Some(KindFilter::Expense),
            },
        )
        .await;

        let rows = rows(&html);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].text().collect::<String>().contains("Coffee"));

        let search_value = html
            .select(&Selector::parse("input[name='search']").unwrap())
            .next()
            .and_then(|input| input.value().attr("value"));
        assert_eq!(search_value, Some("COFFEE"));
        let selected_kind = html
            .select(&Selector::parse("select[name='kind'] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected_kind, Some("expense"));

        let clear_link = html
            .select(&Selector::parse("a[data-clear-filter='true']").unwrap())
            .next()
            .and_then(|link| link.value().attr("href"));
        assert_eq!(
            clear_link,
            Some(format!("{}?page=1&search=&kind=all", endpoints::TRANSACTIONS_VIEW).as_str())
        );
    }

    #[tokio::test]
    async fn no_matches_shows_filter_message() {
        let state = get_test_state();
        must_add_transaction(&state.ledger, 5.0, TransactionKind::Expense, "Coffee", TEST_DATE);

        let html = get_page(
            &state,
            TransactionsQuery {
                search: Some("rent".to_owned()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(
            empty_state_text(&html).as_deref(),
            Some("No transactions match your search or filter criteria.")
        );
    }

    #[tokio::test]
    async fn new_search_resets_to_first_page() {
        let state = get_test_state();
        for i in 1..=20 {
            must_add_transaction(
                &state.ledger,
                1.0,
                TransactionKind::Expense,
                &format!("Coffee {i}"),
                TEST_DATE,
            );
        }
        state.ledger.lock().unwrap().set_current_page(2);

        get_page(
            &state,
            TransactionsQuery {
                page: Some(2),
                search: Some("coffee".to_owned()),
                kind: None,
            },
        )
        .await;

        assert_eq!(state.ledger.lock().unwrap().current_page(), 1);
    }

    #[tokio::test]
    async fn pagination_links_keep_the_filter() {
        let state = get_test_state();
        for i in 1..=16 {
            must_add_transaction(
                &state.ledger,
                1.0,
                TransactionKind::Expense,
                &format!("Tea {i}"),
                TEST_DATE,
            );
        }

        let html = get_page(
            &state,
            TransactionsQuery {
                search: Some("tea".to_owned()),
                kind: Some(KindFilter::Expense),
                ..Default::default()
            },
        )
        .await;

        let page_two_link = html
            .select(&Selector::parse("nav.pagination > ul.pagination li a").unwrap())
            .find(|link| link.text().collect::<String>().trim() == "2")
            .expect("No link to page 2 found");
        assert_eq!(
            page_two_link.value().attr("href"),
            Some(format!("{}?page=2&search=tea&kind=expense", endpoints::TRANSACTIONS_VIEW).as_str())
        );
    }
}
