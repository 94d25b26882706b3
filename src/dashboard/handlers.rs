//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{
        cards::{Summary, summary_cards_view},
        charts::{DashboardChart, balance_trend_chart, chart_view, charts_script},
    },
    endpoints,
    html::{HeadElement, base, link},
    navigation::NavBar,
    transaction::{BalancePoint, TransactionBook},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The user's transactions.
    pub ledger: Arc<Mutex<TransactionBook>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Display a page with an overview of the user's data.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction book lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let summary = Summary {
        balance: ledger.balance(),
        total_income: ledger.total_income(),
        total_expense: ledger.total_expense(),
    };
    let series = ledger.balance_series();

    Ok(dashboard_view(summary, &series).into_response())
}

/// Renders the dashboard with the summary cards and, once there are
/// transactions, the balance trend chart.
fn dashboard_view(summary: Summary, series: &[BalancePoint]) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let chart = (!series.is_empty()).then(|| DashboardChart {
        id: "balance-chart",
        options: balance_trend_chart(series).to_string(),
    });

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (summary_cards_view(summary))

            @match &chart {
                Some(chart) => { (chart_view(chart)) }
                None => { (no_data_view()) }
            }
        }
    );

    let scripts = match chart {
        Some(chart) => vec![
            HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
            charts_script(&[chart]),
        ],
        None => Vec::new(),
    };

    base("Dashboard", &scripts, &content)
}

/// Displays a helpful message with a link to add a transaction.
fn no_data_view() -> Markup {
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding a transaction");

    html!(
        div class="flex flex-col items-center px-6 py-8 mx-auto" data-empty-state="true"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Your balance trend will show up here once you have some transactions. \
                Get started by " (new_transaction_link) "."
            }
        }
    )
}
