use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, link, loading_spinner},
    navigation::NavBar,
    not_found::get_404_not_found_response,
    transaction::{
        book::TransactionBook,
        core::{Transaction, TransactionId},
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION_VIEW).into_html();
    let spinner = loading_spinner();
    let update_endpoint = format_endpoint(endpoints::TRANSACTION, &transaction.id);
    let form_fields = transaction_form_fields(&TransactionFormDefaults {
        kind: transaction.kind,
        amount: Some(transaction.amount.value()),
        date: transaction.date,
        description: Some(transaction.description.as_ref()),
    });

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                class="w-full max-w-md space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Transaction" }

                (form_fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Save Changes"
                }

                p class="text-sm text-center" { (link(endpoints::TRANSACTIONS_VIEW, "Cancel")) }
            }
        }
    };

    base("Edit Transaction", &[], &content)
}

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The user's transactions.
    pub ledger: Arc<Mutex<TransactionBook>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Renders the page for editing a transaction, prefilled with its current values.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction book lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let Some(transaction) = ledger.get_transaction(&transaction_id) else {
        tracing::debug!("Tried to edit missing transaction {transaction_id}");
        return Ok(get_404_not_found_response());
    };

    Ok(edit_transaction_view(transaction).into_response())
}
