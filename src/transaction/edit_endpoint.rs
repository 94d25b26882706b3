use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    transaction::{
        book::{Outcome, TransactionBook},
        core::TransactionId,
        form::TransactionForm,
    },
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The user's transactions.
    pub ledger: Arc<Mutex<TransactionBook>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for replacing the fields of a transaction, redirects to
/// the transactions view on success.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire transaction book lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let outcome = ledger.edit_transaction(
        &transaction_id,
        form.amount,
        form.kind,
        &form.description,
        form.date,
    );

    match outcome {
        Ok(Outcome::Changed) => (
            HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(Outcome::NotFound) => Error::UpdateMissingTransaction.into_alert_response(),
        Err(error) => {
            tracing::warn!("Could not update transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
