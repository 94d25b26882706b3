use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    transaction::{
        book::{Outcome, TransactionBook},
        core::TransactionId,
    },
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The user's transactions.
    pub ledger: Arc<Mutex<TransactionBook>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction, responds with an alert.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire transaction book lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    match ledger.delete_transaction(&transaction_id) {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Outcome::Changed => Alert::SuccessSimple {
            message: "Transaction deleted".to_owned(),
        }
        .into_response(),
        Outcome::NotFound => Error::DeleteMissingTransaction.into_alert_response(),
    }
}
