use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use time::Date;

use crate::{
    store::{SQLiteKeyValueStore, TransactionStore},
    transaction::{Transaction, TransactionBook, TransactionKind},
};

/// A transaction book backed by an in-memory database.
pub(crate) fn get_test_ledger() -> Arc<Mutex<TransactionBook>> {
    let connection = Connection::open_in_memory().expect("Could not open in-memory database");
    let store = TransactionStore::new(
        SQLiteKeyValueStore::new(connection).expect("Could not create key-value table"),
    );

    Arc::new(Mutex::new(TransactionBook::open(store, 15)))
}

#[track_caller]
pub(crate) fn must_add_transaction(
    ledger: &Arc<Mutex<TransactionBook>>,
    amount: f64,
    kind: TransactionKind,
    description: &str,
    date: Date,
) -> Transaction {
    ledger
        .lock()
        .unwrap()
        .add_transaction(amount, kind, description, date)
        .expect("Could not add test transaction")
        .clone()
}
