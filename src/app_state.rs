//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    pagination::PaginationConfig,
    store::{SQLiteKeyValueStore, TransactionStore},
    transaction::TransactionBook,
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Africa/Algiers".
    pub local_timezone: String,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,

    /// The user's transactions along with the current page and filter.
    pub ledger: Arc<Mutex<TransactionBook>>,
}

impl AppState {
    /// Create a new [AppState] that saves transactions to a SQLite database.
    ///
    /// Any previously saved transactions are loaded from `db_connection`.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Africa/Algiers".
    ///
    /// # Errors
    /// Returns an error if the key-value table cannot be created.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        let store = TransactionStore::new(SQLiteKeyValueStore::new(db_connection)?);
        let book = TransactionBook::open(store, pagination_config.default_page_size);

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            pagination_config,
            ledger: Arc::new(Mutex::new(book)),
        })
    }
}
