//! Persists the transaction list as one JSON document in a key-value table.
//!
//! The whole list lives under a single key and is rewritten on every change.

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, transaction::Transaction};

/// The key the serialized transaction list is stored under.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// A durable map from string keys to string values.
pub trait KeyValueStore: Send + std::fmt::Debug {
    /// Get the value stored under `key`, or `None` if nothing has been stored.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// A [KeyValueStore] backed by a SQLite table.
#[derive(Debug)]
pub struct SQLiteKeyValueStore {
    connection: Connection,
}

impl SQLiteKeyValueStore {
    /// Create a store that takes ownership of `connection`, creating the table if needed.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_key_value_table(&connection)?;

        Ok(Self { connection })
    }
}

impl KeyValueStore for SQLiteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::from)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;

        Ok(())
    }
}

/// Create the key-value table if it does not exist.
pub fn create_key_value_table(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// What was found when loading the saved transactions.
#[derive(Debug, PartialEq)]
pub enum Snapshot {
    /// A list was saved and could be read.
    Saved(Vec<Transaction>),
    /// Nothing has been saved yet.
    Missing,
    /// Something was saved but it could not be read, the reason is kept for logging.
    Discarded(String),
}

impl Snapshot {
    /// The loaded transactions, treating missing or unreadable data as an empty list.
    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            Snapshot::Saved(transactions) => transactions,
            Snapshot::Missing | Snapshot::Discarded(_) => Vec::new(),
        }
    }
}

/// Reads and writes the transaction list through a [KeyValueStore].
#[derive(Debug)]
pub struct TransactionStore {
    store: Box<dyn KeyValueStore>,
}

impl TransactionStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Load the saved transactions.
    ///
    /// This never fails, problems with the stored data are reported through
    /// [Snapshot::Discarded].
    pub fn load(&self) -> Snapshot {
        let text = match self.store.get(TRANSACTIONS_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Snapshot::Missing,
            Err(error) => return Snapshot::Discarded(format!("could not read store: {error}")),
        };

        match serde_json::from_str(&text) {
            Ok(transactions) => Snapshot::Saved(transactions),
            Err(error) => Snapshot::Discarded(format!("could not parse saved transactions: {error}")),
        }
    }

    /// Replace the saved transactions with `transactions`.
    ///
    /// # Errors
    /// Returns an error if the list cannot be serialized or the store cannot be written.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let text = serde_json::to_string(transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.store.set(TRANSACTIONS_KEY, &text)
    }
}
