//! The in-memory transaction list and the view state that goes with it.

use time::Date;

use crate::{
    Error,
    pagination::{Page, page_count, paginate},
    store::{Snapshot, TransactionStore},
    transaction::{
        aggregation::{self, BalancePoint},
        core::{Amount, Description, Transaction, TransactionId, TransactionKind},
        filter::TransactionFilter,
    },
};

/// The result of an edit or delete.
///
/// Targeting an unknown ID changes nothing and is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    NotFound,
}

/// Owns the user's transactions, the current page and the active filter.
///
/// Every change to the list is written through to the [TransactionStore].
/// A failed write is logged and the in-memory change is kept.
#[derive(Debug)]
pub struct TransactionBook {
    transactions: Vec<Transaction>,
    store: TransactionStore,
    page_size: u64,
    current_page: u64,
    filter: TransactionFilter,
}

impl TransactionBook {
    /// Load the saved transactions from `store`, starting empty if there are none
    /// or they cannot be read.
    pub fn open(store: TransactionStore, page_size: u64) -> Self {
        let snapshot = store.load();

        match &snapshot {
            Snapshot::Saved(transactions) => {
                tracing::info!("Loaded {} saved transactions", transactions.len())
            }
            Snapshot::Missing => tracing::info!("No saved transactions, starting empty"),
            Snapshot::Discarded(reason) => {
                tracing::warn!("Discarding saved transactions: {reason}")
            }
        }

        Self {
            transactions: snapshot.into_transactions(),
            store,
            page_size,
            current_page: 1,
            filter: TransactionFilter::default(),
        }
    }

    /// All transactions, most recently added first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| &transaction.id == id)
    }

    /// The transactions that pass the active filter.
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.filter.apply(&self.transactions)
    }

    /// The current page of the filtered transactions.
    pub fn paginated_transactions(&self) -> Page<&Transaction> {
        paginate(
            &self.filtered_transactions(),
            self.current_page,
            self.page_size,
        )
    }

    pub fn balance(&self) -> f64 {
        aggregation::balance(&self.transactions)
    }

    pub fn total_income(&self) -> f64 {
        aggregation::total_income(&self.transactions)
    }

    pub fn total_expense(&self) -> f64 {
        aggregation::total_expense(&self.transactions)
    }

    pub fn balance_series(&self) -> Vec<BalancePoint> {
        aggregation::balance_series(&self.transactions)
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// The number of pages the filtered transactions span.
    pub fn total_pages(&self) -> u64 {
        page_count(self.filtered_transactions().len(), self.page_size)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    /// Record a new transaction at the front of the list.
    ///
    /// # Errors
    /// Returns [Error::NonPositiveAmount] or [Error::EmptyDescription] for invalid input,
    /// in which case the list is left untouched.
    pub fn add_transaction(
        &mut self,
        amount: f64,
        kind: TransactionKind,
        description: &str,
        date: Date,
    ) -> Result<&Transaction, Error> {
        let transaction = Transaction::new(
            Amount::new(amount)?,
            kind,
            Description::new(description)?,
            date,
        );

        tracing::debug!("Adding transaction {}", transaction.id);
        self.transactions.insert(0, transaction);
        self.persist();

        Ok(&self.transactions[0])
    }

    /// Replace every field of the transaction `id` except its ID and creation time.
    ///
    /// # Errors
    /// Returns [Error::NonPositiveAmount] or [Error::EmptyDescription] for invalid input.
    pub fn edit_transaction(
        &mut self,
        id: &TransactionId,
        amount: f64,
        kind: TransactionKind,
        description: &str,
        date: Date,
    ) -> Result<Outcome, Error> {
        let amount = Amount::new(amount)?;
        let description = Description::new(description)?;

        let Some(transaction) = self
            .transactions
            .iter_mut()
            .find(|transaction| &transaction.id == id)
        else {
            tracing::debug!("Tried to edit missing transaction {id}");
            return Ok(Outcome::NotFound);
        };

        transaction.amount = amount;
        transaction.kind = kind;
        transaction.description = description;
        transaction.date = date;
        self.persist();
        self.keep_current_page_in_range();

        Ok(Outcome::Changed)
    }

    /// Remove the transaction `id`.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> Outcome {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| &transaction.id != id);

        if self.transactions.len() == count_before {
            tracing::debug!("Tried to delete missing transaction {id}");
            return Outcome::NotFound;
        }

        self.persist();
        self.keep_current_page_in_range();

        Outcome::Changed
    }

    /// Select the page shown by [TransactionBook::paginated_transactions].
    ///
    /// Pages past the end are allowed and show nothing. Deleting or editing a
    /// transaction moves such a page back to the last page.
    pub fn set_current_page(&mut self, page: u64) {
        self.current_page = page;
    }

    /// Replace the active filter, going back to the first page if it changed.
    ///
    /// Returns whether the filter changed.
    pub fn set_filter(&mut self, filter: TransactionFilter) -> bool {
        if filter == self.filter {
            return false;
        }

        self.filter = filter;
        self.current_page = 1;

        true
    }

    /// Step back to the last page when a mutation shrinks the filtered list
    /// below the current page.
    fn keep_current_page_in_range(&mut self) {
        let last_page = self.total_pages().max(1);

        if self.current_page > last_page {
            tracing::debug!(
                "Current page {} is past the end, moving to page {last_page}",
                self.current_page
            );
            self.current_page = last_page;
        }
    }

    fn persist(&self) {
        if let Err(error) = self.store.save(&self.transactions) {
            tracing::error!("Could not save transactions: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        pagination::PageStatus,
        store::{KeyValueStore, SQLiteKeyValueStore, TRANSACTIONS_KEY, TransactionStore},
        transaction::{
            core::{TransactionId, TransactionKind},
            filter::{KindFilter, TransactionFilter},
        },
    };

    use super::{Outcome, TransactionBook};

    fn get_test_book() -> TransactionBook {
        let connection = Connection::open_in_memory().unwrap();
        let store = TransactionStore::new(SQLiteKeyValueStore::new(connection).unwrap());
        TransactionBook::open(store, 15)
    }

    /// Keeps every value in memory and can be told to fail writes.
    #[derive(Debug, Clone, Default)]
    struct MemoryStore {
        value: Arc<Mutex<Option<String>>>,
        fail_writes: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, _key: &str) -> Result<Option<String>, Error> {
            Ok(self.value.lock().unwrap().clone())
        }

        fn set(&self, _key: &str, value: &str) -> Result<(), Error> {
            if self.fail_writes {
                return Err(Error::JSONSerializationError("disk full".to_owned()));
            }

            *self.value.lock().unwrap() = Some(value.to_owned());
            Ok(())
        }
    }

    #[test]
    fn add_prepends_and_assigns_id() {
        let mut book = get_test_book();

        book.add_transaction(1.0, TransactionKind::Income, "First", date!(2024 - 01 - 01))
            .unwrap();
        let second_id = book
            .add_transaction(2.0, TransactionKind::Expense, "Second", date!(2024 - 01 - 01))
            .unwrap()
            .id
            .clone();

        assert_eq!(book.transactions().len(), 2);
        assert_eq!(book.transactions()[0].id, second_id);
        assert_eq!(book.transactions()[1].description.as_ref(), "First");
    }

    #[test]
    fn add_rejects_invalid_input() {
        let mut book = get_test_book();

        let zero_amount = book
            .add_transaction(0.0, TransactionKind::Income, "Nothing", date!(2024 - 01 - 01))
            .err();
        let blank_description = book
            .add_transaction(5.0, TransactionKind::Income, "  ", date!(2024 - 01 - 01))
            .err();

        assert!(matches!(zero_amount, Some(Error::NonPositiveAmount(_))));
        assert_eq!(blank_description, Some(Error::EmptyDescription));
        assert!(book.transactions().is_empty());
    }

    #[test]
    fn add_then_delete_restores_list() {
        let mut book = get_test_book();
        book.add_transaction(10.0, TransactionKind::Income, "Keep", date!(2024 - 01 - 01))
            .unwrap();
        let before = book.transactions().to_vec();

        let id = book
            .add_transaction(3.0, TransactionKind::Expense, "Remove", date!(2024 - 01 - 03))
            .unwrap()
            .id
            .clone();
        let outcome = book.delete_transaction(&id);

        assert_eq!(outcome, Outcome::Changed);
        assert_eq!(book.transactions(), before.as_slice());
    }

    #[test]
    fn edit_changes_only_target_and_keeps_identity() {
        let mut book = get_test_book();
        book.add_transaction(10.0, TransactionKind::Income, "Other", date!(2024 - 01 - 01))
            .unwrap();
        let target = book
            .add_transaction(20.0, TransactionKind::Income, "Target", date!(2024 - 01 - 02))
            .unwrap()
            .clone();
        let other_before = book.transactions()[1].clone();

        let outcome = book
            .edit_transaction(
                &target.id,
                42.5,
                TransactionKind::Expense,
                "Edited",
                date!(2024 - 02 - 01),
            )
            .unwrap();

        assert_eq!(outcome, Outcome::Changed);
        let edited = book.get_transaction(&target.id).unwrap();
        assert_eq!(edited.id, target.id);
        assert_eq!(edited.created_at, target.created_at);
        assert_eq!(edited.amount.value(), 42.5);
        assert_eq!(edited.kind, TransactionKind::Expense);
        assert_eq!(edited.description.as_ref(), "Edited");
        assert_eq!(edited.date, date!(2024 - 02 - 01));
        assert_eq!(book.transactions()[1], other_before);
    }

    #[test]
    fn edit_rejects_non_positive_amount() {
        let mut book = get_test_book();
        let id = book
            .add_transaction(20.0, TransactionKind::Income, "Target", date!(2024 - 01 - 02))
            .unwrap()
            .id
            .clone();

        let result = book.edit_transaction(
            &id,
            -1.0,
            TransactionKind::Income,
            "Target",
            date!(2024 - 01 - 02),
        );

        assert!(matches!(result, Err(Error::NonPositiveAmount(_))));
        assert_eq!(book.transactions()[0].amount.value(), 20.0);
    }

    #[test]
    fn unknown_id_is_not_found_and_changes_nothing() {
        let mut book = get_test_book();
        book.add_transaction(1.0, TransactionKind::Income, "Only", date!(2024 - 01 - 01))
            .unwrap();
        let before = book.transactions().to_vec();
        let missing = TransactionId::new_unchecked("missing");

        let edit = book
            .edit_transaction(
                &missing,
                5.0,
                TransactionKind::Expense,
                "Nope",
                date!(2024 - 01 - 01),
            )
            .unwrap();
        let delete = book.delete_transaction(&missing);

        assert_eq!(edit, Outcome::NotFound);
        assert_eq!(delete, Outcome::NotFound);
        assert_eq!(book.transactions(), before.as_slice());
    }

    #[test]
    fn mutations_are_written_through() {
        let kv_store = MemoryStore::default();
        let mut book = TransactionBook::open(TransactionStore::new(kv_store.clone()), 15);

        book.add_transaction(7.0, TransactionKind::Income, "Saved", date!(2024 - 01 - 01))
            .unwrap();

        let reopened = TransactionBook::open(TransactionStore::new(kv_store.clone()), 15);
        assert_eq!(reopened.transactions(), book.transactions());
        assert!(kv_store.get(TRANSACTIONS_KEY).unwrap().is_some());
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let kv_store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut book = TransactionBook::open(TransactionStore::new(kv_store), 15);

        let result =
            book.add_transaction(7.0, TransactionKind::Income, "Unsaved", date!(2024 - 01 - 01));

        assert!(result.is_ok());
        assert_eq!(book.transactions().len(), 1);
    }

    #[test]
    fn opens_empty_when_saved_data_is_corrupt() {
        let kv_store = MemoryStore::default();
        kv_store.set(TRANSACTIONS_KEY, "[1, 2, 3]").unwrap();

        let book = TransactionBook::open(TransactionStore::new(kv_store), 15);

        assert!(book.transactions().is_empty());
        assert_eq!(book.balance(), 0.0);
    }

    #[test]
    fn sixteen_transactions_span_two_pages() {
        let mut book = get_test_book();
        for i in 1..=16 {
            book.add_transaction(
                i as f64,
                TransactionKind::Income,
                &format!("Transaction {i}"),
                date!(2024 - 01 - 01),
            )
            .unwrap();
        }

        assert_eq!(book.total_pages(), 2);
        assert_eq!(book.paginated_transactions().items.len(), 15);

        book.set_current_page(2);
        let second = book.paginated_transactions();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].description.as_ref(), "Transaction 1");

        book.set_current_page(3);
        let third = book.paginated_transactions();
        assert!(third.items.is_empty());
        assert_eq!(third.status, PageStatus::OutOfRange);
    }

    #[test]
    fn deleting_last_row_of_last_page_moves_back_a_page() {
        let mut book = get_test_book();
        for i in 1..=16 {
            book.add_transaction(1.0, TransactionKind::Income, &format!("Row {i}"), date!(2024 - 01 - 01))
                .unwrap();
        }
        book.set_current_page(2);
        let oldest = book.transactions()[15].id.clone();

        book.delete_transaction(&oldest);

        assert_eq!(book.current_page(), 1);
        let page = book.paginated_transactions();
        assert_eq!(page.items.len(), 15);
        assert_eq!(page.status, PageStatus::Items);
    }

    #[test]
    fn editing_out_of_the_filter_moves_back_a_page() {
        let mut book = get_test_book();
        for i in 1..=16 {
            book.add_transaction(1.0, TransactionKind::Expense, &format!("Tea {i}"), date!(2024 - 01 - 01))
                .unwrap();
        }
        book.set_filter(TransactionFilter::new("tea", KindFilter::All));
        book.set_current_page(2);
        let oldest = book.transactions()[15].id.clone();

        book.edit_transaction(&oldest, 1.0, TransactionKind::Expense, "Coffee", date!(2024 - 01 - 01))
            .unwrap();

        assert_eq!(book.current_page(), 1);
    }

    #[test]
    fn delete_keeps_page_that_still_has_rows() {
        let mut book = get_test_book();
        for i in 1..=17 {
            book.add_transaction(1.0, TransactionKind::Income, &format!("Row {i}"), date!(2024 - 01 - 01))
                .unwrap();
        }
        book.set_current_page(2);
        let oldest = book.transactions()[16].id.clone();

        book.delete_transaction(&oldest);

        assert_eq!(book.current_page(), 2);
    }

    #[test]
    fn changing_filter_resets_page() {
        let mut book = get_test_book();
        for i in 1..=20 {
            book.add_transaction(1.0, TransactionKind::Expense, &format!("Coffee {i}"), date!(2024 - 01 - 01))
                .unwrap();
        }
        book.set_current_page(2);

        let changed = book.set_filter(TransactionFilter::new("coffee", KindFilter::All));

        assert!(changed);
        assert_eq!(book.current_page(), 1);

        book.set_current_page(2);
        let changed_kind = book.set_filter(TransactionFilter::new("coffee", KindFilter::Expense));
        assert!(changed_kind);
        assert_eq!(book.current_page(), 1);
    }

    #[test]
    fn same_filter_keeps_page() {
        let mut book = get_test_book();
        book.set_current_page(2);

        let changed = book.set_filter(TransactionFilter::default());

        assert!(!changed);
        assert_eq!(book.current_page(), 2);
    }

    #[test]
    fn pages_are_taken_from_filtered_transactions() {
        let mut book = get_test_book();
        book.add_transaction(1.0, TransactionKind::Income, "Salary", date!(2024 - 01 - 01))
            .unwrap();
        book.add_transaction(2.0, TransactionKind::Expense, "Coffee", date!(2024 - 01 - 02))
            .unwrap();

        book.set_filter(TransactionFilter::new("", KindFilter::Income));
        let page = book.paginated_transactions();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].description.as_ref(), "Salary");
        assert_eq!(book.total_pages(), 1);
        // Totals always cover every transaction.
        assert_eq!(book.balance(), -1.0);
    }
}
