//! Search and kind filtering for the transactions table.

use serde::{Deserialize, Serialize};

use crate::transaction::core::{Transaction, TransactionKind};

/// Which kinds of transactions to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Income => "income",
            KindFilter::Expense => "expense",
        }
    }

    fn accepts(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// The search text and kind used to narrow down the transactions table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    search: String,
    /// `search` lowercased once for matching.
    needle: String,
    kind: KindFilter,
}

impl TransactionFilter {
    pub fn new(search: &str, kind: KindFilter) -> Self {
        Self {
            search: search.to_owned(),
            needle: search.to_lowercase(),
            kind,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn kind(&self) -> KindFilter {
        self.kind
    }

    /// Whether the filter hides anything.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.kind != KindFilter::All
    }

    /// Case-insensitive substring match on the description plus the kind check.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.kind.accepts(transaction.kind)
            && transaction
                .description
                .as_ref()
                .to_lowercase()
                .contains(&self.needle)
    }

    /// The transactions that match, in their original order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .collect()
    }
}
