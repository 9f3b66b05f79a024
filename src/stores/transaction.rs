//! Defines the transaction store trait.

use crate::{
    Error,
    finance::{Transaction, TransactionForm, TransactionId},
};

/// Handles the creation, retrieval, update and deletion of transactions.
pub trait TransactionStore: Send + Sync {
    /// Get every transaction, most recent date first.
    ///
    /// Transactions on the same date are ordered by decreasing id.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Get the transaction with the given `id`.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Create a transaction and assign it a new id.
    fn create(&self, form: TransactionForm) -> Result<Transaction, Error>;

    /// Replace every field of the transaction with the given `id`.
    ///
    /// Returns `Ok(None)` if there is no such transaction.
    fn update(&self, id: TransactionId, form: TransactionForm)
    -> Result<Option<Transaction>, Error>;

    /// Delete the transaction with the given `id`.
    ///
    /// Deleting a transaction that does not exist is not an error.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;
}

/// Sort `transactions` the way [TransactionStore::get_all] returns them.
pub(super) fn sort_most_recent_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}
