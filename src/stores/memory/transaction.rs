//! Implements an in-memory transaction store.

use std::sync::Mutex;

use crate::{
    Error,
    finance::{Transaction, TransactionForm, TransactionId},
    stores::{TransactionStore, acquire, transaction::sort_most_recent_first},
};

/// Keeps transactions in a list.
///
/// New transactions get the id one greater than the largest id in the store,
/// so ids of deleted transactions at the end of the list can be reused.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let mut transactions = acquire(&self.transactions)?.clone();
        sort_most_recent_first(&mut transactions);

        Ok(transactions)
    }

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        Ok(acquire(&self.transactions)?
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned())
    }

    fn create(&self, form: TransactionForm) -> Result<Transaction, Error> {
        let mut transactions = acquire(&self.transactions)?;

        let id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;
        let transaction = form.into_transaction(id);
        transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn update(
        &self,
        id: TransactionId,
        form: TransactionForm,
    ) -> Result<Option<Transaction>, Error> {
        let mut transactions = acquire(&self.transactions)?;

        let Some(transaction) = transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        else {
            return Ok(None);
        };

        *transaction = form.into_transaction(id);

        Ok(Some(transaction.clone()))
    }

    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        acquire(&self.transactions)?.retain(|transaction| transaction.id != id);

        Ok(())
    }
}
