//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    Error,
    finance::{
        TRANSACTION_COLUMNS, Transaction, TransactionForm, TransactionId, map_row_to_transaction,
    },
    stores::{TransactionStore, acquire},
};

/// Stores transactions in a SQLite database.
///
/// Ids are assigned by SQLite when a transaction is inserted.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = acquire(&self.connection)?;
        let mut statement = connection.prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" ORDER BY date DESC, id DESC"
        ))?;

        let transactions = statement
            .query_map([], map_row_to_transaction)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        acquire(&self.connection)?
            .query_row(
                &format!("SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = ?1"),
                params![id],
                map_row_to_transaction,
            )
            .optional()
            .map_err(Error::from)
    }

    /// Insert a new transaction into the database.
    ///
    /// # Errors
    ///
    /// Returns a [Error::SqlError] if an SQL related error occurred.
    fn create(&self, form: TransactionForm) -> Result<Transaction, Error> {
        let form = form.normalized();

        acquire(&self.connection)?
            .query_row(
                &format!(
                    "INSERT INTO \"transaction\" (description, amount, kind, date, category, wallet)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    RETURNING {TRANSACTION_COLUMNS}"
                ),
                params![
                    form.description,
                    form.amount,
                    form.kind,
                    form.date,
                    form.category,
                    form.wallet,
                ],
                map_row_to_transaction,
            )
            .map_err(Error::from)
    }

    fn update(
        &self,
        id: TransactionId,
        form: TransactionForm,
    ) -> Result<Option<Transaction>, Error> {
        let form = form.normalized();

        acquire(&self.connection)?
            .query_row(
                &format!(
                    "UPDATE \"transaction\"
                    SET \
                        description = ?1, \
                        amount = ?2, \
                        kind = ?3, \
                        date = ?4, \
                        category = ?5, \
                        wallet = ?6 \
                    WHERE id = ?7
                    RETURNING {TRANSACTION_COLUMNS}"
                ),
                params![
                    form.description,
                    form.amount,
                    form.kind,
                    form.date,
                    form.category,
                    form.wallet,
                    id,
                ],
                map_row_to_transaction,
            )
            .optional()
            .map_err(Error::from)
    }

    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        acquire(&self.connection)?
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", params![id])?;

        Ok(())
    }
}
