//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    stores::{
        MemoryRecordStore, MemoryTransactionStore, RecordStore, SQLiteRecordStore,
        SQLiteTransactionStore, TransactionStore,
    },
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The store for profiles and cards.
    pub record_store: Arc<dyn RecordStore>,

    /// The store for finance transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] from a pair of stores.
    pub fn new(
        record_store: impl RecordStore + 'static,
        transaction_store: impl TransactionStore + 'static,
    ) -> Self {
        Self {
            record_store: Arc::new(record_store),
            transaction_store: Arc::new(transaction_store),
        }
    }

    /// Create a new [AppState] that keeps everything in memory.
    ///
    /// Nothing survives a restart.
    pub fn in_memory() -> Self {
        Self::new(MemoryRecordStore::new(), MemoryTransactionStore::new())
    }

    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// Both stores share the one connection.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn with_sqlite(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::new(
            SQLiteRecordStore::new(connection.clone()),
            SQLiteTransactionStore::new(connection),
        ))
    }
}

/// The state needed by the profile and card endpoints.
#[derive(Clone)]
pub struct RecordState {
    /// The store for profiles and cards.
    pub record_store: Arc<dyn RecordStore>,
}

impl FromRef<AppState> for RecordState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_store: state.record_store.clone(),
        }
    }
}

/// The state needed by the transaction and dashboard endpoints.
#[derive(Clone)]
pub struct TransactionState {
    /// The store for finance transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

#[cfg(test)]
impl RecordState {
    pub(crate) fn in_memory() -> Self {
        Self {
            record_store: Arc::new(MemoryRecordStore::new()),
        }
    }
}

#[cfg(test)]
impl TransactionState {
    pub(crate) fn in_memory() -> Self {
        Self {
            transaction_store: Arc::new(MemoryTransactionStore::new()),
        }
    }
}
