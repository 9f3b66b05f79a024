//! Contains traits and implementations for objects that store profiles, cards and transactions.
//!
//! Each trait has an in-memory implementation, intended as a local fallback
//! for a single process, and a SQLite implementation.

mod memory;
mod record;
mod sqlite;
mod transaction;

use std::sync::{Mutex, MutexGuard};

pub use memory::{MemoryRecordStore, MemoryTransactionStore};
pub use record::RecordStore;
pub use sqlite::{SQLiteRecordStore, SQLiteTransactionStore};
pub use transaction::TransactionStore;

use crate::Error;

/// Acquire `mutex`, logging and converting a poisoned lock into [Error::DatabaseLockError].
fn acquire<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, Error> {
    mutex.lock().map_err(|error| {
        tracing::error!("could not acquire store lock: {error}");
        Error::DatabaseLockError
    })
}
