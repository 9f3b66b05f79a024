//! Stores backed by a shared SQLite connection.
//!
//! Both stores expect the tables created by [initialize](crate::db::initialize).

mod record;
mod transaction;

pub use record::SQLiteRecordStore;
pub use transaction::SQLiteTransactionStore;
