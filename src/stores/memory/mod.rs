//! Stores that keep their records in memory for the lifetime of the process.
//!
//! These stores are not shared between processes and lose their contents on
//! shutdown.

mod record;
mod transaction;

pub use record::MemoryRecordStore;
pub use transaction::MemoryTransactionStore;
