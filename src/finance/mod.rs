//! Income and expense tracking.
//!
//! Transactions are kept in a [TransactionStore](crate::TransactionStore) and
//! summarised per month by the aggregation functions re-exported here.

mod aggregation;
mod core;
mod create_endpoint;
mod dashboard_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use aggregation::{
    CURRENCY, CategoryTotal, MonthlyTotal, Period, Summary, categorize, filter_by_period,
    monthly_totals, summarize,
};
pub use core::{
    Category, TRANSACTION_COLUMNS, Transaction, TransactionForm, TransactionId, TransactionKind,
    UnknownLabel, Wallet, create_transaction_table, map_row_to_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use dashboard_endpoint::{Dashboard, DashboardQuery, get_dashboard_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
