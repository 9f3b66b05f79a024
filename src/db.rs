/*! Sets up the application's database and converts values that SQLite has no native type for. */

use rusqlite::{Connection, Row, Transaction as SqlTransaction, types::Type};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    Error, card::create_card_table, finance::create_transaction_table,
    profile::create_profile_table,
};

/// Turn on foreign key checks and create the tables for profiles, cards and
/// transactions if they do not exist.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Has no effect inside a transaction.
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_profile_table(&transaction)?;
    create_card_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Format a timestamp as RFC 3339 text for storage.
///
/// Timestamps are stored as text so that they keep their full precision and
/// read back equal to what was written.
pub(crate) fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, rusqlite::Error> {
    timestamp
        .format(&Rfc3339)
        .map_err(|error| rusqlite::Error::ToSqlConversionFailure(Box::new(error)))
}

/// Read an RFC 3339 timestamp from column `index` of `row`.
pub(crate) fn parse_timestamp(row: &Row, index: usize) -> Result<OffsetDateTime, rusqlite::Error> {
    let text: String = row.get(index)?;

    OffsetDateTime::parse(&text, &Rfc3339)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error)))
}
