//! Cardbook is a web service for digital business cards and a personal
//! finance tracker.
//!
//! This library provides a JSON REST API over two groups of records:
//! - profiles and business cards, kept in a [RecordStore], and
//! - income and expense transactions, kept in a [TransactionStore] and
//!   summarised by the [finance] aggregation functions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod card;
mod db;
mod endpoints;
pub mod finance;
mod logging;
mod not_found;
mod profile;
mod routing;
mod stores;
#[cfg(test)]
mod test_utils;
mod validation;

pub use app_state::{AppState, RecordState, TransactionState};
pub use card::{Card, CardId, CardPatch, Design, NewCard};
pub use db::initialize as initialize_db;
pub use endpoints::format_endpoint;
pub use finance::{Transaction, TransactionForm, TransactionId};
pub use logging::{LOG_BODY_LENGTH_LIMIT, MAX_REQUEST_BODY_BYTES, logging_middleware};
pub use profile::{NewProfile, Profile, ProfileId, ProfilePatch};
pub use routing::build_router;
pub use stores::{
    MemoryRecordStore, MemoryTransactionStore, RecordStore, SQLiteRecordStore,
    SQLiteTransactionStore, TransactionStore,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Store reads report absence with `None`, so this error is mostly
    /// produced by the HTTP handlers and by rows that vanish mid-update.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A required text field was empty or only whitespace.
    ///
    /// The string is the name of the field as it appears in the JSON body.
    #[error("the field \"{0}\" cannot be empty")]
    EmptyField(&'static str),

    /// The email address is not syntactically valid.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// The bio is longer than 150 characters.
    #[error("the bio is {0} characters long, the maximum is 150")]
    BioTooLong(usize),

    /// A transaction amount was zero or negative.
    ///
    /// Whether money was earned or spent is encoded by the transaction kind,
    /// so amounts are always positive.
    #[error("the amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    /// An expense was submitted without the wallet it was paid from.
    #[error("expenses must specify a wallet")]
    MissingWallet,

    /// The month in a period was outside 1-12.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidPeriod(u8),

    /// A card named an owner that has no profile.
    ///
    /// Every card belongs to a profile, so the profile must be created first.
    #[error("there is no profile for the card owner \"{0}\"")]
    UnknownOwner(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The request body could not be read, or was larger than
    /// [MAX_REQUEST_BODY_BYTES] bytes.
    #[error(
        "could not read the request body, bodies are limited to {} bytes",
        MAX_REQUEST_BODY_BYTES
    )]
    UnreadableBody,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to the client alongside a non-success status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// A human readable description of what went wrong.
    pub message: String,
}

impl ErrorMessage {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::EmptyField(_)
            | Error::InvalidEmail(_)
            | Error::BioTooLong(_)
            | Error::NonPositiveAmount(_)
            | Error::MissingWallet
            | Error::InvalidPeriod(_)
            | Error::UnknownOwner(_)
            | Error::UnreadableBody => StatusCode::BAD_REQUEST,
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage::new(
                        "An unexpected error occurred, check the server logs for more details.",
                    )),
                )
                    .into_response();
            }
        };

        (status, Json(ErrorMessage::new(self.to_string()))).into_response()
    }
}
