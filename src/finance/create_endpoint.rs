//! Defines the endpoint for creating a transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::TransactionState, finance::TransactionForm};

/// Store the transaction in the request body and respond with it, including its new id.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(form): Json<TransactionForm>,
) -> Response {
    if let Err(error) = form.validate() {
        tracing::debug!("Rejected transaction: {error}");
        return error.into_response();
    }

    match state.transaction_store.create(form) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            error.into_response()
        }
    }
}
