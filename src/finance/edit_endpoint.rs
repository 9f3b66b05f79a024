//! Defines the endpoint for replacing a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::TransactionState,
    finance::{TransactionForm, TransactionId},
};

/// Replace every field of the transaction for `transaction_id` with the request body.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(form): Json<TransactionForm>,
) -> Response {
    if let Err(error) = form.validate() {
        tracing::debug!("Rejected update to transaction {transaction_id}: {error}");
        return error.into_response();
    }

    match state.transaction_store.update(transaction_id, form) {
        Ok(Some(transaction)) => Json(transaction).into_response(),
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
