//! Defines the endpoint for deleting a card.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::RecordState, card::CardId};

/// Delete the card for `card_id`.
///
/// Responds with 204 whether or not the card existed.
pub async fn delete_card_endpoint(
    State(state): State<RecordState>,
    Path(card_id): Path<CardId>,
) -> Response {
    match state.record_store.delete_card(&card_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::error!("Could not delete card {card_id}: {error}");
            error.into_response()
        }
    }
}
