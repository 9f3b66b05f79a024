//! Defines the endpoint for reading a single card.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, app_state::RecordState, card::CardId};

/// Respond with the card for `card_id`, or 404 if there is none.
pub async fn get_card_endpoint(
    State(state): State<RecordState>,
    Path(card_id): Path<CardId>,
) -> Response {
    match state.record_store.get_card_by_id(&card_id) {
        Ok(Some(card)) => Json(card).into_response(),
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not get card {card_id}: {error}");
            error.into_response()
        }
    }
}
