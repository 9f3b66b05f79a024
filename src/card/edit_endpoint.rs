//! Defines the endpoint for updating a card.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::RecordState,
    card::{CardId, CardPatch},
};

/// Merge the fields in the request body into the card for `card_id`.
///
/// The card's id, owner and creation time are kept and `updatedAt` advances.
pub async fn edit_card_endpoint(
    State(state): State<RecordState>,
    Path(card_id): Path<CardId>,
    Json(patch): Json<CardPatch>,
) -> Response {
    if let Err(error) = patch.validate() {
        tracing::debug!("Rejected update to card {card_id}: {error}");
        return error.into_response();
    }

    match state.record_store.update_card(&card_id, patch) {
        Ok(Some(card)) => Json(card).into_response(),
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not update card {card_id}: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        app_state::RecordState,
        card::{Card, CardPatch, Design, state_with_owners, test_card},
        test_utils::{assert_status, parse_json},
    };

    use super::edit_card_endpoint;

    #[tokio::test]
    async fn merges_patch_into_card() {
        let state = state_with_owners(&["user-1"]);
        let original = state.record_store.create_card(test_card("user-1")).unwrap();
        let patch = CardPatch {
            title: Some("Directora de Arte".to_owned()),
            design: Some(Design::Purple),
            ..Default::default()
        };

        let response =
            edit_card_endpoint(State(state), Path("user-1".to_owned()), Json(patch)).await;

        assert_status(&response, StatusCode::OK);
        let got: Card = parse_json(response).await;
        assert_eq!(got.title, "Directora de Arte");
        assert_eq!(got.design, Design::Purple);
        assert_eq!(got.name, original.name);
        assert_eq!(got.phone, original.phone);
        assert_eq!(got.created_at, original.created_at);
        assert!(got.updated_at > original.updated_at);
    }

    #[tokio::test]
    async fn unknown_card_is_not_found() {
        let response = edit_card_endpoint(
            State(RecordState::in_memory()),
            Path("nobody".to_owned()),
            Json(CardPatch::default()),
        )
        .await;

        assert_status(&response, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let state = state_with_owners(&["user-1"]);
        state.record_store.create_card(test_card("user-1")).unwrap();
        let patch = CardPatch {
            email: Some("maria.example.com".to_owned()),
            ..Default::default()
        };

        let response =
            edit_card_endpoint(State(state), Path("user-1".to_owned()), Json(patch)).await;

        assert_status(&response, StatusCode::BAD_REQUEST);
    }
}
