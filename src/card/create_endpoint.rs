//! Defines the endpoint for creating (or replacing) a card.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::RecordState, card::NewCard};

/// Create the card in the request body, replacing any card with the same id.
pub async fn create_card_endpoint(
    State(state): State<RecordState>,
    Json(card): Json<NewCard>,
) -> Response {
    if let Err(error) = card.validate() {
        tracing::debug!("Rejected card {}: {error}", card.id);
        return error.into_response();
    }

    let card_id = card.id.clone();

    match state.record_store.create_card(card) {
        Ok(card) => (StatusCode::CREATED, Json(card)).into_response(),
        Err(error) => {
            tracing::error!("Could not create card {card_id}: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State, http::StatusCode};

    use crate::{
        Error, ErrorMessage,
        app_state::RecordState,
        card::{Card, Design, NewCard, state_with_owners, test_card},
        test_utils::{assert_status, parse_json},
    };

    use super::create_card_endpoint;

    #[tokio::test]
    async fn creates_card_with_default_owner() {
        let state = state_with_owners(&["user-1"]);

        let response = create_card_endpoint(State(state.clone()), Json(test_card("user-1"))).await;

        assert_status(&response, StatusCode::CREATED);
        let got: Card = parse_json(response).await;
        assert_eq!(got.user_id, "user-1");
        assert_eq!(got.design, Design::Blue);
        assert_eq!(got.created_at, got.updated_at);
        assert_eq!(state.record_store.get_card_by_id("user-1"), Ok(Some(got)));
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let state = state_with_owners(&["user-1"]);
        let card = NewCard {
            title: "".to_owned(),
            ..test_card("user-1")
        };

        let response = create_card_endpoint(State(state.clone()), Json(card)).await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        let message: ErrorMessage = parse_json(response).await;
        assert_eq!(message.message, Error::EmptyField("title").to_string());
        assert_eq!(state.record_store.get_card_by_id("user-1"), Ok(None));
    }

    #[tokio::test]
    async fn rejects_card_without_owner_profile() {
        let state = RecordState::in_memory();

        let response = create_card_endpoint(State(state.clone()), Json(test_card("user-1"))).await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        let message: ErrorMessage = parse_json(response).await;
        assert_eq!(
            message.message,
            Error::UnknownOwner("user-1".to_owned()).to_string()
        );
        assert_eq!(state.record_store.get_card_by_id("user-1"), Ok(None));
    }
}
