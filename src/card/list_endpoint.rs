//! Defines the admin endpoint for listing and searching cards.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::app_state::RecordState;

/// The query parameters for the card list.
#[derive(Debug, Default, Deserialize)]
pub struct CardListQuery {
    /// Only list cards whose name or email contain this text, ignoring case.
    pub search: Option<String>,
}

/// Respond with every card in creation order, optionally filtered by `search`.
///
/// An empty or blank search term lists every card.
pub async fn list_cards_endpoint(
    State(state): State<RecordState>,
    Query(query): Query<CardListQuery>,
) -> Response {
    let cards = match query.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => state.record_store.search_cards(term),
        _ => state.record_store.get_all_cards(),
    };

    match cards {
        Ok(cards) => Json(cards).into_response(),
        Err(error) => {
            tracing::error!("Could not list cards: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };

    use crate::{
        app_state::RecordState,
        card::{Card, NewCard, state_with_owners, test_card},
        test_utils::{assert_status, parse_json},
    };

    use super::{CardListQuery, list_cards_endpoint};

    fn state_with_cards() -> RecordState {
        let state = state_with_owners(&["user-1", "user-2"]);
        state.record_store.create_card(test_card("user-1")).unwrap();
        state
            .record_store
            .create_card(NewCard {
                name: "João Machava".to_owned(),
                email: "joao@example.com".to_owned(),
                ..test_card("user-2")
            })
            .unwrap();

        state
    }

    #[tokio::test]
    async fn lists_every_card_without_search() {
        let response =
            list_cards_endpoint(State(state_with_cards()), Query(CardListQuery::default())).await;

        assert_status(&response, StatusCode::OK);
        let cards: Vec<Card> = parse_json(response).await;
        let ids: Vec<_> = cards.iter().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, ["user-1", "user-2"]);
    }

    #[tokio::test]
    async fn filters_by_search_term() {
        let query = CardListQuery {
            search: Some("JOÃO".to_owned()),
        };

        let response = list_cards_endpoint(State(state_with_cards()), Query(query)).await;

        assert_status(&response, StatusCode::OK);
        let cards: Vec<Card> = parse_json(response).await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "user-2");
    }

    #[tokio::test]
    async fn blank_search_lists_every_card() {
        let query = CardListQuery {
            search: Some("  ".to_owned()),
        };

        let response = list_cards_endpoint(State(state_with_cards()), Query(query)).await;

        let cards: Vec<Card> = parse_json(response).await;
        assert_eq!(cards.len(), 2);
    }
}
