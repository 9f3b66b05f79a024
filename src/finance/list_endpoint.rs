//! Defines the endpoint for listing transactions.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::app_state::TransactionState;

/// Respond with every transaction, most recent first.
pub async fn list_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    match state.transaction_store.get_all() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("Could not list transactions: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        app_state::TransactionState,
        finance::{Category, Transaction, TransactionForm, TransactionKind, Wallet},
        test_utils::{assert_status, parse_json},
    };

    use super::list_transactions_endpoint;

    #[tokio::test]
    async fn lists_most_recent_first() {
        let state = TransactionState::in_memory();
        for (description, date) in [
            ("Chapa", date!(2024 - 06 - 01)),
            ("Mercado", date!(2024 - 06 - 20)),
            ("Recarga", date!(2024 - 06 - 10)),
        ] {
            state
                .transaction_store
                .create(TransactionForm {
                    description: description.to_owned(),
                    amount: 50.0,
                    kind: TransactionKind::Expense,
                    date,
                    category: Category::Other,
                    wallet: Some(Wallet::Cash),
                })
                .unwrap();
        }

        let response = list_transactions_endpoint(State(state)).await;

        assert_status(&response, StatusCode::OK);
        let transactions: Vec<Transaction> = parse_json(response).await;
        let descriptions: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.description.as_str())
            .collect();
        assert_eq!(descriptions, ["Mercado", "Recarga", "Chapa"]);
    }

    #[tokio::test]
    async fn empty_store_gives_empty_list() {
        let response = list_transactions_endpoint(State(TransactionState::in_memory())).await;

        let transactions: Vec<Transaction> = parse_json(response).await;
        assert!(transactions.is_empty());
    }
}
