//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{
    AppState,
    card::{
        create_card_endpoint, delete_card_endpoint, edit_card_endpoint, get_card_endpoint,
        list_cards_endpoint,
    },
    endpoints,
    finance::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_dashboard_endpoint, list_transactions_endpoint,
    },
    logging::logging_middleware,
    not_found::get_404_not_found,
    profile::{create_profile_endpoint, edit_profile_endpoint, get_profile_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::PROFILES, post(create_profile_endpoint))
        .route(
            endpoints::PROFILE,
            get(get_profile_endpoint).put(edit_profile_endpoint),
        )
        .route(endpoints::CARDS, post(create_card_endpoint))
        .route(
            endpoints::CARD,
            get(get_card_endpoint)
                .put(edit_card_endpoint)
                .delete(delete_card_endpoint),
        )
        .route(endpoints::ADMIN_CARDS, get(list_cards_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::DASHBOARD, get(get_dashboard_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, ErrorMessage,
        card::Card,
        endpoints::{self, format_endpoint},
        finance::Transaction,
        profile::Profile,
    };

    use super::build_router;

    fn get_test_server(state: AppState) -> TestServer {
        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn get_memory_server() -> TestServer {
        get_test_server(AppState::in_memory())
    }

    fn get_sqlite_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        get_test_server(AppState::with_sqlite(connection).expect("Could not initialize database"))
    }

    async fn create_profile(server: &TestServer, id: &str, name: &str) {
        server
            .post(endpoints::PROFILES)
            .json(&json!({
                "id": id,
                "name": name,
                "email": format!("{id}@example.com"),
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    async fn check_profile_lifecycle(server: &TestServer) {
        server
            .post(endpoints::PROFILES)
            .json(&json!({
                "id": "user-1",
                "name": "Maria",
                "email": "maria@example.com",
                "avatarUrl": "https://cdn.example.com/maria.png"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let profile_path = format_endpoint(endpoints::PROFILE, "user-1");
        let profile = server.get(&profile_path).await.json::<Profile>();
        assert_eq!(profile.name, "Maria");
        assert_eq!(
            profile.avatar_url.as_deref(),
            Some("https://cdn.example.com/maria.png")
        );

        let updated = server
            .put(&profile_path)
            .json(&json!({"bio": "Designer", "avatarUrl": null}))
            .await
            .json::<Profile>();
        assert_eq!(updated.bio.as_deref(), Some("Designer"));
        assert_eq!(updated.avatar_url, None);
        assert_eq!(updated.created_at, profile.created_at);

        server
            .get(&format_endpoint(endpoints::PROFILE, "nobody"))
            .await
            .assert_status_not_found();
    }

    async fn check_card_lifecycle(server: &TestServer) {
        let card_path = format_endpoint(endpoints::CARD, "user-1");
        let new_card = json!({
            "id": "user-1",
            "name": "Maria Silva",
            "title": "Designer",
            "email": "maria@example.com",
            "website": "https://maria.example.com",
            "design": "green"
        });

        server
            .post(endpoints::CARDS)
            .json(&new_card)
            .await
            .assert_status_bad_request();

        create_profile(server, "user-1", "Maria Silva").await;
        let created = server.post(endpoints::CARDS).json(&new_card).await;
        created.assert_status(StatusCode::CREATED);
        let created = created.json::<Card>();

        let updated = server
            .put(&card_path)
            .json(&json!({"title": "Directora", "website": null}))
            .await
            .json::<Card>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Directora");
        assert_eq!(updated.website, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(server.get(&card_path).await.json::<Card>(), updated);

        server
            .delete(&card_path)
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete(&card_path)
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server.get(&card_path).await.assert_status_not_found();
    }

    async fn check_admin_search(server: &TestServer) {
        for (id, name) in [("user-1", "Maria Silva"), ("user-2", "João Machava")] {
            create_profile(server, id, name).await;
            server
                .post(endpoints::CARDS)
                .json(&json!({
                    "id": id,
                    "name": name,
                    "title": "Designer",
                    "email": format!("{id}@example.com"),
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let upper = server
            .get(endpoints::ADMIN_CARDS)
            .add_query_param("search", "MARIA")
            .await
            .json::<Vec<Card>>();
        let lower = server
            .get(endpoints::ADMIN_CARDS)
            .add_query_param("search", "maria")
            .await
            .json::<Vec<Card>>();
        let all = server.get(endpoints::ADMIN_CARDS).await.json::<Vec<Card>>();

        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(all.len(), 2);
    }

    async fn check_transactions_and_dashboard(server: &TestServer) {
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "descricao": "Salário",
                "valor": 7000,
                "tipo": "receita",
                "data": "2024-06-01",
                "categoria": "Salário",
                "carteira": "Banco"
            }))
            .await
            .assert_status(StatusCode::CREATED);
        let expense = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "description": "Mercado",
                "amount": 1200,
                "kind": "despesa",
                "date": "2024-06-03",
                "category": "Alimentação",
                "wallet": "M-Pesa"
            }))
            .await
            .json::<Transaction>();

        let transactions = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, expense.id);
        assert_eq!(transactions[1].wallet, None);

        let dashboard = server
            .get(endpoints::DASHBOARD)
            .add_query_param("month", 6)
            .add_query_param("year", 2024)
            .await
            .json::<Value>();
        assert_eq!(dashboard["summary"]["balance"], json!(5800.0));

        let transaction_path = format_endpoint(endpoints::TRANSACTION, expense.id);
        server
            .put(&transaction_path)
            .json(&json!({
                "description": "Mercado",
                "amount": 1000,
                "kind": "expense",
                "date": "2024-06-03",
                "category": "Alimentação"
            }))
            .await
            .assert_status_bad_request();
        let edited = server
            .put(&transaction_path)
            .json(&json!({
                "description": "Mercado",
                "amount": 1000,
                "kind": "expense",
                "date": "2024-06-03",
                "category": "Alimentação",
                "wallet": "Dinheiro"
            }))
            .await
            .json::<Transaction>();
        assert_eq!(edited.id, expense.id);
        assert_eq!(edited.amount, 1000.0);

        server
            .delete(&transaction_path)
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .put(&transaction_path)
            .json(&json!({
                "description": "Mercado",
                "amount": 1000,
                "kind": "expense",
                "date": "2024-06-03",
                "category": "Alimentação",
                "wallet": "Dinheiro"
            }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn profile_lifecycle_in_memory() {
        check_profile_lifecycle(&get_memory_server()).await;
    }

    #[tokio::test]
    async fn profile_lifecycle_on_sqlite() {
        check_profile_lifecycle(&get_sqlite_server()).await;
    }

    #[tokio::test]
    async fn card_lifecycle_in_memory() {
        check_card_lifecycle(&get_memory_server()).await;
    }

    #[tokio::test]
    async fn card_lifecycle_on_sqlite() {
        check_card_lifecycle(&get_sqlite_server()).await;
    }

    #[tokio::test]
    async fn admin_search_in_memory() {
        check_admin_search(&get_memory_server()).await;
    }

    #[tokio::test]
    async fn admin_search_on_sqlite() {
        check_admin_search(&get_sqlite_server()).await;
    }

    #[tokio::test]
    async fn transactions_and_dashboard_in_memory() {
        check_transactions_and_dashboard(&get_memory_server()).await;
    }

    #[tokio::test]
    async fn transactions_and_dashboard_on_sqlite() {
        check_transactions_and_dashboard(&get_sqlite_server()).await;
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let server = get_memory_server();

        let response = server
            .post(endpoints::PROFILES)
            .json(&json!({"id": "user-1", "name": "Maria", "email": "maria"}))
            .await;

        response.assert_status_bad_request();
        let message = response.json::<ErrorMessage>();
        assert!(message.message.contains("email"), "{}", message.message);
        server
            .get(&format_endpoint(endpoints::PROFILE, "user-1"))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let server = get_memory_server();

        let response = server.get("/nowhere").await;

        response.assert_status_not_found();
        let message = response.json::<ErrorMessage>();
        assert_eq!(message.message, "no route for /nowhere");
    }
}
