//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/cards/{card_id}', use [format_endpoint].

use std::fmt::Display;

/// The route for creating profiles.
pub const PROFILES: &str = "/profiles";
/// The route to access a single profile.
pub const PROFILE: &str = "/profiles/{profile_id}";
/// The route for creating cards.
pub const CARDS: &str = "/cards";
/// The route to access a single card.
pub const CARD: &str = "/cards/{card_id}";
/// The route for listing and searching every card.
pub const ADMIN_CARDS: &str = "/admin/cards";
/// The route to access transactions.
pub const TRANSACTIONS: &str = "/transacoes";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transacoes/{transaction_id}";
/// The route for the monthly finance summary.
pub const DASHBOARD: &str = "/dashboard";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/cards/{card_id}', '{card_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::PROFILES);
        assert_endpoint_is_valid_uri(endpoints::PROFILE);
        assert_endpoint_is_valid_uri(endpoints::CARDS);
        assert_endpoint_is_valid_uri(endpoints::CARD);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_CARDS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // String ids work the same way.
        let formatted_path = format_endpoint("/hello/{world}", "user-1");

        assert_eq!(formatted_path, "/hello/user-1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
