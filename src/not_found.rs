//! The response for requests that do not match any route.

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::ErrorMessage;

/// Respond with 404 and a JSON message naming the unknown path.
pub async fn get_404_not_found(uri: Uri) -> Response {
    tracing::debug!("No route for {uri}");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage::new(format!("no route for {}", uri.path()))),
    )
        .into_response()
}
