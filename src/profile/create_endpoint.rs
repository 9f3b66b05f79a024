//! Defines the endpoint for creating (or replacing) a profile.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::RecordState, profile::NewProfile};

/// Create the profile in the request body, replacing any profile with the same id.
///
/// The body is validated before the store is touched.
pub async fn create_profile_endpoint(
    State(state): State<RecordState>,
    Json(profile): Json<NewProfile>,
) -> Response {
    if let Err(error) = profile.validate() {
        tracing::debug!("Rejected profile {}: {error}", profile.id);
        return error.into_response();
    }

    let profile_id = profile.id.clone();

    match state.record_store.create_profile(profile) {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(error) => {
            tracing::error!("Could not create profile {profile_id}: {error}");
            error.into_response()
        }
    }
}
