//! Defines the endpoint for reading a single profile.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, app_state::RecordState, profile::ProfileId};

/// Respond with the profile for `profile_id`, or 404 if there is none.
pub async fn get_profile_endpoint(
    State(state): State<RecordState>,
    Path(profile_id): Path<ProfileId>,
) -> Response {
    match state.record_store.get_profile_by_id(&profile_id) {
        Ok(Some(profile)) => Json(profile).into_response(),
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not get profile {profile_id}: {error}");
            error.into_response()
        }
    }
}
