//! Defines the endpoint for updating a profile.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::RecordState,
    profile::{ProfileId, ProfilePatch},
};

/// Merge the fields in the request body into the profile for `profile_id`.
pub async fn edit_profile_endpoint(
    State(state): State<RecordState>,
    Path(profile_id): Path<ProfileId>,
    Json(patch): Json<ProfilePatch>,
) -> Response {
    if let Err(error) = patch.validate() {
        tracing::debug!("Rejected update to profile {profile_id}: {error}");
        return error.into_response();
    }

    match state.record_store.update_profile(&profile_id, patch) {
        Ok(Some(profile)) => Json(profile).into_response(),
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not update profile {profile_id}: {error}");
            error.into_response()
        }
    }
}
