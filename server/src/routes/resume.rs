//! Resume API route.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use axum::Json;
use axum::extract::State;

use profile::Profile;

use crate::services::resume::cached_profile;
use crate::state::AppState;

/// `GET /api/resume` — the structured profile as JSON.
pub async fn resume(State(state): State<AppState>) -> Json<Profile> {
    Json(cached_profile(&state.cache, &state.resume).await)
}
