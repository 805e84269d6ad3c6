//! Portfolio page route.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use profile::Profile;

use crate::services::resume::cached_profile;
use crate::state::{AppState, PORTFOLIO_TEMPLATE};

/// Placeholder portrait used when no photo is bundled with the static assets.
const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/160";

#[derive(Serialize)]
struct PageData<'a> {
    resume: &'a Profile,
    photo_url: &'a str,
}

/// `GET /` — render the portfolio page from the cached profile.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let profile = cached_profile(&state.cache, &state.resume).await;
    let photo = photo_url(state.static_dir.as_path());
    let page = render_portfolio(&state.renderer, &profile, &photo).map_err(|error| {
        tracing::error!(%error, "portfolio render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Html(page))
}

/// `/static/photo.jpg` when the file is bundled, a placeholder otherwise.
fn photo_url(static_dir: &Path) -> String {
    if static_dir.join("photo.jpg").exists() {
        "/static/photo.jpg".to_owned()
    } else {
        PLACEHOLDER_PHOTO_URL.to_owned()
    }
}

fn render_portfolio(
    renderer: &Handlebars<'_>,
    profile: &Profile,
    photo_url: &str,
) -> Result<String, handlebars::RenderError> {
    renderer.render(PORTFOLIO_TEMPLATE, &PageData { resume: profile, photo_url })
}
