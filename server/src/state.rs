//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the resume loader, the in-memory profile cache, the compiled page
//! renderer, and the static asset directory. Clone is required by Axum — all
//! inner fields are Arc-wrapped or Clone.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::PathBuf;
use std::sync::Arc;

use handlebars::Handlebars;

use crate::services::cache::ProfileCache;
use crate::services::resume::ResumeLoader;

/// Name the portfolio page template is registered under.
pub const PORTFOLIO_TEMPLATE: &str = "portfolio";

/// Startup failure building the shared state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("portfolio template failed to compile: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub resume: ResumeLoader,
    pub cache: ProfileCache,
    pub renderer: Arc<Handlebars<'static>>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Build the state, compiling the embedded portfolio template.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Template`] if the embedded template fails to
    /// compile.
    pub fn new(resume: ResumeLoader, static_dir: PathBuf) -> Result<Self, StateError> {
        let mut renderer = Handlebars::new();
        renderer
            .register_template_string(PORTFOLIO_TEMPLATE, include_str!("../templates/portfolio.hbs"))
            .map_err(Box::new)?;
        Ok(Self {
            resume,
            cache: ProfileCache::from_env(),
            renderer: Arc::new(renderer),
            static_dir: Arc::new(static_dir),
        })
    }

    /// Build the state from the process environment.
    ///
    /// # Errors
    ///
    /// Propagates [`AppState::new`] failures.
    pub fn from_env() -> Result<Self, StateError> {
        Self::new(ResumeLoader::from_env(), static_dir())
    }
}

/// Resolve the static asset directory (stylesheet, photo, WASM package).
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../static"))
}

// =============================================================================
// TEST HELPERS
// =============================================================================
