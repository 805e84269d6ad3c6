//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own resume loading and caching so route handlers can stay
//! focused on protocol translation and rendering.

pub mod cache;
pub mod resume;
