//! Scroll-triggered reveal engine for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On module
//! load it snapshots every element carrying the marker class, registers each
//! with a single `IntersectionObserver`, and adds the revealed class the
//! first time an element's visible intersection ratio reaches the threshold.
//! Reveals are one-way: scrolling an element back out of view never removes
//! the class, so the CSS transition fires exactly once per element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`watcher`] | Host-independent core: registration, observation batches, monotonic reveal set |
//! | [`dom`] | Browser host: `IntersectionObserver` wiring, class mutation, module entrypoint |
//! | [`consts`] | Threshold and class-token constants |

pub mod consts;
pub mod dom;
pub mod watcher;
