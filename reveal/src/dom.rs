//! Browser host for the reveal watcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `IntersectionObserver`, the static element snapshot taken at
//! mount, and the callback closure lifetime. The [`WatcherCore`] decides
//! which targets reveal; this module translates observer entries into
//! observations and applies the resulting class mutations. The watcher runs
//! for the full page lifetime and is never torn down, so the module
//! entrypoint leaks it deliberately.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::watcher::{Observation, RevealConfig, WatcherCore};

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// DOM-side reveal watcher: one observer over the elements that carried the
/// marker class when the document became ready.
pub struct DomRevealWatcher {
    core: Rc<RefCell<WatcherCore>>,
    elements: Rc<Vec<Element>>,
    _observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl DomRevealWatcher {
    /// Snapshot the marked elements, build the observer, and register every
    /// element with it.
    ///
    /// The query is a static snapshot: elements inserted into the document
    /// afterwards are never watched.
    ///
    /// # Errors
    ///
    /// Returns the underlying JS error if the selector query or observer
    /// construction fails (for example in a host environment without
    /// `IntersectionObserver`).
    pub fn mount(document: &Document, config: RevealConfig) -> Result<Self, JsValue> {
        let selector = format!(".{}", config.marker_class);
        let nodes = document.query_selector_all(&selector)?;

        let mut snapshot: Vec<Element> = Vec::with_capacity(nodes.length() as usize);
        let mut core = WatcherCore::new(config.clone());
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            core.register();
            snapshot.push(element);
        }

        let core = Rc::new(RefCell::new(core));
        let elements = Rc::new(snapshot);
        let revealed_class = config.revealed_class.clone();

        let callback: EntryCallback = {
            let core = Rc::clone(&core);
            let elements = Rc::clone(&elements);
            Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let mut batch = Vec::with_capacity(entries.length() as usize);
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if let Some(id) = elements.iter().position(|element| *element == target) {
                        batch.push(Observation { target: id, is_intersecting: entry.is_intersecting() });
                    }
                }
                for id in core.borrow_mut().observe(&batch) {
                    let _ = elements[id].class_list().add_1(&revealed_class);
                }
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in elements.iter() {
            observer.observe(element);
        }

        Ok(Self { core, elements, _observer: observer, _callback: callback })
    }

    /// Number of elements in the mount snapshot.
    #[must_use]
    pub fn watched(&self) -> usize {
        self.elements.len()
    }

    /// Whether the element at `index` (snapshot order) has been revealed.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.core.borrow().is_revealed(index)
    }
}

// =============================================================================
// MODULE ENTRYPOINT
// =============================================================================

/// Mount the watcher once the document structure is ready.
///
/// Runs automatically when the WASM module is instantiated. If the document
/// is still parsing, mounting is deferred behind a one-shot `DOMContentLoaded`
/// listener; otherwise it happens immediately.
///
/// # Errors
///
/// Returns the underlying JS error if no document is available or the
/// listener cannot be installed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("reveal: no document in this environment"))?;

    if document.ready_state() == "loading" {
        let deferred = document.clone();
        let once = Closure::once(move || mount_for_page(&deferred));
        document.add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())?;
        // One-shot listener for a one-shot event; never removed.
        once.forget();
    } else {
        mount_for_page(&document);
    }
    Ok(())
}

/// Mount with the page defaults and leak the watcher for the page lifetime.
fn mount_for_page(document: &Document) {
    match DomRevealWatcher::mount(document, RevealConfig::default()) {
        Ok(watcher) => std::mem::forget(watcher),
        Err(err) => web_sys::console::error_1(&err),
    }
}
