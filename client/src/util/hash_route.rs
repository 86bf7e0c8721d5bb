//! Address-fragment routing into the slide deck.
//!
//! One-way sync: the fragment drives the scroll position, never the reverse.
//! Manual scrolling does not rewrite `location.hash`, which keeps scroll
//! events from feeding back into navigation.

#[cfg(test)]
#[path = "hash_route_test.rs"]
mod hash_route_test;

use crate::state::slides::{self, Slide};
use crate::util::scroll::Navigator;

/// Resolve a raw fragment (with or without the leading `#`) to a slide.
///
/// Only an exact, case-sensitive id match counts; empty fragments resolve to
/// nothing so a bare page load keeps its current position.
pub fn parse_fragment(raw: &str) -> Option<&'static Slide> {
    let id = raw.strip_prefix('#').unwrap_or(raw);
    if id.is_empty() {
        return None;
    }
    slides::by_id(id)
}

/// Route `raw` through `scroll` if it names a slide.
pub fn route_fragment(raw: &str, scroll: impl FnOnce(&'static str)) -> Option<&'static Slide> {
    let slide = parse_fragment(raw)?;
    scroll(slide.id);
    Some(slide)
}

/// Read the current `location.hash`.
#[cfg(feature = "hydrate")]
fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Live `hashchange` subscription; dropping it removes the listener.
#[cfg(feature = "hydrate")]
pub type HashSubscription = HashListener;

/// Server render has no subscription to hold.
#[cfg(not(feature = "hydrate"))]
pub type HashSubscription = ();

#[cfg(feature = "hydrate")]
pub struct HashListener {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl Drop for HashListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .window
            .remove_event_listener_with_callback("hashchange", self.callback.as_ref().unchecked_ref());
    }
}

/// Navigate to the fragment present at load, then follow every `hashchange`.
///
/// The orientation is read inside `Navigator` at each event, so a toggle
/// between two hash changes is always honored.
#[cfg(feature = "hydrate")]
pub fn install(navigator: Navigator) -> Option<HashSubscription> {
    use wasm_bindgen::JsCast;

    route_fragment(&current_hash(), |id| navigator.scroll_to_slide(id));

    let window = web_sys::window()?;
    let callback = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let hash = current_hash();
        if route_fragment(&hash, |id| navigator.scroll_to_slide(id)).is_none() {
            log::debug!("ignoring fragment {hash:?}");
        }
    });
    window
        .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
        .ok()?;
    Some(HashListener { window, callback })
}

/// Server render has no location to follow.
#[cfg(not(feature = "hydrate"))]
pub fn install(navigator: Navigator) -> Option<HashSubscription> {
    let _ = navigator;
    None
}
