//! Programmatic navigation to a slide inside the deck scroll container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every "jump" in the page (hash links, join buttons, the chat call-to-action)
//! funnels through `Navigator::scroll_to_slide`. The scroll axis is re-derived
//! from the orientation signal at the moment of each attempt, never cached.
//!
//! TRADE-OFFS
//! ==========
//! Navigation is best effort. Unknown ids are ignored, and a container that
//! has not been laid out yet gets exactly one deferred retry.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

use crate::state::orientation::{Layout, OrientationMode, OrientationState, ScrollAxis};
use crate::state::slides;

/// Delay before the single retry when the container is not measurable yet.
pub const RETRY_DELAY_MS: u32 = 50;

/// A requested scroll position along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    pub axis: ScrollAxis,
    pub offset: f64,
}

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Navigation {
    Scrolled(ScrollTarget),
    /// Container missing or zero-sized along the scroll axis.
    NotReady,
    UnknownSlide,
}

/// Something that can be scrolled slide by slide.
pub trait ScrollSurface {
    /// Size of one slide along `axis`, or `None` before layout.
    fn slide_extent(&self, axis: ScrollAxis) -> Option<f64>;

    /// Request a smooth scroll to `target`.
    fn scroll_to(&self, target: ScrollTarget);
}

/// Offset of slide `index` when each slide spans `extent` pixels.
#[allow(clippy::cast_precision_loss)]
pub fn target_for(index: usize, axis: ScrollAxis, extent: f64) -> ScrollTarget {
    ScrollTarget { axis, offset: index as f64 * extent }
}

/// Resolve `id` and scroll `surface` along the axis implied by `mode`.
pub fn navigate<S: ScrollSurface + ?Sized>(surface: &S, mode: OrientationMode, id: &str) -> Navigation {
    let Some(slide) = slides::by_id(id) else {
        log::debug!("scroll target {id:?} is not a slide");
        return Navigation::UnknownSlide;
    };
    let axis = Layout::for_mode(mode).scroll_axis;
    let Some(extent) = surface.slide_extent(axis).filter(|e| e.is_finite() && *e > 0.0) else {
        return Navigation::NotReady;
    };
    let target = target_for(slide.index, axis, extent);
    surface.scroll_to(target);
    Navigation::Scrolled(target)
}

/// Run `attempt`, and if the container was not ready hand one deferred
/// re-run to `schedule` along with `RETRY_DELAY_MS`.
///
/// Only `NotReady` is retried, and only once. Returns the first outcome.
pub fn with_single_retry<A, S>(attempt: A, schedule: S) -> Navigation
where
    A: Fn() -> Navigation + 'static,
    S: FnOnce(u32, Box<dyn FnOnce()>),
{
    let first = attempt();
    if first != Navigation::NotReady {
        return first;
    }
    schedule(
        RETRY_DELAY_MS,
        Box::new(move || {
            if attempt() == Navigation::NotReady {
                log::debug!("deck still not ready; dropping navigation");
            }
        }),
    );
    first
}

/// Deck container backed by the live DOM element.
#[cfg(feature = "hydrate")]
pub struct DomScrollSurface {
    el: Option<web_sys::HtmlElement>,
}

#[cfg(feature = "hydrate")]
impl DomScrollSurface {
    pub fn new(el: Option<web_sys::HtmlElement>) -> Self {
        Self { el }
    }
}

#[cfg(feature = "hydrate")]
impl ScrollSurface for DomScrollSurface {
    fn slide_extent(&self, axis: ScrollAxis) -> Option<f64> {
        let el = self.el.as_ref()?;
        let px = match axis {
            ScrollAxis::Horizontal => el.client_width(),
            ScrollAxis::Vertical => el.client_height(),
        };
        (px > 0).then(|| f64::from(px))
    }

    fn scroll_to(&self, target: ScrollTarget) {
        let Some(el) = self.el.as_ref() else {
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        match target.axis {
            ScrollAxis::Horizontal => opts.set_left(target.offset),
            ScrollAxis::Vertical => opts.set_top(target.offset),
        }
        el.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Scroll navigator provided via context to every jump control.
#[derive(Clone, Copy)]
pub struct Navigator {
    deck: NodeRef<leptos::html::Div>,
    orientation: RwSignal<OrientationState>,
}

impl Navigator {
    pub fn new(deck: NodeRef<leptos::html::Div>, orientation: RwSignal<OrientationState>) -> Self {
        Self { deck, orientation }
    }

    /// Smooth-scroll to the slide named `id`. Silent on unknown ids.
    pub fn scroll_to_slide(&self, id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let navigator = *self;
            let id = id.to_owned();
            with_single_retry(move || navigator.attempt(&id), |delay, retry| {
                gloo_timers::callback::Timeout::new(delay, retry).forget();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, self.deck, self.orientation);
        }
    }

    /// Jump to the final offer/signup slide.
    pub fn scroll_to_offer(&self) {
        self.scroll_to_slide(slides::OFFER_SLIDE_ID);
    }

    #[cfg(feature = "hydrate")]
    fn attempt(&self, id: &str) -> Navigation {
        let mode = self.orientation.get_untracked().mode;
        let el = self.deck.get_untracked().map(web_sys::HtmlElement::from);
        navigate(&DomScrollSurface::new(el), mode, id)
    }
}
