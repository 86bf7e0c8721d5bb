//! Scroll container, slide track, and per-slide frames.
//!
//! ARCHITECTURE
//! ============
//! Slide content is authored once. `SlideDeck` and `SlideFrame` re-derive
//! every class and style from the orientation signal, so the same markup is
//! laid out side by side (portrait) or stacked and rotated (forced landscape).

use leptos::prelude::*;

use crate::state::orientation::OrientationState;
use crate::state::slides::Slide;

/// The scrolling container holding every slide.
#[component]
pub fn SlideDeck(deck_ref: NodeRef<leptos::html::Div>, children: Children) -> impl IntoView {
    let orientation = expect_context::<RwSignal<OrientationState>>();
    let layout = move || orientation.get().layout();

    view! {
        <div class=move || layout().container_class() node_ref=deck_ref>
            <div class="deck__track" style=move || layout().track_style()>
                {children()}
            </div>
        </div>
    }
}

/// One full-viewport slide, anchored by its stable id.
#[component]
pub fn SlideFrame(slide: &'static Slide, children: Children) -> impl IntoView {
    let orientation = expect_context::<RwSignal<OrientationState>>();
    let layout = move || orientation.get().layout();

    view! {
        <section
            id=slide.id
            class=move || format!("{} {}", layout().slide_class(), slide.accent.class())
            data-slide-index=slide.index.to_string()
        >
            <div class=move || {
                let layout = layout();
                format!(
                    "{} {} {}",
                    layout.rotator_class(),
                    slide.align.justify_class(),
                    layout.content_padding_class(),
                )
            }>{children()}</div>
        </section>
    }
}
