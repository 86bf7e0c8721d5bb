//! "join" controls that jump to the offer slide.

use leptos::prelude::*;

use crate::state::orientation::OrientationState;
use crate::util::scroll::Navigator;

/// Underlined text button that scrolls to the offer slide from anywhere.
#[component]
pub fn JoinLink(#[prop(into)] label: String, #[prop(optional)] variant: &'static str) -> impl IntoView {
    let navigator = expect_context::<Navigator>();

    view! {
        <button class=format!("join-link {variant}") type="button" on:click=move |_| navigator.scroll_to_offer()>
            <span class="join-link__label">{label}</span>
            <span class="join-link__underline"></span>
        </button>
    }
}

/// Fixed header "join" button; hidden while the deck is rotated.
#[component]
pub fn HeaderJoin() -> impl IntoView {
    let orientation = expect_context::<RwSignal<OrientationState>>();

    view! {
        <Show when=move || orientation.get().layout().header_join_visible>
            <JoinLink label="join" variant="join-link--header"/>
        </Show>
    }
}
