//! Floating button that flips between portrait and forced-landscape decks.

use leptos::prelude::*;

use crate::state::orientation::OrientationState;

/// Always-visible orientation toggle in the bottom-right corner.
#[component]
pub fn OrientationToggle() -> impl IntoView {
    let orientation = expect_context::<RwSignal<OrientationState>>();
    let is_landscape = move || orientation.get().mode.is_landscape();

    view! {
        <button
            class=move || orientation.get().layout().toggle_class()
            type="button"
            aria-label=move || if is_landscape() { "Switch to portrait" } else { "Switch to landscape" }
            on:click=move |_| orientation.update(OrientationState::toggle)
        >
            {move || {
                if is_landscape() {
                    view! {
                        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M8 3v3a2 2 0 0 1-2 2H3m18 0h-3a2 2 0 0 1-2-2V3m0 18v-3a2 2 0 0 1 2-2h3M3 16h3a2 2 0 0 1 2 2v3"/>
                        </svg>
                    }
                        .into_any()
                } else {
                    view! {
                        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M15 3h6v6M9 21H3v-6M21 3l-7 7M3 21l7-7"/>
                        </svg>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
