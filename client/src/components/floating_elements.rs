use leptos::prelude::*;

use crate::state::orientation::OrientationState;

/// Decorative drifting orbs behind the deck. Portrait only.
#[component]
pub fn FloatingElements() -> impl IntoView {
    let orientation = expect_context::<RwSignal<OrientationState>>();

    view! {
        <div class=move || orientation.get().layout().overlay_class() aria-hidden="true">
            <span class="floating-overlay__orb floating-overlay__orb--red"></span>
            <span class="floating-overlay__orb floating-overlay__orb--blue"></span>
            <span class="floating-overlay__orb floating-overlay__orb--orange"></span>
            <span class="floating-overlay__orb floating-overlay__orb--purple"></span>
        </div>
    }
}
