//! Lead-capture form placed on the offer slide.
//!
//! Validation and submission belong to the form's backend; the page only
//! renders it and never inspects the outcome.

use leptos::prelude::*;

#[component]
pub fn WaitlistForm(#[prop(into)] action: String) -> impl IntoView {
    view! {
        <form class="waitlist-form" action=action method="post">
            <input
                class="waitlist-form__input"
                type="email"
                name="email"
                autocomplete="email"
                placeholder="your@hospital.org"
                required=true
            />
            <button class="waitlist-form__submit" type="submit">"join waitlist"</button>
        </form>
    }
}
