//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::chat::ChatState;
use crate::state::orientation::OrientationState;
use crate::state::site::{SITE_CONFIG_ELEMENT_ID, SiteConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The site config is inlined as JSON so the hydrating client renders the
/// same join collaborator the server did.
pub fn shell(options: LeptosOptions, config: SiteConfig) -> impl IntoView {
    let config_json = config.to_embedded_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover"/>
                <script type="application/json" id=SITE_CONFIG_ELEMENT_ID inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let orientation = RwSignal::new(OrientationState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(orientation);
    provide_context(chat);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/aftertrials.css"/>
        <Title text="After Trials | Where evidence meets empathy"/>
        <Meta name="description" content="A social space built exclusively for doctors."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
