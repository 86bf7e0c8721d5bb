//! Host element for the third-party payment button.

use leptos::prelude::*;

use crate::state::site::CheckoutConfig;
use crate::util::embed::MountGuard;

/// Container that mounts the vendor checkout script once per instance.
///
/// The guard lives as long as this component, so re-renders of the offer
/// slide never duplicate the widget.
#[component]
pub fn CheckoutEmbed(config: CheckoutConfig) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let guard = StoredValue::new_local(MountGuard::default());

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            let el = web_sys::HtmlElement::from(el);
            guard.with_value(|g| {
                g.run_once(|| {
                    if let Err(e) = crate::util::embed::mount_checkout(&el, &config) {
                        log::warn!("checkout embed failed to mount: {e:?}");
                    }
                });
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = guard;
    }

    view! {
        <div
            class="checkout-embed"
            node_ref=container
            data-button-id=config.button_id
        ></div>
    }
}
