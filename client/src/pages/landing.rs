//! The single landing page: twelve slides in one orientation-aware deck.
//!
//! ARCHITECTURE
//! ============
//! The page owns the deck `NodeRef`, builds the `Navigator` every jump control
//! uses, and installs the hash router once the deck is mounted. Slide bodies
//! are static copy; only the chat and offer slides carry behavior.

use leptos::prelude::*;

use crate::components::checkout_embed::CheckoutEmbed;
use crate::components::demo_chat::DemoChat;
use crate::components::floating_elements::FloatingElements;
use crate::components::join_button::HeaderJoin;
use crate::components::orientation_toggle::OrientationToggle;
use crate::components::slide_deck::{SlideDeck, SlideFrame};
use crate::components::waitlist_form::WaitlistForm;
use crate::state::orientation::OrientationState;
use crate::state::site::{JoinTarget, SiteConfig};
use crate::state::slides::{SLIDES, Slide};
use crate::util::hash_route::{self, HashSubscription};
use crate::util::scroll::Navigator;

#[component]
pub fn LandingPage() -> impl IntoView {
    let orientation = expect_context::<RwSignal<OrientationState>>();
    let deck_ref = NodeRef::<leptos::html::Div>::new();
    let navigator = Navigator::new(deck_ref, orientation);
    provide_context(navigator);

    // Fragment -> scroll only. Nothing here ever writes location.hash.
    let hash_listener = StoredValue::new_local(None::<HashSubscription>);
    Effect::new(move || {
        if deck_ref.get().is_none() || hash_listener.with_value(Option::is_some) {
            return;
        }
        hash_listener.set_value(hash_route::install(navigator));
    });
    on_cleanup(move || hash_listener.dispose());

    view! {
        <div class="landing">
            <OrientationToggle/>
            <FloatingElements/>
            <HeaderJoin/>

            <SlideDeck deck_ref=deck_ref>
                <TitleSlide/>
                <ConceptSlide/>
                <PurposeSlide/>
                <FeaturesSlide/>
                <PostSlide
                    slide=&SLIDES[4]
                    author="@dr.sara"
                    name="Dr. Sara Williamson"
                    avatar="https://res.cloudinary.com/dn1hjjczy/image/upload/v1760897932/divaris-shirichena-EVcTjiaq4NE-unsplash_1_1_defsog.png"
                    body="Starting a small research 🤔 on post-COVID fatigue. Looking for fellow doctors to collaborate and share insights. DM if interested."
                    stamp="12:30 PM · September 21, 2025"
                />
                <PostSlide
                    slide=&SLIDES[5]
                    author="@dr.jaiswal"
                    name="Dr. Ankesh Jaiswal"
                    avatar="https://res.cloudinary.com/dn1hjjczy/image/upload/v1760897393/ashkan-forouzani-DPEPYPBZpB8-unsplash_gpugad.jpg"
                    body="“Love when patients say ‘Google said it’s cancer.’ Cool, tell Google to sign your prescription then.”💁🏻‍♂️"
                    stamp="2:43 PM · October 11, 2025"
                />
                <StatsSlide/>
                <SlideFrame slide=&SLIDES[7]>
                    <div class="slide__content slide__content--narrow">
                        <DemoChat/>
                    </div>
                </SlideFrame>
                <TestimonialSlide/>
                <RecognitionSlide/>
                <VisionSlide/>
                <OfferSlide/>
            </SlideDeck>
        </div>
    }
}

#[component]
fn TitleSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[0]>
            <div class="slide__content slide__content--center">
                <h1 class="brand-title">"After"</h1>
                <h1 class="brand-title gradient-text">"Trials"</h1>
                <p class="eyebrow">"Where evidence meets empathy"</p>
            </div>
        </SlideFrame>
    }
}

#[component]
fn ConceptSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[1]>
            <div class="slide__content">
                <h2 class="statement">
                    "Where doctors " <span class="gradient-text">"connect"</span> ", "
                    <span class="gradient-text">"share"</span> ", "
                    <span class="gradient-text">"evolve"</span> "."
                </h2>
                <p class="slide__hint">"Scroll horizontally →"</p>
            </div>
        </SlideFrame>
    }
}

#[component]
fn PurposeSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[2]>
            <div class="slide__content slide__content--right">
                <p class="lead">
                    "A new kind of " <span class="underlined">"social space"</span>
                    ", built exclusively for doctors."
                </p>
                <p class="body-copy">
                    "Beyond the clinic. Beyond the trials. A sanctuary where medical professionals share insights, "
                    "find community, and grow together in an environment that understands the weight of their work."
                </p>
            </div>
        </SlideFrame>
    }
}

#[component]
fn FeaturesSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[3]>
            <div class="slide__content slide__content--center">
                <p class="eyebrow">"What makes us different"</p>
                <h2 class="statement">
                    <span class="gradient-text">"Verified"</span> " professionals. "
                    <span class="gradient-text">"Protected"</span> " conversations. "
                    <span class="gradient-text">"Purposeful"</span> " connections."
                </h2>
                <div class="feature-grid">
                    <div class="feature-grid__item">
                        <h3>"No Noise"</h3>
                        <p>"Only verified medical professionals. No distractions. Pure signal."</p>
                    </div>
                    <div class="feature-grid__item">
                        <h3>"Full Privacy"</h3>
                        <p>"HIPAA-compliant infrastructure. Your conversations, your control."</p>
                    </div>
                    <div class="feature-grid__item">
                        <h3>"Real Impact"</h3>
                        <p>"Share cases, discuss research, build meaningful professional bonds."</p>
                    </div>
                </div>
            </div>
        </SlideFrame>
    }
}

#[component]
fn PostSlide(
    slide: &'static Slide,
    author: &'static str,
    name: &'static str,
    avatar: &'static str,
    body: &'static str,
    stamp: &'static str,
) -> impl IntoView {
    view! {
        <SlideFrame slide=slide>
            <div class="slide__content slide__content--narrow">
                <p class="eyebrow eyebrow--light">"Post by " {author}</p>
                <article class="post-card">
                    <header class="post-card__header">
                        <img class="post-card__avatar" src=avatar alt=name/>
                        <div>
                            <p class="post-card__name">{name}</p>
                            <p class="post-card__handle">{author}</p>
                        </div>
                    </header>
                    <p class="post-card__body">{body}</p>
                    <footer class="post-card__meta">
                        <span>{stamp}</span>
                    </footer>
                </article>
            </div>
        </SlideFrame>
    }
}

#[component]
fn StatsSlide() -> impl IntoView {
    let stats = [
        ("5,000+", "Doctors on the waitlist"),
        ("24", "Medical specialties represented"),
        ("40+", "Countries eager to join"),
    ];

    view! {
        <SlideFrame slide=&SLIDES[6]>
            <div class="slide__content">
                <p class="eyebrow">"Growing community"</p>
                <div class="stats">
                    {stats
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stats__item">
                                    <h3 class="stats__value gradient-text">{value}</h3>
                                    <p class="stats__label">{label}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </SlideFrame>
    }
}

#[component]
fn TestimonialSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[8]>
            <div class="slide__content slide__content--right">
                <blockquote class="quote">
                    "\"Finally, a space where I can be both "
                    <span class="gradient-text">"human"</span> " and "
                    <span class="gradient-text">"professional"</span> ".\""
                </blockquote>
                <p class="quote__by">"Dr. Sarah Chen"</p>
                <p class="quote__role">"Cardiothoracic Surgeon, Boston"</p>
                <p class="eyebrow">"Beta tester since launch"</p>
            </div>
        </SlideFrame>
    }
}

#[component]
fn RecognitionSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[9]>
            <div class="slide__content slide__content--center">
                <h2 class="statement">"Turn your cases into " <span class="gradient-text">"recognition"</span></h2>
                <p class="body-copy">
                    "Every post is reviewed by fellow doctors and backed by peer approval. "
                    "Build visibility, credibility, and a name that stands out in your specialty."
                </p>
            </div>
        </SlideFrame>
    }
}

#[component]
fn VisionSlide() -> impl IntoView {
    view! {
        <SlideFrame slide=&SLIDES[10]>
            <div class="slide__content">
                <p class="eyebrow">"Our vision"</p>
                <h2 class="statement">
                    "Medicine is " <span class="gradient-text">"lonely"</span> "." <br/> "It doesn't have to be."
                </h2>
                <p class="body-copy">
                    "Every doctor carries stories that can't be shared at dinner parties. Decisions that keep them up "
                    "at night. Victories that deserve to be celebrated by people who truly understand."
                    <br/> <br/> "After Trials is that place."
                </p>
            </div>
        </SlideFrame>
    }
}

/// Final slide hosting whichever join collaborator the site is configured for.
#[component]
fn OfferSlide() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let join = match config.join_target() {
        JoinTarget::Waitlist { action } => view! { <WaitlistForm action=action/> }.into_any(),
        JoinTarget::Checkout(checkout) => view! { <CheckoutEmbed config=checkout/> }.into_any(),
    };

    view! {
        <SlideFrame slide=&SLIDES[11]>
            <div class="slide__content slide__content--center">
                <h2 class="statement">"Join the " <span class="gradient-text">"movement"</span></h2>
                <p class="eyebrow">"Early access opening soon"</p>
                <div class="offer__join">{join}</div>
                <p class="slide__footer">"After Trials © 2025"</p>
            </div>
        </SlideFrame>
    }
}
