//! Fixed catalog of presentation slides.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every slide id doubles as the DOM anchor of its `<section>` and as the
//! address-fragment value accepted by the hash router. Order is fixed at build
//! time; the navigator derives scroll offsets from `Slide::index`.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

/// Number of slides in the deck.
pub const SLIDE_COUNT: usize = 12;

/// Horizontal placement of a slide's content block inside its rotator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideAlign {
    Start,
    #[default]
    Center,
    End,
}

impl SlideAlign {
    /// Flexbox justification class for this alignment.
    pub fn justify_class(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
        }
    }
}

/// Optional full-bleed background behind a slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideAccent {
    #[default]
    Plain,
    Blue,
    Orange,
}

impl SlideAccent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Blue => "slide--blue",
            Self::Orange => "slide--orange",
        }
    }
}

/// One full-viewport panel in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Stable identifier used for the DOM `id` and for `#fragment` links.
    pub id: &'static str,
    /// Zero-based position in the deck.
    pub index: usize,
    pub align: SlideAlign,
    pub accent: SlideAccent,
}

const fn slide(id: &'static str, index: usize, align: SlideAlign, accent: SlideAccent) -> Slide {
    Slide { id, index, align, accent }
}

/// The deck, in presentation order.
pub const SLIDES: [Slide; SLIDE_COUNT] = [
    slide("title", 0, SlideAlign::Center, SlideAccent::Plain),
    slide("concept", 1, SlideAlign::Start, SlideAccent::Plain),
    slide("purpose", 2, SlideAlign::End, SlideAccent::Plain),
    slide("features", 3, SlideAlign::Center, SlideAccent::Plain),
    slide("post-sara", 4, SlideAlign::Center, SlideAccent::Blue),
    slide("post-jaiswal", 5, SlideAlign::Center, SlideAccent::Orange),
    slide("stats", 6, SlideAlign::Start, SlideAccent::Plain),
    slide("chat", 7, SlideAlign::Center, SlideAccent::Plain),
    slide("testimonial", 8, SlideAlign::End, SlideAccent::Plain),
    slide("security", 9, SlideAlign::Center, SlideAccent::Plain),
    slide("vision", 10, SlideAlign::Start, SlideAccent::Plain),
    slide("join", 11, SlideAlign::Center, SlideAccent::Plain),
];

/// Id of the final offer/signup slide targeted by every "join" control.
pub const OFFER_SLIDE_ID: &str = "join";

/// All slides in order.
pub fn all() -> &'static [Slide] {
    &SLIDES
}

/// Look up a slide by its exact id.
pub fn by_id(id: &str) -> Option<&'static Slide> {
    SLIDES.iter().find(|slide| slide.id == id)
}

pub fn by_index(index: usize) -> Option<&'static Slide> {
    SLIDES.get(index)
}

/// The final slide, which hosts the waitlist form or checkout embed.
pub fn offer() -> &'static Slide {
    &SLIDES[SLIDE_COUNT - 1]
}
