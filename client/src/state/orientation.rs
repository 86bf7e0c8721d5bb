//! Orientation mode and the layout parameters derived from it.
//!
//! DESIGN
//! ======
//! `OrientationMode` is the only mode bit in the deck. Every layout decision
//! (scroll axis, track direction, slide sizing, rotation, overlay visibility)
//! is a pure function of it via `Layout::for_mode`, so views never keep their
//! own copy and a toggle is observed by all readers on the next render.
//!
//! Forced landscape keeps the phone's natural vertical swipe but rotates each
//! slide's content 90 degrees with width and height swapped, so the same slide
//! markup reads as landscape on a portrait-held device.

#[cfg(test)]
#[path = "orientation_test.rs"]
mod orientation_test;

use super::slides::SLIDE_COUNT;

/// Presentation mode, flipped only by the explicit toggle control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationMode {
    #[default]
    Portrait,
    ForcedLandscape,
}

impl OrientationMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Portrait => Self::ForcedLandscape,
            Self::ForcedLandscape => Self::Portrait,
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Self::ForcedLandscape
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::ForcedLandscape => "landscape",
        }
    }
}

/// Shared orientation state provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrientationState {
    pub mode: OrientationMode,
}

impl OrientationState {
    /// Flip the mode in place. There is no intermediate transition state.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        log::debug!("orientation toggled to {}", self.mode.label());
    }

    pub fn layout(&self) -> Layout {
        Layout::for_mode(self.mode)
    }
}

/// Axis along which the deck container scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Flex direction of the slide track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackDirection {
    Row,
    Column,
}

/// Extent of the slide track along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackLength {
    /// Exactly this many viewport widths.
    ViewportWidths(usize),
    /// At least one viewport height, growing with content.
    AtLeastViewportHeight,
}

/// Every presentation parameter derived from one `OrientationMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub mode: OrientationMode,
    pub scroll_axis: ScrollAxis,
    pub track_direction: TrackDirection,
    pub track_length: TrackLength,
    /// Content block rotated 90 degrees with width/height swapped.
    pub content_rotated: bool,
    /// Decorative floating overlay visible and interactive.
    pub overlay_visible: bool,
    /// Fixed "join" header button rendered.
    pub header_join_visible: bool,
}

impl Layout {
    pub fn for_mode(mode: OrientationMode) -> Self {
        match mode {
            OrientationMode::Portrait => Self {
                mode,
                scroll_axis: ScrollAxis::Horizontal,
                track_direction: TrackDirection::Row,
                track_length: TrackLength::ViewportWidths(SLIDE_COUNT),
                content_rotated: false,
                overlay_visible: true,
                header_join_visible: true,
            },
            OrientationMode::ForcedLandscape => Self {
                mode,
                scroll_axis: ScrollAxis::Vertical,
                track_direction: TrackDirection::Column,
                track_length: TrackLength::AtLeastViewportHeight,
                content_rotated: true,
                overlay_visible: false,
                header_join_visible: false,
            },
        }
    }

    pub fn container_class(&self) -> &'static str {
        match self.scroll_axis {
            ScrollAxis::Horizontal => "deck deck--horizontal",
            ScrollAxis::Vertical => "deck deck--vertical",
        }
    }

    /// Inline style for the slide track.
    pub fn track_style(&self) -> String {
        let direction = match self.track_direction {
            TrackDirection::Row => "row",
            TrackDirection::Column => "column",
        };
        match self.track_length {
            TrackLength::ViewportWidths(count) => {
                format!("display: flex; flex-direction: {direction}; width: {}vw; height: 100%;", count * 100)
            }
            TrackLength::AtLeastViewportHeight => {
                format!("display: flex; flex-direction: {direction}; width: 100%; min-height: 100%;")
            }
        }
    }

    /// Outer per-slide box: always one full viewport.
    pub fn slide_class(&self) -> &'static str {
        match self.scroll_axis {
            ScrollAxis::Horizontal => "slide slide--snap-x",
            ScrollAxis::Vertical => "slide slide--snap-y",
        }
    }

    pub fn rotator_class(&self) -> &'static str {
        if self.content_rotated {
            "slide__rotator slide__rotator--rotated"
        } else {
            "slide__rotator"
        }
    }

    /// Content padding; in rotated mode horizontal padding becomes vertical on screen.
    pub fn content_padding_class(&self) -> &'static str {
        if self.content_rotated { "pad-all" } else { "pad-x" }
    }

    /// The toggle may hide on wide screens only while there is nothing to undo.
    pub fn toggle_class(&self) -> &'static str {
        if self.content_rotated {
            "orientation-toggle orientation-toggle--pinned"
        } else {
            "orientation-toggle"
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.overlay_visible {
            "floating-overlay"
        } else {
            "floating-overlay floating-overlay--hidden"
        }
    }
}
