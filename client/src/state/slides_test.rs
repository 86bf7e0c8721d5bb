use super::*;

use std::collections::HashSet;

#[test]
fn deck_has_twelve_slides() {
    assert_eq!(all().len(), SLIDE_COUNT);
    assert_eq!(SLIDE_COUNT, 12);
}

#[test]
fn slide_index_matches_position() {
    for (position, slide) in all().iter().enumerate() {
        assert_eq!(slide.index, position, "slide {} out of place", slide.id);
    }
}

#[test]
fn slide_ids_are_unique() {
    let ids = all().iter().map(|s| s.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), SLIDE_COUNT);
}

#[test]
fn slide_ids_are_fragment_safe() {
    for slide in all() {
        assert!(!slide.id.is_empty());
        assert!(
            slide.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "id {} is not kebab-case",
            slide.id
        );
    }
}

#[test]
fn by_id_finds_stats() {
    let slide = by_id("stats").unwrap();
    assert_eq!(slide.index, 6);
}

#[test]
fn by_id_is_case_sensitive() {
    assert!(by_id("Stats").is_none());
    assert!(by_id("stats ").is_none());
}

#[test]
fn by_id_unknown_is_none() {
    assert!(by_id("pricing").is_none());
    assert!(by_id("").is_none());
}

#[test]
fn by_index_bounds() {
    assert_eq!(by_index(0).map(|s| s.id), Some("title"));
    assert_eq!(by_index(SLIDE_COUNT - 1).map(|s| s.id), Some(OFFER_SLIDE_ID));
    assert!(by_index(SLIDE_COUNT).is_none());
}

#[test]
fn offer_is_last_slide() {
    let offer = offer();
    assert_eq!(offer.id, OFFER_SLIDE_ID);
    assert_eq!(offer.index, SLIDE_COUNT - 1);
}

#[test]
fn accent_and_align_classes() {
    assert_eq!(by_id("post-sara").unwrap().accent.class(), "slide--blue");
    assert_eq!(by_id("post-jaiswal").unwrap().accent.class(), "slide--orange");
    assert_eq!(by_id("title").unwrap().accent.class(), "");
    assert_eq!(by_id("concept").unwrap().align.justify_class(), "justify-start");
    assert_eq!(by_id("purpose").unwrap().align.justify_class(), "justify-end");
    assert_eq!(SlideAlign::default().justify_class(), "justify-center");
}
