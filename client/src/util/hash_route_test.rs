use super::*;

use crate::state::slides::all;

#[test]
fn parse_fragment_accepts_leading_hash() {
    assert_eq!(parse_fragment("#stats").map(|s| s.index), Some(6));
    assert_eq!(parse_fragment("stats").map(|s| s.index), Some(6));
}

#[test]
fn parse_fragment_resolves_every_slide() {
    for slide in all() {
        let raw = format!("#{}", slide.id);
        assert_eq!(parse_fragment(&raw), Some(slide));
    }
}

#[test]
fn parse_fragment_empty_is_none() {
    assert!(parse_fragment("").is_none());
    assert!(parse_fragment("#").is_none());
}

#[test]
fn parse_fragment_requires_exact_match() {
    for raw in ["#STATS", "#stats/", "#stats?x=1", "##stats", "# stats", "#stat"] {
        assert!(parse_fragment(raw).is_none(), "matched {raw:?}");
    }
}

#[test]
fn route_fragment_scrolls_known_slide() {
    let mut scrolled = Vec::new();
    let slide = route_fragment("#stats", |id| scrolled.push(id));
    assert_eq!(slide.map(|s| s.id), Some("stats"));
    assert_eq!(scrolled, vec!["stats"]);
}

#[test]
fn route_fragment_unknown_never_scrolls() {
    let mut scrolled = Vec::new();
    for raw in ["#pricing", "", "#", "#Join"] {
        assert!(route_fragment(raw, |id| scrolled.push(id)).is_none());
    }
    assert!(scrolled.is_empty());
}

#[test]
fn route_fragment_same_hash_twice_scrolls_same_target() {
    let mut scrolled = Vec::new();
    route_fragment("#join", |id| scrolled.push(id));
    route_fragment("#join", |id| scrolled.push(id));
    assert_eq!(scrolled, vec!["join", "join"]);
}
