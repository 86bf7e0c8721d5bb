use super::*;

#[test]
fn new_slot_is_empty() {
    let slot = TimerSlot::<&str>::default();
    assert!(!slot.is_pending());
    assert!(slot.is_current(0));
}

#[test]
fn begin_advances_generation() {
    let mut slot = TimerSlot::<&str>::default();
    let (first, _) = slot.begin();
    let (second, _) = slot.begin();
    assert!(second > first);
    assert!(slot.is_current(second));
    assert!(!slot.is_current(first));
}

#[test]
fn current_install_displaces_previous_handle() {
    let mut slot = TimerSlot::default();
    let (generation, _) = slot.begin();
    assert_eq!(slot.install(generation, "thinking"), None);
    assert_eq!(slot.install(generation, "revealing"), Some("thinking"));
    assert_eq!(slot.release(generation), Some("revealing"));
    assert!(!slot.is_pending());
}

#[test]
fn superseded_install_is_rejected() {
    let mut slot = TimerSlot::default();
    let (old, _) = slot.begin();
    let (current, _) = slot.begin();
    assert_eq!(slot.install(current, "current"), None);

    assert_eq!(slot.install(old, "late"), Some("late"));
    assert_eq!(slot.release(old), None);
    assert_eq!(slot.release(current), Some("current"));
}

#[test]
fn cancel_invalidates_pending_installs() {
    let mut slot = TimerSlot::default();
    let (generation, _) = slot.begin();
    assert_eq!(slot.install(generation, "thinking"), None);

    assert_eq!(slot.cancel(), Some("thinking"));
    assert!(!slot.is_current(generation));
    assert_eq!(slot.install(generation, "revealing"), Some("revealing"));
    assert!(!slot.is_pending());
    assert_eq!(slot.release(generation), None);
}

#[test]
fn begin_hands_back_leftover_handle() {
    let mut slot = TimerSlot::default();
    let (generation, _) = slot.begin();
    assert_eq!(slot.install(generation, "revealing"), None);

    let (next, leftover) = slot.begin();
    assert_eq!(leftover, Some("revealing"));
    assert_eq!(slot.release(generation), None);
    assert!(slot.is_current(next));
}
