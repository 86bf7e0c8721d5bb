use super::*;

#[test]
fn guard_starts_unmounted() {
    assert!(!MountGuard::default().is_mounted());
}

#[test]
fn guard_runs_mount_exactly_once() {
    let guard = MountGuard::default();
    let mut runs = 0;
    assert!(guard.run_once(|| runs += 1));
    assert!(!guard.run_once(|| runs += 1));
    assert_eq!(runs, 1);
    assert!(guard.is_mounted());
}

#[test]
fn guard_blocks_retry_after_unverified_attempt() {
    let guard = MountGuard::default();
    let mut attempts = 0;
    guard.run_once(|| {
        attempts += 1;
        // vendor script failed to load; nothing to report back
    });
    for _ in 0..3 {
        guard.run_once(|| attempts += 1);
    }
    assert_eq!(attempts, 1);
}

#[test]
fn guards_are_independent_per_container() {
    let first = MountGuard::default();
    let second = MountGuard::default();
    let mut runs = 0;
    first.run_once(|| runs += 1);
    second.run_once(|| runs += 1);
    first.run_once(|| runs += 1);
    assert_eq!(runs, 2);
}
