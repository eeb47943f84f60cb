use std::time::{Duration, Instant};

use proppanel::debounce::{Debouncer, wait_until_due};

#[test]
fn test_take_due_waits_for_deadline() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_millis(300));

    assert!(!debouncer.schedule(1, start));
    assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(300)));
    assert_eq!(debouncer.take_due(start + Duration::from_millis(299)), None);
    assert_eq!(debouncer.take_due(start + Duration::from_millis(300)), Some(1));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_schedule_supersedes() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_millis(300));

    debouncer.schedule("a", start);
    assert!(debouncer.schedule("b", start + Duration::from_millis(100)));
    assert_eq!(debouncer.take_due(start + Duration::from_millis(300)), None);
    assert_eq!(debouncer.take_due(start + Duration::from_millis(400)), Some("b"));
}

#[test]
fn test_cancel_and_flush() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_secs(1));

    debouncer.schedule(1, start);
    assert_eq!(debouncer.cancel(), Some(1));
    assert_eq!(debouncer.flush(), None);

    debouncer.schedule(2, start);
    assert_eq!(debouncer.flush(), Some(2));
    assert_eq!(debouncer.deadline(), None);
}

#[test]
fn test_set_delay_applies_to_next_schedule() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_secs(1));
    debouncer.set_delay(Duration::from_millis(10));
    debouncer.schedule((), start);
    assert_eq!(debouncer.delay(), Duration::from_millis(10));
    assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(10)));
}

#[tokio::test]
async fn test_wait_until_due() {
    let mut debouncer = Debouncer::new(Duration::from_millis(20));
    debouncer.schedule("value", Instant::now());

    wait_until_due(&debouncer).await;
    assert_eq!(debouncer.take_due(Instant::now()), Some("value"));
}

#[tokio::test]
async fn test_wait_until_due_without_pending() {
    let debouncer: Debouncer<u32> = Debouncer::new(Duration::from_secs(60));
    tokio::time::timeout(Duration::from_millis(100), wait_until_due(&debouncer))
        .await
        .expect("nothing pending should not wait");
}

#[tokio::test]
async fn test_wait_until_deadline() {
    let deadline = Instant::now() + Duration::from_millis(10);
    proppanel::debounce::wait_until(Some(deadline)).await;
    assert!(Instant::now() >= deadline);
}
