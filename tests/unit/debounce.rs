//! Debounce scheduler behavior on a paused tokio clock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rxsuggest::DebounceScheduler;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn test_rapid_keystrokes_collapse_into_one_call() {
    let scheduler = DebounceScheduler::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for query in ["p", "pa", "par", "para"] {
        let seen = Arc::clone(&seen);
        scheduler.schedule("search", ms(200), move || seen.lock().push(query));
        tokio::time::sleep(ms(60)).await;
    }
    tokio::time::sleep(ms(500)).await;

    assert_eq!(*seen.lock(), vec!["para"]);
    assert_eq!(scheduler.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_fires_no_earlier_than_delay() {
    let scheduler = DebounceScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&fired);
    scheduler.schedule(1u32, ms(500), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(ms(499)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(scheduler.is_pending(&1));

    tokio::time::sleep(ms(2)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!scheduler.is_pending(&1));
}

#[tokio::test(start_paused = true)]
async fn test_reschedule_restarts_the_window() {
    let scheduler = DebounceScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));

    for _ in 0..2 {
        let counter = Arc::clone(&fired);
        scheduler.schedule("k", ms(200), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(ms(150)).await;
    }
    // 300ms after the first schedule, but only 150ms after the second
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::sleep(ms(60)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_reports_whether_pending() {
    let scheduler: DebounceScheduler<&str> = DebounceScheduler::new();
    assert!(!scheduler.cancel(&"nothing"));

    scheduler.schedule("k", ms(100), || {});
    assert!(scheduler.cancel(&"k"));
    assert!(!scheduler.cancel(&"k"));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_all_clears_every_key() {
    let scheduler = DebounceScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));

    for key in ["a", "b", "c"] {
        let counter = Arc::clone(&fired);
        scheduler.schedule(key, ms(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert_eq!(scheduler.pending_count(), 3);

    scheduler.cancel_all();
    tokio::time::sleep(ms(500)).await;
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_async_action_runs_after_delay() {
    let scheduler = DebounceScheduler::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    scheduler.schedule_async("lookup", ms(200), move || async move {
        // stands in for the remote round trip
        tokio::time::sleep(ms(50)).await;
        sink.lock().push("done");
    });

    tokio::time::sleep(ms(220)).await;
    assert!(seen.lock().is_empty());
    assert!(!scheduler.is_pending(&"lookup"));

    tokio::time::sleep(ms(50)).await;
    assert_eq!(*seen.lock(), vec!["done"]);
}

#[tokio::test(start_paused = true)]
async fn test_deadline_tracks_latest_schedule() {
    let scheduler = DebounceScheduler::new();
    let start = tokio::time::Instant::now();

    scheduler.schedule(7u8, ms(500), || {});
    assert_eq!(scheduler.deadline(&7), Some(start + ms(500)));

    scheduler.schedule(7u8, ms(200), || {});
    assert_eq!(scheduler.deadline(&7), Some(start + ms(200)));
    assert_eq!(scheduler.deadline(&8), None);
}
