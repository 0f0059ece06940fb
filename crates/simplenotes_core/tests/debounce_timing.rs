use simplenotes_core::{debounce, NotesConfig, SearchInput};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[tokio::test(start_paused = true)]
async fn only_last_call_fires_after_quiet_window() {
    let fired: Arc<Mutex<Vec<(&'static str, Duration)>>> = Arc::new(Mutex::new(Vec::new()));
    let start = Instant::now();
    let sink = Arc::clone(&fired);
    let mut debounced = debounce(Duration::from_millis(200), move |value: &'static str| {
        sink.lock().unwrap().push((value, start.elapsed()));
    })
    .unwrap();

    debounced.call("first");
    sleep(Duration::from_millis(50)).await;
    debounced.call("second");
    assert!(debounced.is_pending());

    sleep(Duration::from_millis(300)).await;

    let fired = fired.lock().unwrap();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].0, "second");
    assert!(fired[0].1 >= Duration::from_millis(250));
    assert!(fired[0].1 < Duration::from_millis(260));
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn cancel_discards_pending_call() {
    let fired = Arc::new(Mutex::new(0_u32));
    let sink = Arc::clone(&fired);
    let mut debounced = debounce(Duration::from_millis(200), move |_: ()| {
        *sink.lock().unwrap() += 1;
    })
    .unwrap();

    debounced.call(());
    assert!(debounced.cancel());
    assert!(!debounced.cancel());

    sleep(Duration::from_millis(500)).await;
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_debouncer_discards_pending_call() {
    let fired = Arc::new(Mutex::new(0_u32));
    let sink = Arc::clone(&fired);
    let mut debounced = debounce(Duration::from_millis(100), move |_: ()| {
        *sink.lock().unwrap() += 1;
    })
    .unwrap();

    debounced.call(());
    drop(debounced);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn calls_spaced_beyond_window_each_fire() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);
    let mut debounced = debounce(Duration::from_millis(100), move |value: u32| {
        sink.lock().unwrap().push(value);
    })
    .unwrap();

    debounced.call(1);
    sleep(Duration::from_millis(150)).await;
    debounced.call(2);
    sleep(Duration::from_millis(150)).await;

    assert_eq!(*fired.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn search_input_forwards_last_draft_once() {
    let (mut input, mut queries) = SearchInput::new(Duration::from_millis(200)).unwrap();

    input.input("m");
    sleep(Duration::from_millis(50)).await;
    input.input("mi");
    sleep(Duration::from_millis(50)).await;
    input.input("milk");
    assert_eq!(input.draft(), "milk");
    assert!(queries.try_recv().is_err());

    sleep(Duration::from_millis(250)).await;
    assert_eq!(queries.try_recv().unwrap(), "milk");
    assert!(queries.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn search_input_clear_publishes_immediately() {
    let (mut input, mut queries) = SearchInput::new(Duration::from_millis(200)).unwrap();

    input.input("eggs");
    input.clear();
    assert_eq!(input.draft(), "");
    assert!(!input.has_pending_query());
    assert_eq!(queries.try_recv().unwrap(), "");

    sleep(Duration::from_millis(400)).await;
    assert!(queries.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn search_input_uses_configured_delay() {
    let config = NotesConfig {
        search_debounce_ms: 500,
        ..NotesConfig::default()
    };
    let (mut input, mut queries) = SearchInput::from_config(&config).unwrap();

    input.input("bread");
    sleep(Duration::from_millis(300)).await;
    assert!(queries.try_recv().is_err());
    assert!(input.has_pending_query());

    sleep(Duration::from_millis(250)).await;
    assert_eq!(queries.try_recv().unwrap(), "bread");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn superseded_values_never_fire_on_worker_threads() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);
    let mut debounced = debounce(Duration::from_millis(50), move |value: u32| {
        sink.lock().unwrap().push(value);
    })
    .unwrap();

    for value in 0..200 {
        debounced.call(value);
    }
    sleep(Duration::from_millis(400)).await;

    assert_eq!(*fired.lock().unwrap(), vec![199]);
    assert!(!debounced.is_pending());
}
