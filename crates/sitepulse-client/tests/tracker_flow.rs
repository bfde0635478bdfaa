use std::sync::Arc;

use sitepulse_client::tracker::{RecordingSink, Tracker};
use sitepulse_client::{TrackOutcome, TrackerConfig};
use sitepulse_core::{KeyStore, ManualClock, MemoryStore, SequenceSource};
use sitepulse_types::{Browser, DeviceType, PageTiming, PageVisit};

const CHROME_DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
const FIREFOX_ANDROID: &str =
    "Mozilla/5.0 (Android 14; Mobile; rv:128.0) Gecko/128.0 Firefox/128.0";

struct World {
    store: Arc<MemoryStore>,
    clock: Arc<ManualClock>,
}

fn tracker(world: &World, sink: Option<RecordingSink>) -> Tracker<RecordingSink> {
    Tracker::with_parts(
        sink,
        world.store.clone(),
        world.clock.clone(),
        Arc::new(SequenceSource::new()),
        TrackerConfig::default(),
    )
}

fn world() -> World {
    World {
        store: Arc::new(MemoryStore::new()),
        clock: Arc::new(ManualClock::new(10_000)),
    }
}

fn visit(referrer: Option<&str>) -> PageVisit {
    PageVisit {
        referrer: referrer.map(|r| r.to_string()),
        user_agent: CHROME_DESKTOP.to_string(),
    }
}

#[tokio::test]
async fn rapid_refire_of_same_path_emits_one_event() {
    let world = world();
    let tracker = tracker(&world, Some(RecordingSink::new()));

    assert_eq!(
        tracker.track_navigation("/services", &visit(None)).await,
        TrackOutcome::Sent
    );

    world.clock.advance(200);
    assert_eq!(
        tracker.track_navigation("/services", &visit(None)).await,
        TrackOutcome::SkippedDuplicate
    );

    assert_eq!(tracker.sink_events(), 1);
}

#[tokio::test]
async fn same_path_after_window_emits_second_event() {
    let world = world();
    let tracker = tracker(&world, Some(RecordingSink::new()));

    tracker.track_navigation("/services", &visit(None)).await;
    world.clock.advance(5_000);

    assert_eq!(
        tracker.track_navigation("/services", &visit(None)).await,
        TrackOutcome::Sent
    );
    assert_eq!(tracker.sink_events(), 2);
}

#[tokio::test]
async fn different_path_inside_window_is_tracked() {
    let world = world();
    let tracker = tracker(&world, Some(RecordingSink::new()));

    tracker.track_navigation("/services", &visit(None)).await;
    world.clock.advance(50);

    assert_eq!(
        tracker.track_navigation("/projects", &visit(None)).await,
        TrackOutcome::Sent
    );
    assert_eq!(tracker.sink_events(), 2);
}

#[tokio::test]
async fn admin_paths_never_emit_events() {
    let world = world();
    let tracker = tracker(&world, Some(RecordingSink::new()));

    for path in ["/admin", "/admin/services", "/admin/analytics"] {
        assert_eq!(
            tracker.track_navigation(path, &visit(None)).await,
            TrackOutcome::SkippedAdmin
        );
        world.clock.advance(10_000);
    }

    let timing = PageTiming {
        page_url: "https://example.com/admin".to_string(),
        ..PageTiming::default()
    };
    assert_eq!(
        tracker.track_performance("/admin", &timing).await,
        TrackOutcome::SkippedAdmin
    );

    assert_eq!(tracker.sink_events(), 0);
    // The admin short-circuit also means no identity was created.
    assert!(world.store.get("session_id").is_none());
}

#[tokio::test]
async fn missing_collector_disables_tracking_entirely() {
    let world = world();
    let tracker = tracker(&world, None);

    assert_eq!(
        tracker.track_navigation("/services", &visit(None)).await,
        TrackOutcome::Disabled
    );
    assert_eq!(
        tracker
            .track_performance("/services", &PageTiming::default())
            .await,
        TrackOutcome::Disabled
    );
}

#[tokio::test]
async fn payload_carries_identity_referrer_and_classification() {
    let world = world();
    let tracker = tracker(&world, Some(RecordingSink::new()));

    tracker.track_navigation("/", &visit(None)).await;
    world.clock.advance(6_000);
    tracker
        .track_navigation(
            "/projects",
            &PageVisit {
                referrer: Some("https://search.example".to_string()),
                user_agent: FIREFOX_ANDROID.to_string(),
            },
        )
        .await;

    let events = tracker.sink().unwrap().navigations();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].session_id, "id-1");
    assert_eq!(events[0].landing_page, "/");
    assert_eq!(events[0].current_page, "/");
    assert_eq!(events[0].referrer, "direct");
    assert_eq!(events[0].browser, Browser::Chrome);
    assert_eq!(events[0].device_type, DeviceType::Desktop);

    // Same session, landing page stays the first path ever seen.
    assert_eq!(events[1].session_id, "id-1");
    assert_eq!(events[1].landing_page, "/");
    assert_eq!(events[1].current_page, "/projects");
    assert_eq!(events[1].referrer, "https://search.example");
    assert_eq!(events[1].browser, Browser::Firefox);
    assert_eq!(events[1].device_type, DeviceType::Mobile);
}

#[tokio::test]
async fn sink_failure_is_contained() {
    let world = world();
    let tracker = tracker(&world, Some(RecordingSink::failing()));

    // Fire-and-forget: the caller sees a normal outcome either way.
    assert_eq!(
        tracker.track_navigation("/services", &visit(None)).await,
        TrackOutcome::Sent
    );

    // The failed send still consumed the debounce slot; no retry happens.
    world.clock.advance(100);
    assert_eq!(
        tracker.track_navigation("/services", &visit(None)).await,
        TrackOutcome::SkippedDuplicate
    );
}

#[tokio::test]
async fn independent_trackers_do_not_share_debounce_state() {
    let world = world();
    let first = tracker(&world, Some(RecordingSink::new()));
    let second = tracker(&world, Some(RecordingSink::new()));

    assert_eq!(
        first.track_navigation("/services", &visit(None)).await,
        TrackOutcome::Sent
    );
    assert_eq!(
        second.track_navigation("/services", &visit(None)).await,
        TrackOutcome::Sent
    );

    // They do share the durable identity, as two tabs of one browser would.
    let a = first.sink().unwrap().navigations();
    let b = second.sink().unwrap().navigations();
    assert_eq!(a[0].session_id, b[0].session_id);
}

trait SinkEvents {
    fn sink_events(&self) -> usize;
}

impl SinkEvents for Tracker<RecordingSink> {
    fn sink_events(&self) -> usize {
        self.sink().map(|s| s.navigations().len()).unwrap_or(0)
    }
}
