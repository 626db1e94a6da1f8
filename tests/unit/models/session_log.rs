use super::*;

fn record() -> SessionRecord {
    SessionRecord {
        started_at: 1_700_000_000,
        ended_at: None,
        start_words: 10,
        end_words: None,
        pauses: Vec::new(),
    }
}

#[test]
fn pause_opens_after_threshold_and_closes_on_key() {
    let t0 = Instant::now();
    let threshold = Duration::from_secs(60);
    let mut tracker = PauseTracker::default();
    let mut rec = record();
    tracker.begin_session(t0);

    let change = tracker.update(t0 + Duration::from_secs(30), t0, false, threshold, &mut rec);
    assert_eq!(change, PauseChange::None);
    assert!(!tracker.is_paused());

    let change = tracker.update(t0 + Duration::from_secs(60), t0, false, threshold, &mut rec);
    assert_eq!(change, PauseChange::Started);
    assert!(tracker.is_paused());

    // Still idle: no second start.
    let change = tracker.update(t0 + Duration::from_secs(90), t0, false, threshold, &mut rec);
    assert_eq!(change, PauseChange::None);

    let resumed = t0 + Duration::from_secs(100);
    let change = tracker.update(resumed, resumed, true, threshold, &mut rec);
    assert_eq!(change, PauseChange::Ended(Duration::from_secs(100)));
    assert!(!tracker.is_paused());
    assert_eq!(rec.pauses.len(), 1);
    assert_eq!(rec.pauses[0].secs, 100);
}

#[test]
fn key_without_pause_changes_nothing() {
    let t0 = Instant::now();
    let mut tracker = PauseTracker::default();
    let mut rec = record();
    let change = tracker.update(t0, t0, true, Duration::from_secs(1), &mut rec);
    assert_eq!(change, PauseChange::None);
    assert!(rec.pauses.is_empty());
}

#[test]
fn finish_closes_open_pause() {
    let t0 = Instant::now();
    let mut tracker = PauseTracker::default();
    let mut rec = record();
    tracker.begin_session(t0);
    tracker.update(
        t0 + Duration::from_secs(10),
        t0,
        false,
        Duration::from_secs(5),
        &mut rec,
    );
    tracker.finish(t0 + Duration::from_secs(25), &mut rec);
    assert!(!tracker.is_paused());
    assert_eq!(rec.pauses.len(), 1);
    assert_eq!(rec.pauses[0].secs, 25);
}

#[test]
fn active_time_excludes_pauses() {
    let t0 = Instant::now();
    let mut tracker = PauseTracker::default();
    let mut rec = record();
    rec.pauses.push(PauseRecord {
        started_at: 0,
        secs: 20,
    });
    tracker.begin_session(t0);
    assert_eq!(
        tracker.active_time(t0 + Duration::from_secs(50), &rec),
        Duration::from_secs(30)
    );
    assert_eq!(PauseTracker::default().active_time(t0, &rec), Duration::ZERO);
}

#[test]
fn record_reports_open_state_and_paused_total() {
    let mut rec = record();
    assert!(rec.is_open());
    rec.pauses.push(PauseRecord {
        started_at: 0,
        secs: 3,
    });
    rec.pauses.push(PauseRecord {
        started_at: 0,
        secs: 4,
    });
    rec.ended_at = Some(1_700_000_100);
    assert!(!rec.is_open());
    assert_eq!(rec.paused_secs(), 7);
}
