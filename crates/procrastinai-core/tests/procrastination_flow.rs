//! End-to-end flows across the evaluator, composer and timer.

use chrono::{Duration, TimeZone, Utc};
use procrastinai_core::{
    classify_mode, compose_excuse, format_duration, nearest_deadline, AppState, Audience, Blocker,
    Clock, Event, ExcuseContext, FixedClock, Mode, Task, Tone,
};
use rand::rngs::mock::StepRng;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
}

#[test]
fn mode_escalates_as_deadline_approaches() {
    let clock = clock();
    let mut state = AppState::default();
    state
        .add_task("Quarterly report", Some("2026-10-19T20:00:00Z".into()), &clock)
        .unwrap();

    assert_eq!(state.mode(&clock), Mode::MildDelay);

    clock.advance(Duration::hours(2));
    assert_eq!(state.mode(&clock), Mode::StrongDelay);

    clock.advance(Duration::hours(5));
    assert_eq!(state.mode(&clock), Mode::FullPanic);

    clock.advance(Duration::hours(2));
    let overdue = state.nearest_deadline(&clock).unwrap();
    assert!(overdue < Duration::zero());
    assert_eq!(format_duration(overdue), "Time's up!");
}

#[test]
fn all_past_deadlines_mean_full_panic() {
    let clock = clock();
    let tasks: Vec<Task> = ["2026-10-18T09:00:00Z", "2026-10-19T11:59:59Z", "2026-01-01T00:00:00Z"]
        .iter()
        .map(|d| Task::new("late", Some(d.to_string()), clock.now()))
        .collect();
    let nearest = nearest_deadline(&tasks, clock.now()).unwrap();
    assert!(nearest <= Duration::zero());
    assert_eq!(classify_mode(Some(nearest)), Mode::FullPanic);
}

#[test]
fn deterministic_excuse_for_boss_wifi_formal() {
    let ctx = ExcuseContext::new(Audience::Boss, Blocker::WifiIssues, Tone::Formal);
    let first = compose_excuse(&ctx, &mut StepRng::new(0, 0));
    let second = compose_excuse(&ctx, &mut StepRng::new(0, 0));
    assert_eq!(first, second);

    let greeting = first.find("Hi,").unwrap();
    let opener = first
        .find("I regret to inform you of an unforeseen circumstance")
        .unwrap();
    let cause = first.find("related to network instability.").unwrap();
    let ask = first.find("Could we push the deadline 24 hours?").unwrap();
    let closing = first
        .find("I appreciate your consideration in this matter.")
        .unwrap();
    assert!(greeting < opener && opener < cause && cause < ask && ask < closing);
}

#[test]
fn a_day_of_procrastination() {
    let clock = clock();
    let mut state = AppState::default();
    state.set_break_interval(30);
    state.start_timer(&clock);

    let mut earned = Vec::new();
    let mut nudges = 0;
    // Simulate the one-second ticker for 70 minutes.
    for _ in 0..(70 * 60) {
        clock.advance(Duration::seconds(1));
        for event in state.tick(&clock) {
            match event {
                Event::BadgeEarned { badge_id, .. } => earned.push(badge_id),
                Event::BreakNudge { .. } => nudges += 1,
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    assert_eq!(earned, vec!["sprout", "bronze"]);
    // First tick nudges immediately, then every 30 minutes.
    assert_eq!(nudges, 3);
    assert_eq!(state.timer.total_ms(), 70 * 60 * 1000);

    state.pause_timer(&clock);
    clock.advance(Duration::hours(1));
    assert!(state.tick(&clock).iter().all(|e| matches!(e, Event::BreakNudge { .. })));
    assert_eq!(state.timer.total_ms(), 70 * 60 * 1000);

    state.reset_timer(&clock);
    assert_eq!(state.timer.total_ms(), 0);
}
