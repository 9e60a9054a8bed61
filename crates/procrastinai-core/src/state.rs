//! Application state.
//!
//! [`AppState`] is the single owner of everything the user can change. The
//! evaluator and composer are pure functions; this module wires them to the
//! state, with the clock and random source passed in by the caller.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::badge::{self, Badge};
use crate::clock::Clock;
use crate::deadline::{self, Mode};
use crate::distraction::{suggest_distractions, Mood};
use crate::error::Result;
use crate::events::Event;
use crate::excuse::{compose_excuse, Audience, Blocker, ExcuseContext, ExcuseHistory, ExcuseRecord, Tone};
use crate::nudge::BreakPolicy;
use crate::task::{Task, TaskList};
use crate::timer::{ProcrastinationTimer, TimerState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub tasks: TaskList,
    pub mood: Mood,
    pub breaks: BreakPolicy,
    pub timer: ProcrastinationTimer,
    pub excuse_context: ExcuseContext,
    pub excuse_history: ExcuseHistory,
}

/// Derived view of the state at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub mode: Mode,
    pub mode_label: &'static str,
    pub nearest_deadline: String,
    pub nearest_deadline_ms: Option<i64>,
    pub procrastinated_min: u64,
    pub timer: String,
    pub timer_state: TimerState,
    pub notifications: &'static str,
    pub break_reminder: String,
    pub badges: Vec<&'static str>,
    pub next_badge: Option<&'static Badge>,
    pub distractions: Vec<&'static str>,
    pub open_tasks: usize,
    pub total_tasks: usize,
    pub at: DateTime<Utc>,
}

impl AppState {
    /// Fresh state with the configured defaults.
    pub fn with_defaults(mood: Mood, break_interval_min: u32) -> Self {
        Self {
            mood,
            breaks: BreakPolicy {
                interval_min: break_interval_min,
                ..BreakPolicy::default()
            },
            ..Self::default()
        }
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn add_task(
        &mut self,
        title: &str,
        deadline: Option<String>,
        clock: &impl Clock,
    ) -> Result<Event> {
        let now = clock.now();
        let task = self.tasks.add(Task::new(title.trim(), deadline, now))?;
        debug!(task_id = %task.id, "task added");
        Ok(Event::TaskAdded {
            task_id: task.id.clone(),
            title: task.title.clone(),
            at: now,
        })
    }

    pub fn toggle_task(&mut self, id: &str, clock: &impl Clock) -> Result<Event> {
        let done = self.tasks.toggle(id)?;
        Ok(Event::TaskToggled {
            task_id: id.to_string(),
            done,
            at: clock.now(),
        })
    }

    pub fn remove_task(&mut self, id: &str, clock: &impl Clock) -> Result<Event> {
        let task = self.tasks.remove(id)?;
        Ok(Event::TaskRemoved {
            task_id: task.id,
            at: clock.now(),
        })
    }

    // ── Preferences ──────────────────────────────────────────────────

    pub fn set_mood(&mut self, mood: Mood, clock: &impl Clock) -> Event {
        self.mood = mood;
        Event::MoodChanged {
            mood,
            at: clock.now(),
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.breaks.muted = muted;
    }

    pub fn set_break_interval(&mut self, minutes: u32) {
        self.breaks.interval_min = minutes;
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn start_timer(&mut self, clock: &impl Clock) -> Option<Event> {
        self.timer.start(clock.now())
    }

    pub fn pause_timer(&mut self, clock: &impl Clock) -> Option<Event> {
        self.timer.pause(clock.now())
    }

    pub fn reset_timer(&mut self, clock: &impl Clock) -> Event {
        self.timer.reset(clock.now())
    }

    /// Advance the timer and collect badge and break events.
    pub fn tick(&mut self, clock: &impl Clock) -> Vec<Event> {
        let now = clock.now();
        let before = self.timer.total_ms();
        self.timer.tick(now);
        let after = self.timer.total_ms();

        let mut events: Vec<Event> = badge::newly_earned(before, after)
            .into_iter()
            .map(|b| Event::BadgeEarned {
                badge_id: b.id.to_string(),
                label: b.label.to_string(),
                at: now,
            })
            .collect();
        events.extend(self.breaks.check(now));
        events
    }

    // ── Excuses ──────────────────────────────────────────────────────

    pub fn set_audience(&mut self, audience: Audience) {
        self.excuse_context.audience = audience;
    }

    pub fn set_blocker(&mut self, blocker: Blocker) {
        self.excuse_context.blocker = blocker;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.excuse_context.tone = tone;
    }

    /// Compose an excuse for the active context and append it to the history.
    pub fn generate_excuse<R: Rng + ?Sized>(
        &mut self,
        clock: &impl Clock,
        rng: &mut R,
    ) -> (ExcuseRecord, Event) {
        let now = clock.now();
        let text = compose_excuse(&self.excuse_context, rng);
        let record = self
            .excuse_history
            .record(Uuid::new_v4().to_string(), text, now)
            .clone();
        debug!(excuse_id = %record.id, "excuse generated");
        let event = Event::ExcuseGenerated {
            excuse_id: record.id.clone(),
            context: self.excuse_context,
            at: now,
        };
        (record, event)
    }

    // ── Derived view ─────────────────────────────────────────────────

    pub fn nearest_deadline(&self, clock: &impl Clock) -> Option<chrono::Duration> {
        deadline::nearest_deadline(self.tasks.as_slice(), clock.now())
    }

    pub fn mode(&self, clock: &impl Clock) -> Mode {
        deadline::classify_mode(self.nearest_deadline(clock))
    }

    pub fn dashboard<R: Rng + ?Sized>(&self, clock: &impl Clock, rng: &mut R) -> Dashboard {
        let now = clock.now();
        let nearest = deadline::nearest_deadline(self.tasks.as_slice(), now);
        let mode = deadline::classify_mode(nearest);
        let total_ms = self.timer.total_ms();
        Dashboard {
            mode,
            mode_label: mode.label(),
            nearest_deadline: deadline::deadline_label(nearest),
            nearest_deadline_ms: nearest.map(|d| d.num_milliseconds()),
            procrastinated_min: badge::elapsed_minutes(total_ms),
            timer: deadline::format_duration(chrono::Duration::milliseconds(
                i64::try_from(total_ms).unwrap_or(i64::MAX),
            )),
            timer_state: self.timer.state(),
            notifications: if self.breaks.muted { "Muted" } else { "Active" },
            break_reminder: self.breaks.describe(),
            badges: badge::earned_badges(total_ms)
                .into_iter()
                .map(|b| b.label)
                .collect(),
            next_badge: badge::next_badge(total_ms),
            distractions: suggest_distractions(self.mood, rng),
            open_tasks: self.tasks.open_count(),
            total_tasks: self.tasks.len(),
            at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::CoreError;
    use chrono::{Duration, TimeZone};
    use rand::rngs::mock::StepRng;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
    }

    #[test]
    fn task_lifecycle_emits_events() {
        let clock = clock();
        let mut state = AppState::default();

        let event = state
            .add_task("  Thesis  ", Some("2026-10-19T12:30:00Z".into()), &clock)
            .unwrap();
        let id = match event {
            Event::TaskAdded { task_id, title, .. } => {
                assert_eq!(title, "Thesis");
                task_id
            }
            other => panic!("unexpected event: {other:?}"),
        };
        assert_eq!(state.mode(&clock), Mode::FullPanic);

        assert!(matches!(
            state.toggle_task(&id, &clock).unwrap(),
            Event::TaskToggled { done: true, .. }
        ));
        assert!(matches!(
            state.remove_task(&id, &clock).unwrap(),
            Event::TaskRemoved { .. }
        ));
        assert_eq!(state.mode(&clock), Mode::MildDelay);
        assert!(matches!(
            state.remove_task(&id, &clock),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn tick_awards_badges_once() {
        let clock = clock();
        let mut state = AppState::default();
        state.set_muted(true);
        state.start_timer(&clock);

        clock.advance(Duration::minutes(15));
        let events = state.tick(&clock);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], Event::BadgeEarned { badge_id, .. } if badge_id == "sprout"));

        clock.advance(Duration::seconds(1));
        assert!(state.tick(&clock).is_empty());
    }

    #[test]
    fn tick_emits_break_nudge_when_due() {
        let clock = clock();
        let mut state = AppState::with_defaults(Mood::Chill, 10);

        let first = state.tick(&clock);
        assert!(matches!(first.as_slice(), [Event::BreakNudge { .. }]));

        clock.advance(Duration::minutes(9));
        assert!(state.tick(&clock).is_empty());
        clock.advance(Duration::minutes(1));
        assert_eq!(state.tick(&clock).len(), 1);
    }

    #[test]
    fn generate_excuse_appends_newest_first() {
        let clock = clock();
        let mut state = AppState::default();
        state.set_audience(Audience::Friend);
        state.set_tone(Tone::Apologetic);

        let (first, event) = state.generate_excuse(&clock, &mut StepRng::new(0, 0));
        assert!(first.text.starts_with("Hey,\n\n"));
        assert!(matches!(event, Event::ExcuseGenerated { ref excuse_id, .. } if *excuse_id == first.id));

        clock.advance(Duration::seconds(5));
        state.set_blocker(Blocker::PetSituation);
        let (second, _) = state.generate_excuse(&clock, &mut StepRng::new(0, 0));

        assert_eq!(state.excuse_history.len(), 2);
        assert_eq!(state.excuse_history.latest(), Some(&second));
        assert!(second.text.contains("an urgent pet situation"));
    }

    #[test]
    fn dashboard_reflects_state() {
        let clock = clock();
        let mut state = AppState::default();
        state
            .add_task("Slides", Some("2026-10-19T15:00:00Z".into()), &clock)
            .unwrap();
        state.add_task("Someday", None, &clock).unwrap();
        state.set_muted(true);
        state.start_timer(&clock);
        clock.advance(Duration::minutes(61));
        state.tick(&clock);

        let dash = state.dashboard(&clock, &mut StepRng::new(0, 0));
        assert_eq!(dash.mode, Mode::StrongDelay);
        assert_eq!(dash.mode_label, "Strong Delay");
        assert_eq!(dash.nearest_deadline, "1h 59m 0s");
        assert_eq!(dash.procrastinated_min, 61);
        assert_eq!(dash.timer, "1h 1m 0s");
        assert_eq!(dash.notifications, "Muted");
        assert_eq!(
            dash.badges,
            vec!["Master of Delay (15m)", "Deadline Dabbler (1h)"]
        );
        assert_eq!(dash.next_badge.map(|b| b.id), Some("silver"));
        assert_eq!(dash.distractions.len(), 3);
        assert_eq!(dash.total_tasks, 2);
    }

    #[test]
    fn empty_dashboard_shows_no_deadlines() {
        let clock = clock();
        let dash = AppState::default().dashboard(&clock, &mut StepRng::new(0, 0));
        assert_eq!(dash.mode, Mode::MildDelay);
        assert_eq!(dash.nearest_deadline, "No deadlines");
        assert_eq!(dash.notifications, "Active");
        assert!(dash.badges.is_empty());
    }
}
