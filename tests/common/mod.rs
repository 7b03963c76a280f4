//! Shared test utilities for state and progression tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

use studybuddy::SessionKind;
use studybuddy::state::{AppState, StateStore};
use studybuddy::stats::GamificationEvent;
use studybuddy::stats::achievements::AchievementId;

/// A store pointing at `state.json` inside a fresh temp dir
pub fn temp_store() -> (TempDir, StateStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = StateStore::new(temp_dir.path().join("state.json"));
    (temp_dir, store)
}

/// A UTC instant in March 2026
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0)
        .single()
        .expect("Invalid test date")
}

/// Start a focus session at `start` and end it `minutes` later
pub fn run_focus<Tz: TimeZone>(
    state: &mut AppState,
    start: &DateTime<Tz>,
    minutes: i64,
    completed: bool,
) -> Vec<GamificationEvent> {
    run_session(state, SessionKind::Focus, start, minutes, completed)
}

pub fn run_session<Tz: TimeZone>(
    state: &mut AppState,
    kind: SessionKind,
    start: &DateTime<Tz>,
    minutes: i64,
    completed: bool,
) -> Vec<GamificationEvent> {
    state
        .start_session(kind, 25, None, start)
        .expect("Failed to start session");
    let end = start.clone() + Duration::minutes(minutes);
    let (_, events) = state
        .end_session(completed, &end)
        .expect("Failed to end session");
    events
}

/// Achievement ids unlocked by a list of events, in order
pub fn unlocked(events: &[GamificationEvent]) -> Vec<AchievementId> {
    events
        .iter()
        .filter_map(|e| match e {
            GamificationEvent::AchievementUnlocked(a) => Some(a.id),
            _ => None,
        })
        .collect()
}
