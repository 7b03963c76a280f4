//! End-to-end progression through AppState operations

mod common;

use chrono::{Duration, FixedOffset};

use studybuddy::state::AppState;
use studybuddy::stats::GamificationEvent;
use studybuddy::stats::achievements::AchievementId;
use studybuddy::{Difficulty, NewTask, SessionKind};

use common::{at, run_focus, run_session, temp_store, unlocked};

fn medium(title: &str) -> NewTask {
    NewTask {
        difficulty: Some(Difficulty::Medium),
        ..NewTask::titled(title)
    }
}

#[test]
fn test_three_medium_tasks() {
    let now = at(10, 12, 0);
    let mut state = AppState::new("Buddy", &now);
    let ids: Vec<_> = ["Outline", "Draft", "Proofread"]
        .iter()
        .map(|t| state.add_task(medium(t), &now).unwrap())
        .collect();

    let first = state.complete_task(ids[0], &now).unwrap();
    assert_eq!(unlocked(&first), vec![AchievementId::FirstTask]);
    assert_eq!(state.progression.pet.experience, 20);

    let second = state.complete_task(ids[1], &now).unwrap();
    assert!(unlocked(&second).is_empty());
    assert_eq!(state.progression.pet.experience, 40);

    state.complete_task(ids[2], &now).unwrap();
    assert_eq!(state.progression.pet.experience, 60);
    assert_eq!(state.progression.pet.level, 1);
    assert_eq!(state.progression.stats.daily_tasks_completed, 3);
    assert_eq!(state.progression.achievements.len(), 1);
}

#[test]
fn test_streak_builds_over_consecutive_days() {
    let mut state = AppState::new("Buddy", &at(9, 12, 0));

    let day_one = run_focus(&mut state, &at(9, 12, 0), 25, true);
    assert!(day_one.contains(&GamificationEvent::StreakStarted));

    // A second session the same day doesn't extend it again
    let again = run_focus(&mut state, &at(9, 15, 0), 25, true);
    assert!(
        !again
            .iter()
            .any(|e| matches!(
                e,
                GamificationEvent::StreakStarted | GamificationEvent::StreakExtended { .. }
            ))
    );
    assert_eq!(state.progression.streaks.current, 1);

    assert!(state.roll_over_day(&at(10, 12, 0)).unwrap().is_empty());
    run_focus(&mut state, &at(10, 12, 0), 25, true);
    assert_eq!(state.progression.streaks.current, 2);

    state.roll_over_day(&at(11, 12, 0)).unwrap();
    let day_three = run_focus(&mut state, &at(11, 12, 0), 25, true);
    assert!(day_three.contains(&GamificationEvent::StreakExtended { count: 3 }));
    assert_eq!(unlocked(&day_three), vec![AchievementId::StreakStarter]);
    assert_eq!(state.progression.streaks.longest, 3);
}

#[test]
fn test_streak_after_gap_restarts_at_one() {
    let mut state = AppState::new("Buddy", &at(7, 12, 0));
    state.progression.streaks.current = 5;
    state.progression.streaks.longest = 5;
    state.progression.streaks.last_session_date = Some(at(7, 12, 0).date_naive());

    run_focus(&mut state, &at(10, 12, 0), 25, true);
    assert_eq!(state.progression.streaks.current, 1);
    assert_eq!(state.progression.streaks.longest, 5);
}

#[test]
fn test_late_deep_session_unlocks_once() {
    let mut state = AppState::new("Buddy", &at(10, 20, 0));

    let events = run_focus(&mut state, &at(10, 22, 0), 50, true);
    assert_eq!(
        unlocked(&events),
        vec![AchievementId::DeepFocus, AchievementId::NightOwl]
    );
    assert_eq!(state.progression.stats.total_focus_time, 50.0);

    let replay = run_focus(&mut state, &at(10, 23, 0), 50, true);
    assert!(unlocked(&replay).is_empty());

    let night_owls = state
        .progression
        .achievements
        .iter()
        .filter(|a| a.id == AchievementId::NightOwl)
        .count();
    assert_eq!(night_owls, 1);
}

#[test]
fn test_fifth_session_levels_up_and_unlocks_focus_warrior() {
    let mut state = AppState::new("Buddy", &at(10, 10, 0));
    for hour in 10..14 {
        run_focus(&mut state, &at(10, hour, 0), 25, true);
    }
    assert_eq!(state.progression.pet.experience, 80);

    let fifth = run_focus(&mut state, &at(10, 14, 0), 25, true);
    assert!(
        fifth
            .iter()
            .any(|e| matches!(e, GamificationEvent::LevelUp(l) if l.new_level == 2))
    );
    assert_eq!(unlocked(&fifth), vec![AchievementId::FocusWarrior]);
    assert_eq!(state.progression.pet.level, 2);
    assert_eq!(state.progression.pet.experience, 0);
    assert_eq!(state.progression.stats.sessions_completed, 5);
}

#[test]
fn test_breaks_do_not_count_as_progress() {
    let mut state = AppState::new("Buddy", &at(10, 6, 0));
    let before = state.progression.clone();

    // Early, late and long breaks alike
    for hour in [6, 10, 12, 15, 22] {
        let events = run_session(&mut state, SessionKind::Break, &at(10, hour, 0), 50, true);
        assert!(events.is_empty());
    }
    run_session(&mut state, SessionKind::Break, &at(10, 23, 0), 5, false);

    assert_eq!(state.progression, before);
    assert_eq!(state.progression.stats.sessions_completed, 0);
    assert_eq!(state.progression.stats.total_focus_time, 0.0);
    assert_eq!(state.progression.streaks.current, 0);
    assert!(!state.progression.has_achievement(AchievementId::FocusWarrior));
    assert_eq!(state.session_history.len(), 6);
    assert!(state.current_session.is_none());
}

#[test]
fn test_abandoned_session_counts_time_only() {
    let mut state = AppState::new("Buddy", &at(10, 10, 0));

    let events = run_focus(&mut state, &at(10, 10, 0), 12, false);
    assert!(events.contains(&GamificationEvent::HappinessChanged { from: 100, to: 95 }));
    assert_eq!(state.progression.pet.happiness, 95);
    assert_eq!(state.progression.pet.experience, 0);
    assert_eq!(state.progression.stats.sessions_completed, 0);
    assert_eq!(state.progression.stats.total_focus_time, 12.0);
    assert_eq!(state.progression.streaks.current, 0);
    assert_eq!(state.session_history.len(), 1);
}

#[test]
fn test_start_hour_uses_callers_time_zone() {
    let start = at(10, 8, 30);

    let mut in_utc = AppState::new("Buddy", &start);
    let events = run_focus(&mut in_utc, &start, 25, true);
    assert_eq!(unlocked(&events), vec![AchievementId::EarlyBird]);

    // 08:30 UTC is 10:30 at +02:00
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let local_start = start.with_timezone(&offset);
    let mut in_offset = AppState::new("Buddy", &local_start);
    let events = run_focus(&mut in_offset, &local_start, 25, true);
    assert!(unlocked(&events).is_empty());
}

#[test]
fn test_progress_survives_save_and_load() {
    let (_dir, store) = temp_store();
    let morning = at(10, 9, 0);

    let (mut state, _) = store.load("Buddy", &morning).unwrap();
    let id = state
        .add_task(
            NewTask {
                difficulty: Some(Difficulty::Hard),
                ..NewTask::titled("Problem set")
            },
            &morning,
        )
        .unwrap();
    state.complete_task(id, &(morning + Duration::hours(1))).unwrap();
    run_focus(&mut state, &at(10, 11, 0), 25, true);
    store.save(&state).unwrap();

    let (tomorrow, _) = store.load("Buddy", &at(11, 9, 0)).unwrap();
    assert_eq!(tomorrow.progression.pet.experience, 50);
    assert_eq!(tomorrow.progression.stats.tasks_completed, 1);
    assert_eq!(tomorrow.progression.stats.daily_tasks_completed, 0);
    assert_eq!(tomorrow.progression.streaks.current, 1);
    assert!(tomorrow.progression.has_achievement(AchievementId::FirstTask));
    assert!(tomorrow.task(id).unwrap().completed);
    assert_eq!(tomorrow.session_history.len(), 1);
}
