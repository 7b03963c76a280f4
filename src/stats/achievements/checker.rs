//! Achievement checking logic
//!
//! Walks the catalog in order and returns the entries that became satisfied.

use super::definitions::{ACHIEVEMENTS, Achievement, AchievementId, EarnedAchievement, RequirementKind};
use super::engine::ProgressionState;

/// Sessions starting before this hour count as early
pub const EARLY_SESSION_BEFORE_HOUR: u32 = 9;

/// Sessions starting at or after this hour count as late
pub const LATE_SESSION_FROM_HOUR: u32 = 21;

/// Facts about a completed session used by session-triggered achievements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionFacts {
    pub duration_minutes: f64,
    /// Hour (0-23) the session started, in the user's time zone
    pub start_hour: u32,
}

/// Check if an achievement is already in the earned list
pub fn is_earned(earned: &[EarnedAchievement], id: AchievementId) -> bool {
    earned.iter().any(|a| a.id == id)
}

/// Evaluate one requirement. Session kinds need `session`; total kinds ignore it.
fn requirement_met(
    achievement: &Achievement,
    state: &ProgressionState,
    session: Option<&SessionFacts>,
) -> bool {
    let threshold = achievement.threshold;
    match achievement.requirement {
        RequirementKind::TasksCompleted => state.stats.tasks_completed >= u64::from(threshold),
        RequirementKind::SessionsCompleted => {
            state.stats.sessions_completed >= u64::from(threshold)
        }
        RequirementKind::Streak => state.streaks.current >= threshold,
        RequirementKind::PetLevel => state.pet.level >= threshold,
        RequirementKind::TotalFocusTime => state.stats.total_focus_time >= f64::from(threshold),
        RequirementKind::LongSession => {
            session.is_some_and(|s| s.duration_minutes >= f64::from(threshold))
        }
        RequirementKind::EarlySession => {
            session.is_some_and(|s| s.start_hour < EARLY_SESSION_BEFORE_HOUR)
        }
        RequirementKind::LateSession => {
            session.is_some_and(|s| s.start_hour >= LATE_SESSION_FROM_HOUR)
        }
    }
}

/// Current value a threshold requirement is measured against, for progress
/// display. `None` for session-triggered kinds, which have no running total.
pub fn requirement_progress(state: &ProgressionState, kind: RequirementKind) -> Option<f64> {
    match kind {
        RequirementKind::TasksCompleted => Some(state.stats.tasks_completed as f64),
        RequirementKind::SessionsCompleted => Some(state.stats.sessions_completed as f64),
        RequirementKind::Streak => Some(f64::from(state.streaks.current)),
        RequirementKind::PetLevel => Some(f64::from(state.pet.level)),
        RequirementKind::TotalFocusTime => Some(state.stats.total_focus_time),
        RequirementKind::LongSession
        | RequirementKind::EarlySession
        | RequirementKind::LateSession => None,
    }
}

/// Check threshold achievements (tasks, sessions, streak, pet level, focus time)
/// against `state`. Session-triggered entries are never returned here.
pub fn check_achievements(state: &ProgressionState, now_ms: i64) -> Vec<EarnedAchievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !a.requirement.is_session_triggered())
        .filter(|a| !is_earned(&state.achievements, a.id))
        .filter(|a| requirement_met(a, state, None))
        .map(|a| a.earn(now_ms))
        .collect()
}

/// Check the single-session achievements (deep focus, early bird, night owl)
/// for a completed session.
pub fn check_session_achievements(
    state: &ProgressionState,
    session: &SessionFacts,
    now_ms: i64,
) -> Vec<EarnedAchievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.requirement.is_session_triggered())
        .filter(|a| !is_earned(&state.achievements, a.id))
        .filter(|a| requirement_met(a, state, Some(session)))
        .map(|a| a.earn(now_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[EarnedAchievement]) -> Vec<AchievementId> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_nothing_on_fresh_state() {
        let state = ProgressionState::default();
        assert!(check_achievements(&state, 0).is_empty());
    }

    #[test]
    fn test_multiple_unlock_in_catalog_order() {
        let mut state = ProgressionState::default();
        state.stats.tasks_completed = 10;
        state.stats.sessions_completed = 5;
        state.streaks.current = 7;
        state.streaks.longest = 7;
        state.pet.level = 5;
        state.stats.total_focus_time = 600.0;

        let unlocked = check_achievements(&state, 42);
        assert_eq!(
            ids(&unlocked),
            vec![
                AchievementId::FirstTask,
                AchievementId::TaskMaster,
                AchievementId::FocusWarrior,
                AchievementId::StreakStarter,
                AchievementId::ConsistencyKing,
                AchievementId::PetLover,
                AchievementId::MarathonRunner,
            ]
        );
        assert!(unlocked.iter().all(|a| a.earned_at == 42));
    }

    #[test]
    fn test_already_earned_skipped() {
        let mut state = ProgressionState::default();
        state.stats.tasks_completed = 3;
        state
            .achievements
            .push(Achievement::get(AchievementId::FirstTask).unwrap().earn(1));

        assert!(check_achievements(&state, 2).is_empty());
    }

    #[test]
    fn test_focus_time_threshold_is_inclusive() {
        let mut state = ProgressionState::default();
        state.stats.total_focus_time = 599.9;
        assert!(check_achievements(&state, 0).is_empty());
        state.stats.total_focus_time = 600.0;
        assert_eq!(
            ids(&check_achievements(&state, 0)),
            vec![AchievementId::MarathonRunner]
        );
    }

    #[test]
    fn test_session_achievements() {
        let state = ProgressionState::default();

        let late_long = SessionFacts {
            duration_minutes: 50.0,
            start_hour: 22,
        };
        assert_eq!(
            ids(&check_session_achievements(&state, &late_long, 0)),
            vec![AchievementId::DeepFocus, AchievementId::NightOwl]
        );

        let early_short = SessionFacts {
            duration_minutes: 25.0,
            start_hour: 8,
        };
        assert_eq!(
            ids(&check_session_achievements(&state, &early_short, 0)),
            vec![AchievementId::EarlyBird]
        );

        let midday = SessionFacts {
            duration_minutes: 44.9,
            start_hour: 9,
        };
        assert!(check_session_achievements(&state, &midday, 0).is_empty());
    }

    #[test]
    fn test_session_achievements_fire_once() {
        let mut state = ProgressionState::default();
        let facts = SessionFacts {
            duration_minutes: 60.0,
            start_hour: 21,
        };
        let first = check_session_achievements(&state, &facts, 0);
        state.achievements.extend(first);
        assert!(check_session_achievements(&state, &facts, 1).is_empty());
    }

    #[test]
    fn test_requirement_progress() {
        let mut state = ProgressionState::default();
        state.stats.tasks_completed = 4;
        state.stats.total_focus_time = 87.5;

        assert_eq!(
            requirement_progress(&state, RequirementKind::TasksCompleted),
            Some(4.0)
        );
        assert_eq!(
            requirement_progress(&state, RequirementKind::TotalFocusTime),
            Some(87.5)
        );
        assert_eq!(requirement_progress(&state, RequirementKind::PetLevel), Some(1.0));
        assert_eq!(requirement_progress(&state, RequirementKind::LateSession), None);
    }
}
