//! Progression engine - core gamification logic
//!
//! Pure transitions over [`ProgressionState`]: each operation takes the prior
//! state by reference plus the evaluation instant and returns the next state
//! together with the events it produced. Nothing here performs I/O; callers
//! persist the returned state themselves.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::checker::{SessionFacts, check_achievements, check_session_achievements};
use super::definitions::{AchievementId, EarnedAchievement};
use super::error::ProgressionError;
use super::levels::{LevelUp, MAX_HAPPINESS, Pet, XpRewards, experience_threshold};
use super::streaks::{Streaks, update_streak};
use crate::domain::{Session, SessionKind, Task};
use crate::stats::calendar;

/// Happiness gained when a session is completed
pub const SESSION_COMPLETED_HAPPINESS: u8 = 10;

/// Happiness lost when a session is abandoned
pub const SESSION_ABANDONED_PENALTY: u8 = 5;

/// Lifetime and daily counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionStats {
    /// Minutes spent in sessions, whether completed or not
    #[serde(default)]
    pub total_focus_time: f64,
    #[serde(default)]
    pub tasks_completed: u64,
    #[serde(default)]
    pub sessions_completed: u64,
    /// Reset at every day boundary
    #[serde(default)]
    pub daily_tasks_completed: u64,
}

/// The gamification subset of the app state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    #[serde(default)]
    pub pet: Pet,
    #[serde(default)]
    pub streaks: Streaks,
    #[serde(default)]
    pub stats: ProgressionStats,
    /// Earned achievements in unlock order, unique by id
    #[serde(default)]
    pub achievements: Vec<EarnedAchievement>,
}

impl ProgressionState {
    pub fn with_pet_name(name: &str) -> Self {
        Self {
            pet: Pet::named(name),
            ..Self::default()
        }
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    /// Check the invariants every transition relies on.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.pet.level == 0 {
            return Err(ProgressionError::InvalidPetLevel);
        }

        let threshold = experience_threshold(self.pet.level);
        if self.pet.experience >= threshold {
            return Err(ProgressionError::ExperienceOverflow {
                level: self.pet.level,
                experience: self.pet.experience,
                threshold,
            });
        }

        if self.pet.happiness > MAX_HAPPINESS {
            return Err(ProgressionError::HappinessOutOfRange(self.pet.happiness));
        }

        let mut seen = HashSet::new();
        for earned in &self.achievements {
            if !seen.insert(earned.id) {
                return Err(ProgressionError::DuplicateAchievement(earned.id));
            }
        }

        if self.streaks.longest < self.streaks.current {
            return Err(ProgressionError::StreakInconsistent {
                current: self.streaks.current,
                longest: self.streaks.longest,
            });
        }

        Ok(())
    }
}

/// Events that can happen during a transition
#[derive(Debug, Clone, PartialEq)]
pub enum GamificationEvent {
    AchievementUnlocked(EarnedAchievement),
    LevelUp(LevelUp),
    StreakStarted,
    StreakExtended { count: u32 },
    StreakBroken { previous: u32 },
    XpAwarded { amount: u64, reason: String },
    HappinessChanged { from: u8, to: u8 },
}

/// Result of applying one event to a progression state
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ProgressionState,
    pub events: Vec<GamificationEvent>,
}

#[cfg(test)]
impl Transition {
    /// Achievements unlocked by this transition, in unlock order
    pub fn unlocked(&self) -> impl Iterator<Item = &EarnedAchievement> {
        self.events.iter().filter_map(|e| match e {
            GamificationEvent::AchievementUnlocked(a) => Some(a),
            _ => None,
        })
    }

    pub fn leveled_up(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GamificationEvent::LevelUp(_)))
    }
}

/// Builder used inside one transition
struct Step {
    next: ProgressionState,
    events: Vec<GamificationEvent>,
    happiness_before: u8,
}

impl Step {
    fn from(state: &ProgressionState) -> Self {
        Self {
            next: state.clone(),
            events: Vec::new(),
            happiness_before: state.pet.happiness,
        }
    }

    fn award_experience(&mut self, amount: u64, reason: String) {
        self.events.push(GamificationEvent::XpAwarded { amount, reason });
        for level_up in self.next.pet.gain_experience(amount) {
            tracing::info!(
                old_level = level_up.old_level,
                new_level = level_up.new_level,
                "{} leveled up",
                self.next.pet.name
            );
            self.events.push(GamificationEvent::LevelUp(level_up));
        }
    }

    fn record_unlocks(&mut self, unlocked: Vec<EarnedAchievement>) {
        for earned in unlocked {
            tracing::info!(achievement = %earned.id, "Achievement unlocked: {}", earned.name);
            self.next.achievements.push(earned.clone());
            self.events.push(GamificationEvent::AchievementUnlocked(earned));
        }
    }

    fn finish(mut self) -> Transition {
        let to = self.next.pet.happiness;
        if to != self.happiness_before {
            self.events.push(GamificationEvent::HappinessChanged {
                from: self.happiness_before,
                to,
            });
        }
        Transition {
            state: self.next,
            events: self.events,
        }
    }
}

/// A task was completed: bump counters, feed the pet by task difficulty and
/// unlock any threshold achievements the new totals satisfy.
pub fn apply_task_completion<Tz: TimeZone>(
    state: &ProgressionState,
    task: &Task,
    now: &DateTime<Tz>,
) -> Result<Transition, ProgressionError> {
    state.validate()?;
    let mut step = Step::from(state);

    let stats = &mut step.next.stats;
    stats.tasks_completed = stats.tasks_completed.saturating_add(1);
    stats.daily_tasks_completed = stats.daily_tasks_completed.saturating_add(1);

    let xp = XpRewards::task(task.difficulty);
    step.award_experience(xp, format!("Task #{} completed", task.id));

    let unlocked = check_achievements(&step.next, now.timestamp_millis());
    step.record_unlocks(unlocked);

    tracing::debug!(
        task_id = task.id,
        xp,
        level = step.next.pet.level,
        experience = step.next.pet.experience,
        "Applied task completion"
    );
    Ok(step.finish())
}

/// A completed task was reopened.
///
/// Progression is left as it was: XP, counters and achievements granted for
/// the completion stay granted.
pub fn apply_task_reversion(
    state: &ProgressionState,
    task: &Task,
) -> Result<Transition, ProgressionError> {
    state.validate()?;
    tracing::debug!(task_id = task.id, "Task reopened, progression unchanged");
    Ok(Step::from(state).finish())
}

/// A session ended, `completed` or abandoned.
///
/// Breaks leave progression untouched. For focus sessions the elapsed minutes
/// always count towards focus time. Only a completed focus session counts as a
/// session, extends the streak, can unlock the single-session achievements and
/// feeds the pet; an abandoned one makes the pet sadder.
pub fn apply_session_end<Tz: TimeZone>(
    state: &ProgressionState,
    session: &Session,
    completed: bool,
    now: &DateTime<Tz>,
) -> Result<Transition, ProgressionError> {
    state.validate()?;

    let start = session.start_time;
    let end = session.end_time.ok_or(ProgressionError::MissingEndTime)?;
    if end < start {
        return Err(ProgressionError::NegativeDuration { start, end });
    }
    let start_hour = calendar::hour_of(start, &now.timezone())
        .ok_or(ProgressionError::InvalidTimestamp(start))?;
    let duration_minutes = calendar::minutes_between(start, end);
    let today = now.date_naive();
    let now_ms = now.timestamp_millis();

    let mut step = Step::from(state);
    if session.kind == SessionKind::Break {
        tracing::debug!(completed, duration_minutes, "Break ended, progression unchanged");
        return Ok(step.finish());
    }

    step.next.stats.total_focus_time += duration_minutes;
    if completed {
        step.next.stats.sessions_completed = step.next.stats.sessions_completed.saturating_add(1);
    }

    step.next.streaks = update_streak(&state.streaks, completed, today);
    if completed && !state.streaks.counted_on(today) {
        let count = step.next.streaks.current;
        step.events.push(if count > 1 {
            GamificationEvent::StreakExtended { count }
        } else {
            GamificationEvent::StreakStarted
        });
    }

    if completed {
        let facts = SessionFacts {
            duration_minutes,
            start_hour,
        };
        let unlocked = check_session_achievements(&step.next, &facts, now_ms);
        step.record_unlocks(unlocked);

        step.award_experience(
            XpRewards::SESSION_COMPLETED,
            format!("{} session completed", session.kind),
        );
        step.next.pet.cheer(SESSION_COMPLETED_HAPPINESS);
    } else {
        step.next.pet.sadden(SESSION_ABANDONED_PENALTY);
    }

    let unlocked = check_achievements(&step.next, now_ms);
    step.record_unlocks(unlocked);

    tracing::debug!(
        kind = %session.kind,
        completed,
        duration_minutes,
        streak = step.next.streaks.current,
        "Applied session end"
    );
    Ok(step.finish())
}

/// A new calendar day started: clear the daily counter and break a streak
/// whose last session is older than yesterday.
pub fn apply_day_rollover(
    state: &ProgressionState,
    today: NaiveDate,
) -> Result<Transition, ProgressionError> {
    state.validate()?;
    let mut step = Step::from(state);

    step.next.stats.daily_tasks_completed = 0;
    let previous = step.next.streaks.current;
    if step.next.streaks.break_if_stale(today) {
        tracing::info!(previous, "Streak broken");
        step.events.push(GamificationEvent::StreakBroken { previous });
    }

    Ok(step.finish())
}
