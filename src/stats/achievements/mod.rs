//! Gamification system: achievements, pet XP and levels, and daily streaks
//!
//! Everything here is pure. The engine takes a progression state plus the
//! evaluation instant and hands back the next state and what happened.

mod checker;
mod definitions;
mod engine;
mod error;
mod levels;
mod streaks;

pub use checker::{
    EARLY_SESSION_BEFORE_HOUR, LATE_SESSION_FROM_HOUR, SessionFacts, check_achievements,
    check_session_achievements, is_earned, requirement_progress,
};
pub use definitions::{ACHIEVEMENTS, Achievement, AchievementId, EarnedAchievement, RequirementKind};
pub use engine::{
    GamificationEvent, ProgressionState, ProgressionStats, SESSION_ABANDONED_PENALTY,
    SESSION_COMPLETED_HAPPINESS, Transition, apply_day_rollover, apply_session_end,
    apply_task_completion, apply_task_reversion,
};
pub use error::ProgressionError;
pub use levels::{
    LEVEL_UP_HAPPINESS, LevelUp, MAX_HAPPINESS, Pet, PetStage, XpRewards, experience_threshold,
};
pub use streaks::{Streaks, update_streak};
