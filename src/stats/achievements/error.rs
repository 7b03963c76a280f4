use thiserror::Error;

use super::definitions::AchievementId;

/// Precondition or invariant violations reported by the progression engine.
///
/// None of these are recovered inside the engine; they point at a caller that
/// fed it malformed input or a state that was corrupted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("Session has no end time")]
    MissingEndTime,

    #[error("Session ends before it starts (start {start}, end {end})")]
    NegativeDuration { start: i64, end: i64 },

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Pet level must be at least 1")]
    InvalidPetLevel,

    #[error("Pet experience {experience} is not below the level {level} threshold {threshold}")]
    ExperienceOverflow {
        level: u32,
        experience: u64,
        threshold: u64,
    },

    #[error("Pet happiness {0} is above 100")]
    HappinessOutOfRange(u8),

    #[error("Achievement '{0}' is recorded more than once")]
    DuplicateAchievement(AchievementId),

    #[error("Longest streak {longest} is below current streak {current}")]
    StreakInconsistent { current: u32, longest: u32 },
}
