//! Achievement definitions and metadata
//!
//! The catalog is fixed and ordered. When several achievements unlock in the
//! same update they are appended in catalog order.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Task milestones
    FirstTask,
    TaskMaster,

    // Session milestones
    FocusWarrior,

    // Streaks
    StreakStarter,
    ConsistencyKing,

    // Single-session feats
    DeepFocus,
    EarlyBird,
    NightOwl,

    // Pet and totals
    PetLover,
    MarathonRunner,
}

impl AchievementId {
    /// Get the string ID used in the persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTask => "first_task",
            Self::TaskMaster => "task_master",
            Self::FocusWarrior => "focus_warrior",
            Self::StreakStarter => "streak_starter",
            Self::ConsistencyKing => "consistency_king",
            Self::DeepFocus => "deep_focus",
            Self::EarlyBird => "early_bird",
            Self::NightOwl => "night_owl",
            Self::PetLover => "pet_lover",
            Self::MarathonRunner => "marathon_runner",
        }
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an achievement measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    /// Lifetime completed tasks
    TasksCompleted,
    /// Lifetime completed sessions
    SessionsCompleted,
    /// Current daily streak
    Streak,
    /// Pet level
    PetLevel,
    /// Lifetime focus minutes
    TotalFocusTime,
    /// One completed session lasting at least `threshold` minutes
    LongSession,
    /// One completed session started before 9 AM
    EarlySession,
    /// One completed session started at or after 9 PM
    LateSession,
}

impl RequirementKind {
    /// Whether this kind is judged from a single ending session rather than totals
    pub fn is_session_triggered(&self) -> bool {
        matches!(
            self,
            Self::LongSession | Self::EarlySession | Self::LateSession
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TasksCompleted => "Tasks",
            Self::SessionsCompleted => "Sessions",
            Self::Streak => "Streaks",
            Self::PetLevel => "Pet",
            Self::TotalFocusTime => "Focus time",
            Self::LongSession => "Deep work",
            Self::EarlySession | Self::LateSession => "Time of day",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: RequirementKind,
    pub threshold: u32,
}

/// All achievement definitions, in unlock order
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstTask,
        name: "Getting Started",
        description: "Complete your first task",
        icon: "🎯",
        requirement: RequirementKind::TasksCompleted,
        threshold: 1,
    },
    Achievement {
        id: AchievementId::TaskMaster,
        name: "Task Master",
        description: "Complete 10 tasks",
        icon: "🏆",
        requirement: RequirementKind::TasksCompleted,
        threshold: 10,
    },
    Achievement {
        id: AchievementId::FocusWarrior,
        name: "Focus Warrior",
        description: "Complete 5 focus sessions",
        icon: "⚔️",
        requirement: RequirementKind::SessionsCompleted,
        threshold: 5,
    },
    Achievement {
        id: AchievementId::StreakStarter,
        name: "Streak Starter",
        description: "Maintain a 3-day focus streak",
        icon: "🔥",
        requirement: RequirementKind::Streak,
        threshold: 3,
    },
    Achievement {
        id: AchievementId::ConsistencyKing,
        name: "Consistency King",
        description: "Maintain a 7-day focus streak",
        icon: "👑",
        requirement: RequirementKind::Streak,
        threshold: 7,
    },
    Achievement {
        id: AchievementId::DeepFocus,
        name: "Deep Focus",
        description: "Complete a 45+ minute session",
        icon: "🧠",
        requirement: RequirementKind::LongSession,
        threshold: 45,
    },
    Achievement {
        id: AchievementId::EarlyBird,
        name: "Early Bird",
        description: "Complete a session before 9 AM",
        icon: "🌅",
        requirement: RequirementKind::EarlySession,
        threshold: 1,
    },
    Achievement {
        id: AchievementId::NightOwl,
        name: "Night Owl",
        description: "Complete a session after 9 PM",
        icon: "🦉",
        requirement: RequirementKind::LateSession,
        threshold: 1,
    },
    Achievement {
        id: AchievementId::PetLover,
        name: "Pet Lover",
        description: "Reach pet level 5",
        icon: "💜",
        requirement: RequirementKind::PetLevel,
        threshold: 5,
    },
    Achievement {
        id: AchievementId::MarathonRunner,
        name: "Marathon Runner",
        description: "Accumulate 10 hours of focus time",
        icon: "🏃",
        requirement: RequirementKind::TotalFocusTime,
        threshold: 600,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// Stamp this definition as earned at `earned_at` (epoch ms)
    pub fn earn(&self, earned_at: i64) -> EarnedAchievement {
        EarnedAchievement {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            requirement: self.requirement,
            threshold: self.threshold,
            earned_at,
        }
    }
}

/// An achievement as recorded in the persisted state. Never modified once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement: RequirementKind,
    pub threshold: u32,
    /// Unix timestamp in milliseconds
    pub earned_at: i64,
}
