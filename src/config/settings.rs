//! Settings configuration types

use serde::{Deserialize, Serialize};

/// Color theme for rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// How new tasks are created by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStyle {
    /// Break new tasks into category-specific chunks
    #[default]
    Chunked,
    Simple,
}

/// Focus timer flavour used when planning session lengths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusTimerPreference {
    #[default]
    Adaptive,
    Standard,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,

    /// Show pet, XP and achievement output after commands
    #[serde(default = "default_gamification_enabled")]
    pub gamification_enabled: bool,

    #[serde(default)]
    pub task_style: TaskStyle,

    #[serde(default)]
    pub focus_timer: FocusTimerPreference,

    /// Free-form sensory profile (e.g. "light", "calm")
    #[serde(default = "default_sensory_mode")]
    pub sensory_mode: String,

    /// Name given to a freshly hatched pet
    #[serde(default = "default_pet_name")]
    pub pet_name: String,
}

fn default_gamification_enabled() -> bool {
    true
}

fn default_sensory_mode() -> String {
    "light".to_string()
}

fn default_pet_name() -> String {
    "Buddy".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            gamification_enabled: default_gamification_enabled(),
            task_style: TaskStyle::default(),
            focus_timer: FocusTimerPreference::default(),
            sensory_mode: default_sensory_mode(),
            pet_name: default_pet_name(),
        }
    }
}

/// Pomodoro lengths in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_standard_focus_minutes")]
    pub standard_focus_minutes: u32,

    /// First focus block of the day with the adaptive timer
    #[serde(default = "default_adaptive_first_focus_minutes")]
    pub adaptive_first_focus_minutes: u32,

    /// Focus block once three pomodoros are done with the adaptive timer
    #[serde(default = "default_adaptive_long_focus_minutes")]
    pub adaptive_long_focus_minutes: u32,

    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,

    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,

    /// A long break follows every N completed focus sessions
    #[serde(default = "default_long_break_every")]
    pub long_break_every: u32,
}

fn default_standard_focus_minutes() -> u32 {
    25
}

fn default_adaptive_first_focus_minutes() -> u32 {
    20
}

fn default_adaptive_long_focus_minutes() -> u32 {
    30
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_long_break_every() -> u32 {
    4
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            standard_focus_minutes: default_standard_focus_minutes(),
            adaptive_first_focus_minutes: default_adaptive_first_focus_minutes(),
            adaptive_long_focus_minutes: default_adaptive_long_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            long_break_every: default_long_break_every(),
        }
    }
}
