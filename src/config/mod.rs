//! Configuration loading and management

mod io;
mod settings;

pub(crate) use io::write_locked;
pub use settings::{FocusTimerPreference, Preferences, TaskStyle, Theme, TimerSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Pomodoro lengths
    #[serde(default)]
    pub timer: TimerSettings,
}
