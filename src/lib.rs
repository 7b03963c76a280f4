//! StudyBuddy - study tasks and focus sessions that grow a virtual pet
//!
//! Completing tasks and pomodoro-style focus sessions earns experience for a
//! pet, keeps a daily streak alive and unlocks achievements.
//!
//! ## Layout
//!
//! - [`domain`]: tasks, sessions and the pomodoro planner
//! - [`stats`]: the pure progression engine (XP, levels, streaks, achievements)
//! - [`state`]: the persisted document and its JSON store
//! - [`config`]: preferences and timer settings from `config.toml`

pub mod config;
pub mod domain;
pub mod state;
pub mod stats;

pub use domain::*;
