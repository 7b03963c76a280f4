//! Progress tracking for StudyBuddy
//!
//! Turns completed tasks and focus sessions into pet experience, daily
//! streaks and achievements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │   task done     │     │  session end    │
//! └────────┬────────┘     └────────┬────────┘
//!          │                       │
//!          └───────────┬───────────┘
//!                      ▼
//!           achievements::engine (pure)
//!                      │
//!                      ▼
//!          ~/.studybuddy/state.json
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let transition = apply_task_completion(&state.progression, &task, &Utc::now())?;
//! for event in &transition.events {
//!     // render
//! }
//! state.progression = transition.state;
//! ```

pub mod achievements;
pub mod calendar;

pub use achievements::{
    GamificationEvent, ProgressionError, ProgressionState, ProgressionStats, Transition,
    apply_day_rollover, apply_session_end, apply_task_completion, apply_task_reversion,
};
pub use calendar::{date_of, hour_of, minutes_between};
