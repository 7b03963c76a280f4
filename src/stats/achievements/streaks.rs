//! Daily streak tracking
//!
//! A streak counts consecutive calendar days with at least one completed
//! session. Days are `NaiveDate`s in the caller's time zone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak data stored in the progression state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
    pub last_session_date: Option<NaiveDate>,
}

impl Streaks {
    /// Check if the streak is still alive (activity today or yesterday)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match self.last_session_date {
            Some(last) => last == today || Some(last) == today.pred_opt(),
            None => false,
        }
    }

    /// Whether today already counts towards the streak
    pub fn counted_on(&self, today: NaiveDate) -> bool {
        self.last_session_date == Some(today)
    }

    /// Drop the current count to zero when the last session is older than
    /// yesterday. Returns true if the streak was broken.
    pub(crate) fn break_if_stale(&mut self, today: NaiveDate) -> bool {
        if self.current > 0 && !self.is_active(today) {
            self.current = 0;
            return true;
        }
        false
    }
}

/// Compute the streak after a session ends on `today`.
///
/// Only completed sessions count. A second completed session on the same day
/// leaves the streak untouched.
pub fn update_streak(streaks: &Streaks, session_completed: bool, today: NaiveDate) -> Streaks {
    if !session_completed || streaks.counted_on(today) {
        return streaks.clone();
    }

    let continues = streaks.last_session_date.is_some()
        && streaks.last_session_date == today.pred_opt();
    let current = if continues {
        streaks.current.saturating_add(1)
    } else {
        1
    };

    Streaks {
        current,
        longest: streaks.longest.max(current),
        last_session_date: Some(today),
    }
}
