use serde::{Deserialize, Serialize};

use super::TaskId;

/// Kind of timed session
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    #[default]
    Focus,
    Break,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Focus => "focus",
            SessionKind::Break => "break",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A focus or break session.
///
/// Created when the timer starts; `end_time` and `completed` are set once when
/// it ends, after which the record only lives in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unix timestamp in milliseconds
    pub start_time: i64,
    /// Unix timestamp in milliseconds
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: SessionKind,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub planned_minutes: u32,
    #[serde(default)]
    pub task_id: Option<TaskId>,
}

impl Session {
    pub fn start(
        kind: SessionKind,
        planned_minutes: u32,
        task_id: Option<TaskId>,
        start_time: i64,
    ) -> Self {
        Self {
            start_time,
            end_time: None,
            kind,
            completed: false,
            planned_minutes,
            task_id,
        }
    }

    /// Close the session at `end_time`
    pub fn finish(mut self, end_time: i64, completed: bool) -> Self {
        self.end_time = Some(end_time);
        self.completed = completed;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Elapsed minutes, or `None` while the session is running
    pub fn duration_minutes(&self) -> Option<f64> {
        self.end_time
            .map(|end| crate::stats::calendar::minutes_between(self.start_time, end))
    }

    /// Minutes elapsed at `now` for a running session
    pub fn elapsed_minutes(&self, now_ms: i64) -> f64 {
        crate::stats::calendar::minutes_between(self.start_time, now_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_sets_end_and_flag() {
        let session = Session::start(SessionKind::Focus, 25, Some(3), 1_000);
        assert!(!session.is_finished());
        assert_eq!(session.duration_minutes(), None);

        let done = session.finish(1_000 + 30 * 60_000, true);
        assert!(done.is_finished());
        assert!(done.completed);
        assert_eq!(done.duration_minutes(), Some(30.0));
    }

    #[test]
    fn test_serialized_shape() {
        let session = Session::start(SessionKind::Break, 5, None, 10).finish(20, false);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["type"], "break");
        assert_eq!(json["startTime"], 10);
        assert_eq!(json["endTime"], 20);
        assert_eq!(json["completed"], false);
    }
}
