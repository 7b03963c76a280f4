use thiserror::Error;

use crate::domain::TaskId;
use crate::stats::ProgressionError;

/// Errors from operations on [`AppState`](super::AppState)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Task #{0} not found")]
    UnknownTask(TaskId),

    #[error("Task #{0} is already completed")]
    TaskAlreadyCompleted(TaskId),

    #[error("Task #{0} is not completed")]
    TaskNotCompleted(TaskId),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("A {0} session is already running")]
    SessionAlreadyActive(crate::domain::SessionKind),

    #[error("No session is running")]
    NoActiveSession,

    #[error("Next task id {next} is not above existing task #{existing}")]
    TaskCounterBehind { next: TaskId, existing: TaskId },

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}
