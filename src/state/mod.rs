//! Persisted application state
//!
//! [`AppState`] is the whole document kept in `state.json`: tasks, the running
//! session, session history and the progression state. Every mutating
//! operation that affects progression goes through the pure engine in
//! [`crate::stats`] and commits the returned state only when the engine
//! succeeds, so a failed operation leaves the state untouched.

mod error;
mod store;

pub use error::StateError;
pub use store::StateStore;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{NewTask, Session, SessionKind, Task, TaskId, TaskUpdate};
use crate::stats::{self, GamificationEvent, ProgressionState, calendar};

fn first_task_id() -> TaskId {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub current_session: Option<Session>,

    /// Finished sessions, oldest first
    #[serde(default)]
    pub session_history: Vec<Session>,

    #[serde(default = "first_task_id")]
    pub next_task_id: TaskId,

    /// Last time the daily counters were reset
    #[serde(default)]
    pub last_reset: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub progression: ProgressionState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            current_session: None,
            session_history: Vec::new(),
            next_task_id: first_task_id(),
            last_reset: None,
            progression: ProgressionState::default(),
        }
    }
}

impl AppState {
    /// Fresh state with a newly named pet, reset as of `now`
    pub fn new<Tz: TimeZone>(pet_name: &str, now: &DateTime<Tz>) -> Self {
        Self {
            last_reset: Some(now.with_timezone(&Utc)),
            progression: ProgressionState::with_pet_name(pet_name),
            ..Self::default()
        }
    }

    /// Check the invariants a loaded document must satisfy.
    pub fn validate(&self) -> Result<(), StateError> {
        self.progression.validate()?;

        if let Some(existing) = self.tasks.iter().map(|t| t.id).max() {
            if existing >= self.next_task_id {
                return Err(StateError::TaskCounterBehind {
                    next: self.next_task_id,
                    existing,
                });
            }
        }

        Ok(())
    }

    /// A task that hasn't been deleted
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id && !t.deleted)
    }

    fn task_index(&self, id: TaskId) -> Result<usize, StateError> {
        self.tasks
            .iter()
            .position(|t| t.id == id && !t.deleted)
            .ok_or(StateError::UnknownTask(id))
    }

    fn insert_task<Tz: TimeZone>(
        &mut self,
        new: NewTask,
        parent_id: Option<TaskId>,
        now: &DateTime<Tz>,
    ) -> Result<TaskId, StateError> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(StateError::EmptyTitle);
        }

        let id = self.next_task_id;
        let mut task = Task::new(id, title, now.timestamp_millis());
        task.description = new.description;
        task.priority = new.priority;
        task.category = new.category;
        task.difficulty = new.difficulty;
        task.due_date = new.due_date;
        task.parent_id = parent_id;

        self.tasks.push(task);
        self.next_task_id = id.saturating_add(1);
        tracing::debug!(task_id = id, ?parent_id, "Added task");
        Ok(id)
    }

    pub fn add_task<Tz: TimeZone>(
        &mut self,
        new: NewTask,
        now: &DateTime<Tz>,
    ) -> Result<TaskId, StateError> {
        self.insert_task(new, None, now)
    }

    /// Add a task followed by one subtask per suggested chunk for its
    /// category. Returns the parent id and the subtask ids in order.
    pub fn add_task_with_chunks<Tz: TimeZone>(
        &mut self,
        new: NewTask,
        now: &DateTime<Tz>,
    ) -> Result<(TaskId, Vec<TaskId>), StateError> {
        let parent_title = new.title.trim().to_string();
        let category = new.category;
        let priority = new.priority;
        let due_date = new.due_date;

        let parent = self.insert_task(new, None, now)?;

        let suggestions = category.chunk_suggestions();
        let mut chunks = Vec::with_capacity(suggestions.len());
        for (index, step) in suggestions.iter().enumerate() {
            let chunk = NewTask {
                title: step.to_string(),
                description: Some(format!("Subtask {} of: {}", index + 1, parent_title)),
                priority,
                category,
                difficulty: None,
                due_date,
            };
            chunks.push(self.insert_task(chunk, Some(parent), now)?);
        }

        Ok((parent, chunks))
    }

    pub fn update_task(&mut self, id: TaskId, update: TaskUpdate) -> Result<(), StateError> {
        if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(StateError::EmptyTitle);
        }
        let index = self.task_index(id)?;
        update.apply_to(&mut self.tasks[index]);
        tracing::debug!(task_id = id, "Updated task");
        Ok(())
    }

    /// Soft delete: the task stays in the document but is hidden everywhere.
    pub fn delete_task(&mut self, id: TaskId) -> Result<(), StateError> {
        let index = self.task_index(id)?;
        self.tasks[index].deleted = true;
        tracing::debug!(task_id = id, "Deleted task");
        Ok(())
    }

    pub fn complete_task<Tz: TimeZone>(
        &mut self,
        id: TaskId,
        now: &DateTime<Tz>,
    ) -> Result<Vec<GamificationEvent>, StateError> {
        let index = self.task_index(id)?;
        if self.tasks[index].completed {
            return Err(StateError::TaskAlreadyCompleted(id));
        }

        let mut task = self.tasks[index].clone();
        task.completed = true;
        task.completed_at = Some(now.timestamp_millis());

        let transition = stats::apply_task_completion(&self.progression, &task, now)?;
        self.tasks[index] = task;
        self.progression = transition.state;
        Ok(transition.events)
    }

    /// Mark a completed task pending again. Progression earned by the
    /// completion is kept.
    pub fn reopen_task(&mut self, id: TaskId) -> Result<Vec<GamificationEvent>, StateError> {
        let index = self.task_index(id)?;
        if !self.tasks[index].completed {
            return Err(StateError::TaskNotCompleted(id));
        }

        let transition = stats::apply_task_reversion(&self.progression, &self.tasks[index])?;
        let task = &mut self.tasks[index];
        task.completed = false;
        task.completed_at = None;
        self.progression = transition.state;
        Ok(transition.events)
    }

    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_pending())
    }

    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed && !t.deleted)
    }

    pub fn start_session<Tz: TimeZone>(
        &mut self,
        kind: SessionKind,
        planned_minutes: u32,
        task_id: Option<TaskId>,
        now: &DateTime<Tz>,
    ) -> Result<&Session, StateError> {
        if let Some(running) = &self.current_session {
            return Err(StateError::SessionAlreadyActive(running.kind));
        }
        if let Some(id) = task_id {
            self.task_index(id)?;
        }

        let session = Session::start(kind, planned_minutes, task_id, now.timestamp_millis());
        tracing::debug!(%kind, planned_minutes, ?task_id, "Started session");
        Ok(&*self.current_session.insert(session))
    }

    /// End the running session at `now` and move it into the history.
    pub fn end_session<Tz: TimeZone>(
        &mut self,
        completed: bool,
        now: &DateTime<Tz>,
    ) -> Result<(Session, Vec<GamificationEvent>), StateError> {
        let running = self
            .current_session
            .as_ref()
            .ok_or(StateError::NoActiveSession)?;
        let session = running.clone().finish(now.timestamp_millis(), completed);

        let transition = stats::apply_session_end(&self.progression, &session, completed, now)?;
        self.current_session = None;
        self.session_history.push(session.clone());
        self.progression = transition.state;
        Ok((session, transition.events))
    }

    /// Completed focus sessions that started on `date` in `tz`
    pub fn completed_focus_sessions_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> u32 {
        let count = self
            .session_history
            .iter()
            .filter(|s| s.kind == SessionKind::Focus && s.completed)
            .filter(|s| calendar::date_of(s.start_time, tz) == Some(date))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Reset daily counters when `now` falls on a later calendar day than the
    /// last reset. A no-op for the rest of that day.
    pub fn roll_over_day<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Result<Vec<GamificationEvent>, StateError> {
        let tz = now.timezone();
        let today = now.date_naive();
        let last = self
            .last_reset
            .map(|at| at.with_timezone(&tz).date_naive());
        if last.is_some_and(|day| day >= today) {
            return Ok(Vec::new());
        }

        let transition = stats::apply_day_rollover(&self.progression, today)?;
        self.progression = transition.state;
        self.last_reset = Some(now.with_timezone(&Utc));
        tracing::debug!(%today, "Rolled over to a new day");
        Ok(transition.events)
    }
}
