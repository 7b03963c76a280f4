//! Domain types for tasks and focus sessions

mod pomodoro;
mod session;
mod task;

pub use pomodoro::planned_minutes;
pub use session::{Session, SessionKind};
pub use task::{Category, Difficulty, NewTask, Priority, Task, TaskId, TaskUpdate};
