//! Focus and break session commands

use anyhow::{Result, bail};
use chrono::Local;
use clap::Subcommand;

use studybuddy::{SessionKind, TaskId, planned_minutes};

use super::AppContext;
use super::render::{format_minutes, format_timestamp};

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Start a focus session (or a break)
    Start {
        /// Start a break instead of a focus session
        #[arg(long = "break")]
        take_break: bool,

        /// Override the planned length in minutes
        #[arg(short, long)]
        minutes: Option<u32>,

        /// Task this session works on
        #[arg(short, long)]
        task: Option<TaskId>,
    },

    /// End the running session
    End {
        /// Stop early without completing the session
        #[arg(long)]
        abandon: bool,
    },

    /// Show recent sessions
    History {
        /// How many sessions to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
}

pub fn session_command(ctx: &AppContext, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Start {
            take_break,
            minutes,
            task,
        } => start(ctx, take_break, minutes, task),
        SessionCommand::End { abandon } => end(ctx, abandon),
        SessionCommand::History { limit } => history(ctx, limit),
    }
}

fn start(
    ctx: &AppContext,
    take_break: bool,
    minutes: Option<u32>,
    task: Option<TaskId>,
) -> Result<()> {
    let kind = if take_break {
        SessionKind::Break
    } else {
        SessionKind::Focus
    };

    let now = Local::now();
    let mut state = ctx.load_state(&now)?;

    let done_today = state.completed_focus_sessions_on(now.date_naive(), &Local);
    let minutes = match minutes {
        Some(0) => bail!("A session needs at least one minute"),
        Some(m) => m,
        None => planned_minutes(
            kind,
            done_today,
            ctx.config.preferences.focus_timer,
            &ctx.config.timer,
        ),
    };

    state.start_session(kind, minutes, task, &now)?;
    ctx.save_state(&state)?;

    match kind {
        SessionKind::Focus => println!(
            "Started a {}-minute focus session (pomodoro #{} today)",
            minutes,
            done_today + 1
        ),
        SessionKind::Break => println!("Started a {}-minute break", minutes),
    }
    if let Some(title) = task.and_then(|id| state.task(id)).map(|t| t.title.as_str()) {
        println!("  Working on: {}", title);
    }
    println!("  Run `studybuddy session end` when the timer rings.");
    Ok(())
}

fn end(ctx: &AppContext, abandon: bool) -> Result<()> {
    let now = Local::now();
    let mut state = ctx.load_state(&now)?;

    let (session, events) = state.end_session(!abandon, &now)?;
    ctx.save_state(&state)?;

    let elapsed = format_minutes(session.duration_minutes().unwrap_or_default());
    let label = match session.kind {
        SessionKind::Focus => "Focus session",
        SessionKind::Break => "Break",
    };
    if session.completed {
        println!("{} completed after {}", label, elapsed);
    } else {
        println!("{} abandoned after {}", label, elapsed);
    }
    ctx.report(&state, &events);

    if session.completed && session.kind == SessionKind::Focus {
        let done_today = state.completed_focus_sessions_on(now.date_naive(), &Local);
        let pause = planned_minutes(
            SessionKind::Break,
            done_today,
            ctx.config.preferences.focus_timer,
            &ctx.config.timer,
        );
        println!("Time for a {}-minute break: `studybuddy session start --break`", pause);
    }
    Ok(())
}

fn history(ctx: &AppContext, limit: usize) -> Result<()> {
    let now = Local::now();
    let state = ctx.view_state(&now)?;

    if let Some(running) = &state.current_session {
        println!(
            "Running: {} since {} ({} of {}m)",
            running.kind,
            format_timestamp(running.start_time),
            format_minutes(running.elapsed_minutes(now.timestamp_millis())),
            running.planned_minutes
        );
    }

    if state.session_history.is_empty() {
        println!("No sessions yet.");
        return Ok(());
    }

    let total = state.session_history.len();
    println!("Sessions (latest {} of {}):\n", limit.min(total), total);
    for session in state.session_history.iter().rev().take(limit) {
        let outcome = if session.completed { "completed" } else { "abandoned" };
        let task = session
            .task_id
            .map(|id| format!("  task #{}", id))
            .unwrap_or_default();
        println!(
            "  {}  {:<5}  {:>7}  {}{}",
            format_timestamp(session.start_time),
            session.kind.as_str(),
            format_minutes(session.duration_minutes().unwrap_or_default()),
            outcome,
            task
        );
    }
    Ok(())
}
