//! Task commands

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use studybuddy::config::TaskStyle;
use studybuddy::{Category, Difficulty, NewTask, Priority, Task, TaskId, TaskUpdate};

use super::AppContext;

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Add a new task
    Add(AddArgs),

    /// List pending tasks
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
    },

    /// Mark a task as done
    Done { id: TaskId },

    /// Mark a completed task as pending again
    Undo { id: TaskId },

    /// Delete a task
    Rm { id: TaskId },

    /// Change a task's fields
    Edit(EditArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// What needs doing
    title: String,

    #[arg(short, long)]
    description: Option<String>,

    /// Drives the XP the task is worth
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,

    #[arg(long, value_enum, default_value_t = Category::General)]
    category: Category,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<NaiveDate>,

    /// Also add the suggested subtasks for the category
    #[arg(long)]
    chunk: bool,
}

#[derive(Args)]
pub struct EditArgs {
    id: TaskId,

    #[arg(long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    #[arg(long, value_enum)]
    category: Option<Category>,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<NaiveDate>,
}

pub fn task_command(ctx: &AppContext, command: TaskCommand) -> Result<()> {
    match command {
        TaskCommand::Add(args) => add(ctx, args),
        TaskCommand::List { all } => list(ctx, all),
        TaskCommand::Done { id } => done(ctx, id),
        TaskCommand::Undo { id } => undo(ctx, id),
        TaskCommand::Rm { id } => remove(ctx, id),
        TaskCommand::Edit(args) => edit(ctx, args),
    }
}

fn add(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let now = Local::now();
    let mut state = ctx.load_state(&now)?;

    let new = NewTask {
        title: args.title,
        description: args.description,
        priority: args.priority,
        category: args.category,
        difficulty: args.difficulty,
        due_date: args.due,
    };

    if args.chunk {
        let (id, chunks) = state.add_task_with_chunks(new, &now)?;
        ctx.save_state(&state)?;
        println!("Added #{} with {} subtasks:", id, chunks.len());
        for chunk in chunks.iter().filter_map(|id| state.task(*id)) {
            println!("    #{} {}", chunk.id, chunk.title);
        }
        return Ok(());
    }

    let id = state.add_task(new, &now)?;
    ctx.save_state(&state)?;
    println!("Added #{}", id);

    if ctx.config.preferences.task_style == TaskStyle::Chunked {
        println!("  Tip: re-add with --chunk to split it into smaller steps:");
        for step in args.category.chunk_suggestions() {
            println!("    - {}", step);
        }
    }
    Ok(())
}

fn list(ctx: &AppContext, all: bool) -> Result<()> {
    let now = Local::now();
    let state = ctx.view_state(&now)?;
    let today = now.date_naive();

    let tasks: Vec<&Task> = if all {
        state.tasks.iter().filter(|t| !t.deleted).collect()
    } else {
        state.pending_tasks().collect()
    };

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let pending = state.pending_tasks().count();
    println!("Tasks ({} pending):\n", pending);
    for task in tasks {
        print_task(task, today);
    }
    Ok(())
}

fn print_task(task: &Task, today: NaiveDate) {
    let mark = if task.completed { "x" } else { " " };
    let indent = if task.parent_id.is_some() { "      " } else { "  " };

    let mut details = vec![task.priority.to_string()];
    if let Some(difficulty) = task.difficulty {
        details.push(difficulty.to_string());
    }
    if let Some(due) = task.due_date {
        details.push(format!("due {}", due));
    }
    if task.is_overdue(today) {
        details.push("overdue".to_string());
    }

    println!(
        "{}#{} [{}] {} {} ({})",
        indent,
        task.id,
        mark,
        task.category.icon(),
        task.title,
        details.join(", ")
    );
    if let Some(desc) = &task.description {
        println!("{}    {}", indent, desc);
    }
}

fn done(ctx: &AppContext, id: TaskId) -> Result<()> {
    let now = Local::now();
    let mut state = ctx.load_state(&now)?;

    let events = state.complete_task(id, &now)?;
    ctx.save_state(&state)?;

    if let Some(task) = state.task(id) {
        println!("Completed #{}: {}", id, task.title);
    }
    ctx.report(&state, &events);
    Ok(())
}

fn undo(ctx: &AppContext, id: TaskId) -> Result<()> {
    let now = Local::now();
    let mut state = ctx.load_state(&now)?;

    state.reopen_task(id)?;
    ctx.save_state(&state)?;
    println!("Reopened #{} (XP and achievements are kept)", id);
    Ok(())
}

fn remove(ctx: &AppContext, id: TaskId) -> Result<()> {
    let now = Local::now();
    let mut state = ctx.load_state(&now)?;

    state.delete_task(id)?;
    ctx.save_state(&state)?;
    println!("Deleted #{}", id);
    Ok(())
}

fn edit(ctx: &AppContext, args: EditArgs) -> Result<()> {
    let update = TaskUpdate {
        title: args.title,
        description: args.description,
        priority: args.priority,
        category: args.category,
        difficulty: args.difficulty,
        due_date: args.due,
    };
    if update.is_empty() {
        bail!("Nothing to change. Pass at least one of --title, --description, --difficulty, --priority, --category or --due.");
    }

    let now = Local::now();
    let mut state = ctx.load_state(&now)?;
    state.update_task(args.id, update)?;
    ctx.save_state(&state)?;

    if let Some(task) = state.task(args.id) {
        print_task(task, now.date_naive());
    }
    Ok(())
}
