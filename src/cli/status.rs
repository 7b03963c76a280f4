//! Status command implementation

use anyhow::Result;
use chrono::Local;

use super::AppContext;
use super::render::{format_minutes, progress_bar};
use studybuddy::stats::achievements::{Achievement, MAX_HAPPINESS};

/// Show pet, streak, today's counters and the running session
pub fn status_command(ctx: &AppContext) -> Result<()> {
    let now = Local::now();
    let state = ctx.view_state(&now)?;
    let today = now.date_naive();
    let prefs = &ctx.config.preferences;
    let progression = &state.progression;

    if prefs.gamification_enabled {
        let pet = &progression.pet;
        let stage = pet.stage();
        println!(
            "{} {} the {} - level {}",
            stage.icon(),
            pet.name,
            stage.label(),
            pet.level
        );
        println!(
            "  XP        {} {}/{}",
            progress_bar(pet.progress(), 20, prefs.theme),
            pet.experience,
            pet.experience_to_next_level()
        );
        println!(
            "  Happiness {} {}/{}",
            progress_bar(
                f64::from(pet.happiness) / f64::from(MAX_HAPPINESS),
                20,
                prefs.theme
            ),
            pet.happiness,
            MAX_HAPPINESS
        );
        println!();
    }

    let streaks = &progression.streaks;
    let streak_note = if streaks.counted_on(today) {
        "today counted"
    } else if streaks.is_active(today) {
        "complete a session today to keep it"
    } else {
        "complete a session to start one"
    };
    println!(
        "Streak: {} days (longest {}), {}",
        streaks.current, streaks.longest, streak_note
    );

    let stats = &progression.stats;
    println!(
        "Today: {} tasks, {} pomodoros",
        stats.daily_tasks_completed,
        state.completed_focus_sessions_on(today, &Local)
    );
    println!(
        "Total: {} tasks, {} sessions, {} focused",
        stats.tasks_completed,
        stats.sessions_completed,
        format_minutes(stats.total_focus_time)
    );

    let pending = state.pending_tasks().count();
    let overdue = state.pending_tasks().filter(|t| t.is_overdue(today)).count();
    if overdue > 0 {
        println!("Tasks: {} pending, {} overdue", pending, overdue);
    } else {
        println!("Tasks: {} pending", pending);
    }

    if prefs.gamification_enabled {
        println!(
            "Achievements: {}/{}",
            progression.achievements.len(),
            Achievement::total_count()
        );
    }

    if let Some(running) = &state.current_session {
        println!(
            "\n{} session running: {} of {}m",
            running.kind,
            format_minutes(running.elapsed_minutes(now.timestamp_millis())),
            running.planned_minutes
        );
    }

    Ok(())
}
