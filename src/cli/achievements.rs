//! Achievements command implementation

use anyhow::Result;
use chrono::Local;

use super::AppContext;
use super::render::format_timestamp;
use studybuddy::stats::achievements::{ACHIEVEMENTS, Achievement, requirement_progress};

/// List the whole catalog with earned dates and progress towards the rest
pub fn achievements_command(ctx: &AppContext) -> Result<()> {
    let now = Local::now();
    let state = ctx.view_state(&now)?;
    let progression = &state.progression;

    println!(
        "Achievements ({}/{}):\n",
        progression.achievements.len(),
        Achievement::total_count()
    );

    for achievement in ACHIEVEMENTS {
        let earned = progression
            .achievements
            .iter()
            .find(|a| a.id == achievement.id);

        match earned {
            Some(earned) => println!(
                "  ✓ {} {} - {} (earned {})",
                achievement.icon,
                achievement.name,
                achievement.description,
                format_timestamp(earned.earned_at)
            ),
            None => {
                let progress = requirement_progress(progression, achievement.requirement)
                    .map(|value| format!(" [{:.0}/{}]", value.floor(), achievement.threshold))
                    .unwrap_or_default();
                println!(
                    "    {} {} - {}{}",
                    achievement.icon, achievement.name, achievement.description, progress
                );
            }
        }
    }

    Ok(())
}
