//! Terminal output helpers shared by commands

use chrono::{DateTime, Local};

use studybuddy::config::Theme;
use studybuddy::stats::GamificationEvent;
use studybuddy::stats::achievements::{Pet, PetStage};

/// Print what a transition did, most notable first per event
pub fn print_events(pet: &Pet, events: &[GamificationEvent]) {
    for event in events {
        match event {
            GamificationEvent::XpAwarded { amount, reason } => {
                println!("  +{} XP ({})", amount, reason);
            }
            GamificationEvent::LevelUp(level_up) => {
                println!("  ⬆️  {} reached level {}!", pet.name, level_up.new_level);
                if PetStage::for_level(level_up.old_level) != level_up.stage {
                    println!(
                        "  {} {} evolved! Stage: {}",
                        level_up.stage.icon(),
                        pet.name,
                        level_up.stage.label()
                    );
                }
            }
            GamificationEvent::AchievementUnlocked(achievement) => {
                println!(
                    "  🏆 Achievement unlocked: {} {} - {}",
                    achievement.icon, achievement.name, achievement.description
                );
            }
            GamificationEvent::StreakStarted => {
                println!("  🔥 New streak started. Come back tomorrow to keep it going.");
            }
            GamificationEvent::StreakExtended { count } => {
                println!("  🔥 {}-day streak", count);
            }
            GamificationEvent::StreakBroken { previous } => {
                println!(
                    "  💔 Your {}-day streak ended. A session today starts a new one.",
                    previous
                );
            }
            GamificationEvent::HappinessChanged { from, to } => {
                let mood = if to > from { "happier" } else { "a little sad" };
                println!("  {} is {} ({} → {})", pet.name, mood, from, to);
            }
        }
    }
}

/// Fixed-width bar for a 0.0 - 1.0 ratio
pub fn progress_bar(ratio: f64, width: usize, theme: Theme) -> String {
    let (full, empty) = match theme {
        Theme::HighContrast => ('#', '-'),
        Theme::Light | Theme::Dark => ('█', '░'),
    };
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut bar = String::with_capacity(width * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n(full, filled));
    bar.extend(std::iter::repeat_n(empty, width - filled));
    bar.push(']');
    bar
}

/// `1h 05m` or `25m`
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    let (hours, mins) = (total / 60, total % 60);
    if hours > 0 {
        format!("{}h {:02}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Local `YYYY-MM-DD HH:MM` for an epoch-millisecond timestamp
pub fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
