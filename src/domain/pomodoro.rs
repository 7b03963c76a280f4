//! Planned session lengths
//!
//! Standard timing is a fixed focus/break pair. Adaptive timing starts the day
//! with a shorter focus block, lengthens it as pomodoros pile up, and gives a
//! long break after every few completed focus sessions.

use super::SessionKind;
use crate::config::{FocusTimerPreference, TimerSettings};

/// Minutes to plan for the next session of `kind`, given how many focus
/// sessions were completed today.
pub fn planned_minutes(
    kind: SessionKind,
    completed_focus_today: u32,
    preference: FocusTimerPreference,
    timer: &TimerSettings,
) -> u32 {
    match (preference, kind) {
        (FocusTimerPreference::Standard, SessionKind::Focus) => timer.standard_focus_minutes,
        (FocusTimerPreference::Standard, SessionKind::Break) => timer.short_break_minutes,
        (FocusTimerPreference::Adaptive, SessionKind::Break) => {
            let every = timer.long_break_every.max(1);
            if completed_focus_today > 0 && completed_focus_today % every == 0 {
                timer.long_break_minutes
            } else {
                timer.short_break_minutes
            }
        }
        (FocusTimerPreference::Adaptive, SessionKind::Focus) => match completed_focus_today {
            0 => timer.adaptive_first_focus_minutes,
            1 | 2 => timer.standard_focus_minutes,
            _ => timer.adaptive_long_focus_minutes,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_timing() {
        let timer = TimerSettings::default();
        for done in [0, 3, 8] {
            assert_eq!(
                planned_minutes(SessionKind::Focus, done, FocusTimerPreference::Standard, &timer),
                25
            );
            assert_eq!(
                planned_minutes(SessionKind::Break, done, FocusTimerPreference::Standard, &timer),
                5
            );
        }
    }

    #[test]
    fn test_adaptive_focus_ramps_up() {
        let timer = TimerSettings::default();
        let focus = |done| {
            planned_minutes(SessionKind::Focus, done, FocusTimerPreference::Adaptive, &timer)
        };
        assert_eq!(focus(0), 20);
        assert_eq!(focus(1), 25);
        assert_eq!(focus(2), 25);
        assert_eq!(focus(3), 30);
        assert_eq!(focus(10), 30);
    }

    #[test]
    fn test_adaptive_long_break_every_fourth() {
        let timer = TimerSettings::default();
        let pause = |done| {
            planned_minutes(SessionKind::Break, done, FocusTimerPreference::Adaptive, &timer)
        };
        assert_eq!(pause(0), 5);
        assert_eq!(pause(1), 5);
        assert_eq!(pause(3), 5);
        assert_eq!(pause(4), 15);
        assert_eq!(pause(8), 15);
    }

    #[test]
    fn test_zero_interval_does_not_panic() {
        let timer = TimerSettings {
            long_break_every: 0,
            ..TimerSettings::default()
        };
        assert_eq!(
            planned_minutes(SessionKind::Break, 2, FocusTimerPreference::Adaptive, &timer),
            15
        );
    }
}
