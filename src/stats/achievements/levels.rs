//! Pet XP and level system
//!
//! Levels are open-ended. The XP needed to leave a level grows by 1.5x per
//! level, and experience is always kept below the current level's threshold.

use serde::{Deserialize, Serialize};

use crate::domain::Difficulty;

/// Happiness ceiling
pub const MAX_HAPPINESS: u8 = 100;

/// Happiness gained per level up
pub const LEVEL_UP_HAPPINESS: u8 = 5;

/// XP needed to go from `level` to `level + 1`: floor(100 * 1.5^(level - 1))
pub fn experience_threshold(level: u32) -> u64 {
    let exponent = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    // float-to-int casts saturate, so huge levels clamp to u64::MAX
    (100.0 * 1.5f64.powi(exponent)).floor() as u64
}

/// XP rewards for various actions
pub struct XpRewards;

impl XpRewards {
    /// Flat XP for any completed session
    pub const SESSION_COMPLETED: u64 = 20;

    /// XP for completing a task of the given difficulty
    pub fn task(difficulty: Option<Difficulty>) -> u64 {
        match difficulty {
            Some(Difficulty::Hard) => 30,
            Some(Difficulty::Medium) => 20,
            Some(Difficulty::Easy) | None => 10,
        }
    }
}

/// Visual evolution of the pet, derived from its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStage {
    Egg,
    CrackedEgg,
    DragonEgg,
    Dragon,
}

impl PetStage {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=4 => Self::Egg,
            5..=9 => Self::CrackedEgg,
            10..=14 => Self::DragonEgg,
            _ => Self::Dragon,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Egg => "🥚",
            Self::CrackedEgg => "🥚💥",
            Self::DragonEgg => "🐉🥚",
            Self::Dragon => "🐲",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Egg => "Egg",
            Self::CrackedEgg => "Hatching",
            Self::DragonEgg => "Dragon egg",
            Self::Dragon => "Dragon",
        }
    }
}

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub stage: PetStage,
}

/// The virtual pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub level: u32,
    /// XP collected inside the current level
    pub experience: u64,
    pub happiness: u8,
    pub name: String,
}

impl Default for Pet {
    fn default() -> Self {
        Self::named("Buddy")
    }
}

impl Pet {
    pub fn named(name: &str) -> Self {
        Self {
            level: 1,
            experience: 0,
            happiness: MAX_HAPPINESS,
            name: name.to_string(),
        }
    }

    /// XP needed to leave the current level
    pub fn experience_to_next_level(&self) -> u64 {
        experience_threshold(self.level)
    }

    /// Progress through the current level (0.0 - 1.0)
    pub fn progress(&self) -> f64 {
        let needed = self.experience_to_next_level();
        if needed == 0 {
            return 1.0;
        }
        (self.experience as f64 / needed as f64).min(1.0)
    }

    pub fn stage(&self) -> PetStage {
        PetStage::for_level(self.level)
    }

    /// Add XP, leveling up while the current threshold is reached.
    ///
    /// Each level up carries the overflow into the next level and cheers the
    /// pet by [`LEVEL_UP_HAPPINESS`].
    pub(crate) fn gain_experience(&mut self, amount: u64) -> Vec<LevelUp> {
        let mut level_ups = Vec::new();
        self.experience = self.experience.saturating_add(amount);

        loop {
            let threshold = experience_threshold(self.level);
            if self.experience < threshold {
                break;
            }
            let old_level = self.level;
            self.experience -= threshold;
            self.level = self.level.saturating_add(1);
            self.cheer(LEVEL_UP_HAPPINESS);
            level_ups.push(LevelUp {
                old_level,
                new_level: self.level,
                stage: self.stage(),
            });
        }

        level_ups
    }

    pub(crate) fn cheer(&mut self, amount: u8) {
        self.happiness = self.happiness.saturating_add(amount).min(MAX_HAPPINESS);
    }

    pub(crate) fn sadden(&mut self, amount: u8) {
        self.happiness = self.happiness.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_threshold() {
        assert_eq!(experience_threshold(1), 100);
        assert_eq!(experience_threshold(2), 150);
        assert_eq!(experience_threshold(3), 225);
        assert_eq!(experience_threshold(4), 337);
        assert_eq!(experience_threshold(5), 506);
        assert_eq!(experience_threshold(u32::MAX), u64::MAX);
    }

    #[test]
    fn test_task_rewards() {
        assert_eq!(XpRewards::task(Some(Difficulty::Hard)), 30);
        assert_eq!(XpRewards::task(Some(Difficulty::Medium)), 20);
        assert_eq!(XpRewards::task(Some(Difficulty::Easy)), 10);
        assert_eq!(XpRewards::task(None), 10);
    }

    #[test]
    fn test_level_up_carries_overflow() {
        let mut pet = Pet::named("Buddy");
        pet.happiness = 90;
        pet.experience = 90;

        let ups = pet.gain_experience(30);
        assert_eq!(ups.len(), 1);
        assert_eq!(ups[0].old_level, 1);
        assert_eq!(ups[0].new_level, 2);
        assert_eq!(pet.level, 2);
        assert_eq!(pet.experience, 20);
        assert_eq!(pet.happiness, 95);
    }

    #[test]
    fn test_happiness_capped_on_level_up() {
        let mut pet = Pet::named("Buddy");
        pet.experience = 99;
        pet.gain_experience(1);
        assert_eq!(pet.happiness, MAX_HAPPINESS);
        assert_eq!(pet.experience, 0);
    }

    #[test]
    fn test_experience_stays_below_threshold() {
        let mut pet = Pet::default();
        let mut last_level = pet.level;
        for step in 0..500u64 {
            pet.gain_experience(10 + step % 25);
            assert!(pet.experience < experience_threshold(pet.level));
            assert!(pet.level >= last_level);
            last_level = pet.level;
        }
        assert!(pet.level > 5);
    }

    #[test]
    fn test_large_award_never_leaves_overflow() {
        let mut pet = Pet::default();
        let ups = pet.gain_experience(100 + 150 + 10);
        assert_eq!(ups.len(), 2);
        assert_eq!(pet.level, 3);
        assert_eq!(pet.experience, 10);
    }

    #[test]
    fn test_sadden_floors_at_zero() {
        let mut pet = Pet::default();
        pet.happiness = 3;
        pet.sadden(5);
        assert_eq!(pet.happiness, 0);
    }

    #[test]
    fn test_pet_stage() {
        assert_eq!(PetStage::for_level(1), PetStage::Egg);
        assert_eq!(PetStage::for_level(5), PetStage::CrackedEgg);
        assert_eq!(PetStage::for_level(14), PetStage::DragonEgg);
        assert_eq!(PetStage::for_level(15), PetStage::Dragon);
    }

    #[test]
    fn test_progress() {
        let mut pet = Pet::default();
        pet.experience = 25;
        assert!((pet.progress() - 0.25).abs() < 0.001);
    }
}
