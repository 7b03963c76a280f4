//! JSON persistence for [`AppState`]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};

use super::AppState;
use crate::config::{Config, write_locked};
use crate::stats::GamificationEvent;

/// Reads and writes the state document at a fixed path
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.studybuddy/state.json`
    pub fn default_path() -> PathBuf {
        Config::global_config_dir().join("state.json")
    }

    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the state and roll it over to `now`'s calendar day.
    ///
    /// A missing file yields a fresh state with a pet called `pet_name`. A file
    /// that can't be parsed is logged and replaced by a fresh state; it is
    /// overwritten on the next save. A document that parses but breaks a state
    /// invariant is an error and the file is left as it is, like any other I/O
    /// failure. The returned events come from the day rollover (e.g. a broken
    /// streak).
    pub fn load<Tz: TimeZone>(
        &self,
        pet_name: &str,
        now: &DateTime<Tz>,
    ) -> Result<(AppState, Vec<GamificationEvent>)> {
        if !self.path.exists() {
            tracing::debug!("No state at {}, starting fresh", self.path.display());
            return Ok((AppState::new(pet_name, now), Vec::new()));
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file: {}", self.path.display()))?;

        let mut state = match serde_json::from_str::<AppState>(&content) {
            Ok(state) => {
                state.validate().with_context(|| {
                    format!("State file is inconsistent: {}", self.path.display())
                })?;
                state
            }
            Err(e) => {
                tracing::warn!(
                    "State file {} is corrupt ({}), starting fresh",
                    self.path.display(),
                    e
                );
                AppState::new(pet_name, now)
            }
        };

        let events = state
            .roll_over_day(now)
            .with_context(|| "Failed to roll over to the current day")?;
        Ok((state, events))
    }

    /// Write the whole document, replacing what is on disk.
    pub fn save(&self, state: &AppState) -> Result<()> {
        let content =
            serde_json::to_string_pretty(state).with_context(|| "Failed to serialize state")?;
        write_locked(&self.path, &content)?;
        tracing::debug!("Saved state to {}", self.path.display());
        Ok(())
    }

    /// Delete the state file. Returns false if there was nothing to delete.
    pub fn reset(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove state file: {}", self.path.display()))?;
        tracing::info!("Removed {}", self.path.display());
        Ok(true)
    }
}
