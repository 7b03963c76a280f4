//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod render;
pub mod session;
pub mod status;
pub mod task;

use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::PathBuf;

use studybuddy::config::Config;
use studybuddy::state::{AppState, StateStore};
use studybuddy::stats::GamificationEvent;

/// Config and state store shared by every command
pub struct AppContext {
    pub config: Config,
    pub store: StateStore,
}

impl AppContext {
    pub fn open(state_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(Config::global_config_path);
        let config = Config::load_or_default(&config_path)?;
        let store = state_path
            .map(StateStore::new)
            .unwrap_or_else(StateStore::open_default);
        tracing::debug!(
            "Using config {} and state {}",
            config_path.display(),
            store.path().display()
        );
        Ok(Self { config, store })
    }

    /// Load state for a command that will save it back. Events from the day
    /// rollover are shown.
    pub fn load_state(&self, now: &DateTime<Local>) -> Result<AppState> {
        let (state, events) = self.store.load(&self.config.preferences.pet_name, now)?;
        self.report(&state, &events);
        Ok(state)
    }

    /// Load state for display only
    pub fn view_state(&self, now: &DateTime<Local>) -> Result<AppState> {
        let (state, _) = self.store.load(&self.config.preferences.pet_name, now)?;
        Ok(state)
    }

    pub fn save_state(&self, state: &AppState) -> Result<()> {
        self.store.save(state)
    }

    /// Print gamification events unless the user turned gamification off
    pub fn report(&self, state: &AppState, events: &[GamificationEvent]) {
        if self.config.preferences.gamification_enabled {
            render::print_events(&state.progression.pet, events);
        }
    }
}
