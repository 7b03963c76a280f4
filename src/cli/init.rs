//! Init and reset command implementations

use anyhow::{Result, bail};
use std::path::PathBuf;

use super::AppContext;
use studybuddy::config::Config;

/// Write the default config to `config_path` (or ~/.studybuddy/config.toml)
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

/// Delete the state file after explicit confirmation
pub fn reset_command(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes {
        bail!(
            "This deletes all tasks, sessions and progress in {}\nUse --yes to confirm.",
            ctx.store.path().display()
        );
    }

    if ctx.store.reset()? {
        println!("Reset: {}", ctx.store.path().display());
    } else {
        println!("Nothing to reset.");
    }
    Ok(())
}
