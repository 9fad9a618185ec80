use anyhow::{Context, Result};
use dotrunner_core::Settings;
use tracing::info;

use crate::cli::GlobalArgs;

pub fn init_command(global: &GlobalArgs, force: bool) -> Result<()> {
    let project_root = match &global.workspace {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config_path = global
        .config
        .clone()
        .unwrap_or_else(|| project_root.join(".dotrunner.json"));

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let settings = Settings {
        build: Some(true),
        restore: Some(true),
        test_project_path: None,
        show_code_lens: Some(true),
    };
    settings
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote default settings to {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
