use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_editor::{EditorConfig, DEFAULT_CONFIG_NAME};
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Start sessions with an empty canvas
    #[arg(long)]
    pub empty: bool,

    /// Session name used to seed instance ids
    #[arg(short, long)]
    pub session_name: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = EditorConfig::path_in(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut config = EditorConfig::default();
    config.seed_document = !args.empty;
    if let Some(name) = args.session_name {
        config.session_name = name;
    }

    let content = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, format!("{}\n", content))?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}
