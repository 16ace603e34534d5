// Configuration operations

use anyhow::Result;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils;

pub fn handle_config_command(mut config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Open) => handle_open_command(&config),
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  promptpad Configuration");
    println!("==========================");

    println!("General:");
    println!("  Data dir: {}", config.general.data_dir.display());
    println!("  Editor: {}", config.general.editor);
    println!("  Color: {}", config.general.color);
    println!("  Content preview: {}", config.general.content_preview);
    println!("  Escape markup: {}", config.general.escape_markup);
    if let Some(format) = &config.general.format {
        println!("  Default format: {:?}", format);
    }
    if let Some(quota) = config.general.storage_quota {
        println!("  Storage quota: {} bytes", quota);
    }

    Ok(())
}

fn handle_config_help() -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  promptpad config show    - Show current configuration");
    println!("  promptpad config open    - Open configuration file in editor");
    println!("  promptpad config reset   - Reset configuration to defaults");
    println!();
    println!(
        "Configuration file location: {}",
        Config::config_file_path().display()
    );
    Ok(())
}

fn handle_open_command(config: &Config) -> Result<()> {
    Config::ensure_config_exists()?;

    println!("Opening configuration file in editor...");
    let config_path = Config::config_file_path();
    println!("File: {}", config_path.display());

    utils::edit_file_direct(&config_path, Some(&config.general.editor))?;

    // Catch mistakes before the next run trips over them
    if let Err(e) = Config::load_custom(&config_path) {
        utils::print_warning(&format!("The edited configuration is invalid: {}", e));
    }
    Ok(())
}

fn handle_reset_command(config: &mut Config) -> Result<()> {
    if utils::prompt_yes_no(
        "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
    )? {
        *config = Config::default();
        config.save()?;
        println!("✓ Configuration reset to defaults!");
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}
