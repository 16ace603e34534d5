use anyhow::Result;
use clap::Parser;

use promptpad::cli::Cli;
use promptpad::config::Config;
use promptpad::utils::error::{report_error, AppError};
use promptpad::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug)?;

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let mut config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if let Some(data_dir) = cli.data_dir {
        config.general.data_dir = data_dir;
    }
    if !config.general.color {
        colored::control::set_override(false);
    }

    if let Err(e) = cli.command.execute(config, cli.ephemeral) {
        match e.downcast_ref::<AppError>() {
            Some(app_error) => report_error(app_error),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}
