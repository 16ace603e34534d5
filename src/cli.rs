use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::manager::{self, config as config_cmd, crud, query, shell};
use crate::view::ListFormat;

#[derive(Parser)]
#[command(name = "promptpad")]
#[command(about = "Keep a personal library of reusable prompts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, value_name = "DIR", help = "Store prompts in DIR instead of the configured data directory")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, help = "Keep prompts in memory only; nothing is written to disk")]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, ephemeral: bool) -> Result<()> {
        let session = || manager::open_session(&config, ephemeral);

        match self {
            Commands::Add(args) => crud::handle_add_command(&config, &mut session(), &args)?,
            Commands::Edit(args) => crud::handle_edit_command(&config, &mut session(), &args)?,
            Commands::Delete(args) => crud::handle_delete_command(&mut session(), &args)?,
            Commands::Show(args) => crud::handle_show_command(&mut session(), &args),
            Commands::List(args) => query::handle_list_command(&config, &mut session(), &args)?,
            Commands::Copy(args) => query::handle_copy_command(&mut session(), &args)?,
            Commands::Shell => shell::run_shell(&config, &mut session())?,
            Commands::Config(args) => config_cmd::handle_config_command(config.clone(), args.command)?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new prompt
    Add(AddArgs),

    /// Edit an existing prompt
    Edit(EditArgs),

    /// Delete a prompt
    Delete(DeleteArgs),

    /// List prompts, optionally filtered by title
    List(ListArgs),

    /// Show prompt details
    Show(ShowArgs),

    /// Copy a prompt's content to the clipboard
    Copy(CopyArgs),

    /// Interactive editing session
    Shell,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long, help = "Write the content in an external editor")]
    pub editor: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[arg(help = "Prompt ID to edit")]
    pub id: String,

    #[arg(short = 'T', long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long, help = "Edit the content in an external editor")]
    pub editor: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,

    #[arg(short, long, help = "Skip confirmation")]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(short = 'q', long, help = "Case-insensitive title filter")]
    pub query: Option<String>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    #[arg(help = "Prompt ID")]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Open,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "promptpad",
            "--ephemeral",
            "-d",
            "--data-dir",
            "/tmp/pp",
            "list",
        ])
        .unwrap();
        assert!(cli.ephemeral);
        assert!(cli.debug);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/pp")));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_add_args() {
        let cli = Cli::try_parse_from(["promptpad", "add", "-T", "Review", "--content", "Check this"]).unwrap();
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.title.as_deref(), Some("Review"));
        assert_eq!(args.content.as_deref(), Some("Check this"));
        assert!(!args.editor);
    }

    #[test]
    fn test_list_format_and_query() {
        let cli = Cli::try_parse_from(["promptpad", "list", "-q", "trans", "-f", "html"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.query.as_deref(), Some("trans"));
        assert_eq!(args.format, Some(ListFormat::Html));
    }

    #[test]
    fn test_edit_and_delete_require_id() {
        assert!(Cli::try_parse_from(["promptpad", "edit"]).is_err());
        assert!(Cli::try_parse_from(["promptpad", "delete"]).is_err());

        let cli = Cli::try_parse_from(["promptpad", "delete", "lqu5m2o0", "-f"]).unwrap();
        let Commands::Delete(args) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(args.id, "lqu5m2o0");
        assert!(args.force);
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["promptpad", "config", "reset"]).unwrap();
        let Commands::Config(args) = cli.command else {
            panic!("expected config");
        };
        assert_eq!(args.command, Some(ConfigCommands::Reset));
    }
}
