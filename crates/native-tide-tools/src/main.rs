//! Native Tide CLI - Project scaffolding for Native Tide mobile apps

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, ScaffoldError};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Native Tide product configuration
#[derive(Clone)]
pub struct NativeTideConfig;

impl NativeTideConfig {
    /// Workspace root, where the bundled template store lives
    fn workspace_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    /// Canonical project the template store is extracted from
    fn default_sync_source() -> PathBuf {
        Self::workspace_root().join("..").join("native-tide")
    }
}

impl ProductConfig for NativeTideConfig {
    fn name(&self) -> &'static str {
        "native-tide"
    }

    fn display_name(&self) -> &'static str {
        "Native Tide Starter Kit"
    }

    fn default_template_dir(&self) -> PathBuf {
        Self::workspace_root().join("templates").join("native-tide")
    }

    fn template_dir_env(&self) -> &'static str {
        "NATIVE_TIDE_TEMPLATE_DIR"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Native Tide mobile apps"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        vec![
            format!("cd {}", dir.display()),
            "yarn install".to_string(),
            "yarn start".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-native-tide")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Native Tide project
    Create(CliCreateArgs),
    /// Refresh the bundled template from the source project (for development use)
    SyncTemplate(SyncTemplateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// App name (letters, numbers, spaces and hyphens)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local template directory to use instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Also replace placeholders in file and directory names
    #[arg(long = "rewrite-paths")]
    pub rewrite_paths: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            directory: args.directory,
            template_dir: args.template_dir,
            rewrite_paths: args.rewrite_paths,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct SyncTemplateArgs {
    /// Source project to copy from (defaults to ../native-tide next to this repository)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Template directory to overwrite
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// YAML file overriding the files, directories and exclusions to sync
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

/// Parse the command line, describing the binary from the product config
fn parse_args<C: ProductConfig>(config: &C) -> Args {
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: Args, config: &NativeTideConfig) -> Result<()> {
    match args.command {
        Some(Command::Create(create_args)) => {
            let result = scaffolder_core::run(config, create_args.into()).await;

            // Ensure cursor is visible on normal exit
            scaffolder_core::tui::restore_cursor();

            result
        }
        Some(Command::SyncTemplate(sync_args)) => {
            let source = sync_args
                .source
                .unwrap_or_else(NativeTideConfig::default_sync_source);
            scaffolder_core::sync::sync_template(
                config,
                &source,
                sync_args.template_dir.as_deref(),
                sync_args.manifest.as_deref(),
            )?;
            Ok(())
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = scaffolder_core::run(config, CreateArgs::default()).await;

            scaffolder_core::tui::restore_cursor();

            result
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        scaffolder_core::tui::restore_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        scaffolder_core::tui::restore_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let config = NativeTideConfig;
    let args = parse_args(&config);

    if let Err(error) = run(args, &config).await {
        if error.downcast_ref::<ScaffoldError>().is_some() {
            eprintln!("\n{} {:#}", "Error:".red(), error);
        } else {
            eprintln!("\n{} {:#}", "Unexpected error:".red(), error);
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_create_flags() {
        let args = Args::try_parse_from([
            "create-native-tide",
            "create",
            "--name",
            "My App",
            "-d",
            "my-app",
            "--yes",
        ])
        .unwrap();

        match args.command {
            Some(Command::Create(create)) => {
                assert_eq!(create.name.as_deref(), Some("My App"));
                assert_eq!(create.directory, Some(PathBuf::from("my-app")));
                assert!(create.yes);
                assert!(!create.rewrite_paths);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_sync_template() {
        let args = Args::try_parse_from([
            "create-native-tide",
            "sync-template",
            "--source",
            "../native-tide",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Some(Command::SyncTemplate(SyncTemplateArgs { source: Some(_), .. }))
        ));
    }

    #[test]
    fn test_bundled_template_location() {
        let dir = NativeTideConfig.default_template_dir();
        assert!(dir.ends_with("templates/native-tide"));
        assert!(dir.join("app.json").is_file());
    }

    #[test]
    fn test_help_uses_product_description() {
        let help = Args::command()
            .about(NativeTideConfig.cli_description())
            .render_help()
            .to_string();
        assert!(help.contains("CLI for scaffolding Native Tide mobile apps"));
        assert_eq!(NativeTideConfig.name(), "native-tide");
    }

    #[test]
    fn test_next_steps() {
        let steps = NativeTideConfig.next_steps(Path::new("mycoolapp"));
        assert_eq!(steps, vec!["cd mycoolapp", "yarn install", "yarn start"]);
    }
}
