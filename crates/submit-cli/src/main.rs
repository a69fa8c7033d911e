mod cmd;
mod defaults;
mod editor;
mod output;
mod prompt;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, create::CreateArgs, templates::KindArg};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "submit",
    about = "Compose a pull request or issue interactively, then submit or cancel with one key",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: auto-detect from .submit/ or .git/)
    #[arg(long, global = true, env = "SUBMIT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a pull request (defaults from the latest commit)
    Pr(CreateArgs),

    /// Compose an issue
    Issue(CreateArgs),

    /// List body templates found in the repository
    Templates {
        /// Template kind
        #[arg(long, value_enum, default_value = "pr")]
        kind: KindArg,
    },

    /// Inspect and initialize the survey configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Pr(args) => cmd::create::run(&root, KindArg::Pr, args, cli.json),
        Commands::Issue(args) => cmd::create::run(&root, KindArg::Issue, args, cli.json),
        Commands::Templates { kind } => cmd::templates::run(&root, kind, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
