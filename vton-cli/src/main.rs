use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vton_cli::commands::{handle_probe_command, handle_setup_command, SetupCommands};
use vton_cli::manifest::SetupManifest;

/// Environment bootstrap and diagnostics for the AR/VR virtual try-on stack
#[derive(Parser)]
#[command(name = "vton-cli", version, about)]
struct Cli {
    /// Layout override file (TOML); unset fields keep the built-in deployment layout
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Directory the relative layout resolves against
    #[arg(long, value_name = "DIR", global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare the try-on environment
    Setup {
        #[command(subcommand)]
        command: SetupCommands,
    },

    /// Inspect the environment and exercise the detection entry point
    Probe {
        /// Upper bound on the detection run, in seconds
        #[arg(long, value_name = "SECS", default_value_t = 60)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // transcript goes to stdout, diagnostics stay on stderr
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let manifest = match &cli.config {
        Some(path) => SetupManifest::load(path)?,
        None => SetupManifest::default(),
    };

    match cli.command {
        Commands::Setup { command } => handle_setup_command(command, &cli.root, &manifest).await,
        Commands::Probe { timeout } => handle_probe_command(&cli.root, &manifest, timeout).await,
    }
}
