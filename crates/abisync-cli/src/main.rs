//! # abisync CLI entry point
//!
//! Parses command-line arguments, sets up logging and the runtime, and
//! dispatches to subcommand handlers. This is the only place that turns an
//! error into a process exit status.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use abisync_cli::auth::run_auth;
use abisync_cli::download::{run_download, DownloadArgs};
use abisync_cli::pins::{run_pins, PinsArgs};
use abisync_cli::upload::{run_upload, UploadArgs};

/// Pin smart-contract ABI bundles on IPFS and restore them later.
#[derive(Parser, Debug)]
#[command(name = "abisync", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bundle the ABIs listed in the manifest and pin them under a name.
    Upload(UploadArgs),

    /// Fetch the bundle pinned under a name and rebuild the artifact files.
    Download(DownloadArgs),

    /// List the pins carrying a name.
    Pins(PinsArgs),

    /// Check that the Pinata credentials are accepted.
    Auth,
}

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)))
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("cannot start async runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let result = runtime.block_on(async {
        match &cli.command {
            Commands::Upload(args) => run_upload(args).await,
            Commands::Download(args) => run_download(args).await,
            Commands::Pins(args) => run_pins(args).await,
            Commands::Auth => run_auth().await,
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
