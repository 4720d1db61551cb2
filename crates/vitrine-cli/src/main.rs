//! Vitrine CLI - build and host-document tooling for the app gallery.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_manifest::GalleryLayout;

mod commands;

/// Vitrine - multi-app gallery build tooling
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory whose immediate subdirectories are the apps
    #[arg(long, default_value = "src/apps", global = true)]
    apps_dir: PathBuf,

    /// Root of the build output tree
    #[arg(long, default_value = "dist", global = true)]
    dist_dir: PathBuf,

    /// Entry module file name inside each app directory
    #[arg(long, default_value = "index.tsx", global = true)]
    entry_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List discovered apps
    List {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Build one app's bundle
    Build {
        /// App to build (name or slug; falls back to $VITRINE_APP)
        #[arg(long, env = "VITRINE_APP")]
        app: Option<String>,

        /// Bundler executable to drive
        #[arg(long, default_value = "esbuild")]
        bundler: String,
    },

    /// Generate host documents
    Hostdoc {
        /// Limit to one app (default: every discovered app)
        #[arg(long)]
        app: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vitrine={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let layout = GalleryLayout::new(cli.apps_dir, cli.dist_dir).with_entry_file(&cli.entry_file);

    let result = match cli.command {
        Commands::List { json } => commands::list(&layout, json),
        Commands::Build { app, bundler } => commands::build(&layout, app.as_deref(), &bundler).await,
        Commands::Hostdoc { app } => commands::hostdoc(&layout, app.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
