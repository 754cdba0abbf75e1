use anyhow::{Context, Result};
use clap::Parser;
use hitshelf_core::{load_catalog, Catalog};
use std::path::PathBuf;

mod commands;
mod config;
mod tui;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "hitshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Year table CSV (default: count-by-release-year.csv)
    #[arg(long, global = true)]
    years: Option<PathBuf>,

    /// Song table CSV (default: spotify-2023.csv)
    #[arg(long, global = true)]
    songs: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Browse songs year by year in an interactive viewer
    ///
    /// Opens a terminal UI listing every release year. Selecting a year shows
    /// its songs one at a time in alphabetical order, together with the
    /// song's position within the year and across the whole catalog.
    Browse,
    /// List release years and how many songs each one holds
    Years {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print every song released in a year
    Songs {
        /// Release year label, e.g. 1994
        year: String,
    },
    /// Show which year a track belongs to and its overall position
    Find {
        /// Exact track name (case-sensitive)
        track: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn open_catalog(config: &Config) -> Result<Catalog> {
    load_catalog(&config.years_file, &config.songs_file, &config.columns).with_context(|| {
        format!(
            "Failed to load catalog from {} and {}",
            config.years_file.display(),
            config.songs_file.display()
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?.with_paths(cli.years, cli.songs);
    init_logging(&config.log_level);
    log::debug!(
        "Using years file {} and songs file {}",
        config.years_file.display(),
        config.songs_file.display()
    );

    match cli.command {
        Commands::Browse => {
            let catalog = open_catalog(&config)?;
            commands::run_browse(&catalog)?;
        }
        Commands::Years { json } => {
            let catalog = open_catalog(&config)?;
            commands::list_years(&catalog, json)?;
        }
        Commands::Songs { year } => {
            let catalog = open_catalog(&config)?;
            commands::list_songs(&catalog, &year)?;
        }
        Commands::Find { track } => {
            let catalog = open_catalog(&config)?;
            commands::find_track(&catalog, &track)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
