use anyhow::{Context, Result};
use confyg::{env, Confygery};
use hitshelf_core::ColumnLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for hitshelf.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (HITSHELF_* prefix)
/// 3. Config file (~/.config/hitshelf/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Year table: a year count line, a header line, then `year,count` rows.
    ///
    /// Can be set via:
    /// - CLI: --years /path/to/file.csv
    /// - ENV: HITSHELF_YEARS_FILE
    /// - Config: years_file = "..."
    #[serde(default = "default_years_file")]
    pub years_file: PathBuf,

    /// Song table: a headed CSV with one row per song, grouped by year in
    /// the same order as the year table.
    ///
    /// Can be set via:
    /// - CLI: --songs /path/to/file.csv
    /// - ENV: HITSHELF_SONGS_FILE
    /// - Config: songs_file = "..."
    #[serde(default = "default_songs_file")]
    pub songs_file: PathBuf,

    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Column positions in the song table.
    #[serde(default)]
    pub columns: ColumnLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            years_file: default_years_file(),
            songs_file: default_songs_file(),
            log_level: default_log_level(),
            columns: ColumnLayout::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/hitshelf/config.toml
    /// Reads environment variables with HITSHELF_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("hitshelf");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply `--years` / `--songs` overrides from the command line.
    #[must_use]
    pub fn with_paths(mut self, years: Option<PathBuf>, songs: Option<PathBuf>) -> Self {
        if let Some(years) = years {
            self.years_file = years;
        }
        if let Some(songs) = songs {
            self.songs_file = songs;
        }
        self
    }
}

fn default_years_file() -> PathBuf {
    PathBuf::from("count-by-release-year.csv")
}

fn default_songs_file() -> PathBuf {
    PathBuf::from("spotify-2023.csv")
}

fn default_log_level() -> String {
    String::from("info")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/hitshelf/config.toml
/// - macOS: ~/Library/Application Support/hitshelf/config.toml
/// - Windows: %APPDATA%\hitshelf\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hitshelf")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Hitshelf Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (HITSHELF_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Year table: first line is the number of years, second line a header,
# then one `year,count` line per year.
#
# Can also be set via:
# - CLI: hitshelf --years /data/count-by-release-year.csv browse
# - Environment: HITSHELF_YEARS_FILE=/data/count-by-release-year.csv
years_file = "count-by-release-year.csv"

# Song table: headed CSV, rows grouped by year in year-table order.
#
# Can also be set via:
# - CLI: hitshelf --songs /data/spotify-2023.csv browse
# - Environment: HITSHELF_SONGS_FILE=/data/spotify-2023.csv
songs_file = "spotify-2023.csv"

# Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
log_level = "info"

# Zero-based column positions in the song table.
# The defaults match the "Most Streamed Spotify Songs 2023" export.
[columns]
track_name = 0
artist_name = 1
released_year = 3
released_month = 4
released_day = 5
streams = 8
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.years_file, PathBuf::from("count-by-release-year.csv"));
        assert_eq!(config.songs_file, PathBuf::from("spotify-2023.csv"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.columns, ColumnLayout::SPOTIFY_2023);
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_paths_override() {
        let config = Config::default().with_paths(Some(PathBuf::from("/tmp/years.csv")), None);
        assert_eq!(config.years_file, PathBuf::from("/tmp/years.csv"));
        assert_eq!(config.songs_file, PathBuf::from("spotify-2023.csv"));
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let parsed: Config = toml::from_str(example_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.years_file, defaults.years_file);
        assert_eq!(parsed.songs_file, defaults.songs_file);
        assert_eq!(parsed.log_level, defaults.log_level);
        assert_eq!(parsed.columns, defaults.columns);
    }

    #[test]
    fn test_partial_columns_table() {
        let parsed: Config = toml::from_str("[columns]\nstreams = 2\n").unwrap();
        assert_eq!(parsed.columns.streams, 2);
        assert_eq!(parsed.columns.track_name, 0);
    }
}
