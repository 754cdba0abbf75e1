use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    let columns = &config.columns;
    println!("Settings:");
    println!("  years_file: {}", config.years_file.display());
    println!("  songs_file: {}", config.songs_file.display());
    println!("  log_level: {}", config.log_level);
    println!(
        "  columns: track_name={} artist_name={} released_year={} released_month={} released_day={} streams={}",
        columns.track_name,
        columns.artist_name,
        columns.released_year,
        columns.released_month,
        columns.released_day,
        columns.streams
    );

    println!("\nPriority: CLI args > ENV vars (HITSHELF_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to point hitshelf at your data.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
