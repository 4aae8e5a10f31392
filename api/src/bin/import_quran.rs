//! Load `quran_en.json` into the SQLite store served by the API

use anyhow::{Context, Result};
use clap::Parser;
use quran_lookup::schema::{import_surahs, parse_surahs};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "import-quran")]
#[command(about = "Import surahs and verses from JSON into a SQLite database")]
struct Cli {
    /// Surah list with nested verses
    #[arg(short, long, default_value = "quran_en.json")]
    input: PathBuf,

    /// Database to create or update
    #[arg(short, long, default_value = "quran.db")]
    database: PathBuf,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();

    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {:?}", cli.input))?;
    let surahs = parse_surahs(&json)?;

    let mut conn = Connection::open(&cli.database)
        .with_context(|| format!("Failed to open {:?}", cli.database))?;
    let stats = import_surahs(&mut conn, &surahs)?;

    tracing::info!(
        "Imported {} surahs, {} verses, {} roots into {:?}",
        stats.surahs,
        stats.verses,
        stats.roots,
        cli.database
    );
    Ok(())
}
