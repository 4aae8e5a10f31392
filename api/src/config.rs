//! Command-line configuration for the server

use crate::translate::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "quran-lookup-api")]
#[command(about = "Search Quran verses and look up words in Arabic, English or Romanized Arabic")]
pub struct ServerConfig {
    /// SQLite store produced by `import-quran`
    #[arg(short, long, default_value = "quran.db")]
    pub database: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Translation provider endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub translate_endpoint: String,

    /// Upper bound on a single translation request
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub translate_timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
