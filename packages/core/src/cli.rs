use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Paper Atlas CLI arguments
#[derive(Debug, Default, Parser)]
#[command(
    name = "paper-atlas",
    version,
    about = "Read-only HTTP API over research-paper metadata grouped by country and year"
)]
pub struct Cli {
    /// SQLite database file holding the `entries` table
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Directory holding index.html, favicon.ico and other static assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}
