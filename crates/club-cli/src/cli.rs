use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "club")]
#[command(about = "Reading club session client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Login server URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Session storage directory, relative to the config directory (overrides storage.dir)
    #[arg(long, global = true)]
    pub storage_dir: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
