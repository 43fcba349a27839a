use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wttr-proxy", version, about = "HTTP proxy for wttr.in weather data")]
pub struct Cli {
    /// Path to the TOML config file. A missing file means built-in defaults.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the configured listen port.
    #[arg(long)]
    pub port: Option<u16>,
}
