use super::toml_config::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ciphers-service")]
#[command(about = "HTTP service that applies a Caesar cipher shift to text")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides [server].host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides [server].port
    #[arg(short, long)]
    pub port: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format, overrides [logging].format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}
