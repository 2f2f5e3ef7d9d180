use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use woven_metadata::commands::{
    self,
    config::{Config, DEFAULT_OUTPUT, DEFAULT_PAGES},
};

/// woven-metadata - python-build-standalone catalog generator
///
/// Scan the python-build-standalone releases on GitHub and write a JSON
/// catalog of the CPython builds they carry.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
///
/// Examples:
///   woven-metadata                              # Scan 3 pages into metadata/python_downloads.json
///   woven-metadata --pages 10 --output out.json
#[derive(Parser, Debug)]
#[command(author, version = env!("WOVEN_METADATA_VERSION"), about)]
struct Cli {
    /// Path to write the JSON catalog
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of release pages to scan
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PAGES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pages: u32,

    /// GitHub token to raise rate limits (also via GITHUB_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    token: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        Config::new(Some(self.output), Some(self.pages), self.token, self.api_url)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = woven_metadata::runtime::RealRuntime;

    commands::build(runtime, cli.into_config()).await
}
