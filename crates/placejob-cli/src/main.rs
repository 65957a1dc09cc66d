mod decode;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use placejob_client::{JobClient, JobParams};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placejob-cli")]
#[command(about = "Run place-scraping jobs and decode their output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a job, wait for it, and print the decoded places as JSON
    Fetch(FetchArgs),
    /// Decode a local CSV export (or a `.json` document dump) without the network
    Decode {
        /// Path to the file to decode
        file: PathBuf,
    },
}

#[derive(Debug, clap::Args)]
struct FetchArgs {
    /// Free-text search, e.g. "coffee shops in New York"
    query: String,
    #[arg(long, default_value = "en")]
    lang: String,
    #[arg(long, default_value_t = 15)]
    zoom: u32,
    /// Search radius in meters
    #[arg(long, default_value_t = 5000)]
    radius: u32,
    /// Result pages to scroll through
    #[arg(long, default_value_t = 1)]
    depth: u32,
    #[arg(long)]
    fast_mode: bool,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lat: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    lon: String,
    /// Server-side time budget in seconds
    #[arg(long, default_value_t = 180)]
    max_time: u64,
    /// Proxy URL for the scraper; repeat for several
    #[arg(long = "proxy")]
    proxies: Vec<String>,
    /// Service base URL (overrides `PLACEJOB_BASE_URL`)
    #[arg(long)]
    base_url: Option<String>,
    /// Polling deadline in seconds (overrides `PLACEJOB_TOTAL_TIMEOUT_SECS`)
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Seconds between status checks (overrides `PLACEJOB_POLL_INTERVAL_SECS`)
    #[arg(long)]
    poll_interval_secs: Option<u64>,
}

impl FetchArgs {
    fn job_params(&self) -> JobParams {
        JobParams {
            query: self.query.clone(),
            lang: self.lang.clone(),
            zoom: self.zoom,
            radius: self.radius,
            depth: self.depth,
            fast_mode: self.fast_mode,
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            max_time: self.max_time,
            proxies: self.proxies.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = placejob_core::load_client_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch(args) => {
            if let Some(base_url) = &args.base_url {
                config.base_url.clone_from(base_url);
            }
            if let Some(secs) = args.timeout_secs {
                config.total_timeout_secs = secs;
            }
            if let Some(secs) = args.poll_interval_secs {
                config.poll_interval_secs = secs;
            }

            let client = JobClient::new(&config)?;
            tracing::info!(
                base_url = %client.base_url(),
                timeout_secs = config.total_timeout_secs,
                "starting job"
            );
            let records = client
                .fetch(args.job_params())
                .await
                .with_context(|| format!("job for \"{}\" did not complete", args.query))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Decode { file } => {
            let records = decode::decode_file(&file)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
