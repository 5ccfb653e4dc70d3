mod news;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "goodnews-cli")]
#[command(about = "Recent positive news for a country")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch recent news and keep only the positive stories
    News {
        /// Two-letter country code
        #[arg(long, default_value = goodnews_core::DEFAULT_COUNTRY)]
        country: String,

        /// Lookback window in days (values below 1 are treated as 1)
        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        days: i64,

        /// Print the articles as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the supported country codes
    Countries,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::News {
            country,
            days,
            json,
        }) => {
            let config = goodnews_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            news::run_news(&config, &country, days, json).await?;
        }
        Some(Commands::Countries) => news::run_countries(),
        None => println!("goodnews-cli: run `goodnews-cli news --help` to get started"),
    }

    Ok(())
}

// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests;
