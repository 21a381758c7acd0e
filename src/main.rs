use anyhow::{Context, Result};
use tracing::error;
use ydlookup::{
    config::Config,
    fetcher::HttpPageSource,
    lookup::{LauncherItems, parse_with_detail_url},
    provider::ProviderClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the launcher JSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let word = std::env::args()
        .skip(1)
        .last()
        .context("usage: ydlookup <word>")?;

    let client = ProviderClient::from_config(&config)?;
    let payload = client.translate(&word).await.map_err(|err| {
        error!(%word, error = %err, "translation request failed");
        err
    })?;

    let results =
        parse_with_detail_url(&word, &payload, &HttpPageSource, config.detail_url()).await;

    println!(
        "{}",
        serde_json::to_string(&LauncherItems { items: &results })?
    );
    Ok(())
}
