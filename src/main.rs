// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, harvest every region and export the result set

use anyhow::Context;
use dotenv::dotenv;
use places_harvest::config::Config;
use places_harvest::models::appenzell_innerrhoden_regions;
use places_harvest::services::{export, FixedDelay, GooglePlacesClient, SearchService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level: &str = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    // 4. Credential check, before anything touches the network
    if let Err(e) = config.validate() {
        eprintln!(
            "{}. Set GOOGLE_PLACES_API_KEY (or GOOGLE_PLACES_API_KEY_FILE) and try again.",
            e
        );
        std::process::exit(1);
    }

    log::info!("Starting places harvest for '{}'", config.search_keyword);
    log::info!("Output: {}", config.output_path.display());

    // 5. Build client
    let client = GooglePlacesClient::new(config.google_places_api_key.clone())?
        .with_base_url(config.places_base_url.clone())
        .with_wait_policy(FixedDelay(config.page_token_delay()));

    // 6. Harvest and export
    let regions = appenzell_innerrhoden_regions();
    let harvest = SearchService::collect_all(&client, &regions, &config.search_keyword)
        .await
        .context("search run aborted")?;

    export(&harvest.results, &config.output_path)
        .with_context(|| format!("could not write {}", config.output_path.display()))?;

    for region in &harvest.stats.regions {
        log::info!(
            "  {}: {} results, {} request(s)",
            region.region,
            region.results,
            region.requests
        );
    }
    log::info!(
        "Data has been saved to {} ({} unique places, {} ms)",
        config.output_path.display(),
        harvest.results.len(),
        harvest.stats.duration_ms
    );

    Ok(())
}
