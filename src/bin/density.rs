// src/bin/density.rs
// DOCUMENTATION: Population density squares entry point
// PURPOSE: Convert the StatPop hectare CSV into a GeoJSON square layer

use anyhow::Context;
use dotenv::dotenv;
use places_harvest::config::Config;
use places_harvest::services::density;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    let cells = density::load_population(&config.statpop_csv_path)
        .context("could not load population grid")?;

    let collection = density::build_feature_collection(&cells, config.square_side_deg);
    density::write_geojson(&collection, &config.squares_geojson_path)
        .with_context(|| format!("could not write {}", config.squares_geojson_path.display()))?;

    let summary = density::summarize(&cells);
    match (summary.population_range, summary.center) {
        (Some((min, max)), Some((lat, lng))) => log::info!(
            "{} squares, population {}..={} (total {}), center {:.5},{:.5}",
            summary.cells,
            min,
            max,
            summary.total_population,
            lat,
            lng
        ),
        _ => log::warn!("Population grid is empty; wrote an empty FeatureCollection"),
    }

    Ok(())
}
