// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::errors::{check_credential, PlacesError};
use dotenv::dotenv;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default Google Places endpoint root
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Places API Key (empty when not configured)
    pub google_places_api_key: String,

    /// Base URL for the Places API, overridable for local testing
    pub places_base_url: String,

    /// Keyword sent with every nearby search (e.g., "Migros")
    pub search_keyword: String,

    /// CSV destination for the deduplicated result set
    pub output_path: PathBuf,

    /// Wait before following a continuation token, in milliseconds
    pub page_token_delay_ms: u64,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// StatPop hectare grid CSV (latitude, longitude, B22BTOT)
    pub statpop_csv_path: PathBuf,

    /// GeoJSON destination for the density squares
    pub squares_geojson_path: PathBuf,

    /// Side length of one density square in degrees
    pub square_side_deg: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            google_places_api_key: String::new(),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            search_keyword: "Migros".to_string(),
            output_path: PathBuf::from("migros_appenzell_innerrhoden.csv"),
            page_token_delay_ms: 2000,
            log_level: "info".to_string(),
            statpop_csv_path: PathBuf::from("filtered_appenzell_innerrhoden.csv"),
            squares_geojson_path: PathBuf::from("squares_geojson.json"),
            square_side_deg: 0.001,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        // An explicit key wins over a key file
        let google_places_api_key = env::var("GOOGLE_PLACES_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                env::var("GOOGLE_PLACES_API_KEY_FILE")
                    .ok()
                    .and_then(|path| read_key_file(Path::new(&path)))
            })
            .unwrap_or_default();

        Config {
            google_places_api_key,

            places_base_url: env::var("PLACES_BASE_URL")
                .unwrap_or(defaults.places_base_url),

            search_keyword: env::var("SEARCH_KEYWORD").unwrap_or(defaults.search_keyword),

            output_path: env::var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),

            page_token_delay_ms: env::var("PAGE_TOKEN_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_token_delay_ms),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            statpop_csv_path: env::var("STATPOP_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.statpop_csv_path),

            squares_geojson_path: env::var("SQUARES_GEOJSON_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.squares_geojson_path),

            square_side_deg: env::var("SQUARE_SIDE_DEG")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|side: &f64| *side > 0.0)
                .unwrap_or(defaults.square_side_deg),
        }
    }

    /// Continuation wait as a Duration
    pub fn page_token_delay(&self) -> Duration {
        Duration::from_millis(self.page_token_delay_ms)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the harvest can start safely; a missing or
    /// placeholder credential stops the run before any network call
    pub fn validate(&self) -> Result<(), PlacesError> {
        check_credential(&self.google_places_api_key)?;

        if self.search_keyword.trim().is_empty() {
            log::warn!("SEARCH_KEYWORD is empty - the search will match any place");
        }

        Ok(())
    }
}

/// Read an API key from a local file, trimming surrounding whitespace
fn read_key_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents.trim().to_string()),
        Err(e) => {
            log::warn!("Could not read API key file {}: {}", path.display(), e);
            None
        }
    }
}
