// src/services/search_service.rs
// DOCUMENTATION: Region-by-region harvest orchestration
// PURPOSE: Run the paginated search over every region and deduplicate

use crate::errors::PlacesError;
use crate::models::{QueryRegion, ResultSet};
use crate::services::GooglePlacesClient;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Per-region counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: String,
    pub requests: u32,
    pub results: usize,
}

/// Harvest statistics
/// DOCUMENTATION: Tracks results of a collect_all run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Keyword that was searched
    pub keyword: String,
    /// Total number of API requests made
    pub api_requests: u32,
    /// Total well-formed results retrieved, before deduplication
    pub places_retrieved: usize,
    /// Results removed because their place id was already seen
    pub duplicates_removed: usize,
    /// Records skipped because required fields were absent
    pub malformed_skipped: usize,
    /// Breakdown per region, in processing order
    pub regions: Vec<RegionStats>,
    /// Total run duration in milliseconds
    pub duration_ms: u128,
    /// Timestamp when the run started
    pub started_at: String,
    /// Timestamp when the run completed
    pub completed_at: Option<String>,
}

impl RunStats {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            api_requests: 0,
            places_retrieved: 0,
            duplicates_removed: 0,
            malformed_skipped: 0,
            regions: Vec::new(),
            duration_ms: 0,
            started_at: Utc::now().to_rfc3339(),
            completed_at: None,
        }
    }

    /// Mark run as completed
    pub fn complete(&mut self, duration_ms: u128) {
        self.duration_ms = duration_ms;
        self.completed_at = Some(Utc::now().to_rfc3339());
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct Harvest {
    /// Deduplicated results
    pub results: ResultSet,
    pub stats: RunStats,
}

pub struct SearchService;

impl SearchService {
    /// Collect every place for `keyword` across all regions
    /// DOCUMENTATION: Regions are searched one after another, never
    /// concurrently. All regions are validated before the first request.
    /// The first error aborts the run; no partial result is returned.
    ///
    /// # Returns
    /// Harvest with the deduplicated ResultSet (first occurrence wins)
    pub async fn collect_all(
        client: &GooglePlacesClient,
        regions: &[QueryRegion],
        keyword: &str,
    ) -> Result<Harvest, PlacesError> {
        let start_time = Instant::now();
        let mut stats = RunStats::new(keyword);

        for region in regions {
            region.check()?;
        }

        log::info!(
            "Starting search for '{}' over {} region(s)",
            keyword,
            regions.len()
        );

        let mut results = ResultSet::new();

        for (idx, region) in regions.iter().enumerate() {
            log::debug!(
                "Processing region {}/{}: '{}' lat={}, lng={}, radius={}",
                idx + 1,
                regions.len(),
                region.name,
                region.latitude,
                region.longitude,
                region.radius_m
            );

            let harvest = client.search_region(region, keyword).await?;

            if harvest.places.is_empty() {
                log::info!("Region '{}' returned no results", harvest.region);
            }

            stats.api_requests += harvest.requests;
            stats.places_retrieved += harvest.places.len();
            stats.malformed_skipped += harvest.malformed;
            stats.regions.push(RegionStats {
                region: harvest.region,
                requests: harvest.requests,
                results: harvest.places.len(),
            });

            results.extend(harvest.places);
        }

        stats.duplicates_removed = results.dedup_by_place_id();
        stats.complete(start_time.elapsed().as_millis());

        log::info!(
            "Search completed: {} unique places ({} retrieved, {} duplicates, {} malformed, {} requests)",
            results.len(),
            stats.places_retrieved,
            stats.duplicates_removed,
            stats.malformed_skipped,
            stats.api_requests
        );

        Ok(Harvest { results, stats })
    }
}
