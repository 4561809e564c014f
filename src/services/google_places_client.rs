// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Keyword nearby search with continuation-token pagination

use crate::config::env::DEFAULT_PLACES_BASE_URL;
use crate::errors::{check_credential, PlacesError};
use crate::models::{NearbyPlace, NearbySearchResponse, PlaceRecord, QueryRegion, SearchPage};
use crate::services::wait_policy::{wait_for_token, FixedDelay, WaitPolicy};
use reqwest::Client;
use std::collections::HashSet;

/// Google Places API client
/// DOCUMENTATION: Holds a checked credential; it cannot be constructed with
/// an empty or placeholder key, so no request is ever sent with one.
/// Requests are issued strictly one at a time.
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
    /// Wait applied before every continuation request
    wait_policy: Box<dyn WaitPolicy>,
}

/// Everything one region produced
#[derive(Debug, Clone, Default)]
pub struct RegionHarvest {
    /// Region label
    pub region: String,
    /// Well-formed results across all pages, in response order
    pub places: Vec<PlaceRecord>,
    /// Requests issued for this region
    pub requests: u32,
    /// Records skipped because required fields were absent
    pub malformed: usize,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: Fails with PlacesError::Credential for a missing or
    /// placeholder key; defaults to the 2 second token activation wait
    pub fn new(api_key: impl Into<String>) -> Result<Self, PlacesError> {
        let api_key = api_key.into();
        check_credential(&api_key)?;

        Ok(Self {
            client: Client::new(),
            api_key: api_key.trim().to_string(),
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            wait_policy: Box::new(FixedDelay::default()),
        })
    }

    /// Point the client at another endpoint root (e.g., a local mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the continuation wait policy
    pub fn with_wait_policy(mut self, policy: impl WaitPolicy + 'static) -> Self {
        self.wait_policy = Box::new(policy);
        self
    }

    /// Fetch every page for one region
    /// DOCUMENTATION: Issues the initial request, then follows
    /// next_page_token until a response carries none. Each continuation is
    /// preceded by the wait policy's delay, since the service rejects tokens
    /// that are used too early. A token that was already followed ends the
    /// region instead of looping.
    ///
    /// # Arguments
    /// * `region` - Search center and radius
    /// * `keyword` - Keyword filter sent with every request
    ///
    /// # Returns
    /// RegionHarvest owning the region's results; an empty region is not an error
    pub async fn search_region(
        &self,
        region: &QueryRegion,
        keyword: &str,
    ) -> Result<RegionHarvest, PlacesError> {
        region.check()?;

        let mut harvest = RegionHarvest {
            region: region.name.clone(),
            ..RegionHarvest::default()
        };
        let mut page_token: Option<String> = None;
        let mut seen_tokens: HashSet<String> = HashSet::new();

        loop {
            if page_token.is_some() {
                wait_for_token(self.wait_policy.as_ref()).await;
            }

            let page = self
                .fetch_page(region, keyword, page_token.as_deref())
                .await?;

            harvest.requests += 1;
            harvest.malformed += page.malformed;
            harvest.places.extend(page.results);

            page_token = match page.next_page_token {
                None => break,
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    log::warn!(
                        "Region '{}': continuation token repeated, stopping pagination",
                        region.name
                    );
                    break;
                }
                Some(token) => Some(token),
            };
        }

        log::info!(
            "Region '{}': {} results in {} request(s)",
            harvest.region,
            harvest.places.len(),
            harvest.requests
        );

        Ok(harvest)
    }

    /// Perform a single nearby search request
    /// DOCUMENTATION: Without a page token this is the initial request for
    /// the region; with one it is a continuation carrying `pagetoken`
    pub async fn fetch_page(
        &self,
        region: &QueryRegion,
        keyword: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let mut params = vec![
            ("location", region.location_param()),
            ("radius", region.radius_m.to_string()),
            ("keyword", keyword.to_string()),
            ("key", self.api_key.clone()),
        ];

        if let Some(token) = page_token {
            params.push(("pagetoken", token.to_string()));
        }

        log::debug!(
            "Google Places nearby search: region='{}', location={}, radius={}, continuation={}",
            region.name,
            region.location_param(),
            region.radius_m,
            page_token.is_some()
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places API request failed: {}", e);
                PlacesError::Transport(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Places API error {}: {}", status, body);
            return Err(PlacesError::Transport(format!("HTTP {}: {}", status, body)));
        }

        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read Google Places response body: {}", e);
            PlacesError::Transport(format!("Body read failed: {}", e))
        })?;

        parse_page(&body)
    }
}

/// Decode one response body
/// DOCUMENTATION: Rejects bodies that are not a nearby-search response and
/// API statuses other than OK / ZERO_RESULTS. Individual records missing
/// place_id or coordinates are skipped with a warning and counted.
pub fn parse_page(body: &str) -> Result<SearchPage, PlacesError> {
    let api_response: NearbySearchResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse Google Places response: {}", e);
        PlacesError::MalformedResponse(format!("Parse error: {}", e))
    })?;

    // Check API response status; minimal responses may omit it
    match api_response.status.as_deref() {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some("OVER_QUERY_LIMIT") => {
            log::error!("Google Places API quota exceeded");
            return Err(PlacesError::RateLimitExceeded);
        }
        Some(other) => {
            let message = api_response
                .error_message
                .unwrap_or_else(|| "Unknown error".to_string());
            log::error!("Google Places API status {}: {}", other, message);
            return Err(PlacesError::ApiStatus {
                status: other.to_string(),
                message,
            });
        }
    }

    let mut page = SearchPage {
        next_page_token: api_response
            .next_page_token
            .filter(|token| !token.is_empty()),
        ..SearchPage::default()
    };

    for raw in api_response.results {
        match serde_json::from_value::<NearbyPlace>(raw) {
            Ok(place) => page.results.push(PlaceRecord::from(place)),
            Err(e) => {
                page.malformed += 1;
                log::warn!("Skipping malformed search result: {}", e);
            }
        }
    }

    Ok(page)
}
