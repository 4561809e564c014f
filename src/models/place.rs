// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Wire types for the nearby search response and the normalized
// records that get exported

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Response from Google Places Nearby Search
/// DOCUMENTATION: Results are kept as raw JSON so a single malformed record
/// can be skipped without rejecting the whole page
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Results array from API
    #[serde(default)]
    pub results: Vec<Value>,
    /// Continuation token (if more results available)
    pub next_page_token: Option<String>,
    /// Status of the API call ("OK", "ZERO_RESULTS", ...)
    pub status: Option<String>,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// Individual hit from a nearby search
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NearbyPlace {
    /// Google's unique place identifier
    pub place_id: String,
    /// Place name
    pub name: Option<String>,
    /// Geographic location
    pub geometry: PlaceGeometry,
    /// Vicinity (short address)
    pub vicinity: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One normalized search result, as written to the export file
/// DOCUMENTATION: Field renames give the CSV header
/// `Place ID,Name,Latitude,Longitude,Address`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "Place ID")]
    pub place_id: String,

    #[serde(rename = "Name")]
    pub name: Option<String>,

    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,

    #[serde(rename = "Address")]
    pub address: Option<String>,
}

impl From<NearbyPlace> for PlaceRecord {
    fn from(place: NearbyPlace) -> Self {
        let NearbyPlace {
            place_id,
            name,
            geometry,
            vicinity,
        } = place;

        PlaceRecord {
            place_id,
            name,
            latitude: geometry.location.lat,
            longitude: geometry.location.lng,
            address: vicinity,
        }
    }
}

/// One decoded response page
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Well-formed results of this page, in response order
    pub results: Vec<PlaceRecord>,
    /// Token for the follow-up request, if the service reported more results
    pub next_page_token: Option<String>,
    /// Records skipped because required fields were absent
    pub malformed: usize,
}

/// Accumulated results across regions and pages
/// DOCUMENTATION: Insertion ordered; `dedup_by_place_id` keeps the first
/// occurrence of every place identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    places: Vec<PlaceRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I: IntoIterator<Item = PlaceRecord>>(&mut self, places: I) {
        self.places.extend(places);
    }

    /// Collapse repeated place identifiers, first occurrence wins
    /// Returns the number of removed duplicates
    pub fn dedup_by_place_id(&mut self) -> usize {
        let before = self.places.len();
        let mut seen = HashSet::with_capacity(before);
        self.places.retain(|place| seen.insert(place.place_id.clone()));
        before - self.places.len()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaceRecord> {
        self.places.iter()
    }
}

impl FromIterator<PlaceRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = PlaceRecord>>(iter: I) -> Self {
        Self {
            places: iter.into_iter().collect(),
        }
    }
}
