// src/models/region.rs
// DOCUMENTATION: Search areas for the nearby search
// PURPOSE: Define the static query regions and validate them locally

use crate::errors::PlacesError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Largest radius the nearby search accepts, in meters
pub const MAX_RADIUS_M: u32 = 50_000;

/// A named circular search area
/// DOCUMENTATION: Center coordinate plus radius, validated against the
/// ranges accepted by the Places API before any request is made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QueryRegion {
    /// Region label (used in logs and run statistics)
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Center latitude
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    /// Center longitude
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Search radius in meters, 1..=MAX_RADIUS_M (checked in `check`)
    pub radius_m: u32,
}

impl QueryRegion {
    pub fn new(name: &str, latitude: f64, longitude: f64, radius_m: u32) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            radius_m,
        }
    }

    /// `location` query parameter, "lat,lng"
    pub fn location_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Validate the region, mapping failures to PlacesError::InvalidRegion
    /// DOCUMENTATION: Range checks pass NaN through, so finiteness is
    /// checked separately
    pub fn check(&self) -> Result<(), PlacesError> {
        let invalid = |reason: String| PlacesError::InvalidRegion {
            region: self.name.clone(),
            reason,
        };

        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(invalid(format!(
                "center {} is not a finite coordinate",
                self.location_param()
            )));
        }

        if self.radius_m == 0 || self.radius_m > MAX_RADIUS_M {
            return Err(invalid(format!(
                "radius {} m is outside 1..={} m",
                self.radius_m, MAX_RADIUS_M
            )));
        }

        self.validate().map_err(|e| invalid(e.to_string()))
    }
}

/// Regions covering Appenzell Innerrhoden
/// DOCUMENTATION: The main part of the canton plus two island areas.
/// The island circles fall inside the main circle, so overlapping hits are
/// expected and removed by deduplication.
pub fn appenzell_innerrhoden_regions() -> Vec<QueryRegion> {
    vec![
        QueryRegion::new("main part", 47.3165, 9.4167, 13_000),
        QueryRegion::new("first island area", 47.343, 9.431, 5_000),
        QueryRegion::new("second island area", 47.337, 9.381, 5_000),
    ]
}
