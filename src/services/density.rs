// src/services/density.rs
// DOCUMENTATION: Population density squares
// PURPOSE: Turn StatPop hectare points into square polygons for a choropleth layer

use crate::errors::PlacesError;
use crate::models::PopulationCell;
use geo_types::{LineString, Polygon};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Side of one hectare square in degrees (approximate, not latitude corrected)
pub const HECTARE_SIDE_DEG: f64 = 0.001;

/// Aggregates downstream viewers need for color range and map centering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensitySummary {
    pub cells: usize,
    pub total_population: u64,
    /// (min, max) population over all cells
    pub population_range: Option<(u32, u32)>,
    /// Mean (latitude, longitude) of all cells
    pub center: Option<(f64, f64)>,
}

/// Read hectare cells from a StatPop CSV
/// DOCUMENTATION: Requires `latitude`, `longitude` and `B22BTOT` headers
pub fn load_population(path: &Path) -> Result<Vec<PopulationCell>, PlacesError> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| PlacesError::Input(format!("{}: {}", path.display(), e)))?;

    let cells = rdr
        .deserialize()
        .collect::<Result<Vec<PopulationCell>, _>>()
        .map_err(|e| PlacesError::Input(format!("{}: {}", path.display(), e)))?;

    log::info!("Loaded {} population cells from {}", cells.len(), path.display());
    Ok(cells)
}

/// Axis-aligned square centered on the point
/// Ring order: south-west, south-east, north-east, north-west, closed
pub fn hectare_square(latitude: f64, longitude: f64, side_deg: f64) -> Polygon<f64> {
    let half = side_deg / 2.0;
    let exterior = LineString::from(vec![
        (longitude - half, latitude - half),
        (longitude + half, latitude - half),
        (longitude + half, latitude + half),
        (longitude - half, latitude + half),
        (longitude - half, latitude - half),
    ]);
    Polygon::new(exterior, vec![])
}

/// One feature per cell
/// DOCUMENTATION: Feature id and `properties.id` are the zero-based cell
/// index as a string, so a choropleth can key on either
pub fn build_feature_collection(cells: &[PopulationCell], side_deg: f64) -> FeatureCollection {
    let features = cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let id = idx.to_string();
            let square = hectare_square(cell.latitude, cell.longitude, side_deg);

            let mut properties = JsonObject::new();
            properties.insert("id".to_string(), JsonValue::from(id.clone()));
            properties.insert("population".to_string(), JsonValue::from(cell.population));

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::from(&square))),
                id: Some(Id::String(id)),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn summarize(cells: &[PopulationCell]) -> DensitySummary {
    let total_population = cells.iter().map(|c| u64::from(c.population)).sum();

    let population_range = cells
        .iter()
        .map(|c| c.population)
        .fold(None::<(u32, u32)>, |range, p| {
            Some(match range {
                None => (p, p),
                Some((min, max)) => (min.min(p), max.max(p)),
            })
        });

    let center = if cells.is_empty() {
        None
    } else {
        let n = cells.len() as f64;
        let lat = cells.iter().map(|c| c.latitude).sum::<f64>() / n;
        let lng = cells.iter().map(|c| c.longitude).sum::<f64>() / n;
        Some((lat, lng))
    };

    DensitySummary {
        cells: cells.len(),
        total_population,
        population_range,
        center,
    }
}

/// Write the collection as pretty-printed GeoJSON, replacing any existing file
pub fn write_geojson(collection: &FeatureCollection, destination: &Path) -> Result<(), PlacesError> {
    let json = serde_json::to_string_pretty(collection)
        .map_err(|e| PlacesError::Export(format!("GeoJSON encoding failed: {}", e)))?;
    fs::write(destination, json)?;

    log::info!(
        "Wrote {} density squares to {}",
        collection.features.len(),
        destination.display()
    );
    Ok(())
}
