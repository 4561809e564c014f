// src/models/population.rs
// DOCUMENTATION: Population grid records
// PURPOSE: One hectare cell of the StatPop grid

use serde::{Deserialize, Serialize};

/// A StatPop hectare cell
/// DOCUMENTATION: Only the coordinate and the total population (B22BTOT)
/// columns are read, everything else in the CSV is ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationCell {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "B22BTOT")]
    pub population: u32,
}
