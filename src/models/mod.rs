// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod place;
pub mod population;
pub mod region;

pub use place::*;
pub use population::*;
pub use region::*;
