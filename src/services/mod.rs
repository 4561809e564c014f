// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod density;
pub mod exporter;
pub mod google_places_client;
pub mod search_service;
pub mod wait_policy;

pub use exporter::export;
pub use google_places_client::*;
pub use search_service::*;
pub use wait_policy::*;
