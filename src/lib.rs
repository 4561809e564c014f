// src/lib.rs
// DOCUMENTATION: Library root shared by the binaries and integration tests
// PURPOSE: Paginated places harvest, CSV export and population density squares

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
