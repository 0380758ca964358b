//! MBTA V3 API client and station name resolution.
//!
//! Provides the stop catalog, arrival predictions, and live vehicle
//! positions, plus the fuzzy name → stop-id resolver the itinerary
//! normalizer depends on.

mod client;
mod error;
mod resolver;
pub mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use error::MbtaError;
pub use resolver::{CatalogResolver, match_stop, normalize_name};
pub use types::{PredictionResource, StopResource, VehicleResource, line_color};
