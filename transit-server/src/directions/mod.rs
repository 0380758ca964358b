//! Google Directions upstream client.
//!
//! Fetches raw transit itineraries and classifies their steps for the
//! itinerary normalizer. Everything here is boundary plumbing: the
//! temporal reasoning lives in [`crate::itinerary`].

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{classify_steps, decode_path};
pub use error::DirectionsError;
pub use types::{DirectionsResponse, PathPoint, Place, RawLeg, RawRoute};
