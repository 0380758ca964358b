//! Transit catchability server.
//!
//! A backend that answers: "if I follow this route at my walking pace,
//! will I actually make the first train and every transfer?"

pub mod cache;
pub mod directions;
pub mod itinerary;
pub mod mbta;
pub mod speech;
pub mod walk;
pub mod web;
