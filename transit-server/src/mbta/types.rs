//! MBTA V3 API response DTOs.
//!
//! The MBTA API speaks JSON:API: every resource is `{id, attributes,
//! relationships}`. These DTOs keep only the fields the server reads.

use serde::Deserialize;

/// Generic JSON:API list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// A stop resource from `/stops`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
}

/// Stop attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A prediction resource from `/predictions`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResource {
    pub id: String,
    pub attributes: PredictionAttributes,
    pub relationships: Option<Relationships>,
}

/// Prediction attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionAttributes {
    /// ISO 8601 arrival time; absent for terminal departures.
    pub arrival_time: Option<String>,
    /// 0 = outbound, 1 = inbound.
    pub direction_id: Option<u8>,
    pub status: Option<String>,
}

/// A vehicle resource from `/vehicles`.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleResource {
    pub id: String,
    pub attributes: VehicleAttributes,
    pub relationships: Option<Relationships>,
}

/// Vehicle attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleAttributes {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bearing: Option<f64>,
    pub current_status: Option<String>,
}

/// Relationships block; the server only reads the route link.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationships {
    pub route: Option<Relationship>,
}

/// One relationship entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: Option<RelationshipData>,
}

/// Relationship target.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipData {
    pub id: String,
}

impl PredictionResource {
    /// The route id this prediction belongs to, if linked.
    pub fn route_id(&self) -> Option<&str> {
        route_id(self.relationships.as_ref())
    }
}

impl VehicleResource {
    /// The route id this vehicle is serving, if linked.
    pub fn route_id(&self) -> Option<&str> {
        route_id(self.relationships.as_ref())
    }
}

fn route_id(relationships: Option<&Relationships>) -> Option<&str> {
    relationships?
        .route
        .as_ref()?
        .data
        .as_ref()
        .map(|d| d.id.as_str())
}

/// Infer a stop's line color from its description.
///
/// The stops endpoint has no direct line association, but descriptions
/// mention the line ("Park Street - Red Line - Ashmont/Braintree").
/// Checked in order: Red, Orange, Blue, then Mattapan trolley as Red;
/// anything unrecognized defaults to Green.
pub fn line_color(description: Option<&str>) -> &'static str {
    let Some(description) = description else {
        return "Green";
    };

    if description.contains("Red") {
        "Red"
    } else if description.contains("Orange") {
        "Orange"
    } else if description.contains("Blue") {
        "Blue"
    } else if description.contains("Mattapan") {
        "Red"
    } else {
        "Green"
    }
}
