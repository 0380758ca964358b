//! HTTP route handlers.
//!
//! The directions handler is the interesting one: it fans out over the
//! provider's candidate routes, evaluates each in parallel, and ranks
//! the survivors. A route that cannot be evaluated is logged and
//! dropped; the rest of the batch still answers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use chrono::{Local, Utc};
use futures::future::join_all;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::directions::{RawRoute, classify_steps, decode_path};
use crate::itinerary::{RouteCandidate, normalize_route, rank_routes};
use crate::mbta::CatalogResolver;
use crate::walk::SpeedProfile;

use super::dto::{
    DirectionsRequest, ErrorBody, ListResponse, PredictionResult, RouteResult, SpeakRequest,
    StationResult, VehicleResult,
};
use super::state::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health))
        .route("/api/directions", post(plan_directions))
        .route("/api/mbta/stations", get(list_stations))
        .route("/api/mbta/predictions/:stop_id", get(list_predictions))
        .route("/api/mbta/vehicles", get(list_vehicles))
        .route("/api/speak", get(speak_query).post(speak_body))
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Plan transit routes and evaluate their catchability.
async fn plan_directions(
    State(state): State<AppState>,
    Json(request): Json<DirectionsRequest>,
) -> Response {
    let speed = request
        .walking_speed
        .as_deref()
        .map(SpeedProfile::from_key)
        .unwrap_or_default();

    let origin = state.directions.place_query(&request.origin);
    let destination = state.directions.place_query(&request.destination);

    info!("planning directions: {origin} -> {destination} ({speed:?})");

    let routes = match state.directions.transit_routes(&origin, &destination).await {
        Ok(routes) => routes,
        Err(e) => {
            error!("directions request failed: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(e)),
            )
                .into_response();
        }
    };

    let now = Local::now();
    let now_ts = now.timestamp();
    let resolver = CatalogResolver::new(state.catalog.clone());

    let evaluations = routes
        .iter()
        .enumerate()
        .map(|(index, raw)| evaluate_route(index, raw, now_ts, speed, &resolver));

    let candidates: Vec<RouteCandidate> =
        join_all(evaluations).await.into_iter().flatten().collect();

    let ranked = rank_routes(candidates);
    let results: Vec<RouteResult> = ranked
        .iter()
        .map(|candidate| RouteResult::from_candidate(candidate, now, speed))
        .collect();

    Json(ListResponse::ok(results)).into_response()
}

/// Evaluate one raw route, or drop it if it cannot be evaluated.
async fn evaluate_route(
    index: usize,
    raw: &RawRoute,
    now_ts: i64,
    speed: SpeedProfile,
    resolver: &CatalogResolver,
) -> Option<RouteCandidate> {
    let Some(leg) = raw.legs.first() else {
        warn!("route {index} has no legs, dropping it");
        return None;
    };

    let steps = classify_steps(leg);
    let route = normalize_route(&steps, now_ts, speed, resolver).await;

    Some(RouteCandidate {
        index,
        route,
        duration_text: leg
            .duration
            .as_ref()
            .map(|d| d.text.clone())
            .unwrap_or_default(),
        arrival_text: leg
            .arrival_time
            .as_ref()
            .and_then(|t| t.text.clone())
            .unwrap_or_default(),
        path: decode_path(raw),
    })
}

/// List subway and light-rail stations from the cached catalog.
async fn list_stations(State(state): State<AppState>) -> Json<ListResponse<StationResult>> {
    match state.catalog.rail_stops().await {
        Ok(stops) => Json(ListResponse::ok(
            stops.iter().map(StationResult::from_stop).collect(),
        )),
        Err(e) => {
            error!("stations request failed: {e}");
            Json(ListResponse::failed())
        }
    }
}

/// List upcoming arrival predictions for a stop.
async fn list_predictions(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Json<ListResponse<PredictionResult>> {
    match state.mbta.predictions(&stop_id).await {
        Ok(predictions) => {
            let now = Utc::now();
            Json(ListResponse::ok(
                predictions
                    .iter()
                    .map(|p| PredictionResult::from_prediction(p, now))
                    .collect(),
            ))
        }
        Err(e) => {
            error!("predictions request failed for {stop_id}: {e}");
            Json(ListResponse::failed())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct VehiclesQuery {
    routes: Option<String>,
}

/// List live vehicle positions for the given routes.
async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehiclesQuery>,
) -> Json<ListResponse<VehicleResult>> {
    let routes = query.routes.unwrap_or_default();
    if routes.is_empty() {
        // No filter means no vehicles; skip the upstream call.
        return Json(ListResponse::ok(Vec::new()));
    }

    match state.mbta.vehicles(&routes).await {
        Ok(vehicles) => Json(ListResponse::ok(
            vehicles
                .iter()
                .filter_map(VehicleResult::from_vehicle)
                .collect(),
        )),
        Err(e) => {
            error!("vehicles request failed for {routes}: {e}");
            Json(ListResponse::failed())
        }
    }
}

/// Synthesize speech from the `text` query parameter.
async fn speak_query(
    State(state): State<AppState>,
    Query(request): Query<SpeakRequest>,
) -> Response {
    speak(&state, request.text).await
}

/// Synthesize speech from a JSON body, falling back to the query.
async fn speak_body(
    State(state): State<AppState>,
    Query(query): Query<SpeakRequest>,
    body: Option<Json<SpeakRequest>>,
) -> Response {
    let text = body.and_then(|Json(b)| b.text).or(query.text);
    speak(&state, text).await
}

async fn speak(state: &AppState, text: Option<String>) -> Response {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("No text provided")),
        )
            .into_response();
    };

    match state.speech.synthesize(&text).await {
        Ok(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        Err(e) => {
            error!("speech synthesis failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(e))).into_response()
        }
    }
}
