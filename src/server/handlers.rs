//! HTTP handlers for the restaurant store
//!
//! This is the seam the (out of scope) UI collaborator attaches to: every
//! endpoint maps one-to-one onto a store operation, and errors come back as
//! the JSON `ErrorResponse` produced by the typed error hierarchy.

use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{
    Json, Router,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::criteria::FilterCriteria;
use crate::core::error::{DinewheelError, ValidationError};
use crate::core::restaurant::{Restaurant, RestaurantDraft};
use crate::store::RestaurantStore;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RestaurantStore>,
}

/// Build the application router.
///
/// CORS is permissive: the collaborator is a browser widget served from
/// wherever, and there is no authentication to protect.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/restaurants", get(list_restaurants).post(add_restaurant))
        .route("/restaurants/cuisines", get(list_cuisines))
        .route("/restaurants/pick", post(pick_restaurant))
        .route("/restaurants/{id}/rating", put(update_rating))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "dinewheel"
    }))
}

async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Value>, DinewheelError> {
    let restaurants = state.store.list()?;
    Ok(Json(json!({
        "count": restaurants.len(),
        "restaurants": restaurants,
    })))
}

async fn add_restaurant(
    State(state): State<AppState>,
    Json(draft): Json<RestaurantDraft>,
) -> Result<(StatusCode, Json<Restaurant>), DinewheelError> {
    let restaurant = state.store.add(draft).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// Rating update payload
#[derive(Debug, Deserialize)]
struct RatingUpdate {
    rating: u8,
}

async fn update_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RatingUpdate>,
) -> Result<Json<Restaurant>, DinewheelError> {
    let id = parse_id(&id)?;
    let restaurant = state.store.update_rating(id, payload.rating).await?;
    Ok(Json(restaurant))
}

async fn list_cuisines(State(state): State<AppState>) -> Result<Json<Value>, DinewheelError> {
    let cuisines = state.store.cuisines()?;
    Ok(Json(json!({ "cuisines": cuisines })))
}

async fn pick_restaurant(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<Restaurant>, DinewheelError> {
    let picked = state.store.pick(&criteria)?;
    Ok(Json(picked))
}

fn parse_id(raw: &str) -> Result<Uuid, DinewheelError> {
    Uuid::parse_str(raw).map_err(|_| {
        ValidationError::FieldError {
            field: "id".to_string(),
            message: format!("not a valid UUID: '{}'", raw),
        }
        .into()
    })
}
