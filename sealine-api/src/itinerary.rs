use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use sealine_itinerary::{ItineraryError, ItineraryLineItem, ItineraryTotals, ToggleOutcome};
use sealine_shared::parse_iso_date;
use serde::{Deserialize, Serialize};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/itinerary", get(list).delete(clear))
        .route("/v1/itinerary/toggle", post(toggle))
        .route("/v1/itinerary/{index}", delete(remove))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    pub items: Vec<ItineraryLineItem>,
    pub totals: ItineraryTotals,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub cabin_name: String,
    pub ship_name: String,
    /// "YYYY-MM-DD"
    pub date: String,
    #[serde(default)]
    pub price: i64,
    /// Confirmed by the guest-count step before the add lands.
    #[serde(default)]
    pub guest_count: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub outcome: ToggleOutcome,
    pub is_present: bool,
    pub totals: ItineraryTotals,
}

async fn list(State(state): State<AppState>) -> Json<ItineraryResponse> {
    let itinerary = state.itinerary.lock().await;
    Json(ItineraryResponse {
        items: itinerary.items().to_vec(),
        totals: itinerary.totals(),
    })
}

/// POST /v1/itinerary/toggle
///
/// The single entry point reservation buttons go through: present
/// reservations are removed, absent ones added with the confirmed guest
/// count.
async fn toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let date = parse_iso_date(&req.date)
        .ok_or_else(|| AppError::ValidationError(format!("Invalid date: {}", req.date)))?;
    if req.cabin_name.trim().is_empty() || req.ship_name.trim().is_empty() {
        return Err(AppError::ValidationError(
            "cabinName and shipName are required".to_string(),
        ));
    }

    let guest_count = req
        .guest_count
        .unwrap_or(sealine_core::criteria::DEFAULT_GUEST_COUNT);

    let mut itinerary = state.itinerary.lock().await;
    let outcome = itinerary.toggle(&req.cabin_name, &req.ship_name, date, req.price, guest_count)?;

    Ok(Json(ToggleResponse {
        outcome,
        is_present: itinerary.is_present(&req.cabin_name, &req.ship_name, date),
        totals: itinerary.totals(),
    }))
}

async fn remove(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let mut itinerary = state.itinerary.lock().await;
    match itinerary.remove(index) {
        Ok(_) => Ok(Json(ItineraryResponse {
            items: itinerary.items().to_vec(),
            totals: itinerary.totals(),
        })),
        Err(ItineraryError::IndexOutOfRange(i)) => Err(AppError::NotFoundError(format!(
            "No itinerary line item at index {}",
            i
        ))),
        Err(e) => Err(e.into()),
    }
}

async fn clear(State(state): State<AppState>) -> Result<Json<ItineraryResponse>, AppError> {
    let mut itinerary = state.itinerary.lock().await;
    itinerary.clear()?;
    Ok(Json(ItineraryResponse {
        items: Vec::new(),
        totals: itinerary.totals(),
    }))
}
