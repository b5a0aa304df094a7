use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use sealine_core::criteria::{SearchCriteria, SortKey};
use sealine_search::EnrichedShip;
use serde::Serialize;
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/search", get(search))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query_id: Uuid,
    /// True when a newer query superseded this one mid-flight; callers
    /// must discard `ships`.
    pub stale: bool,
    pub total_matches: usize,
    /// Current criteria re-serialized into the persisted URL shape.
    pub applied_query: String,
    pub ships: Vec<EnrichedShip>,
}

/// GET /v1/search
///
/// Reads the storefront's query-string surface (`destinations`,
/// `dateFrom`, `dateTo`, `duration`, `guests`) plus the widget-only `q`
/// and `sort` keys. Bad values degrade to defaults; a search never 500s
/// on user input.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, AppError> {
    let mut criteria =
        SearchCriteria::from_query_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for (key, value) in &params {
        match key.as_str() {
            "q" => criteria.query = Some(value.clone()),
            "sort" => criteria.sort = SortKey::from_param(value),
            _ => {}
        }
    }

    let today = chrono::Utc::now().date_naive();
    let outcome = state.engine.search(&criteria, today).await;

    Ok(Json(SearchResponse {
        query_id: outcome.ticket.id,
        stale: outcome.stale,
        total_matches: outcome.ships.len(),
        applied_query: to_query_string(&criteria),
        ships: outcome.ships,
    }))
}

fn to_query_string(criteria: &SearchCriteria) -> String {
    criteria
        .to_query_pairs()
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}
