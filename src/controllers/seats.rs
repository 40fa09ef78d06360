use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use super::{error_response, stadiums::MatchQuery, SeatView};
use crate::models::MatchId;
use crate::venue::codec::SEAT_CODE_LEN;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stadiums/{id}/seats/{code}", get(get_seat))
        .route("/stadiums/{id}/seats/sell", patch(sell_seat))
        .route("/stadiums/{id}/seats/release", patch(release_seat))
        .route("/stadiums/{id}/sales", get(list_sales))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaleRequest {
    #[validate(length(equal = 8))]
    pub code: String,
    #[validate(length(min = 1, max = 64))]
    pub match_id: String,
}

#[derive(Debug, Serialize)]
struct SaleResponse {
    code: String,
    match_id: MatchId,
    sold: bool,
}

// GET /api/stadiums/{id}/seats/{code}?match_id=...
async fn get_seat(
    State(state): State<Arc<AppState>>,
    Path((id, code)): Path<(String, String)>,
    Query(params): Query<MatchQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (stadium, ledger) = state.stadium(&id).map_err(error_response)?;
    let seat = stadium.seat_by_code(&code).map_err(error_response)?;
    let match_id = params.match_id.map(MatchId::from);
    let view = SeatView::new(seat, ledger, match_id.as_ref()).map_err(error_response)?;
    Ok(Json(view))
}

// PATCH /api/stadiums/{id}/seats/sell
async fn sell_seat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SaleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("code must be {SEAT_CODE_LEN} characters and match_id non-empty: {e}"),
        )
    })?;

    let (stadium, ledger) = state.stadium(&id).map_err(error_response)?;
    let seat = stadium.seat_by_code(&req.code).map_err(error_response)?;
    let match_id = MatchId::from(req.match_id);

    // проверка и пометка под одним локом места
    let sold = ledger
        .try_sell(&seat.address(), &match_id)
        .map_err(error_response)?;
    if !sold {
        return Err((
            StatusCode::CONFLICT,
            format!("Seat {} is already sold for match {}", seat.code(), match_id),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(SaleResponse {
            code: seat.code(),
            match_id,
            sold: true,
        }),
    ))
}

// PATCH /api/stadiums/{id}/seats/release
async fn release_seat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SaleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let (stadium, ledger) = state.stadium(&id).map_err(error_response)?;
    let seat = stadium.seat_by_code(&req.code).map_err(error_response)?;
    let match_id = MatchId::from(req.match_id);

    // повторное освобождение - не ошибка
    ledger
        .release(&seat.address(), &match_id)
        .map_err(error_response)?;

    Ok((
        StatusCode::OK,
        Json(SaleResponse {
            code: seat.code(),
            match_id,
            sold: false,
        }),
    ))
}

// GET /api/stadiums/{id}/sales?match_id=...
async fn list_sales(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<MatchQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let snapshot = state.snapshot(&id).map_err(error_response)?;
    let mut entries = snapshot.sold_entries();
    if let Some(match_id) = params.match_id.map(MatchId::from) {
        entries.retain(|entry| entry.match_id == match_id);
    }
    Ok(Json(entries))
}
