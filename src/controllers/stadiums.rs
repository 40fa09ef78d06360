use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{error_response, SeatView, SectionSummary};
use crate::models::{Location, MatchId, SectionLetter};
use crate::venue::{codec, Stadium};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stadiums", get(list_stadiums))
        .route("/stadiums/{id}", get(get_stadium))
        .route("/stadiums/{id}/floors/{floor}/sections", get(floor_sections))
        .route("/stadiums/{id}/sections/{floor}/{letter}", get(get_section))
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub match_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FloorQuery {
    pub location: Option<Location>,
    pub match_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct StadiumSummary {
    id: String,
    name: String,
    city: String,
    capacity: u32,
    general_seats: u32,
    vip_seats: u32,
    num_floors: u32,
    num_sections: u32,
}

impl From<&Stadium> for StadiumSummary {
    fn from(stadium: &Stadium) -> Self {
        Self {
            id: stadium.id().to_string(),
            name: stadium.name().to_string(),
            city: stadium.city().to_string(),
            capacity: stadium.capacity(),
            general_seats: stadium.general_seats(),
            vip_seats: stadium.vip_seats(),
            num_floors: stadium.num_floors(),
            num_sections: stadium.num_sections(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FloorView {
    floor: u32,
    sections: Vec<SectionSummary>,
}

#[derive(Debug, Serialize)]
struct StadiumDetail {
    #[serde(flatten)]
    summary: StadiumSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<u32>,
    floors: Vec<FloorView>,
}

#[derive(Debug, Serialize)]
struct RowView {
    code: String,
    seats: Vec<SeatView>,
}

#[derive(Debug, Serialize)]
struct SectionDetail {
    #[serde(flatten)]
    summary: SectionSummary,
    rows: Vec<RowView>,
}

// GET /api/stadiums
async fn list_stadiums(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stadiums: Vec<StadiumSummary> = state.registry.iter().map(StadiumSummary::from).collect();
    Json(stadiums)
}

// GET /api/stadiums/{id}
async fn get_stadium(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<MatchQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (stadium, ledger) = state.stadium(&id).map_err(error_response)?;
    let match_id = params.match_id.map(MatchId::from);

    let mut floors = Vec::with_capacity(stadium.num_floors() as usize);
    for floor in 1..=stadium.num_floors() {
        let sections = stadium
            .sections_by_floor(floor)
            .map_err(error_response)?
            .iter()
            .map(|section| SectionSummary::new(section, ledger, match_id.as_ref()))
            .collect::<Result<_, _>>()
            .map_err(error_response)?;
        floors.push(FloorView { floor, sections });
    }

    let available = match_id
        .as_ref()
        .map(|m| stadium.capacity() - ledger.sold_count(m) as u32);

    Ok(Json(StadiumDetail {
        summary: StadiumSummary::from(stadium),
        available,
        floors,
    }))
}

// GET /api/stadiums/{id}/floors/{floor}/sections?location=front
async fn floor_sections(
    State(state): State<Arc<AppState>>,
    Path((id, floor)): Path<(String, u32)>,
    Query(params): Query<FloorQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (stadium, ledger) = state.stadium(&id).map_err(error_response)?;
    let match_id = params.match_id.map(MatchId::from);

    let sections = match params.location {
        Some(location) => stadium
            .sections_by_location(floor, location)
            .map_err(error_response)?,
        None => stadium
            .sections_by_floor(floor)
            .map_err(error_response)?
            .iter()
            .collect(),
    };

    let sections: Vec<SectionSummary> = sections
        .into_iter()
        .map(|section| SectionSummary::new(section, ledger, match_id.as_ref()))
        .collect::<Result<_, _>>()
        .map_err(error_response)?;
    Ok(Json(sections))
}

// GET /api/stadiums/{id}/sections/{floor}/{letter}
async fn get_section(
    State(state): State<Arc<AppState>>,
    Path((id, floor, letter)): Path<(String, u32, String)>,
    Query(params): Query<MatchQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (stadium, ledger) = state.stadium(&id).map_err(error_response)?;
    let letter: SectionLetter = letter.parse().map_err(error_response)?;
    let section = stadium.section_at(floor, letter).map_err(error_response)?;
    let match_id = params.match_id.map(MatchId::from);

    let mut rows = Vec::with_capacity(section.num_rows() as usize);
    for row in section.rows() {
        let seats = row
            .seats()
            .iter()
            .map(|seat| SeatView::new(seat, ledger, match_id.as_ref()))
            .collect::<Result<_, _>>()
            .map_err(error_response)?;
        rows.push(RowView {
            code: codec::row_code(row.floor(), row.section(), row.number()),
            seats,
        });
    }

    Ok(Json(SectionDetail {
        summary: SectionSummary::new(section, ledger, match_id.as_ref())
            .map_err(error_response)?,
        rows,
    }))
}
