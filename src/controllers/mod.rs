pub mod seats;
pub mod stadiums;

use axum::{http::StatusCode, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{Result, SeatingError};
use crate::models::{MatchId, Seat, SeatClass, Section};
use crate::services::SaleLedger;
use crate::venue::codec;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(stadiums::routes())
        .merge(seats::routes())
}

/* ---------- helpers ---------- */

fn error_response(err: SeatingError) -> (StatusCode, String) {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, err.to_string())
}

#[derive(Debug, Serialize)]
struct SeatView {
    code: String,
    floor: u32,
    section: char,
    row: u32,
    seat: u32,
    class: SeatClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    sold: Option<bool>,
}

impl SeatView {
    fn new(seat: &Seat, ledger: &SaleLedger, match_id: Option<&MatchId>) -> Result<Self> {
        let sold = match match_id {
            Some(m) => Some(ledger.is_sold(&seat.address(), m)?),
            None => None,
        };
        Ok(Self {
            code: seat.code(),
            floor: seat.floor(),
            section: seat.section().as_char(),
            row: seat.row(),
            seat: seat.number(),
            class: seat.class(),
            sold,
        })
    }
}

#[derive(Debug, Serialize)]
struct SectionSummary {
    code: String,
    floor: u32,
    letter: char,
    location: crate::models::Location,
    capacity: u32,
    num_rows: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<u32>,
}

impl SectionSummary {
    fn new(section: &Section, ledger: &SaleLedger, match_id: Option<&MatchId>) -> Result<Self> {
        let available = match match_id {
            Some(m) => {
                let mut free = 0;
                for seat in section.seats() {
                    if !ledger.is_sold(&seat.address(), m)? {
                        free += 1;
                    }
                }
                Some(free)
            }
            None => None,
        };
        Ok(Self {
            code: codec::section_code(section.floor(), section.letter()),
            floor: section.floor(),
            letter: section.letter().as_char(),
            location: section.location(),
            capacity: section.capacity(),
            num_rows: section.num_rows(),
            available,
        })
    }
}
