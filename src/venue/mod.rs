//! Стадион: дерево этаж -> секция -> ряд -> место.
//!
//! The tree is built once in [`Stadium::new`] (partition, then VIP pass) and
//! never rebuilt. Behaviour is split across files by concern, each adding an
//! `impl Stadium` block:
//! - `partition` - capacity math and section layout
//! - `vip` - deterministic VIP assignment
//! - `codec` - seat codes
//! - `query` - lookups by floor, location, address and code
//! - `reservations` - per-match sold state
//! - `record` - serialization boundary for callers that persist stadiums

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::models::Section;

pub mod codec;
pub mod partition;
pub mod query;
pub mod record;
pub mod reservations;
pub mod vip;

pub use partition::Capacity;
pub use record::{SoldEntry, StadiumRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stadium {
    id: String,
    name: String,
    city: String,
    general_seats: u32,
    vip_seats: u32,
    num_floors: u32,
    sections: Vec<Section>,
}

impl Stadium {
    /// Validates the capacity, partitions it and applies the VIP policy.
    /// Validation happens before anything is allocated, so an error never
    /// leaves a half-built stadium behind.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        general_seats: i64,
        vip_seats: i64,
    ) -> Result<Self> {
        let capacity = Capacity::new(general_seats, vip_seats)?;
        let layout = partition::partition(capacity.total());

        let mut stadium = Stadium {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            general_seats: capacity.general(),
            vip_seats: capacity.vip(),
            num_floors: layout.num_floors,
            sections: layout.sections,
        };
        let assigned = stadium.assign_vip_seats(capacity.vip());

        debug!(
            "Stadium {} built: {} seats, {} floors, {} sections, {} VIP",
            stadium.id,
            capacity.total(),
            stadium.num_floors,
            stadium.sections.len(),
            assigned
        );
        Ok(stadium)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn general_seats(&self) -> u32 {
        self.general_seats
    }

    pub fn vip_seats(&self) -> u32 {
        self.vip_seats
    }

    pub fn capacity(&self) -> u32 {
        self.general_seats + self.vip_seats
    }

    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    pub fn num_sections(&self) -> u32 {
        self.sections.len() as u32
    }

    /// Sections in creation order (floor-major, then `a..h`).
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of seats actually classed VIP.
    pub fn vip_count(&self) -> u32 {
        self.sections
            .iter()
            .flat_map(|section| section.seats())
            .filter(|seat| seat.is_vip())
            .count() as u32
    }
}

impl fmt::Display for Stadium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: city: {} - vip: {} - general: {}",
            self.name, self.city, self.vip_seats, self.general_seats
        )
    }
}
