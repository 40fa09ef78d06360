use serde::{Deserialize, Serialize};

use super::{codec, Stadium};
use crate::error::Result;
use crate::models::MatchId;

/// Flat stadium description as it arrives from the data feed and as callers
/// persist it. `capacity` is `[general, vip]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StadiumRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub capacity: [i64; 2],
}

/// One (seat, match) sale, keyed by seat code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoldEntry {
    pub seat_code: String,
    pub match_id: MatchId,
}

impl Stadium {
    pub fn from_record(record: &StadiumRecord) -> Result<Self> {
        let [general, vip] = record.capacity;
        Stadium::new(&record.id, &record.name, &record.city, general, vip)
    }

    pub fn record(&self) -> StadiumRecord {
        StadiumRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            city: self.city.clone(),
            capacity: [i64::from(self.general_seats), i64::from(self.vip_seats)],
        }
    }

    /// Every sale in the stadium, sorted by seat code then match.
    pub fn sold_entries(&self) -> Vec<SoldEntry> {
        let mut entries: Vec<SoldEntry> = self
            .seats()
            .flat_map(|seat| {
                seat.sold_for().map(move |match_id| SoldEntry {
                    seat_code: seat.code(),
                    match_id: match_id.clone(),
                })
            })
            .collect();
        entries.sort();
        entries
    }

    /// Re-applies saved sales. All codes are resolved before anything is
    /// marked, so a bad entry leaves the stadium untouched.
    pub fn restore_sales(&mut self, entries: &[SoldEntry]) -> Result<usize> {
        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let address = codec::parse(&entry.seat_code)?;
            // проверяем, что место существует
            self.seat_by_code(&entry.seat_code)?;
            resolved.push((address, &entry.match_id));
        }
        for (address, match_id) in &resolved {
            self.sold(address, match_id)?;
        }
        Ok(resolved.len())
    }
}
