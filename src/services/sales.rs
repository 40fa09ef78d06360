//! sales.rs
//!
//! Потокобезопасный учёт продаж мест по матчам.
//!
//! `Stadium` tracks sold state for single-threaded callers, and there the
//! "check `is_sold`, then `sold`" sequence is safe. Under concurrent requests
//! that sequence races: two sales of the same (seat, match) can both see the
//! seat free. `SaleLedger` closes the race by doing the check and the mark
//! under one lock per seat, so at most one sale per (seat, match) succeeds
//! while sales of different seats never contend.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

use crate::error::{Result, SeatingError};
use crate::models::{MatchId, SeatAddress};
use crate::venue::Stadium;

#[derive(Debug)]
pub struct SaleLedger {
    stadium_id: String,
    /// Keys are fixed at construction; only the per-seat sets change.
    seats: HashMap<SeatAddress, Mutex<HashSet<MatchId>>>,
}

impl SaleLedger {
    /// One slot per seat of `stadium`, seeded with the sales it already has.
    pub fn from_stadium(stadium: &Stadium) -> Self {
        let seats = stadium
            .seats()
            .map(|seat| {
                let sold: HashSet<MatchId> = seat.sold_for().cloned().collect();
                (seat.address(), Mutex::new(sold))
            })
            .collect();
        Self {
            stadium_id: stadium.id().to_string(),
            seats,
        }
    }

    pub fn stadium_id(&self) -> &str {
        &self.stadium_id
    }

    fn lock(&self, address: &SeatAddress) -> Result<MutexGuard<'_, HashSet<MatchId>>> {
        let slot = self
            .seats
            .get(address)
            .ok_or_else(|| SeatingError::SeatNotFound(address.to_string()))?;
        // множество остаётся целым даже после паники другого потока
        Ok(slot.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Atomic check-and-mark. Returns `false` if the seat was already sold
    /// for `match_id`.
    pub fn try_sell(&self, address: &SeatAddress, match_id: &MatchId) -> Result<bool> {
        let mut sold = self.lock(address)?;
        if sold.contains(match_id) {
            warn!(
                "Stadium {}: seat {} already sold for match {}",
                self.stadium_id, address, match_id
            );
            return Ok(false);
        }
        sold.insert(match_id.clone());
        info!(
            "Stadium {}: seat {} sold for match {}",
            self.stadium_id, address, match_id
        );
        Ok(true)
    }

    /// Voids a sale. Returns whether there was one to void.
    pub fn release(&self, address: &SeatAddress, match_id: &MatchId) -> Result<bool> {
        let released = self.lock(address)?.remove(match_id);
        if released {
            info!(
                "Stadium {}: seat {} released for match {}",
                self.stadium_id, address, match_id
            );
        }
        Ok(released)
    }

    pub fn is_sold(&self, address: &SeatAddress, match_id: &MatchId) -> Result<bool> {
        Ok(self.lock(address)?.contains(match_id))
    }

    pub fn sold_count(&self, match_id: &MatchId) -> usize {
        self.seats
            .values()
            .filter(|slot| {
                slot.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .contains(match_id)
            })
            .count()
    }

    /// Copies the ledger's sales into `stadium`'s own sold sets, replacing
    /// what was there, so the caller can serialize a consistent tree.
    pub fn write_back(&self, stadium: &mut Stadium) -> Result<()> {
        if stadium.id() != self.stadium_id {
            return Err(SeatingError::StadiumNotFound(stadium.id().to_string()));
        }
        for seat in stadium.seats_mut() {
            let sold = self.lock(&seat.address())?.clone();
            *seat.sold_set_mut() = sold;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionLetter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn stadium() -> Stadium {
        Stadium::new("s1", "Arena", "City", 300, 50).unwrap()
    }

    #[test]
    fn only_one_concurrent_sale_wins() {
        let ledger = SaleLedger::from_stadium(&stadium());
        let address = SeatAddress::new(1, SectionLetter::A, 1, 1);
        let match_id = MatchId::from("final");
        let wins = AtomicUsize::new(0);

        thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    if ledger.try_sell(&address, &match_id).unwrap() {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(wins.load(Ordering::SeqCst), 1);
        assert!(ledger.is_sold(&address, &match_id).unwrap());
    }

    #[test]
    fn release_allows_resale() {
        let ledger = SaleLedger::from_stadium(&stadium());
        let address = SeatAddress::new(1, SectionLetter::B, 15, 10);
        let m = MatchId::from("m");
        assert!(ledger.try_sell(&address, &m).unwrap());
        assert!(ledger.release(&address, &m).unwrap());
        assert!(!ledger.release(&address, &m).unwrap());
        assert!(ledger.try_sell(&address, &m).unwrap());
        assert_eq!(ledger.sold_count(&m), 1);
    }

    #[test]
    fn unknown_seat_is_not_found() {
        let ledger = SaleLedger::from_stadium(&stadium());
        let address = SeatAddress::new(1, SectionLetter::C, 1, 1);
        assert_eq!(
            ledger.try_sell(&address, &MatchId::from("m")),
            Err(SeatingError::SeatNotFound("P01C0101".to_string()))
        );
    }

    #[test]
    fn seeds_from_and_writes_back_to_the_stadium() {
        let mut stadium = stadium();
        let m = MatchId::from("m");
        let seeded = SeatAddress::new(1, SectionLetter::A, 2, 2);
        stadium.sold(&seeded, &m).unwrap();

        let ledger = SaleLedger::from_stadium(&stadium);
        assert!(!ledger.try_sell(&seeded, &m).unwrap());

        let fresh = SeatAddress::new(1, SectionLetter::B, 1, 1);
        assert!(ledger.try_sell(&fresh, &m).unwrap());
        assert!(ledger.release(&seeded, &m).unwrap());

        ledger.write_back(&mut stadium).unwrap();
        assert!(stadium.is_sold(&fresh, &m).unwrap());
        assert!(!stadium.is_sold(&seeded, &m).unwrap());
    }

    #[test]
    fn write_back_refuses_another_stadium() {
        let ledger = SaleLedger::from_stadium(&stadium());
        let mut other = Stadium::new("s2", "Other", "City", 10, 0).unwrap();
        assert!(ledger.write_back(&mut other).is_err());
    }
}
