use tracing::{info, warn};

use super::Stadium;
use crate::error::Result;
use crate::models::{MatchId, Seat, SeatAddress};

// Продажи ведутся отдельно для каждого матча. `sold`/`unsold` идемпотентны;
// проверка "уже продано" - забота вызывающего, либо `try_sell`.
impl Seat {
    pub fn sold(&mut self, match_id: &MatchId) {
        self.sold_set_mut().insert(match_id.clone());
    }

    pub fn unsold(&mut self, match_id: &MatchId) {
        self.sold_set_mut().remove(match_id);
    }

    pub fn is_sold(&self, match_id: &MatchId) -> bool {
        self.sold_set().contains(match_id)
    }
}

impl Stadium {
    pub fn sold(&mut self, address: &SeatAddress, match_id: &MatchId) -> Result<()> {
        self.seat_at_mut(address)?.sold(match_id);
        Ok(())
    }

    pub fn unsold(&mut self, address: &SeatAddress, match_id: &MatchId) -> Result<()> {
        self.seat_at_mut(address)?.unsold(match_id);
        Ok(())
    }

    pub fn is_sold(&self, address: &SeatAddress, match_id: &MatchId) -> Result<bool> {
        Ok(self.seat_at(address)?.is_sold(match_id))
    }

    /// Exclusive sale: marks the seat and returns `true` only if it was not
    /// already sold for `match_id`.
    pub fn try_sell(&mut self, address: &SeatAddress, match_id: &MatchId) -> Result<bool> {
        let seat = self.seat_at_mut(address)?;
        if seat.is_sold(match_id) {
            warn!("Seat {} already sold for match {}", address, match_id);
            return Ok(false);
        }
        seat.sold(match_id);
        info!("Seat {} sold for match {}", address, match_id);
        Ok(true)
    }

    /// Same as [`Stadium::sold`] but addressed by seat code.
    pub fn sold_by_code(&mut self, code: &str, match_id: &MatchId) -> Result<()> {
        self.seat_by_code_mut(code)?.sold(match_id);
        Ok(())
    }

    pub fn unsold_by_code(&mut self, code: &str, match_id: &MatchId) -> Result<()> {
        self.seat_by_code_mut(code)?.unsold(match_id);
        Ok(())
    }

    pub fn sold_count(&self, match_id: &MatchId) -> u32 {
        self.seats().filter(|seat| seat.is_sold(match_id)).count() as u32
    }

    pub fn available_seats(&self, match_id: &MatchId) -> u32 {
        self.capacity() - self.sold_count(match_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionLetter;

    fn setup() -> (Stadium, SeatAddress) {
        let stadium = Stadium::new("1", "Arena", "City", 300, 50).unwrap();
        (stadium, SeatAddress::new(1, SectionLetter::B, 4, 2))
    }

    #[test]
    fn sold_twice_then_unsold_once_is_free() {
        let (mut stadium, address) = setup();
        let m = MatchId::from("GER-SCO");
        stadium.sold(&address, &m).unwrap();
        stadium.sold(&address, &m).unwrap();
        assert!(stadium.is_sold(&address, &m).unwrap());
        stadium.unsold(&address, &m).unwrap();
        assert!(!stadium.is_sold(&address, &m).unwrap());
    }

    #[test]
    fn seat_keeps_one_entry_per_match() {
        let (mut stadium, address) = setup();
        let m = MatchId::from("m1");
        let seat = stadium.seat_at_mut(&address).unwrap();
        seat.sold(&m);
        seat.sold(&m);
        seat.sold(&MatchId::from("m2"));
        assert_eq!(seat.sold_for().count(), 2);
        seat.unsold(&m);
        assert!(!seat.is_sold(&m));
        assert_eq!(seat.sold_for().count(), 1);
    }

    #[test]
    fn unsold_on_free_seat_is_a_no_op() {
        let (mut stadium, address) = setup();
        let m = MatchId::from("ESP-CRO");
        stadium.unsold(&address, &m).unwrap();
        assert!(!stadium.is_sold(&address, &m).unwrap());
    }

    #[test]
    fn availability_is_scoped_per_match() {
        let (mut stadium, address) = setup();
        let first = MatchId::from("m1");
        let second = MatchId::from("m2");
        stadium.sold(&address, &first).unwrap();
        assert!(stadium.is_sold(&address, &first).unwrap());
        assert!(!stadium.is_sold(&address, &second).unwrap());
        assert_eq!(stadium.sold_count(&first), 1);
        assert_eq!(stadium.available_seats(&first), 349);
        assert_eq!(stadium.available_seats(&second), 350);
        let section = stadium.section_at(1, SectionLetter::B).unwrap();
        assert_eq!(section.available_count(&first), 149);
    }

    #[test]
    fn try_sell_is_exclusive() {
        let (mut stadium, address) = setup();
        let m = MatchId::from("m1");
        assert!(stadium.try_sell(&address, &m).unwrap());
        assert!(!stadium.try_sell(&address, &m).unwrap());
        stadium.unsold(&address, &m).unwrap();
        assert!(stadium.try_sell(&address, &m).unwrap());
    }

    #[test]
    fn by_code_variants_resolve_first() {
        let (mut stadium, _) = setup();
        let m = MatchId::from("m1");
        stadium.sold_by_code("P01A0307", &m).unwrap();
        assert!(stadium.seat_by_code("P01A0307").unwrap().is_sold(&m));
        stadium.unsold_by_code("p01a0307", &m).unwrap();
        assert!(!stadium.seat_by_code("P01A0307").unwrap().is_sold(&m));
        assert!(stadium.sold_by_code("P09A0101", &m).is_err());
    }

    #[test]
    fn missing_address_is_reported() {
        let (mut stadium, _) = setup();
        let m = MatchId::from("m1");
        let nowhere = SeatAddress::new(1, SectionLetter::C, 1, 1);
        assert!(stadium.sold(&nowhere, &m).is_err());
        assert!(stadium.is_sold(&nowhere, &m).is_err());
    }
}
