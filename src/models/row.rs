use serde::Serialize;

use super::{Seat, SeatAddress, SectionLetter, MAX_SEATS_PER_ROW};
use crate::error::{Result, SeatingError};

/// An ordered block of up to ten seats within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    floor: u32,
    section: SectionLetter,
    number: u32,
    seats: Vec<Seat>,
}

impl Row {
    pub(crate) fn new(floor: u32, section: SectionLetter, number: u32, num_seats: u32) -> Self {
        debug_assert!(num_seats <= MAX_SEATS_PER_ROW);
        let seats = (1..=num_seats)
            .map(|seat| Seat::new(SeatAddress::new(floor, section, number, seat)))
            .collect();
        Self {
            floor,
            section,
            number,
            seats,
        }
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn section(&self) -> SectionLetter {
        self.section
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> u32 {
        self.seats.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat(&self, seat_number: u32) -> Result<&Seat> {
        let index = self.seat_index(seat_number)?;
        Ok(&self.seats[index])
    }

    pub(crate) fn seat_mut(&mut self, seat_number: u32) -> Result<&mut Seat> {
        let index = self.seat_index(seat_number)?;
        Ok(&mut self.seats[index])
    }

    pub(crate) fn seats_mut(&mut self) -> &mut [Seat] {
        &mut self.seats
    }

    fn seat_index(&self, seat_number: u32) -> Result<usize> {
        if seat_number == 0 || seat_number > self.len() {
            return Err(SeatingError::InvalidSeatNumber {
                seat: seat_number,
                max: self.len(),
            });
        }
        Ok(seat_number as usize - 1)
    }
}
