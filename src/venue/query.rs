use std::ops::Range;

use super::Stadium;
use crate::error::{Result, SeatingError};
use crate::models::{Location, Seat, SeatAddress, Section, SectionLetter, MAX_SECTIONS_PER_FLOOR};

// Секции лежат по этажам подряд, по восемь на этаж (последний может быть
// неполным), поэтому (этаж, буква) - это прямой индекс в массиве.
impl Stadium {
    fn floor_range(&self, floor: u32) -> Result<Range<usize>> {
        if floor == 0 || floor > self.num_floors {
            return Err(SeatingError::InvalidFloor {
                floor,
                max: self.num_floors,
            });
        }
        let per_floor = MAX_SECTIONS_PER_FLOOR as usize;
        let start = (floor as usize - 1) * per_floor;
        let end = (start + per_floor).min(self.sections.len());
        Ok(start..end)
    }

    fn section_index(&self, floor: u32, letter: SectionLetter) -> Result<usize> {
        let range = self.floor_range(floor)?;
        let index = range.start + letter.slot();
        if !range.contains(&index) {
            return Err(SeatingError::InvalidSectionLetter(letter.to_string()));
        }
        Ok(index)
    }

    /// Section by floor and letter (either case).
    pub fn section(&self, floor: u32, letter: char) -> Result<&Section> {
        self.section_at(floor, SectionLetter::try_from(letter)?)
    }

    pub fn section_at(&self, floor: u32, letter: SectionLetter) -> Result<&Section> {
        let index = self.section_index(floor, letter)?;
        Ok(&self.sections[index])
    }

    pub fn seat(&self, floor: u32, letter: char, row: u32, seat_number: u32) -> Result<&Seat> {
        self.section(floor, letter)?.seat(row, seat_number)
    }

    pub fn seat_at(&self, address: &SeatAddress) -> Result<&Seat> {
        self.section_at(address.floor, address.section)?
            .seat(address.row, address.seat)
    }

    pub(crate) fn seat_at_mut(&mut self, address: &SeatAddress) -> Result<&mut Seat> {
        let index = self.section_index(address.floor, address.section)?;
        self.sections[index].seat_mut(address.row, address.seat)
    }

    /// Sections on `floor` in creation order.
    pub fn sections_by_floor(&self, floor: u32) -> Result<&[Section]> {
        let range = self.floor_range(floor)?;
        Ok(&self.sections[range])
    }

    pub fn sections_by_location(&self, floor: u32, location: Location) -> Result<Vec<&Section>> {
        Ok(self
            .sections_by_floor(floor)?
            .iter()
            .filter(|section| section.location() == location)
            .collect())
    }

    /// Every seat in the stadium, section by section.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.sections.iter().flat_map(|section| section.seats())
    }

    pub(crate) fn seats_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.sections.iter_mut().flat_map(|section| section.seats_mut())
    }
}
