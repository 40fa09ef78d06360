use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MatchId, Row, Seat, MAX_SEATS_PER_ROW, MAX_SECTION_CAPACITY};
use crate::error::{Result, SeatingError};

/// Where a section sits around the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Front,
    Back,
    Left,
    Right,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Front => "front",
            Location::Back => "back",
            Location::Left => "left",
            Location::Right => "right",
        };
        f.write_str(name)
    }
}

/// Slot index on a floor -> location. Slots are consumed in this order, so a
/// partially filled last floor simply loses its trailing slots.
pub const SLOT_LOCATIONS: [Location; 8] = [
    Location::Front,
    Location::Front,
    Location::Front,
    Location::Back,
    Location::Back,
    Location::Back,
    Location::Left,
    Location::Right,
];

/// Section letter `a..h`; its ordinal is the slot index on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl SectionLetter {
    pub const ALL: [SectionLetter; 8] = [
        SectionLetter::A,
        SectionLetter::B,
        SectionLetter::C,
        SectionLetter::D,
        SectionLetter::E,
        SectionLetter::F,
        SectionLetter::G,
        SectionLetter::H,
    ];

    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn location(self) -> Location {
        SLOT_LOCATIONS[self.slot()]
    }

    pub fn as_char(self) -> char {
        (b'a' + self as u8) as char
    }

    pub fn to_upper(self) -> char {
        self.as_char().to_ascii_uppercase()
    }
}

impl TryFrom<char> for SectionLetter {
    type Error = SeatingError;

    fn try_from(c: char) -> Result<Self> {
        let lower = c.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return Err(SeatingError::InvalidSectionLetter(c.to_string()));
        }
        Self::from_slot((lower as u8 - b'a') as usize)
            .ok_or_else(|| SeatingError::InvalidSectionLetter(c.to_string()))
    }
}

impl std::str::FromStr for SectionLetter {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => SectionLetter::try_from(c),
            _ => Err(SeatingError::InvalidSectionLetter(s.to_string())),
        }
    }
}

impl fmt::Display for SectionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A lettered block of at most 200 seats on one floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    floor: u32,
    letter: SectionLetter,
    location: Location,
    capacity: u32,
    rows: Vec<Row>,
}

impl Section {
    /// Builds the rows: every row holds ten seats except the last one, which
    /// takes the remainder.
    pub(crate) fn new(floor: u32, letter: SectionLetter, capacity: u32) -> Self {
        debug_assert!(capacity > 0 && capacity <= MAX_SECTION_CAPACITY);
        let num_rows = capacity.div_ceil(MAX_SEATS_PER_ROW);
        let mut remaining = capacity;
        let mut rows = Vec::with_capacity(num_rows as usize);
        for number in 1..=num_rows {
            let num_seats = remaining.min(MAX_SEATS_PER_ROW);
            rows.push(Row::new(floor, letter, number, num_seats));
            remaining -= num_seats;
        }
        Self {
            floor,
            letter,
            location: letter.location(),
            capacity,
            rows,
        }
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn letter(&self) -> SectionLetter {
        self.letter
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn row(&self, row_number: u32) -> Result<&Row> {
        let index = self.row_index(row_number)?;
        Ok(&self.rows[index])
    }

    pub fn seat(&self, row_number: u32, seat_number: u32) -> Result<&Seat> {
        self.row(row_number)?.seat(seat_number)
    }

    pub(crate) fn row_mut(&mut self, row_number: u32) -> Result<&mut Row> {
        let index = self.row_index(row_number)?;
        Ok(&mut self.rows[index])
    }

    pub(crate) fn seat_mut(&mut self, row_number: u32, seat_number: u32) -> Result<&mut Seat> {
        self.row_mut(row_number)?.seat_mut(seat_number)
    }

    /// All seats, row by row.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|row| row.seats())
    }

    pub(crate) fn seats_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.rows.iter_mut().flat_map(|row| row.seats_mut().iter_mut())
    }

    /// Seats of this section still free for `match_id`.
    pub fn available_count(&self, match_id: &MatchId) -> u32 {
        self.seats().filter(|seat| !seat.is_sold(match_id)).count() as u32
    }

    fn row_index(&self, row_number: u32) -> Result<usize> {
        if row_number == 0 || row_number > self.num_rows() {
            return Err(SeatingError::InvalidRow {
                row: row_number,
                max: self.num_rows(),
            });
        }
        Ok(row_number as usize - 1)
    }
}
