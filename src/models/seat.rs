use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::SectionLetter;

/// Класс места. Every seat starts out `General`; the VIP policy upgrades a
/// fixed number of them once, right after the stadium is partitioned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    #[default]
    General,
    Vip,
}

/// Opaque match identifier supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MatchId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MatchId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite address of a seat: (floor, section letter, row, seat number).
/// `Display` and `FromStr` use the 8-character seat code (see `venue::codec`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatAddress {
    pub floor: u32,
    pub section: SectionLetter,
    pub row: u32,
    pub seat: u32,
}

impl SeatAddress {
    pub fn new(floor: u32, section: SectionLetter, row: u32, seat: u32) -> Self {
        Self {
            floor,
            section,
            row,
            seat,
        }
    }
}

/// A single bookable seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    #[serde(flatten)]
    address: SeatAddress,
    class: SeatClass,
    #[serde(skip_serializing_if = "HashSet::is_empty")]
    sold_for: HashSet<MatchId>,
}

impl Seat {
    pub(crate) fn new(address: SeatAddress) -> Self {
        Self {
            address,
            class: SeatClass::General,
            sold_for: HashSet::new(),
        }
    }

    pub fn address(&self) -> SeatAddress {
        self.address
    }

    pub fn floor(&self) -> u32 {
        self.address.floor
    }

    pub fn section(&self) -> SectionLetter {
        self.address.section
    }

    pub fn row(&self) -> u32 {
        self.address.row
    }

    pub fn number(&self) -> u32 {
        self.address.seat
    }

    pub fn class(&self) -> SeatClass {
        self.class
    }

    pub fn is_vip(&self) -> bool {
        self.class == SeatClass::Vip
    }

    pub(crate) fn set_class(&mut self, class: SeatClass) {
        self.class = class;
    }

    /// Canonical seat code, e.g. `P01A0101`.
    pub fn code(&self) -> String {
        self.address.to_string()
    }

    /// Matches this seat is currently sold for.
    pub fn sold_for(&self) -> impl Iterator<Item = &MatchId> {
        self.sold_for.iter()
    }

    pub(crate) fn sold_set_mut(&mut self) -> &mut HashSet<MatchId> {
        &mut self.sold_for
    }

    pub(crate) fn sold_set(&self) -> &HashSet<MatchId> {
        &self.sold_for
    }
}
