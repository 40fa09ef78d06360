pub mod seat;
pub mod row;
pub mod section;

pub use seat::{MatchId, Seat, SeatAddress, SeatClass};
pub use row::Row;
pub use section::{Location, Section, SectionLetter, SLOT_LOCATIONS};

/// Seats in a full row.
pub const MAX_SEATS_PER_ROW: u32 = 10;
/// Rows in a full section.
pub const MAX_ROWS_PER_SECTION: u32 = 20;
pub const MAX_SECTION_CAPACITY: u32 = MAX_ROWS_PER_SECTION * MAX_SEATS_PER_ROW;
pub const MAX_SECTIONS_PER_FLOOR: u32 = 8;
pub const FLOOR_CAPACITY: u32 = MAX_SECTIONS_PER_FLOOR * MAX_SECTION_CAPACITY;
// Код места хранит этаж двумя цифрами
pub const MAX_FLOORS: u32 = 99;
