use crate::error::{Result, SeatingError};
use crate::models::{
    Section, SectionLetter, FLOOR_CAPACITY, MAX_FLOORS, MAX_SECTIONS_PER_FLOOR,
    MAX_SECTION_CAPACITY,
};

/// Validated construction input: general and VIP seat counts coming from the
/// data feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    general: u32,
    vip: u32,
}

impl Capacity {
    pub fn new(general: i64, vip: i64) -> Result<Self> {
        let invalid = |reason| SeatingError::InvalidCapacity {
            general,
            vip,
            reason,
        };

        if general < 0 || vip < 0 {
            return Err(invalid("seat counts must not be negative"));
        }
        let total = general
            .checked_add(vip)
            .ok_or_else(|| invalid("seat counts overflow"))?;
        if total <= 0 {
            return Err(invalid("capacity must be positive"));
        }
        if total > i64::from(MAX_FLOORS * FLOOR_CAPACITY) {
            return Err(invalid("capacity needs more than 99 floors"));
        }

        // оба значения уже ограничены сверху, приведение безопасно
        Ok(Self {
            general: general as u32,
            vip: vip as u32,
        })
    }

    pub fn general(&self) -> u32 {
        self.general
    }

    pub fn vip(&self) -> u32 {
        self.vip
    }

    pub fn total(&self) -> u32 {
        self.general + self.vip
    }

    pub fn num_floors(&self) -> u32 {
        self.total().div_ceil(FLOOR_CAPACITY)
    }

    pub fn num_sections(&self) -> u32 {
        self.total().div_ceil(MAX_SECTION_CAPACITY)
    }
}

pub(crate) struct Layout {
    pub num_floors: u32,
    pub sections: Vec<Section>,
}

/// Walks floors from 1 and slots `a..h` within each floor, giving every
/// section `min(200, remaining)` seats. Stops the moment nothing remains, so
/// the last floor may hold fewer than eight sections.
pub(crate) fn partition(capacity: u32) -> Layout {
    let num_floors = capacity.div_ceil(FLOOR_CAPACITY);
    let num_sections = capacity.div_ceil(MAX_SECTION_CAPACITY);
    let mut sections = Vec::with_capacity(num_sections as usize);
    let mut remaining = capacity;

    'floors: for floor in 1..=num_floors {
        for slot in 0..MAX_SECTIONS_PER_FLOOR as usize {
            let Some(letter) = SectionLetter::from_slot(slot) else {
                break;
            };
            let section_capacity = remaining.min(MAX_SECTION_CAPACITY);
            sections.push(Section::new(floor, letter, section_capacity));
            remaining -= section_capacity;
            if remaining == 0 {
                break 'floors;
            }
        }
    }

    debug_assert_eq!(sections.len() as u32, num_sections);
    Layout {
        num_floors,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    #[test]
    fn rejects_negative_and_empty_capacity() {
        assert!(Capacity::new(-1, 10).is_err());
        assert!(Capacity::new(10, -1).is_err());
        assert!(Capacity::new(0, 0).is_err());
        assert!(Capacity::new(i64::MAX, 1).is_err());
        assert!(Capacity::new(0, 1).is_ok());
    }

    #[test]
    fn rejects_capacity_beyond_two_digit_floors() {
        let max = i64::from(MAX_FLOORS * FLOOR_CAPACITY);
        assert!(Capacity::new(max, 0).is_ok());
        assert!(Capacity::new(max, 1).is_err());
    }

    #[test]
    fn small_capacity_fits_one_section() {
        let layout = partition(7);
        assert_eq!(layout.num_floors, 1);
        assert_eq!(layout.sections.len(), 1);
        assert_eq!(layout.sections[0].capacity(), 7);
        assert_eq!(layout.sections[0].num_rows(), 1);
    }

    #[test]
    fn exact_floor_fills_all_eight_slots() {
        let layout = partition(1600);
        assert_eq!(layout.num_floors, 1);
        assert_eq!(layout.sections.len(), 8);
        let locations: Vec<Location> = layout.sections.iter().map(|s| s.location()).collect();
        assert_eq!(locations, crate::models::SLOT_LOCATIONS.to_vec());
    }

    #[test]
    fn partial_last_floor_truncates_slots_in_table_order() {
        // два полных этажа + 4 секции на третьем
        let layout = partition(2 * 1600 + 3 * 200 + 50);
        assert_eq!(layout.num_floors, 3);
        let third: Vec<&Section> = layout.sections.iter().filter(|s| s.floor() == 3).collect();
        assert_eq!(third.len(), 4);
        assert_eq!(third[3].letter(), SectionLetter::D);
        assert_eq!(third[3].location(), Location::Back);
        assert_eq!(third[3].capacity(), 50);
        assert!(third.iter().all(|s| s.location() != Location::Left));
    }

    #[test]
    fn capacity_is_conserved() {
        for total in [1, 199, 200, 201, 1599, 1601, 5000, 12345] {
            let layout = partition(total);
            let sum: u32 = layout.sections.iter().map(|s| s.capacity()).sum();
            assert_eq!(sum, total);
            assert_eq!(
                layout.sections.len() as u32,
                Capacity::new(i64::from(total), 0).unwrap().num_sections()
            );
        }
    }
}
