//! Structural properties of every stadium the partitioner can build.
//!
//! Run with: `cargo test --test stadium_properties_test`

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use stadium_seating::models::{MAX_SEATS_PER_ROW, MAX_SECTIONS_PER_FLOOR, MAX_SECTION_CAPACITY};
use stadium_seating::{MatchId, SeatClass, SeatingError, Stadium};

fn capacity() -> impl Strategy<Value = (i64, i64)> {
    // до ~3 этажей, чтобы тесты оставались быстрыми
    (0i64..4000, 0i64..1200).prop_filter("capacity must be positive", |(g, v)| g + v > 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_seat_round_trips_through_its_code((general, vip) in capacity()) {
        let stadium = Stadium::new("p", "Prop", "City", general, vip).unwrap();
        for seat in stadium.seats() {
            let decoded = stadium.seat_by_code(&seat.code()).unwrap();
            prop_assert_eq!(decoded, seat);
        }
    }

    #[test]
    fn capacity_is_conserved((general, vip) in capacity()) {
        let stadium = Stadium::new("p", "Prop", "City", general, vip).unwrap();
        let sections: u32 = stadium.sections().iter().map(|s| s.capacity()).sum();
        let rows: u32 = stadium
            .sections()
            .iter()
            .flat_map(|s| s.rows())
            .map(|r| r.len())
            .sum();
        prop_assert_eq!(i64::from(sections), general + vip);
        prop_assert_eq!(i64::from(rows), general + vip);
        prop_assert_eq!(stadium.seats().count() as i64, general + vip);
    }

    #[test]
    fn structural_bounds_hold((general, vip) in capacity()) {
        let stadium = Stadium::new("p", "Prop", "City", general, vip).unwrap();
        for section in stadium.sections() {
            prop_assert!(section.capacity() <= MAX_SECTION_CAPACITY);
            prop_assert!(section.rows().iter().all(|r| r.len() <= MAX_SEATS_PER_ROW));
            // все ряды, кроме последнего, полные
            let full_rows = section.rows().len().saturating_sub(1);
            prop_assert!(section.rows()[..full_rows].iter().all(|r| r.len() == MAX_SEATS_PER_ROW));
        }
        for floor in 1..=stadium.num_floors() {
            let on_floor = stadium.sections_by_floor(floor).unwrap();
            prop_assert!(on_floor.len() as u32 <= MAX_SECTIONS_PER_FLOOR);
            prop_assert!(!on_floor.is_empty());
            for (slot, section) in on_floor.iter().enumerate() {
                prop_assert_eq!(section.letter().slot(), slot);
                prop_assert_eq!(section.floor(), floor);
            }
        }
    }

    #[test]
    fn vip_count_is_min_of_request_and_capacity((general, vip) in capacity()) {
        let stadium = Stadium::new("p", "Prop", "City", general, vip).unwrap();
        let expected = vip.min(general + vip) as u32;
        prop_assert_eq!(stadium.vip_count(), expected);
        let counted = stadium.seats().filter(|s| s.class() == SeatClass::Vip).count() as u32;
        prop_assert_eq!(counted, expected);
    }

    #[test]
    fn vip_seats_precede_general_seats_row_wise((general, vip) in capacity()) {
        let stadium = Stadium::new("p", "Prop", "City", general, vip).unwrap();
        let max_vip_row = stadium.seats().filter(|s| s.is_vip()).map(|s| s.row()).max();
        let min_general_row = stadium.seats().filter(|s| !s.is_vip()).map(|s| s.row()).min();
        if let (Some(vip_row), Some(general_row)) = (max_vip_row, min_general_row) {
            prop_assert!(vip_row <= general_row);
        }
    }

    #[test]
    fn sold_is_idempotent(row in 1u32..=20, seat in 1u32..=10, name in "[a-z]{1,8}") {
        let mut stadium = Stadium::new("p", "Prop", "City", 200, 0).unwrap();
        let match_id = MatchId::new(name);
        let address = stadium.seat(1, 'a', row, seat).unwrap().address();
        stadium.sold(&address, &match_id).unwrap();
        stadium.sold(&address, &match_id).unwrap();
        prop_assert_eq!(stadium.sold_count(&match_id), 1);
        stadium.unsold(&address, &match_id).unwrap();
        prop_assert!(!stadium.is_sold(&address, &match_id).unwrap());
    }

    #[test]
    fn arbitrary_strings_never_panic(code in "\\PC{0,12}") {
        let stadium = Stadium::new("p", "Prop", "City", 500, 0).unwrap();
        match stadium.seat_by_code(&code) {
            // разобранный код всегда ASCII, срез по байтам безопасен
            Ok(seat) => prop_assert!(seat.code()[1..].eq_ignore_ascii_case(&code[1..])),
            Err(SeatingError::InvalidCodeLength(len)) => prop_assert_ne!(len, 8),
            Err(_) => {}
        }
    }
}
