use tracing::debug;

use super::Stadium;
use crate::models::{SeatClass, MAX_ROWS_PER_SECTION};

impl Stadium {
    /// Marks the first `count` seats as VIP, visiting rows outermost: row 1 of
    /// every section on every floor, then row 2, and so on, seats in number
    /// order. Stops mid-row once `count` seats are marked. Returns how many
    /// seats were marked, which is `min(count, capacity)`.
    pub(crate) fn assign_vip_seats(&mut self, count: u32) -> u32 {
        let mut remaining = count;
        if remaining == 0 {
            return 0;
        }

        for row_number in 1..=MAX_ROWS_PER_SECTION {
            // sections are stored floor by floor in creation order, so this is
            // the floor loop and the per-floor section loop in one pass
            for section in self.sections.iter_mut() {
                let Ok(row) = section.row_mut(row_number) else {
                    continue;
                };
                for seat in row.seats_mut() {
                    seat.set_class(SeatClass::Vip);
                    remaining -= 1;
                    if remaining == 0 {
                        debug!("VIP pass stopped at {}", seat.address());
                        return count;
                    }
                }
            }
        }

        count - remaining
    }
}
