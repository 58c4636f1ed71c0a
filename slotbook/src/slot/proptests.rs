//! Property-based tests for `SlotTime` and `OperatingWindow`.

use super::{OperatingWindow, SlotTime};
use proptest::prelude::*;

/// Slot lengths that divide evenly into whole hours.
const HOUR_DIVISORS: [u16; 8] = [5, 10, 15, 20, 30, 60, 120, 180];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every valid (hour, minute) pair survives display and parse
    #[test]
    fn slot_time_display_parses_back(hour in 0u8..24, minute in 0u8..60) {
        let time = SlotTime::new(hour, minute).unwrap();
        let parsed: SlotTime = time.to_string().parse().unwrap();
        prop_assert_eq!(parsed, time);
    }

    // Ordering follows minutes since midnight
    #[test]
    fn slot_time_ordering_matches_minutes(a in 0u16..1440, b in 0u16..1440) {
        let ta = SlotTime::from_minutes(a).unwrap();
        let tb = SlotTime::from_minutes(b).unwrap();
        prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
    }

    // slots() yields exactly slot_count() entries, all contained
    #[test]
    fn window_slots_agree_with_count(
        first_hour in 0u8..12,
        hours in 0u8..12,
        idx in 0usize..HOUR_DIVISORS.len(),
    ) {
        let step = HOUR_DIVISORS[idx];
        let first = SlotTime::new(first_hour, 0).unwrap();
        let last = SlotTime::new(first_hour + hours, 0).unwrap();
        let span = u16::from(hours) * 60;
        prop_assume!(span % step == 0);

        let window = OperatingWindow::new(first, last, step).unwrap();
        let slots = window.slots();
        prop_assert_eq!(slots.len() as u32, window.slot_count());
        prop_assert!(slots.iter().all(|s| window.contains(*s)));
        prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }

    // Times outside the window are never contained
    #[test]
    fn window_rejects_out_of_range(minutes in 0u16..1440) {
        let window = OperatingWindow::default();
        let time = SlotTime::from_minutes(minutes).unwrap();
        let in_range = (9 * 60..=18 * 60).contains(&minutes) && minutes % 60 == 0;
        prop_assert_eq!(window.contains(time), in_range);
    }
}
