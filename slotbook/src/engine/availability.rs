//! Availability queries.
//!
//! All answers are computed from the current store state on every call.

use chrono::NaiveDate;

use crate::error::Result;
use crate::slot::{day_bounds, SlotTime};
use crate::store::ReservationStore;

use super::ReservationEngine;

impl<S: ReservationStore> ReservationEngine<S> {
    /// Returns the days on which every slot of the window is booked.
    ///
    /// Days are returned in ascending order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the aggregation fails.
    pub fn booked_dates(&self) -> Result<Vec<NaiveDate>> {
        let capacity = self.window.slot_count();
        Ok(self
            .store
            .count_by_day()?
            .into_iter()
            .filter(|&(_, count)| count >= capacity)
            .map(|(date, _)| date)
            .collect())
    }

    /// Returns the booked slot times of `date` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the range scan fails.
    pub fn booked_times(&self, date: NaiveDate) -> Result<Vec<SlotTime>> {
        let (start, end) = day_bounds(date);
        let mut times: Vec<SlotTime> = self
            .store
            .find_by_date_range(start, end)?
            .iter()
            .map(|r| r.time())
            .collect();
        times.sort_unstable();
        Ok(times)
    }

    /// Returns the window slots of `date` that are still free.
    ///
    /// # Errors
    ///
    /// Returns a store error if the range scan fails.
    pub fn open_slots(&self, date: NaiveDate) -> Result<Vec<SlotTime>> {
        let booked = self.booked_times(date)?;
        Ok(self
            .window
            .slots()
            .into_iter()
            .filter(|slot| booked.binary_search(slot).is_err())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{date, mock_engine, store_failure, test_engine, MockStore};
    use crate::database::Database;
    use crate::engine::{CreateOptions, ReservationEngine};
    use crate::identity::Caller;
    use crate::reservation::UserId;

    fn book(engine: &mut ReservationEngine<Database>, day: &str, time: &str) {
        engine
            .create(
                &Caller::user(UserId::new("u-1").unwrap()),
                CreateOptions::new(date(day), time, "Haircut"),
            )
            .unwrap();
    }

    fn hours(range: std::ops::RangeInclusive<u8>) -> Vec<String> {
        range.map(|h| format!("{h:02}:00")).collect()
    }

    #[test]
    fn test_booked_dates_requires_every_slot() {
        let mut engine = test_engine();
        for time in hours(9..=17) {
            book(&mut engine, "2024-06-01", &time);
        }
        assert!(engine.booked_dates().unwrap().is_empty());

        book(&mut engine, "2024-06-01", "18:00");
        assert_eq!(engine.booked_dates().unwrap(), vec![date("2024-06-01")]);
    }

    #[test]
    fn test_booked_dates_ascending() {
        let mut engine = test_engine();
        for day in ["2024-07-02", "2024-06-30"] {
            for time in hours(9..=18) {
                book(&mut engine, day, &time);
            }
        }
        book(&mut engine, "2024-07-01", "09:00");

        assert_eq!(
            engine.booked_dates().unwrap(),
            vec![date("2024-06-30"), date("2024-07-02")]
        );
    }

    #[test]
    fn test_booked_times_exact_per_day() {
        let mut engine = test_engine();
        book(&mut engine, "2024-06-01", "14:00");
        book(&mut engine, "2024-06-01", "09:00");
        book(&mut engine, "2024-05-31", "18:00");
        book(&mut engine, "2024-06-02", "09:00");

        let times: Vec<String> = engine
            .booked_times(date("2024-06-01"))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(times, vec!["09:00", "14:00"]);
        assert!(engine.booked_times(date("2024-06-03")).unwrap().is_empty());
    }

    #[test]
    fn test_open_slots() {
        let mut engine = test_engine();
        book(&mut engine, "2024-06-01", "10:00");
        book(&mut engine, "2024-06-01", "18:00");

        let open = engine.open_slots(date("2024-06-01")).unwrap();
        assert_eq!(open.len(), 8);
        assert_eq!(open.first().unwrap().to_string(), "09:00");
        assert!(!open.iter().any(|t| t.to_string() == "10:00"));
        assert_eq!(open.last().unwrap().to_string(), "17:00");
    }

    #[test]
    fn test_booked_dates_propagates_store_failure() {
        let mut store = MockStore::new();
        store
            .expect_count_by_day()
            .times(1)
            .returning(|| Err(store_failure()));

        let engine = mock_engine(store);
        assert!(engine.booked_dates().is_err());
    }

    #[test]
    fn test_booked_dates_from_counts() {
        let mut store = MockStore::new();
        store.expect_count_by_day().returning(|| {
            Ok(vec![
                (date("2024-06-01"), 9),
                (date("2024-06-02"), 10),
                (date("2024-06-03"), 11),
            ])
        });

        let engine = mock_engine(store);
        assert_eq!(
            engine.booked_dates().unwrap(),
            vec![date("2024-06-02"), date("2024-06-03")]
        );
    }
}
