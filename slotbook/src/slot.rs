//! Slot time and operating window types.
//!
//! A slot is a (date, time-label) pair. The time label is a [`SlotTime`],
//! and the set of labels bookable on any given day is described by an
//! [`OperatingWindow`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// Number of minutes in a day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A slot time label with minute precision (`HH:MM`).
///
/// # Examples
///
/// ```
/// use slotbook::SlotTime;
///
/// let time: SlotTime = "9:00".parse().unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.to_string(), "09:00");
///
/// assert!("24:00".parse::<SlotTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    /// Creates a slot time from an hour (0-23) and minute (0-59).
    ///
    /// # Errors
    ///
    /// Returns an error if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidSlotError> {
        if hour > 23 {
            return Err(InvalidSlotError {
                input: format!("{hour}:{minute:02}"),
                reason: "hour must be between 0 and 23".into(),
            });
        }
        if minute > 59 {
            return Err(InvalidSlotError {
                input: format!("{hour}:{minute:02}"),
                reason: "minute must be between 0 and 59".into(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Creates a slot time from minutes past midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` falls outside a single day.
    pub fn from_minutes(minutes: u16) -> Result<Self, InvalidSlotError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(InvalidSlotError {
                input: minutes.to_string(),
                reason: "minutes past midnight must be less than 1440".into(),
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes past midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::SlotTime;
    ///
    /// let time = SlotTime::new(9, 30).unwrap();
    /// assert_eq!(time.minutes_since_midnight(), 570);
    /// ```
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Converts to a `chrono` time of day.
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Combines the slot time with a date into a local instant.
    #[must_use]
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }
}

impl FromStr for SlotTime {
    type Err = InvalidSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidSlotError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| invalid("expected H:MM or HH:MM"))?;

        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid("expected H:MM or HH:MM"));
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("hour and minute must be digits"));
        }

        let hour: u8 = hour.parse().map_err(|_| invalid("invalid hour"))?;
        let minute: u8 = minute.parse().map_err(|_| invalid("invalid minute"))?;
        Self::new(hour, minute).map_err(|e| InvalidSlotError {
            input: s.to_string(),
            reason: e.reason,
        })
    }
}

impl TryFrom<String> for SlotTime {
    type Error = InvalidSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(time: SlotTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Error returned when a slot time label cannot be parsed or constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlotError {
    /// The rejected input.
    pub input: String,
    /// Why the input was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slot time '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidSlotError {}

/// The fixed set of slot times bookable on every day.
///
/// Slots start at `first`, repeat every `slot_minutes`, and end at `last`
/// (inclusive). The default window is 09:00-18:00 with hourly slots,
/// giving ten slots per day.
///
/// # Examples
///
/// ```
/// use slotbook::{OperatingWindow, SlotTime};
///
/// let window = OperatingWindow::default();
/// assert_eq!(window.slot_count(), 10);
/// assert!(window.contains(SlotTime::new(13, 0).unwrap()));
/// assert!(!window.contains(SlotTime::new(13, 30).unwrap()));
/// assert!(!window.contains(SlotTime::new(19, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    first: SlotTime,
    last: SlotTime,
    slot_minutes: u16,
}

impl OperatingWindow {
    /// Longest supported slot length, in minutes.
    pub const MAX_SLOT_MINUTES: u16 = 720;

    /// Creates a new operating window.
    ///
    /// # Errors
    ///
    /// Returns an error if `last` is earlier than `first`, if the slot
    /// length is zero or longer than [`Self::MAX_SLOT_MINUTES`], or if the
    /// span between `first` and `last` is not a whole number of slots.
    pub fn new(
        first: SlotTime,
        last: SlotTime,
        slot_minutes: u16,
    ) -> Result<Self, InvalidWindowError> {
        if last < first {
            return Err(InvalidWindowError {
                reason: format!("last slot {last} is earlier than first slot {first}"),
            });
        }
        if slot_minutes == 0 || slot_minutes > Self::MAX_SLOT_MINUTES {
            return Err(InvalidWindowError {
                reason: format!(
                    "slot length must be between 1 and {} minutes, got {slot_minutes}",
                    Self::MAX_SLOT_MINUTES
                ),
            });
        }
        let span = last.minutes_since_midnight() - first.minutes_since_midnight();
        if span % slot_minutes != 0 {
            return Err(InvalidWindowError {
                reason: format!(
                    "span {first}-{last} is not a multiple of {slot_minutes} minutes"
                ),
            });
        }
        Ok(Self {
            first,
            last,
            slot_minutes,
        })
    }

    /// Returns the first slot of the day.
    #[must_use]
    pub const fn first(&self) -> SlotTime {
        self.first
    }

    /// Returns the last slot of the day.
    #[must_use]
    pub const fn last(&self) -> SlotTime {
        self.last
    }

    /// Returns the length of each slot in minutes.
    #[must_use]
    pub const fn slot_minutes(&self) -> u16 {
        self.slot_minutes
    }

    /// Returns the number of slots per day.
    ///
    /// A date is fully booked once it holds this many reservations.
    #[must_use]
    pub const fn slot_count(&self) -> u32 {
        let span = self.last.minutes_since_midnight() - self.first.minutes_since_midnight();
        (span / self.slot_minutes) as u32 + 1
    }

    /// Returns `true` if `time` is one of the window's slots.
    #[must_use]
    pub fn contains(&self, time: SlotTime) -> bool {
        if time < self.first || time > self.last {
            return false;
        }
        let offset = time.minutes_since_midnight() - self.first.minutes_since_midnight();
        offset % self.slot_minutes == 0
    }

    /// Returns every slot of the day in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::OperatingWindow;
    ///
    /// let slots = OperatingWindow::default().slots();
    /// assert_eq!(slots.first().unwrap().to_string(), "09:00");
    /// assert_eq!(slots.last().unwrap().to_string(), "18:00");
    /// ```
    #[must_use]
    pub fn slots(&self) -> Vec<SlotTime> {
        let start = self.first.minutes_since_midnight();
        let end = self.last.minutes_since_midnight();
        (start..=end)
            .step_by(usize::from(self.slot_minutes))
            .filter_map(|m| SlotTime::from_minutes(m).ok())
            .collect()
    }
}

impl Default for OperatingWindow {
    fn default() -> Self {
        Self {
            first: SlotTime { hour: 9, minute: 0 },
            last: SlotTime {
                hour: 18,
                minute: 0,
            },
            slot_minutes: 60,
        }
    }
}

impl fmt::Display for OperatingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} every {} min",
            self.first, self.last, self.slot_minutes
        )
    }
}

/// Error returned when an operating window is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidWindowError {
    /// Why the window was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid operating window: {}", self.reason)
    }
}

impl std::error::Error for InvalidWindowError {}

/// Parses a calendar date, ignoring any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339 timestamps.
///
/// # Errors
///
/// Returns a validation error if the input is not a recognizable date.
///
/// # Examples
///
/// ```
/// use slotbook::slot::parse_date;
///
/// let a = parse_date("2024-06-01").unwrap();
/// let b = parse_date("2024-06-01T15:45:00Z").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_date(input: &str) -> crate::Result<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ts.date());
    }
    Err(crate::Error::Validation {
        field: "date".into(),
        message: format!("'{input}' is not a valid date (expected YYYY-MM-DD)"),
    })
}

/// Returns the inclusive local bounds of a calendar day (00:00:00-23:59:59).
#[must_use]
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date.and_hms_opt(23, 59, 59).unwrap_or(start);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> SlotTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_slot_time_parse_variants() {
        assert_eq!(t("9:00"), SlotTime::new(9, 0).unwrap());
        assert_eq!(t("09:00"), SlotTime::new(9, 0).unwrap());
        assert_eq!(t(" 17:30 "), SlotTime::new(17, 30).unwrap());
    }

    #[test]
    fn test_slot_time_parse_rejects_garbage() {
        for bad in ["", "9", "9:0", "900", "ab:cd", "-1:00", "24:00", "12:60", "123:00"] {
            assert!(bad.parse::<SlotTime>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_slot_time_display_is_zero_padded() {
        assert_eq!(SlotTime::new(9, 5).unwrap().to_string(), "09:05");
    }

    #[test]
    fn test_slot_time_from_minutes() {
        assert_eq!(SlotTime::from_minutes(600).unwrap(), t("10:00"));
        assert!(SlotTime::from_minutes(1440).is_err());
    }

    #[test]
    fn test_slot_time_serde_as_string() {
        let json = serde_json::to_string(&t("10:00")).unwrap();
        assert_eq!(json, "\"10:00\"");
        let back: SlotTime = serde_json::from_str("\"7:15\"").unwrap();
        assert_eq!(back, t("07:15"));
        assert!(serde_json::from_str::<SlotTime>("\"25:00\"").is_err());
    }

    #[test]
    fn test_slot_time_on_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let instant = t("10:00").on(date);
        assert_eq!(instant.to_string(), "2024-06-01 10:00:00");
    }

    #[test]
    fn test_default_window() {
        let window = OperatingWindow::default();
        assert_eq!(window.slot_count(), 10);
        let labels: Vec<String> = window.slots().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
                "18:00"
            ]
        );
    }

    #[test]
    fn test_window_contains() {
        let window = OperatingWindow::default();
        assert!(window.contains(t("09:00")));
        assert!(window.contains(t("18:00")));
        assert!(!window.contains(t("08:00")));
        assert!(!window.contains(t("19:00")));
        assert!(!window.contains(t("09:30")));
    }

    #[test]
    fn test_window_half_hour_slots() {
        let window = OperatingWindow::new(t("09:00"), t("11:00"), 30).unwrap();
        assert_eq!(window.slot_count(), 5);
        assert!(window.contains(t("10:30")));
    }

    #[test]
    fn test_window_single_slot() {
        let window = OperatingWindow::new(t("12:00"), t("12:00"), 60).unwrap();
        assert_eq!(window.slot_count(), 1);
        assert_eq!(window.slots(), vec![t("12:00")]);
    }

    #[test]
    fn test_window_rejects_inverted_bounds() {
        let err = OperatingWindow::new(t("18:00"), t("09:00"), 60).unwrap_err();
        assert!(err.reason.contains("earlier"));
    }

    #[test]
    fn test_window_rejects_bad_slot_length() {
        assert!(OperatingWindow::new(t("09:00"), t("18:00"), 0).is_err());
        assert!(OperatingWindow::new(t("09:00"), t("18:00"), 721).is_err());
        assert!(OperatingWindow::new(t("09:00"), t("18:00"), 7).is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_date("2024-06-01").unwrap(), expected);
        assert_eq!(parse_date("2024-06-01T23:30:00").unwrap(), expected);
        assert_eq!(parse_date("2024-06-01T10:00:00+02:00").unwrap(), expected);
        assert_eq!(parse_date("2024-06-01T10:00:00.000Z").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("June first").unwrap_err();
        assert!(matches!(err, crate::Error::Validation { ref field, .. } if field == "date"));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let (start, end) = day_bounds(date);
        assert_eq!(start.to_string(), "2024-06-01 00:00:00");
        assert_eq!(end.to_string(), "2024-06-01 23:59:59");
    }
}
