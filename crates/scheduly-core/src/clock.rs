//! Wall-clock time values and overnight anchoring.
//!
//! Schedules are built from naive HH:MM clock times with no date or
//! timezone attached. A plan that runs past midnight needs to know which
//! day a clock value belongs to, so [`AnchoredTime`] pairs a clock value
//! with a day offset relative to the schedule's anchor day. The rollover
//! rule lives in exactly one place: [`AnchoredTime::overnight`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ClockError;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A naive wall-clock time of day.
///
/// Parses from and displays as `HH:MM`; the same string is its wire
/// format in snapshots and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time.
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`. Use [`try_new`](Self::try_new)
    /// for a non-panicking version.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self::try_new(hour, minute).expect("ClockTime::new: hour must be 0-23, minute 0-59")
    }

    /// Create a clock time, returning a Result.
    ///
    /// # Errors
    /// Returns an error if a component is outside the 24-hour clock.
    pub fn try_new(hour: u8, minute: u8) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 {
            return Err(ClockError::OutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockError::InvalidTimeFormat(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        Self::try_new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A clock time anchored to a day of the schedule.
///
/// `day_offset` counts days from the anchor day: the arrival day for
/// evening schedules, the wake day for morning schedules. Ordering and
/// arithmetic work on whole anchored minutes, so `23:00` on the anchor
/// day compares before `00:30` on the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchoredTime {
    pub clock: ClockTime,
    pub day_offset: u8,
}

impl AnchoredTime {
    /// Clock times before this hour are treated as belonging to the
    /// morning after an evening anchor.
    const ROLLOVER_HOUR: u8 = 12;

    /// A time on the anchor day itself.
    pub fn same_day(clock: ClockTime) -> Self {
        Self {
            clock,
            day_offset: 0,
        }
    }

    /// An end-of-night boundary relative to an evening anchor: clock
    /// times before 12:00 land on the next day.
    pub fn overnight(clock: ClockTime) -> Self {
        let day_offset = u8::from(clock.hour() < Self::ROLLOVER_HOUR);
        Self { clock, day_offset }
    }

    /// Minutes from the anchor day's midnight.
    pub fn total_minutes(&self) -> u32 {
        self.day_offset as u32 * MINUTES_PER_DAY + self.clock.minutes_from_midnight()
    }

    /// Signed minutes from `self` to `other`.
    pub fn minutes_until(&self, other: AnchoredTime) -> i64 {
        other.total_minutes() as i64 - self.total_minutes() as i64
    }

    pub fn add_minutes(&self, minutes: u32) -> Self {
        Self::from_total_minutes(self.total_minutes() + minutes)
    }

    /// Subtract, saturating at the anchor day's midnight.
    pub fn sub_minutes(&self, minutes: u32) -> Self {
        Self::from_total_minutes(self.total_minutes().saturating_sub(minutes))
    }

    fn from_total_minutes(total: u32) -> Self {
        let day_offset = (total / MINUTES_PER_DAY) as u8;
        let rem = total % MINUTES_PER_DAY;
        Self {
            clock: ClockTime::new((rem / 60) as u8, (rem % 60) as u8),
            day_offset,
        }
    }
}

impl PartialOrd for AnchoredTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnchoredTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_minutes().cmp(&other.total_minutes())
    }
}

impl fmt::Display for AnchoredTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day_offset == 0 {
            write!(f, "{}", self.clock)
        } else {
            write!(f, "{}+{}d", self.clock, self.day_offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let t: ClockTime = "08:05".parse().unwrap();
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "08:05");

        // Loose zero-padding is accepted.
        assert_eq!("8:5".parse::<ClockTime>().unwrap(), ClockTime::new(8, 5));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!("".parse::<ClockTime>().is_err());
        assert!("12".parse::<ClockTime>().is_err());
        assert!("notatime".parse::<ClockTime>().is_err());
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("-1:30".parse::<ClockTime>().is_err());
    }

    #[test]
    fn clock_times_order_chronologically() {
        assert!(ClockTime::new(21, 29) < ClockTime::new(21, 30));
        assert!(ClockTime::new(21, 30) < ClockTime::new(22, 30));
    }

    #[test]
    fn serializes_as_hh_mm_string() {
        let json = serde_json::to_string(&ClockTime::new(0, 30)).unwrap();
        assert_eq!(json, "\"00:30\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ClockTime::new(0, 30));
        assert!(serde_json::from_str::<ClockTime>("\"24:00\"").is_err());
    }

    #[test]
    fn overnight_rolls_morning_clocks_to_next_day() {
        assert_eq!(AnchoredTime::overnight(ClockTime::new(0, 30)).day_offset, 1);
        assert_eq!(AnchoredTime::overnight(ClockTime::new(8, 0)).day_offset, 1);
        assert_eq!(AnchoredTime::overnight(ClockTime::new(11, 59)).day_offset, 1);
        assert_eq!(AnchoredTime::overnight(ClockTime::new(12, 0)).day_offset, 0);
        assert_eq!(AnchoredTime::overnight(ClockTime::new(23, 59)).day_offset, 0);
        assert_eq!(AnchoredTime::same_day(ClockTime::new(0, 30)).day_offset, 0);
    }

    #[test]
    fn anchored_times_order_across_midnight() {
        let evening = AnchoredTime::same_day(ClockTime::new(23, 0));
        let lights_off = AnchoredTime::overnight(ClockTime::new(0, 30));
        assert!(evening < lights_off);
        assert_eq!(evening.minutes_until(lights_off), 90);
        assert_eq!(lights_off.minutes_until(evening), -90);
    }

    #[test]
    fn arithmetic_crosses_midnight() {
        let late = AnchoredTime::same_day(ClockTime::new(23, 30));
        assert_eq!(
            late.add_minutes(45),
            AnchoredTime::overnight(ClockTime::new(0, 15))
        );

        let buffer_start = AnchoredTime::overnight(ClockTime::new(0, 15));
        assert_eq!(
            buffer_start.sub_minutes(20),
            AnchoredTime::same_day(ClockTime::new(23, 55))
        );
    }

    #[test]
    fn display_marks_next_day() {
        assert_eq!(AnchoredTime::same_day(ClockTime::new(20, 0)).to_string(), "20:00");
        assert_eq!(
            AnchoredTime::overnight(ClockTime::new(0, 30)).to_string(),
            "00:30+1d"
        );
    }
}
