//! Arrival-time window classification.
//!
//! How much of the evening is usable depends only on when the user gets
//! home. The classifier compares the bare clock time against fixed
//! cutoffs; it never rolls over to the next day.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// How much usable evening remains after arriving home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeWindow {
    Long,       // arrival up to 21:30
    Medium,     // 21:31 - 22:29
    Short,      // 22:30 - 23:14
    SleepFirst, // 23:15 onwards
}

impl TimeWindow {
    /// Classify an arrival time. Total; every clock time maps to a window.
    pub fn from_arrival(arrival: ClockTime) -> Self {
        let m = arrival.minutes_from_midnight();
        if m >= 23 * 60 + 15 {
            Self::SleepFirst
        } else if m >= 22 * 60 + 30 {
            Self::Short
        } else if m > 21 * 60 + 30 {
            Self::Medium
        } else {
            Self::Long
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "LONG",
            Self::Medium => "MEDIUM",
            Self::Short => "SHORT",
            Self::SleepFirst => "SLEEP_FIRST",
        }
    }

    /// Human description of the window.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Long => "2+ hours available",
            Self::Medium => "1-2 hours available",
            Self::Short => "30-75 min available",
            Self::SleepFirst => "Less than 30 min - prioritize sleep",
        }
    }
}
