//! Schedule block types.

use serde::{Deserialize, Serialize};

use crate::clock::AnchoredTime;
use crate::error::ValidationError;

/// What the user is doing during a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Activity {
    ReviewDue,
    ActiveListening,
    PassiveListening,
    Hygiene,
    Sleep,
    WakeUp,
    Prep,
}

impl Activity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReviewDue => "REVIEW_DUE",
            Self::ActiveListening => "ACTIVE_LISTENING",
            Self::PassiveListening => "PASSIVE_LISTENING",
            Self::Hygiene => "HYGIENE",
            Self::Sleep => "SLEEP",
            Self::WakeUp => "WAKE_UP",
            Self::Prep => "PREP",
        }
    }
}

/// A single labeled block on the day's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub name: String,
    pub start: AnchoredTime,
    pub end: AnchoredTime,
    pub duration_minutes: u32,
    pub activity: Activity,
    /// Set at creation and never changed; mandatory blocks carry the
    /// fixed frame of the day.
    pub mandatory: bool,
    /// Flipped by marking the block complete; never set at creation.
    #[serde(default)]
    pub completed: bool,
}

impl TimeBlock {
    /// Create a block spanning `start..end`.
    ///
    /// # Panics
    /// Panics if `end` is not after `start`. Use [`try_new`](Self::try_new)
    /// for a non-panicking version.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: AnchoredTime,
        end: AnchoredTime,
        activity: Activity,
        mandatory: bool,
    ) -> Self {
        Self::try_new(id, name, start, end, activity, mandatory)
            .expect("TimeBlock::new: end must be after start")
    }

    /// Create a block, returning a Result.
    ///
    /// # Errors
    /// Returns an error if `end` is not after `start`.
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: AnchoredTime,
        end: AnchoredTime,
        activity: Activity,
        mandatory: bool,
    ) -> Result<Self, ValidationError> {
        let duration = start.minutes_until(end);
        if duration <= 0 {
            return Err(ValidationError::InvalidBlockRange { start, end });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            duration_minutes: duration as u32,
            activity,
            mandatory,
            completed: false,
        })
    }

    /// Check if this block overlaps another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;

    fn at(hour: u8, minute: u8) -> AnchoredTime {
        AnchoredTime::same_day(ClockTime::new(hour, minute))
    }

    #[test]
    fn new_computes_duration() {
        let block = TimeBlock::new(
            "hygiene-evening",
            "Hygiene + Passive Listening",
            at(20, 0),
            at(20, 30),
            Activity::Hygiene,
            true,
        );
        assert_eq!(block.duration_minutes, 30);
        assert!(!block.completed);
    }

    #[test]
    fn duration_spans_midnight() {
        let block = TimeBlock::new(
            "sleep",
            "Sleep (5 cycles)",
            AnchoredTime::overnight(ClockTime::new(0, 30)),
            AnchoredTime::overnight(ClockTime::new(8, 0)),
            Activity::Sleep,
            true,
        );
        assert_eq!(block.duration_minutes, 450);
    }

    #[test]
    fn try_new_rejects_non_positive_ranges() {
        let backwards = TimeBlock::try_new("x", "X", at(20, 30), at(20, 0), Activity::Prep, true);
        assert!(backwards.is_err());
        let empty = TimeBlock::try_new("x", "X", at(20, 0), at(20, 0), Activity::Prep, true);
        assert!(empty.is_err());
    }

    #[test]
    fn overlap_excludes_touching_blocks() {
        let a = TimeBlock::new("a", "A", at(20, 0), at(21, 0), Activity::Hygiene, true);
        let b = TimeBlock::new("b", "B", at(20, 30), at(21, 30), Activity::Prep, true);
        let c = TimeBlock::new("c", "C", at(21, 0), at(22, 0), Activity::Prep, true);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn activity_wire_names_match_as_str() {
        let json = serde_json::to_string(&Activity::ReviewDue).unwrap();
        assert_eq!(json, "\"REVIEW_DUE\"");
        assert_eq!(Activity::ActiveListening.as_str(), "ACTIVE_LISTENING");
        assert_eq!(Activity::WakeUp.as_str(), "WAKE_UP");
    }

    #[test]
    fn completed_defaults_to_false_when_absent() {
        let json = r#"{
            "id": "sleep",
            "name": "Sleep (5 cycles)",
            "start": { "clock": "00:30", "day_offset": 1 },
            "end": { "clock": "08:00", "day_offset": 1 },
            "duration_minutes": 450,
            "activity": "SLEEP",
            "mandatory": true
        }"#;
        let block: TimeBlock = serde_json::from_str(json).unwrap();
        assert!(!block.completed);
        assert!(block.mandatory);
    }
}
