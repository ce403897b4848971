use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::window::TimeWindow;

/// Every state-changing action produces an Event.
/// The CLI prints them; presentation layers can subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Arrival home was recorded and the evening plan rebuilt.
    ArrivalRecorded {
        arrival: ClockTime,
        window: TimeWindow,
        block_count: usize,
        at: DateTime<Utc>,
    },
    /// The pending card count changed; `replanned` reports whether the
    /// active evening plan was rebuilt to match.
    ReviewCardsSet {
        cards: u32,
        replanned: bool,
        at: DateTime<Utc>,
    },
    /// The morning routine was generated and the morning phase entered.
    MorningStarted {
        block_count: usize,
        at: DateTime<Utc>,
    },
    BlockCompleted {
        block_id: String,
        at: DateTime<Utc>,
    },
    DayReset {
        at: DateTime<Utc>,
    },
}
