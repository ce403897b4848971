//! Derived block status for display.
//!
//! Nothing here is stored: given the persisted state and a wall-clock
//! "now", these helpers say where each block stands. The clock is
//! anchored with the same overnight rule the builders use, so a sleep
//! block that spans midnight reads as active at 01:00.

use serde::Serialize;

use crate::block::TimeBlock;
use crate::clock::{AnchoredTime, ClockTime};
use crate::state::{Phase, ScheduleState};

/// Where a block stands relative to the current wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockStatus {
    Upcoming,
    Active { percent: u8 },
    Done,
}

/// A block paired with its derived status.
#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    #[serde(flatten)]
    pub block: TimeBlock,
    pub status: BlockStatus,
}

/// Status of a single block at the anchored time `now`.
pub fn block_status(block: &TimeBlock, now: AnchoredTime) -> BlockStatus {
    if now < block.start {
        BlockStatus::Upcoming
    } else if now < block.end {
        let elapsed = block.start.minutes_until(now) as f64;
        let percent = (elapsed / block.duration_minutes as f64 * 100.0).round() as u8;
        BlockStatus::Active {
            percent: percent.min(100),
        }
    } else {
        BlockStatus::Done
    }
}

/// Status of every block on today's plan at clock time `now`.
///
/// Evening plans anchor `now` with the overnight rule; a morning plan
/// never rolls over.
pub fn day_report(state: &ScheduleState, now: ClockTime) -> Vec<BlockReport> {
    let now = anchor_now(state.phase, now);
    state
        .blocks
        .iter()
        .map(|block| BlockReport {
            status: block_status(block, now),
            block: block.clone(),
        })
        .collect()
}

fn anchor_now(phase: Phase, now: ClockTime) -> AnchoredTime {
    match phase {
        Phase::Morning => AnchoredTime::same_day(now),
        Phase::Evening | Phase::Sleep => AnchoredTime::overnight(now),
    }
}
