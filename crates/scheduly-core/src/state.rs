//! Schedule state and the action surface over it.
//!
//! [`ScheduleState`] is the single source of truth a presentation layer
//! reads; [`ScheduleSession`] owns one and is the only way to mutate it.
//! Each action applies atomically, stamps `last_updated`, and returns the
//! event describing what changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::TimeBlock;
use crate::clock::ClockTime;
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::planner::{EveningPlanner, MorningPlanner};
use crate::policy::PolicyConstants;
use crate::window::TimeWindow;

/// Which part of the day the schedule is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Morning,
    Evening,
    /// Carried for presentation layers and snapshots; no core action
    /// assigns it.
    Sleep,
}

/// The whole persisted schedule state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    pub phase: Phase,
    pub arrival_time_home: Option<ClockTime>,
    pub time_window: Option<TimeWindow>,
    pub blocks: Vec<TimeBlock>,
    pub review_cards_remaining: u32,
    pub is_awake: bool,
    pub last_updated: DateTime<Utc>,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            phase: Phase::Morning,
            arrival_time_home: None,
            time_window: None,
            blocks: Vec::new(),
            review_cards_remaining: 0,
            is_awake: false,
            last_updated: Utc::now(),
        }
    }
}

/// Owns the policy, the planners, and the state they act on.
#[derive(Debug, Clone)]
pub struct ScheduleSession {
    policy: PolicyConstants,
    evening: EveningPlanner,
    morning: MorningPlanner,
    state: ScheduleState,
}

impl ScheduleSession {
    /// Create a session with the default policy and a fresh state.
    pub fn new() -> Self {
        Self::with_policy(PolicyConstants::default())
    }

    /// Create with a custom policy.
    pub fn with_policy(policy: PolicyConstants) -> Self {
        Self {
            evening: EveningPlanner::with_policy(policy.clone()),
            morning: MorningPlanner::with_policy(policy.clone()),
            policy,
            state: ScheduleState::default(),
        }
    }

    /// Rehydrate a session from a persisted state snapshot.
    pub fn from_state(state: ScheduleState) -> Self {
        let mut session = Self::new();
        session.state = state;
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn policy(&self) -> &PolicyConstants {
        &self.policy
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record arrival home: classify the window, enter the evening phase,
    /// and rebuild tonight's plan from scratch. Calling again replaces
    /// the plan; nothing is merged.
    pub fn set_arrival_time(&mut self, arrival: ClockTime) -> Event {
        let window = TimeWindow::from_arrival(arrival);
        self.state.arrival_time_home = Some(arrival);
        self.state.time_window = Some(window);
        self.state.phase = Phase::Evening;
        self.state.blocks = self
            .evening
            .build(arrival, window, self.state.review_cards_remaining);
        self.state.last_updated = Utc::now();
        Event::ArrivalRecorded {
            arrival,
            window,
            block_count: self.state.blocks.len(),
            at: Utc::now(),
        }
    }

    /// Update the pending card count.
    ///
    /// Review blocks are sized from this count, so an active evening plan
    /// is rebuilt on the spot; it never shows a stale review duration.
    ///
    /// # Errors
    /// Returns an error if `cards` exceeds the policy's accepted range.
    pub fn set_review_cards(&mut self, cards: u32) -> Result<Event> {
        if cards > self.policy.max_review_cards {
            return Err(ValidationError::CardCountOutOfRange {
                cards,
                max: self.policy.max_review_cards,
            }
            .into());
        }
        self.state.review_cards_remaining = cards;
        let replanned = match (self.state.phase, self.state.arrival_time_home) {
            (Phase::Evening, Some(arrival)) => {
                let window = self
                    .state
                    .time_window
                    .unwrap_or_else(|| TimeWindow::from_arrival(arrival));
                self.state.blocks = self.evening.build(arrival, window, cards);
                true
            }
            _ => false,
        };
        self.state.last_updated = Utc::now();
        Ok(Event::ReviewCardsSet {
            cards,
            replanned,
            at: Utc::now(),
        })
    }

    /// Enter the morning phase with the fixed morning routine.
    pub fn start_morning(&mut self) -> Event {
        self.state.blocks = self.morning.build();
        self.state.phase = Phase::Morning;
        self.state.is_awake = true;
        self.state.last_updated = Utc::now();
        Event::MorningStarted {
            block_count: self.state.blocks.len(),
            at: Utc::now(),
        }
    }

    /// Mark a block done. Completing the same block twice is a no-op.
    ///
    /// # Errors
    /// Returns an error if no block with `block_id` is on today's plan.
    pub fn mark_block_complete(&mut self, block_id: &str) -> Result<Event> {
        let block = self
            .state
            .blocks
            .iter_mut()
            .find(|b| b.id == block_id)
            .ok_or_else(|| ValidationError::UnknownBlock {
                block_id: block_id.to_string(),
            })?;
        block.completed = true;
        self.state.last_updated = Utc::now();
        Ok(Event::BlockCompleted {
            block_id: block_id.to_string(),
            at: Utc::now(),
        })
    }

    /// Clear the day back to the initial morning state. The pending card
    /// count carries over; cards do not disappear overnight.
    pub fn reset_day(&mut self) -> Event {
        self.state.phase = Phase::Morning;
        self.state.arrival_time_home = None;
        self.state.time_window = None;
        self.state.blocks.clear();
        self.state.is_awake = false;
        self.state.last_updated = Utc::now();
        Event::DayReset { at: Utc::now() }
    }
}

impl Default for ScheduleSession {
    fn default() -> Self {
        Self::new()
    }
}
