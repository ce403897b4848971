//! Evening wind-down schedule builder.
//!
//! The evening plan runs from arrival home to the next morning's wake-up
//! target. A fixed frame carries it: hygiene right after arriving, a
//! device-free wind-down ending at the lights-off hard cap, and the sleep
//! block. Study content fills whatever the window classification allows
//! in between.

use crate::block::{Activity, TimeBlock};
use crate::clock::{AnchoredTime, ClockTime};
use crate::policy::PolicyConstants;
use crate::window::TimeWindow;

/// Deterministic builder for the evening plan.
#[derive(Debug, Clone)]
pub struct EveningPlanner {
    policy: PolicyConstants,
}

impl EveningPlanner {
    /// Create a planner with the default policy.
    pub fn new() -> Self {
        Self {
            policy: PolicyConstants::default(),
        }
    }

    /// Create with a custom policy.
    pub fn with_policy(policy: PolicyConstants) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyConstants {
        &self.policy
    }

    /// Study minutes left between arrival and lights-off once the hygiene
    /// block and the wind-down buffer are taken out.
    pub fn available_study_minutes(&self, arrival: ClockTime) -> u32 {
        let start = AnchoredTime::same_day(arrival);
        let lights_off = AnchoredTime::overnight(self.policy.lights_off);
        let total = start.minutes_until(lights_off);
        let reserved = (self.policy.wind_down_minutes + self.policy.hygiene_minutes) as i64;
        (total - reserved).max(0) as u32
    }

    /// Evening review minutes for `cards` pending cards in `window`.
    ///
    /// Scales with the backlog, capped per window and by the study time
    /// actually available. Zero cards means no review block.
    fn review_minutes(&self, window: TimeWindow, cards: u32, available_study: u32) -> u32 {
        if cards == 0 {
            return 0;
        }
        let scaled = (cards as f64 * self.policy.minutes_per_card).ceil() as u32;
        scaled
            .min(self.policy.review_caps.for_window(window))
            .min(available_study)
    }

    /// Build tonight's plan.
    ///
    /// The result is contiguous from `arrival` to the wake-up target on
    /// the following morning; no minute in between goes unscheduled.
    pub fn build(&self, arrival: ClockTime, window: TimeWindow, cards: u32) -> Vec<TimeBlock> {
        let p = &self.policy;
        let lights_off = AnchoredTime::overnight(p.lights_off);
        let wake = AnchoredTime::overnight(p.wake_up_target);
        let wind_down_start = lights_off.sub_minutes(p.wind_down_minutes);
        // Active listening stops here so the pre-sleep slot stays open.
        let passive_start = wind_down_start.sub_minutes(p.max_passive_minutes);

        let mut blocks = Vec::new();
        let mut cursor = AnchoredTime::same_day(arrival);

        // Hygiene comes first, every night.
        let hygiene_end = cursor.add_minutes(p.hygiene_minutes);
        blocks.push(TimeBlock::new(
            "hygiene-evening",
            "Hygiene + Passive Listening",
            cursor,
            hygiene_end,
            Activity::Hygiene,
            true,
        ));
        cursor = hygiene_end;

        let available_study = self.available_study_minutes(arrival);
        let study_tonight =
            available_study >= p.min_study_minutes && window != TimeWindow::SleepFirst;

        if study_tonight {
            let review = self.review_minutes(window, cards, available_study);
            if review > 0 {
                let review_end = cursor.add_minutes(review);
                blocks.push(TimeBlock::new(
                    "review-evening",
                    "Card Review",
                    cursor,
                    review_end,
                    Activity::ReviewDue,
                    true,
                ));
                cursor = review_end;
            }

            let time_for_active = cursor.minutes_until(passive_start);
            if time_for_active >= p.min_active_minutes as i64 {
                let cycles = time_for_active as u32 / p.active_cycle_minutes;
                for cycle in 1..=cycles {
                    let cycle_end = cursor.add_minutes(p.active_cycle_minutes);
                    blocks.push(TimeBlock::new(
                        format!("active-{cycle}"),
                        format!("Active Listening Cycle {cycle}"),
                        cursor,
                        cycle_end,
                        Activity::ActiveListening,
                        true,
                    ));
                    cursor = cycle_end;
                }

                // A leftover shorter than a full cycle still earns a block
                // when it clears the active minimum.
                let leftover = cursor.minutes_until(passive_start);
                if leftover >= p.min_active_minutes as i64 {
                    blocks.push(TimeBlock::new(
                        "active-final",
                        "Active Listening Final Block",
                        cursor,
                        passive_start,
                        Activity::ActiveListening,
                        true,
                    ));
                    cursor = passive_start;
                }

                let remaining = cursor.minutes_until(passive_start);
                if remaining > 0 {
                    let passive = (remaining as u32).min(p.max_passive_minutes);
                    let passive_end = cursor.add_minutes(passive);
                    blocks.push(TimeBlock::new(
                        "passive-evening",
                        "Passive Listening",
                        cursor,
                        passive_end,
                        Activity::PassiveListening,
                        false,
                    ));
                    cursor = passive_end;
                }
            } else {
                // No room for an active cycle: whatever is left before the
                // pre-sleep slot goes to passive listening instead.
                let remaining = cursor.minutes_until(passive_start);
                if remaining > 0 {
                    blocks.push(TimeBlock::new(
                        "passive-fallback",
                        "Passive Listening",
                        cursor,
                        passive_start,
                        Activity::PassiveListening,
                        false,
                    ));
                    cursor = passive_start;
                }
            }
        }

        // Device-free wind-down bridges whatever is left to lights-off,
        // study night or not.
        if cursor < lights_off {
            blocks.push(TimeBlock::new(
                "winddown",
                "Wind-down / Device-free",
                cursor,
                lights_off,
                Activity::Prep,
                true,
            ));
        }

        blocks.push(TimeBlock::new(
            "sleep",
            "Sleep (5 cycles)",
            lights_off,
            wake,
            Activity::Sleep,
            true,
        ));

        blocks
    }
}

impl Default for EveningPlanner {
    fn default() -> Self {
        Self::new()
    }
}
