//! Morning routine schedule builder.

use crate::block::{Activity, TimeBlock};
use crate::clock::AnchoredTime;
use crate::policy::PolicyConstants;

/// Builder for the fixed morning routine: wake, breakfast, one study
/// block, then prep until leaving home.
#[derive(Debug, Clone)]
pub struct MorningPlanner {
    policy: PolicyConstants,
}

impl MorningPlanner {
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

    /// Build the morning plan. The same four blocks every day; only the
    /// study block's length is derived from the policy clock times. With
    /// the default policy the study block starts at `study_block_start`.
    pub fn build(&self) -> Vec<TimeBlock> {
        let p = &self.policy;

        let wake = AnchoredTime::same_day(p.wake_up_target);
        let hydrate_end = wake.add_minutes(p.wake_block_minutes);
        let breakfast_end = hydrate_end.add_minutes(p.breakfast_minutes);
        let prep_start = AnchoredTime::same_day(p.morning_prep_start);
        let leave = AnchoredTime::same_day(p.leave_home);

        vec![
            TimeBlock::new(
                "wake-hydrate",
                "Wake + Hydrate",
                wake,
                hydrate_end,
                Activity::WakeUp,
                true,
            ),
            TimeBlock::new(
                "breakfast",
                "Breakfast + Passive Listening",
                hydrate_end,
                breakfast_end,
                Activity::PassiveListening,
                true,
            ),
            TimeBlock::new(
                "morning-study",
                "Morning Study Block",
                breakfast_end,
                prep_start,
                Activity::ReviewDue,
                true,
            ),
            TimeBlock::new(
                "prep-leave",
                "Prep & Leave",
                prep_start,
                leave,
                Activity::Prep,
                true,
            ),
        ]
    }
}

impl Default for MorningPlanner {
    fn default() -> Self {
        Self::new()
    }
}
