//! Fixed scheduling policy.
//!
//! Every constant that shapes a generated schedule lives here. The values
//! are not user-editable; tests build custom policies through the public
//! fields. The defaults assume `wake_up_target` lands after `lights_off`
//! under the overnight rule.

use crate::clock::ClockTime;
use crate::window::TimeWindow;

/// Per-window caps on evening card review, in minutes.
#[derive(Debug, Clone, Copy)]
pub struct ReviewCaps {
    pub long: u32,
    pub medium: u32,
    pub short: u32,
    pub sleep_first: u32,
}

impl ReviewCaps {
    pub fn for_window(&self, window: TimeWindow) -> u32 {
        match window {
            TimeWindow::Long => self.long,
            TimeWindow::Medium => self.medium,
            TimeWindow::Short => self.short,
            TimeWindow::SleepFirst => self.sleep_first,
        }
    }
}

impl Default for ReviewCaps {
    fn default() -> Self {
        Self {
            long: 30,
            medium: 20,
            short: 15,
            sleep_first: 0,
        }
    }
}

/// Scheduling policy constants.
#[derive(Debug, Clone)]
pub struct PolicyConstants {
    /// Hard nightly cap; the sleep block starts here (overnight).
    pub lights_off: ClockTime,
    /// Sleep block end and morning anchor.
    pub wake_up_target: ClockTime,
    /// Documented morning study start; the post-breakfast cursor lands
    /// here with the default wake and breakfast lengths.
    pub study_block_start: ClockTime,
    /// Morning prep block start.
    pub morning_prep_start: ClockTime,
    /// Morning terminal event; the prep block ends here.
    pub leave_home: ClockTime,
    /// Evenings with less study time than this carry no study content.
    pub min_study_minutes: u32,
    /// Fixed length of the evening hygiene block.
    pub hygiene_minutes: u32,
    /// Device-free buffer reserved before lights-off.
    pub wind_down_minutes: u32,
    /// Cap on pre-sleep passive listening.
    pub max_passive_minutes: u32,
    /// Shortest active-listening block worth scheduling.
    pub min_active_minutes: u32,
    /// Length of one active-listening cycle.
    pub active_cycle_minutes: u32,
    /// Length of the wake + hydrate block.
    pub wake_block_minutes: u32,
    /// Length of the breakfast block.
    pub breakfast_minutes: u32,
    /// Review-duration estimate per pending card.
    pub minutes_per_card: f64,
    /// Upper bound of the accepted card-count input range.
    pub max_review_cards: u32,
    /// Per-window caps on evening review.
    pub review_caps: ReviewCaps,
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            lights_off: ClockTime::new(0, 30),
            wake_up_target: ClockTime::new(8, 0),
            study_block_start: ClockTime::new(8, 30),
            morning_prep_start: ClockTime::new(9, 55),
            leave_home: ClockTime::new(10, 0),
            min_study_minutes: 25,
            hygiene_minutes: 30,
            wind_down_minutes: 15,
            max_passive_minutes: 20,
            min_active_minutes: 25,
            active_cycle_minutes: 30,
            wake_block_minutes: 15,
            breakfast_minutes: 15,
            minutes_per_card: 1.5,
            max_review_cards: 200,
            review_caps: ReviewCaps::default(),
        }
    }
}
