//! Deterministic schedule builders.
//!
//! Both builders are pure functions of the policy and the user's inputs;
//! building twice with the same inputs yields identical blocks, and every
//! result is contiguous between its anchor and terminal event.

mod evening;
mod morning;

pub use evening::EveningPlanner;
pub use morning::MorningPlanner;
