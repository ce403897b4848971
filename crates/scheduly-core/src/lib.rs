//! # Scheduly Core Library
//!
//! Core business logic for Scheduly, a personal daily time-block planner
//! built around a fixed sleep frame: arrive home, wind the evening down
//! toward a hard lights-off cap, sleep, and run a fixed morning routine
//! up to leaving home.
//!
//! The library follows a CLI-first philosophy: every operation is
//! available through the standalone CLI binary, and any GUI is a thin
//! layer over the same core.
//!
//! ## Key Components
//!
//! - [`TimeWindow`]: classification of an arrival time into how much
//!   usable evening remains
//! - [`EveningPlanner`] / [`MorningPlanner`]: deterministic, pure
//!   schedule builders
//! - [`ScheduleSession`]: the action surface over [`ScheduleState`]
//! - [`SnapshotStore`]: JSON snapshot persistence

pub mod block;
pub mod clock;
pub mod error;
pub mod events;
pub mod planner;
pub mod policy;
pub mod state;
pub mod status;
pub mod storage;
pub mod window;

pub use block::{Activity, TimeBlock};
pub use clock::{AnchoredTime, ClockTime};
pub use error::{ClockError, CoreError, Result, StorageError, ValidationError};
pub use events::Event;
pub use planner::{EveningPlanner, MorningPlanner};
pub use policy::{PolicyConstants, ReviewCaps};
pub use state::{Phase, ScheduleSession, ScheduleState};
pub use status::{block_status, day_report, BlockReport, BlockStatus};
pub use storage::SnapshotStore;
pub use window::TimeWindow;
