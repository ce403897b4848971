use chrono::Timelike;
use clap::Subcommand;
use scheduly_core::{day_report, ClockTime, SnapshotStore};

use crate::common::{load_session, save_session};

#[derive(Subcommand)]
pub enum DayAction {
    /// Print the current schedule state
    Show,
    /// Print every block with its live status
    Status {
        /// Evaluate at this wall-clock time (HH:MM) instead of now
        #[arg(long)]
        at: Option<String>,
    },
    /// Mark a block as completed
    Complete {
        /// Block id, e.g. "hygiene-evening"
        block_id: String,
    },
    /// Reset the day, keeping the review-card count
    Reset,
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DayAction::Show => {
            let store = SnapshotStore::open()?;
            let session = load_session(&store);
            println!("{}", serde_json::to_string_pretty(session.state())?);
        }
        DayAction::Status { at } => {
            let now = match at {
                Some(time) => time.parse()?,
                None => current_clock_time(),
            };
            let store = SnapshotStore::open()?;
            let session = load_session(&store);
            let report = day_report(session.state(), now);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        DayAction::Complete { block_id } => {
            let store = SnapshotStore::open()?;
            let mut session = load_session(&store);
            let event = session.mark_block_complete(&block_id)?;
            save_session(&store, &session)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        DayAction::Reset => {
            let store = SnapshotStore::open()?;
            let mut session = load_session(&store);
            let event = session.reset_day();
            save_session(&store, &session)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

fn current_clock_time() -> ClockTime {
    let now = chrono::Local::now();
    ClockTime::new(now.hour() as u8, now.minute() as u8)
}
