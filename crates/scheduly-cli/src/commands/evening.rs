use clap::Subcommand;
use scheduly_core::{ClockTime, SnapshotStore, TimeWindow};

use crate::common::{load_session, save_session};

#[derive(Subcommand)]
pub enum EveningAction {
    /// Record arrival home and build tonight's plan
    Plan {
        /// Arrival time as HH:MM
        time: String,
        /// Set the pending review-card count before planning
        #[arg(long)]
        cards: Option<u32>,
    },
    /// Set the pending review-card count
    Cards {
        /// Number of cards due (0-200)
        count: u32,
    },
    /// Classify an arrival time without touching state
    Window {
        /// Arrival time as HH:MM
        time: String,
    },
}

pub fn run(action: EveningAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EveningAction::Plan { time, cards } => {
            let arrival: ClockTime = time.parse()?;
            let store = SnapshotStore::open()?;
            let mut session = load_session(&store);
            if let Some(count) = cards {
                session.set_review_cards(count)?;
            }
            let event = session.set_arrival_time(arrival);
            save_session(&store, &session)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        EveningAction::Cards { count } => {
            let store = SnapshotStore::open()?;
            let mut session = load_session(&store);
            let event = session.set_review_cards(count)?;
            save_session(&store, &session)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        EveningAction::Window { time } => {
            let arrival: ClockTime = time.parse()?;
            let window = TimeWindow::from_arrival(arrival);
            let out = serde_json::json!({
                "arrival": arrival,
                "window": window,
                "description": window.description(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
