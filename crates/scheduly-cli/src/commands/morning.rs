use clap::Subcommand;
use scheduly_core::SnapshotStore;

use crate::common::{load_session, save_session};

#[derive(Subcommand)]
pub enum MorningAction {
    /// Mark wake-up and build the morning routine
    Start,
}

pub fn run(action: MorningAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MorningAction::Start => {
            let store = SnapshotStore::open()?;
            let mut session = load_session(&store);
            let event = session.start_morning();
            save_session(&store, &session)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
