use scheduly_core::{ScheduleSession, SnapshotStore};

/// Rebuild the session from whatever state is on disk; an unreadable or
/// missing snapshot starts fresh.
pub fn load_session(store: &SnapshotStore) -> ScheduleSession {
    match store.load() {
        Ok(Some(state)) => ScheduleSession::from_state(state),
        _ => ScheduleSession::new(),
    }
}

pub fn save_session(
    store: &SnapshotStore,
    session: &ScheduleSession,
) -> Result<(), Box<dyn std::error::Error>> {
    store.save(session.state())?;
    Ok(())
}
