use crate::domain::models::Market;

/// Side effects requested by the reducer and carried out by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// (Re)start the quiet-period timer for this query.
    ScheduleLookup(String),
    /// Drop the pending quiet-period timer, if any.
    CancelLookup,
    Lookup {
        generation: u64,
        query: String,
        market: Market,
    },
    /// Abort the timer and any in-flight lookup task.
    ReleaseAll,

    // --- Notifications to the host page ---
    NotifyChange(String),
    NotifySelect(String),
}
