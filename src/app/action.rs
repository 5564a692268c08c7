use crate::app::command::Command;
use crate::domain::models::SymbolMatch;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Vec<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Component Lifecycle ---
    Mount,   // Create the search field and take its page listeners
    Unmount, // Drop the search field, releasing timers and listeners

    // --- Search Field ---
    InsertChar(char),
    DeleteChar,
    ClearInput,        // Ctrl+U or the clear affordance
    Escape,            // Close the panel, or clear the field if already closed
    HighlightNext,     // Down / Ctrl+N
    HighlightPrev,     // Up / Ctrl+P
    CommitHighlighted, // Enter

    // --- Page ---
    ToggleFocus,
    ScrollPageUp(u16),
    ScrollPageDown(u16),

    // --- Pointer ---
    PointerDown(u16, u16),
    PointerMoved(u16, u16),
    Wheel { column: u16, row: u16, down: bool },

    // --- Async Results (The "Callback") ---
    DebounceElapsed(String), // Quiet period over for this query
    LookupCompleted {
        generation: u64,
        query: String,
        outcome: Result<Vec<SymbolMatch>, String>,
    },
}
