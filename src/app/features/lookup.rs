use crate::app::action::Action;
use crate::domain::lookup::SymbolLookup;
use crate::domain::models::Market;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Runs lookups on the runtime and reports each one back as
/// [`Action::LookupCompleted`] tagged with the generation it was issued for.
pub struct LookupRunner {
    lookup: Arc<dyn SymbolLookup>,
    tx: mpsc::Sender<Action>,
    in_flight: Option<AbortHandle>,
}

impl LookupRunner {
    pub fn new(lookup: Arc<dyn SymbolLookup>, tx: mpsc::Sender<Action>) -> Self {
        Self {
            lookup,
            tx,
            in_flight: None,
        }
    }

    /// Starting a newer generation aborts the older task. The reducer's
    /// generation check still decides what gets applied.
    pub fn dispatch(&mut self, generation: u64, query: String, market: Market) {
        self.abort();

        let lookup = self.lookup.clone();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = lookup
                .search(&query, market)
                .await
                .map_err(|e| e.to_string());
            let _ = tx
                .send(Action::LookupCompleted {
                    generation,
                    query,
                    outcome,
                })
                .await;
        });
        self.in_flight = Some(handle.abort_handle());
    }

    pub fn abort(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for LookupRunner {
    fn drop(&mut self) {
        self.abort();
    }
}
