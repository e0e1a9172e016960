use super::*;
use crate::Error;
use crate::RECENT_MAXIMUM;
use crate::game::Outcome;
use crate::game::Round;

/// Owns the running tally and the store it lives in.
///
/// Injected into request handlers rather than held as global state, so
/// each test (and each server) gets its own.
pub struct Aggregator {
    store: Box<dyn Store>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Memory::default())
    }
}

impl From<Box<dyn Store>> for Aggregator {
    fn from(store: Box<dyn Store>) -> Self {
        Self { store }
    }
}

impl Aggregator {
    pub fn new<S>(store: S) -> Self
    where
        S: Store + 'static,
    {
        Self {
            store: Box::new(store),
        }
    }
    /// Persists the round and counts its outcome.
    pub async fn record(&self, round: &Round) -> Result<Stats, Error> {
        self.store.commit(round).await
    }
    /// Counts an outcome without logging a round.
    pub async fn record_outcome(&self, outcome: Outcome) -> Result<Stats, Error> {
        self.store.update(outcome).await
    }
    pub async fn current_stats(&self) -> Result<Stats, Error> {
        self.store.load().await
    }
    /// Newest rounds first, at most [`RECENT_MAXIMUM`].
    pub async fn recent(&self, limit: usize) -> Result<Vec<Round>, Error> {
        self.store.recent(limit.min(RECENT_MAXIMUM)).await
    }
    pub fn durable(&self) -> bool {
        self.store.durable()
    }
}
