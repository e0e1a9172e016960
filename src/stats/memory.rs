use super::*;
use crate::Error;
use crate::ROUND_HISTORY;
use crate::game::Outcome;
use crate::game::Round;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Process-local store. The tally starts at zero on every launch.
pub struct Memory {
    inner: Mutex<Ledger>,
    capacity: usize,
}

#[derive(Default)]
struct Ledger {
    stats: Stats,
    rounds: VecDeque<Round>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::with_capacity(ROUND_HISTORY)
    }
}

impl Memory {
    /// Keeps at most `capacity` rounds in the round log.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Ledger::default()),
            capacity,
        }
    }
    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.inner
            .lock()
            .map_err(|_| Error::StoreUnavailable("memory store poisoned".into()))
    }
}

impl Ledger {
    fn push(&mut self, round: Round, capacity: usize) {
        if capacity == 0 {
            return;
        }
        while self.rounds.len() >= capacity {
            self.rounds.pop_front();
        }
        self.rounds.push_back(round);
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn save(&self, round: &Round) -> Result<(), Error> {
        self.lock().map(|mut ledger| ledger.push(*round, self.capacity))
    }
    async fn load(&self) -> Result<Stats, Error> {
        self.lock().map(|ledger| ledger.stats)
    }
    async fn update(&self, outcome: Outcome) -> Result<Stats, Error> {
        let mut ledger = self.lock()?;
        ledger.stats.record(outcome);
        Ok(ledger.stats)
    }
    async fn commit(&self, round: &Round) -> Result<Stats, Error> {
        let mut ledger = self.lock()?;
        ledger.push(*round, self.capacity);
        ledger.stats.record(round.outcome());
        Ok(ledger.stats)
    }
    async fn recent(&self, limit: usize) -> Result<Vec<Round>, Error> {
        self.lock()
            .map(|ledger| ledger.rounds.iter().rev().take(limit).copied().collect())
    }
    fn durable(&self) -> bool {
        false
    }
}
