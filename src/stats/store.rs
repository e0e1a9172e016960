use super::Stats;
use crate::Error;
use crate::game::Outcome;
use crate::game::Round;

/// Persistence capability behind the [`Aggregator`](super::Aggregator).
///
/// Implementations must apply [`Store::update`] and [`Store::commit`]
/// atomically: no reader may observe the total moved without the matching
/// per-outcome counter.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Appends a round to the round log.
    async fn save(&self, round: &Round) -> Result<(), Error>;
    /// Reads the current tally.
    async fn load(&self) -> Result<Stats, Error>;
    /// Counts one game and returns the tally after the increment.
    async fn update(&self, outcome: Outcome) -> Result<Stats, Error>;
    /// Saves the round and counts its outcome as one unit.
    /// The default is only as atomic as its two halves.
    async fn commit(&self, round: &Round) -> Result<Stats, Error> {
        self.save(round).await?;
        self.update(round.outcome()).await
    }
    /// Most recent rounds, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<Round>, Error>;
    /// Whether the tally survives a process restart.
    fn durable(&self) -> bool;
}
