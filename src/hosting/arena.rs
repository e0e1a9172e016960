use super::*;
use crate::Error;
use crate::game::Resolver;
use crate::game::Round;
use crate::stats::Aggregator;
use crate::stats::Stats;
use std::time::Instant;

/// Everything a request handler needs, shared across workers.
pub struct Arena {
    resolver: Resolver,
    aggregator: Aggregator,
    metrics: Metrics,
    started: Instant,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Resolver::default(), Aggregator::default())
    }
}

impl Arena {
    pub fn new(resolver: Resolver, aggregator: Aggregator) -> Self {
        Self {
            resolver,
            aggregator,
            metrics: Metrics::default(),
            started: Instant::now(),
        }
    }

    /// Builds the arena described by the command line.
    pub async fn configure(config: &Config) -> anyhow::Result<Self> {
        let aggregator = config.aggregator().await?;
        match aggregator.durable() {
            true => log::info!("statistics store: {} (durable)", config.store),
            false => log::info!("statistics store: {} (resets on restart)", config.store),
        }
        Ok(Self::new(config.resolver(), aggregator))
    }

    /// Resolves one game and records it.
    /// Rejected input and store failures leave the tally and metrics untouched.
    pub async fn play(&self, raw: &str) -> Result<(Round, Stats), Error> {
        let round = self
            .resolver
            .play(raw)
            .inspect_err(|_| log::warn!("rejected choice {:?}", raw))?;
        let stats = self
            .aggregator
            .record(&round)
            .await
            .inspect_err(|e| log::error!("failed to record round {}: {}", round.id(), e))?;
        self.metrics.observe(&round);
        log::info!(
            "game played: {} vs {} -> {} (total {})",
            round.player(),
            round.computer(),
            round.outcome(),
            stats.total()
        );
        Ok((round, stats))
    }

    pub async fn stats(&self) -> Result<Stats, Error> {
        self.aggregator.current_stats().await
    }

    pub async fn rounds(&self, limit: usize) -> Result<Vec<Round>, Error> {
        self.aggregator.recent(limit).await
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Seconds since the arena was built.
    pub fn uptime(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Choice;
    use crate::game::Outcome;
    use crate::game::Script;
    use futures::executor::block_on;

    fn arena(computer: Choice) -> Arena {
        Arena::new(Resolver::new(Script::from(computer)), Aggregator::default())
    }

    #[test]
    fn rock_beats_scissors_from_zero() {
        let arena = arena(Choice::Scissors);
        let (round, stats) = block_on(arena.play("rock")).unwrap();
        assert!(round.outcome() == Outcome::Player);
        assert!(stats == Stats::new(1, 0, 0));
        assert!(stats.win_rate() == 100.);
    }

    #[test]
    fn paper_mirror_is_a_tie() {
        let arena = arena(Choice::Paper);
        block_on(arena.play("rock")).unwrap();
        let (round, stats) = block_on(arena.play("paper")).unwrap();
        assert!(round.outcome() == Outcome::Tie);
        assert!(stats.ties() == 1);
        assert!(stats.total() == 2);
        assert!(stats.win_rate() == 0.);
    }

    #[test]
    fn invalid_choice_changes_nothing() {
        let arena = arena(Choice::Rock);
        assert!(block_on(arena.play("lizard")) == Err(Error::InvalidChoice("lizard".into())));
        assert!(block_on(arena.stats()).unwrap().total() == 0);
        assert!(block_on(arena.rounds(10)).unwrap().is_empty());
        assert!(arena.metrics().games(Outcome::Tie) == 0);
    }

    #[test]
    fn metrics_follow_recorded_games() {
        let arena = arena(Choice::Rock);
        block_on(arena.play("rock")).unwrap();
        block_on(arena.play("paper")).unwrap();
        assert!(arena.metrics().games(Outcome::Tie) == 1);
        assert!(arena.metrics().games(Outcome::Player) == 1);
        assert!(arena.metrics().choices(Choice::Rock) == 3);
        assert!(arena.metrics().choices(Choice::Paper) == 1);
    }
}
