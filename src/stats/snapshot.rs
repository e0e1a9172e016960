use crate::Percent;
use crate::game::Outcome;
use serde::ser::SerializeStruct;

/// Aggregate tally of every recorded round.
///
/// The total is never stored on its own; it is always the sum of the three
/// per-outcome counters, so `wins + losses + ties == total` holds by
/// construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    player: u64,
    computer: u64,
    ties: u64,
}

impl Stats {
    pub fn new(player: u64, computer: u64, ties: u64) -> Self {
        Self {
            player,
            computer,
            ties,
        }
    }
    /// Counts one more game ending in `outcome`.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn total(&self) -> u64 {
        self.player + self.computer + self.ties
    }
    pub fn player_wins(&self) -> u64 {
        self.player
    }
    pub fn computer_wins(&self) -> u64 {
        self.computer
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Player => self.player,
            Outcome::Computer => self.computer,
            Outcome::Tie => self.ties,
        }
    }
    /// Player win percentage rounded to two decimals; zero before any game.
    pub fn win_rate(&self) -> Percent {
        match self.total() {
            0 => 0.,
            n => (self.player as Percent / n as Percent * 10_000.).round() / 100.,
        }
    }
}

impl serde::Serialize for Stats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("Stats", 5)?;
        s.serialize_field("totalGames", &self.total())?;
        s.serialize_field("playerWins", &self.player)?;
        s.serialize_field("computerWins", &self.computer)?;
        s.serialize_field("ties", &self.ties)?;
        s.serialize_field("winRate", &self.win_rate())?;
        s.end()
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} games ({}W {}L {}T, {:.2}%)",
            self.total(),
            self.player,
            self.computer,
            self.ties,
            self.win_rate()
        )
    }
}
