use super::*;
use crate::Error;

/// Resolves a player's move against a drawn computer move.
///
/// Holds no game state: each call consumes one draw from its [`Source`]
/// and returns a new [`Round`].
pub struct Resolver {
    source: Box<dyn Source>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Uniform)
    }
}

impl Resolver {
    pub fn new<S>(source: S) -> Self
    where
        S: Source + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }
    /// Draws the computer's move and scores it against `player`.
    pub fn resolve(&self, player: Choice) -> Round {
        Round::new(player, self.source.draw())
    }
    /// Parses untrusted input before resolving. Nothing is drawn when the
    /// input is rejected.
    pub fn play(&self, raw: &str) -> Result<Round, Error> {
        Choice::try_from(raw).map(|choice| self.resolve(choice))
    }
}
