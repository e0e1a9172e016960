use super::Choice;
use crate::Pipe;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Where the computer's move comes from.
///
/// Shared across request handlers, so draws take `&self`.
pub trait Source: Send + Sync {
    fn draw(&self) -> Choice;
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uniform;

impl Source for Uniform {
    fn draw(&self) -> Choice {
        Choice::from(rand::rng().random_range(0..3u8))
    }
}

/// Uniform draw from a seeded generator, reproducible across runs.
pub struct Seeded(Mutex<SmallRng>);

impl From<u64> for Seeded {
    fn from(seed: u64) -> Self {
        Self(Mutex::new(SmallRng::seed_from_u64(seed)))
    }
}

impl Source for Seeded {
    fn draw(&self) -> Choice {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .random_range(0..3u8)
            .pipe(Choice::from)
    }
}

/// Replays a fixed sequence of moves, wrapping around at the end.
/// An empty script cycles rock, paper, scissors.
#[derive(Debug, Default)]
pub struct Script {
    moves: Vec<Choice>,
    index: AtomicUsize,
}

impl From<Vec<Choice>> for Script {
    fn from(moves: Vec<Choice>) -> Self {
        Self {
            moves,
            index: AtomicUsize::new(0),
        }
    }
}

impl From<Choice> for Script {
    fn from(choice: Choice) -> Self {
        Self::from(vec![choice])
    }
}

impl Source for Script {
    fn draw(&self) -> Choice {
        let i = self.index.fetch_add(1, Ordering::Relaxed);
        match self.moves.len() {
            0 => Choice::from((i % 3) as u8),
            n => self.moves[i % n],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn script_wraps() {
        let script = Script::from(vec![Choice::Rock, Choice::Paper]);
        assert!(script.draw() == Choice::Rock);
        assert!(script.draw() == Choice::Paper);
        assert!(script.draw() == Choice::Rock);
    }

    #[test]
    fn empty_script_cycles() {
        let script = Script::default();
        assert!(script.draw() == Choice::Rock);
        assert!(script.draw() == Choice::Paper);
        assert!(script.draw() == Choice::Scissors);
        assert!(script.draw() == Choice::Rock);
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = Seeded::from(42);
        let b = Seeded::from(42);
        for _ in 0..64 {
            assert!(a.draw() == b.draw());
        }
    }

    #[test]
    fn uniform_covers_every_choice() {
        let mut seen = HashMap::new();
        for _ in 0..3000 {
            *seen.entry(Uniform.draw()).or_insert(0usize) += 1;
        }
        assert!(seen.len() == 3);
    }
}
