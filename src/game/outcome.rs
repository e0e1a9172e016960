use super::Choice;

/// Result of comparing the player's choice with the computer's.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player = 0,
    Computer = 1,
    Tie = 2,
}

impl Outcome {
    pub const fn all() -> [Outcome; 3] {
        [Outcome::Player, Outcome::Computer, Outcome::Tie]
    }
    /// Human-readable verdict shown to the player.
    pub const fn message(&self) -> &'static str {
        match self {
            Outcome::Tie => "It's a tie!",
            Outcome::Player => "You win!",
            Outcome::Computer => "Computer wins!",
        }
    }
}

/// (player, computer) -> winner
impl From<(Choice, Choice)> for Outcome {
    fn from((player, computer): (Choice, Choice)) -> Self {
        if player == computer {
            Outcome::Tie
        } else if player.beats() == computer {
            Outcome::Player
        } else {
            Outcome::Computer
        }
    }
}

impl TryFrom<&str> for Outcome {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "player" => Ok(Outcome::Player),
            "computer" => Ok(Outcome::Computer),
            "tie" => Ok(Outcome::Tie),
            _ => Err(format!("invalid outcome str: {}", s)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Player => write!(f, "player"),
            Outcome::Computer => write!(f, "computer"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;

    #[test]
    fn cyclic_dominance() {
        assert!(Outcome::from((Rock, Scissors)) == Outcome::Player);
        assert!(Outcome::from((Scissors, Paper)) == Outcome::Player);
        assert!(Outcome::from((Paper, Rock)) == Outcome::Player);
    }

    #[test]
    fn reverse_pairings_lose() {
        assert!(Outcome::from((Scissors, Rock)) == Outcome::Computer);
        assert!(Outcome::from((Paper, Scissors)) == Outcome::Computer);
        assert!(Outcome::from((Rock, Paper)) == Outcome::Computer);
    }

    #[test]
    fn mirror_ties() {
        for choice in Choice::all() {
            assert!(Outcome::from((choice, choice)) == Outcome::Tie);
        }
    }

    #[test]
    fn antisymmetric() {
        for a in Choice::all() {
            for b in Choice::all() {
                match Outcome::from((a, b)) {
                    Outcome::Tie => assert!(Outcome::from((b, a)) == Outcome::Tie),
                    Outcome::Player => assert!(Outcome::from((b, a)) == Outcome::Computer),
                    Outcome::Computer => assert!(Outcome::from((b, a)) == Outcome::Player),
                }
            }
        }
    }

    #[test]
    fn messages() {
        assert!(Outcome::Tie.message() == "It's a tie!");
        assert!(Outcome::Player.message() == "You win!");
        assert!(Outcome::Computer.message() == "Computer wins!");
    }

    #[test]
    fn bijective_str() {
        for outcome in Outcome::all() {
            assert!(outcome == Outcome::try_from(outcome.to_string().as_str()).unwrap());
        }
    }
}
