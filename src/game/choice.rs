use crate::Error;

/// One of the three selectable moves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    pub const fn all() -> [Choice; 3] {
        [Choice::Rock, Choice::Paper, Choice::Scissors]
    }
    /// The single choice this one defeats.
    pub const fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Choice {
    fn from(n: u8) -> Choice {
        match n % 3 {
            0 => Choice::Rock,
            1 => Choice::Paper,
            _ => Choice::Scissors,
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// str isomorphism. Matching is exact: "Rock" and " rock" are rejected.
impl TryFrom<&str> for Choice {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(Error::InvalidChoice(s.to_string())),
        }
    }
}

impl std::str::FromStr for Choice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Rock => write!(f, "rock"),
            Choice::Paper => write!(f, "paper"),
            Choice::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for choice in Choice::all() {
            assert!(choice == Choice::try_from(choice.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn bijective_u8() {
        for choice in Choice::all() {
            assert!(choice == Choice::from(u8::from(choice)));
        }
    }

    #[test]
    fn rejects_unknown_moves() {
        assert!(Choice::try_from("lizard") == Err(Error::InvalidChoice("lizard".into())));
        assert!(Choice::try_from("Rock").is_err());
        assert!(Choice::try_from(" rock").is_err());
        assert!(Choice::try_from("").is_err());
    }

    #[test]
    fn beats_forms_a_cycle() {
        for choice in Choice::all() {
            assert!(choice.beats() != choice);
            assert!(choice.beats().beats().beats() == choice);
        }
    }

    #[test]
    fn serde_lowercase() {
        assert!(serde_json::to_string(&Choice::Scissors).unwrap() == "\"scissors\"");
        assert!(serde_json::from_str::<Choice>("\"paper\"").unwrap() == Choice::Paper);
    }
}
