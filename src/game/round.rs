use super::Choice;
use super::Outcome;
use uuid::Uuid;

/// One resolved game. Immutable once built; the outcome is always derived
/// from the two choices rather than supplied independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    id: Uuid,
    player_choice: Choice,
    computer_choice: Choice,
    outcome: Outcome,
    timestamp: u64,
}

impl Round {
    /// Builds a fresh round stamped with the current time.
    pub fn new(player: Choice, computer: Choice) -> Self {
        Self::hydrate(Uuid::now_v7(), player, computer, crate::now())
    }
    /// Rebuilds a previously persisted round.
    pub fn hydrate(id: Uuid, player: Choice, computer: Choice, timestamp: u64) -> Self {
        Self {
            id,
            player_choice: player,
            computer_choice: computer,
            outcome: Outcome::from((player, computer)),
            timestamp,
        }
    }
    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn player(&self) -> Choice {
        self.player_choice
    }
    pub fn computer(&self) -> Choice {
        self.computer_choice
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// Milliseconds since the Unix epoch at which the round was resolved.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} -> {}",
            self.player_choice, self.computer_choice, self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_choices() {
        let round = Round::new(Choice::Rock, Choice::Scissors);
        assert!(round.outcome() == Outcome::Player);
        assert!(round.player() == Choice::Rock);
        assert!(round.computer() == Choice::Scissors);
    }

    #[test]
    fn ids_are_unique() {
        let a = Round::new(Choice::Paper, Choice::Paper);
        let b = Round::new(Choice::Paper, Choice::Paper);
        assert!(a.id() != b.id());
    }

    #[test]
    fn camel_case_json() {
        let round = Round::new(Choice::Paper, Choice::Rock);
        let json = serde_json::to_value(round).unwrap();
        assert!(json["playerChoice"] == "paper");
        assert!(json["computerChoice"] == "rock");
        assert!(json["outcome"] == "player");
        assert!(json["timestamp"].is_u64());
    }

    #[test]
    fn serialized_outcome_always_matches_choices() {
        for player in Choice::all() {
            for computer in Choice::all() {
                let json = serde_json::to_value(Round::new(player, computer)).unwrap();
                let expected = Outcome::from((player, computer)).to_string();
                assert!(json["outcome"] == expected.as_str());
            }
        }
    }
}
