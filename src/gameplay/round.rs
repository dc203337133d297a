use super::choice::Choice;
use super::outcome::Outcome;

/// One completed play: both moves and the decided outcome.
///
/// Rounds are created whole and never edited. A new play replaces the
/// previous round rather than mutating it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    player: Choice,
    computer: Choice,
    outcome: Outcome,
}

impl Round {
    pub fn player(&self) -> Choice {
        self.player
    }
    pub fn computer(&self) -> Choice {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl From<(Choice, Choice)> for Round {
    fn from((player, computer): (Choice, Choice)) -> Self {
        Self {
            player,
            computer,
            outcome: Outcome::determine(player, computer),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {} ({})", self.player, self.computer, self.outcome)
    }
}
