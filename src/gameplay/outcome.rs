use super::choice::Choice;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Decide a round. Tie on equal choices, Win when the player's choice
    /// beats the computer's, Lose otherwise.
    pub fn determine(player: Choice, computer: Choice) -> Self {
        match (player, computer) {
            (p, c) if p == c => Outcome::Tie,
            (Choice::Rock, Choice::Scissors)
            | (Choice::Paper, Choice::Rock)
            | (Choice::Scissors, Choice::Paper) => Outcome::Win,
            _ => Outcome::Lose,
        }
    }
    /// The same round seen by the opponent.
    pub fn flip(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl From<(Choice, Choice)> for Outcome {
    fn from((player, computer): (Choice, Choice)) -> Self {
        Self::determine(player, computer)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Lose => write!(f, "Lose"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
