use crate::Arbitrary;

/// A move in rock-paper-scissors.
///
/// Each choice beats exactly one other and loses to exactly one other:
/// Rock beats Scissors, Paper beats Rock, Scissors beats Paper.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    /// All three choices in canonical order.
    pub const fn all() -> [Choice; 3] {
        [Choice::Rock, Choice::Paper, Choice::Scissors]
    }
    /// The choice this one defeats.
    pub const fn prey(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
    /// The choice that defeats this one.
    pub const fn predator(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }
    pub fn beats(&self, other: &Choice) -> bool {
        self.prey() == *other
    }
    /// Button glyph.
    pub fn emoji(&self) -> &'static str {
        match self {
            Choice::Rock => "🪨",
            Choice::Paper => "🧻",
            Choice::Scissors => "✂️",
        }
    }
}

/// Raw input that names no choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceError(pub String);

impl std::fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid choice: {}", self.0)
    }
}

impl std::error::Error for ChoiceError {}

/// u8 isomorphism
impl TryFrom<u8> for Choice {
    type Error = ChoiceError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Choice::Rock),
            1 => Ok(Choice::Paper),
            2 => Ok(Choice::Scissors),
            n => Err(ChoiceError(n.to_string())),
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Choice {
    type Error = ChoiceError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" | "🪨" => Ok(Choice::Rock),
            "p" | "paper" | "🧻" => Ok(Choice::Paper),
            "s" | "scissors" | "✂️" | "✂" => Ok(Choice::Scissors),
            _ => Err(ChoiceError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Rock => write!(f, "Rock"),
            Choice::Paper => write!(f, "Paper"),
            Choice::Scissors => write!(f, "Scissors"),
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all().choose(rng).copied().expect("three choices")
    }
}
