use super::choice::Choice;
use crate::Arbitrary;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::collections::VecDeque;

/// Supplies the computer's move.
///
/// Every play draws exactly once. Swapping the source lets tests pin the
/// computer's move while the session logic stays untouched.
pub trait Source {
    fn draw(&mut self) -> Choice;
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uniform;

impl Source for Uniform {
    fn draw(&mut self) -> Choice {
        Choice::random()
    }
}

/// Uniform draw from a seeded generator. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct Seeded(SmallRng);

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Source for Seeded {
    fn draw(&mut self) -> Choice {
        *Choice::all().choose(&mut self.0).expect("three choices")
    }
}

/// Always the same move.
#[derive(Debug, Clone, Copy)]
pub struct Forced(pub Choice);

impl Source for Forced {
    fn draw(&mut self) -> Choice {
        self.0
    }
}

/// Plays back a fixed sequence, then falls back to uniform draws.
#[derive(Debug, Default, Clone)]
pub struct Scripted(VecDeque<Choice>);

impl Scripted {
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl<I> From<I> for Scripted
where
    I: IntoIterator<Item = Choice>,
{
    fn from(choices: I) -> Self {
        Self(choices.into_iter().collect())
    }
}

impl Source for Scripted {
    fn draw(&mut self) -> Choice {
        self.0.pop_front().unwrap_or_else(Choice::random)
    }
}

impl<S> Source for &mut S
where
    S: Source + ?Sized,
{
    fn draw(&mut self) -> Choice {
        (**self).draw()
    }
}

impl Source for Box<dyn Source + Send> {
    fn draw(&mut self) -> Choice {
        self.as_mut().draw()
    }
}
