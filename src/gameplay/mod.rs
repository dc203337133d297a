//! Outcome engine: moves, results and the computer's move source.
mod choice;
mod outcome;
mod round;
mod source;

pub use choice::*;
pub use outcome::*;
pub use round::*;
pub use source::*;
