//! Terminal front end for the `minigame` binary.
mod args;
mod command;
mod console;

pub use args::*;
pub use command::*;
pub use console::*;
