//! Session state machine.
//!
//! - [`Session`]: the state a presentation layer renders from
//! - [`Controller`]: the only writer of that state
//! - [`Phase`]: derived lifecycle label
//! - [`Ticket`]: handle matching claim completions to claim attempts
mod controller;
mod phase;
mod session;
mod ticket;

pub use controller::*;
pub use phase::*;
pub use session::*;
pub use ticket::*;
