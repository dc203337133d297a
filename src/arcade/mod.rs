//! Shell joining a session to a wallet.
//!
//! - [`Arcade`]: runs the side effects the controller asks for
//! - [`View`]: render model for presentation layers
//! - [`ArcadeError`]: what can go wrong along the way
mod arcade;
mod error;
mod view;

pub use arcade::*;
pub use error::*;
pub use view::*;
