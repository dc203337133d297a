//! Wallet and token-contract collaborator.
//!
//! - [`Wallet`]: async trait over the external SDK
//! - [`Sandbox`]: in-memory implementation for tests and the terminal game
//! - [`Address`], [`Balance`], [`Contract`], [`Receipt`]: values crossing the boundary
//! - [`WalletError`]: failures the SDK can report
mod address;
mod balance;
mod contract;
mod error;
mod receipt;
mod sandbox;
mod wallet;

pub use address::*;
pub use balance::*;
pub use contract::*;
pub use error::*;
pub use receipt::*;
pub use sandbox::*;
pub use wallet::*;
